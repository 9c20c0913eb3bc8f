use diesel::prelude::*;

use super::schema::autos;
use crate::api::{Auto, AutoId};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = autos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AutoRow {
    pub id: i64,
    pub marca: String,
    pub modelo: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = autos)]
pub struct NewAutoRow {
    pub marca: String,
    pub modelo: String,
}

impl From<AutoRow> for Auto {
    fn from(row: AutoRow) -> Self {
        Auto {
            id: AutoId::new(row.id),
            marca: row.marca,
            modelo: row.modelo,
        }
    }
}
