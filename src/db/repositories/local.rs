//! In-memory repository for unit testing and local development.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::api::{Auto, AutoId};
use crate::db::repository::{AutoRepository, RepositoryResult};

/// In-memory implementation of [`AutoRepository`].
///
/// Rows live in a `BTreeMap` keyed by id; identifiers are handed out by a
/// monotonic counter starting at 1, matching the serial column of the
/// Postgres backend. All operations are infallible in practice.
#[derive(Debug)]
pub struct LocalRepository {
    rows: RwLock<BTreeMap<i64, Auto>>,
    next_id: AtomicI64,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored rows. Test helper.
    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }
}

#[async_trait]
impl AutoRepository for LocalRepository {
    async fn insert(&self, marca: &str, modelo: &str) -> RepositoryResult<AutoId> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let auto = Auto::new(AutoId::new(id), marca, modelo);
        self.rows.write().insert(id, auto);
        Ok(AutoId::new(id))
    }

    async fn get(&self, id: AutoId) -> RepositoryResult<Option<Auto>> {
        Ok(self.rows.read().get(&id.value()).cloned())
    }

    async fn list_all(&self) -> RepositoryResult<Vec<Auto>> {
        Ok(self.rows.read().values().cloned().collect())
    }

    async fn update(&self, id: AutoId, marca: &str, modelo: &str) -> RepositoryResult<bool> {
        let mut rows = self.rows.write();
        match rows.get_mut(&id.value()) {
            Some(auto) => {
                auto.marca = marca.to_string();
                auto.modelo = modelo.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: AutoId) -> RepositoryResult<bool> {
        Ok(self.rows.write().remove(&id.value()).is_some())
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}
