//! Domain types shared by the storage and HTTP layers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a persisted [`Auto`], assigned by the store on insert.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AutoId(pub i64);

impl AutoId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for AutoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A car record: the sole entity persisted by this service.
///
/// Invariant: a persisted auto always carries a store-assigned id and
/// non-empty `marca` and `modelo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auto {
    pub id: AutoId,
    /// Brand, e.g. "Toyota".
    pub marca: String,
    /// Model, e.g. "Corolla".
    pub modelo: String,
}

impl Auto {
    pub fn new(id: AutoId, marca: impl Into<String>, modelo: impl Into<String>) -> Self {
        Self {
            id,
            marca: marca.into(),
            modelo: modelo.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_id_roundtrip() {
        let id = AutoId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_auto_serializes_flat() {
        let auto = Auto::new(AutoId::new(1), "Ford", "Focus");
        let json = serde_json::to_value(&auto).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "marca": "Ford", "modelo": "Focus"})
        );
    }
}
