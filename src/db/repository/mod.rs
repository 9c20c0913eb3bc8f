//! Repository trait for auto persistence.
//!
//! The trait abstracts over the storage backend so the HTTP layer and the
//! service layer can run against either the in-memory store or Postgres.

use async_trait::async_trait;

use crate::api::{Auto, AutoId};

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

/// Storage operations over the `autos` table.
///
/// Every operation maps to a single-row statement; there is no batching
/// and no multi-row transaction. Implementations must be `Send + Sync`
/// so a single instance can be shared across request handlers.
#[async_trait]
pub trait AutoRepository: Send + Sync + std::fmt::Debug {
    /// Persist a new auto and return the store-assigned identifier.
    async fn insert(&self, marca: &str, modelo: &str) -> RepositoryResult<AutoId>;

    /// Point lookup by primary key. `Ok(None)` if the row does not exist.
    async fn get(&self, id: AutoId) -> RepositoryResult<Option<Auto>>;

    /// Full scan of the table. Ordering is not part of the contract.
    async fn list_all(&self) -> RepositoryResult<Vec<Auto>>;

    /// Overwrite both fields of an existing row.
    ///
    /// Returns `Ok(false)` without touching the store when the row is
    /// absent.
    async fn update(&self, id: AutoId, marca: &str, modelo: &str) -> RepositoryResult<bool>;

    /// Remove a row by primary key. `Ok(false)` when the row is absent.
    async fn delete(&self, id: AutoId) -> RepositoryResult<bool>;

    /// Verify the backend is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
