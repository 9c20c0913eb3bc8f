//! High-level storage operations consumed by the HTTP layer and tests.
//!
//! Each function is generic over the repository implementation, so the
//! same code paths run against the in-memory store in tests and against
//! Postgres in production. Request-body validation lives here, in front
//! of every write.

use crate::api::{Auto, AutoId};
use crate::db::repository::{AutoRepository, RepositoryError, RepositoryResult};

/// Reject empty (or whitespace-only) fields before touching the store.
fn validate_fields(marca: &str, modelo: &str) -> RepositoryResult<()> {
    if marca.trim().is_empty() {
        return Err(RepositoryError::validation("marca must be a non-empty string"));
    }
    if modelo.trim().is_empty() {
        return Err(RepositoryError::validation(
            "modelo must be a non-empty string",
        ));
    }
    Ok(())
}

/// Persist a new auto, returning its store-assigned id.
pub async fn create_auto<R>(repo: &R, marca: &str, modelo: &str) -> RepositoryResult<AutoId>
where
    R: AutoRepository + ?Sized,
{
    validate_fields(marca, modelo)?;
    repo.insert(marca, modelo).await
}

/// Fetch a single auto by id. `Ok(None)` when absent.
pub async fn get_auto<R>(repo: &R, id: AutoId) -> RepositoryResult<Option<Auto>>
where
    R: AutoRepository + ?Sized,
{
    repo.get(id).await
}

/// List every stored auto. Ordering is not guaranteed.
pub async fn list_autos<R>(repo: &R) -> RepositoryResult<Vec<Auto>>
where
    R: AutoRepository + ?Sized,
{
    repo.list_all().await
}

/// Replace both fields of an existing auto.
///
/// Returns `Ok(false)` when no row with that id exists.
pub async fn update_auto<R>(
    repo: &R,
    id: AutoId,
    marca: &str,
    modelo: &str,
) -> RepositoryResult<bool>
where
    R: AutoRepository + ?Sized,
{
    validate_fields(marca, modelo)?;
    repo.update(id, marca, modelo).await
}

/// Delete an auto by id. Returns `Ok(false)` when absent.
pub async fn delete_auto<R>(repo: &R, id: AutoId) -> RepositoryResult<bool>
where
    R: AutoRepository + ?Sized,
{
    repo.delete(id).await
}

/// Probe repository connectivity.
pub async fn health_check<R>(repo: &R) -> RepositoryResult<bool>
where
    R: AutoRepository + ?Sized,
{
    repo.health_check().await
}
