//! Repository configuration file support.
//!
//! Reads repository selection and Postgres connection settings from a
//! TOML configuration file (`repository.toml`), as an alternative to
//! environment variables.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::factory::RepositoryType;
use super::repository::{RepositoryError, RepositoryResult};
#[cfg(feature = "postgres-repo")]
use super::repositories::PostgresConfig;

/// Repository configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConfig {
    pub repository: RepositorySettings,
    #[serde(default)]
    pub postgres: PostgresSettings,
}

/// Repository type settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(rename = "type")]
    pub repo_type: String,
}

/// Postgres connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostgresSettings {
    #[serde(default)]
    pub database_url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout: u64,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connect_timeout() -> u64 {
    30
}

fn default_idle_timeout() -> u64 {
    600
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    100
}

// Keep an omitted [postgres] section consistent with the per-field
// serde defaults.
impl Default for PostgresSettings {
    fn default() -> Self {
        Self {
            database_url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout: default_connect_timeout(),
            idle_timeout: default_idle_timeout(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

impl RepositoryConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> RepositoryResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            RepositoryError::configuration(format!(
                "Failed to read {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            RepositoryError::configuration(format!(
                "Failed to parse {}: {}",
                path.as_ref().display(),
                e
            ))
        })
    }

    /// Load configuration from the default search locations.
    ///
    /// Checks `repository.toml` in the working directory and under
    /// `config/`.
    pub fn from_default_location() -> RepositoryResult<Self> {
        for candidate in Self::default_locations() {
            if candidate.exists() {
                return Self::from_file(candidate);
            }
        }

        Err(RepositoryError::configuration(
            "No repository.toml found in default locations",
        ))
    }

    fn default_locations() -> Vec<PathBuf> {
        vec![
            PathBuf::from("repository.toml"),
            PathBuf::from("config/repository.toml"),
        ]
    }

    /// Parse the configured repository type.
    pub fn repository_type(&self) -> Result<RepositoryType, String> {
        RepositoryType::from_str(&self.repository.repo_type)
    }

    /// Build a [`PostgresConfig`] from the `[postgres]` section.
    ///
    /// Returns `Ok(None)` when no database URL is configured.
    #[cfg(feature = "postgres-repo")]
    pub fn to_postgres_config(&self) -> RepositoryResult<Option<PostgresConfig>> {
        if self.postgres.database_url.is_empty() {
            return Ok(None);
        }

        Ok(Some(PostgresConfig {
            database_url: self.postgres.database_url.clone(),
            max_pool_size: self.postgres.max_connections,
            min_pool_size: self.postgres.min_connections,
            connection_timeout_sec: self.postgres.connect_timeout,
            idle_timeout_sec: self.postgres.idle_timeout,
            max_retries: self.postgres.max_retries,
            retry_delay_ms: self.postgres.retry_delay_ms,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let config: RepositoryConfig = toml::from_str(
            r#"
            [repository]
            type = "local"
            "#,
        )
        .unwrap();

        assert_eq!(config.repository.repo_type, "local");
        assert_eq!(config.repository_type().unwrap(), RepositoryType::Local);
        // Postgres section falls back to defaults
        assert_eq!(config.postgres.max_connections, 10);
        assert!(config.postgres.database_url.is_empty());
    }

    #[test]
    fn test_parse_postgres_config() {
        let config: RepositoryConfig = toml::from_str(
            r#"
            [repository]
            type = "postgres"

            [postgres]
            database_url = "postgres://localhost/autos"
            max_connections = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.repository_type().unwrap(), RepositoryType::Postgres);
        assert_eq!(config.postgres.max_connections, 5);
        assert_eq!(config.postgres.min_connections, 1);
    }

    #[test]
    fn test_invalid_type_is_rejected() {
        let config: RepositoryConfig = toml::from_str(
            r#"
            [repository]
            type = "oracle"
            "#,
        )
        .unwrap();

        assert!(config.repository_type().is_err());
    }
}
