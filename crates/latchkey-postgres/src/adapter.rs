// PostgresAdapter — concrete implementation of the core DatabaseAdapter
// trait using Sea-ORM.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use latchkey_core::db::adapter::{DatabaseAdapter, DatabaseDialect};
use latchkey_core::error::{ConfigError, Result};

/// Postgres adapter backed by a Sea-ORM `DatabaseConnection`.
///
/// Wraps a handle that is already connected; construction performs no I/O.
/// The engine receives the connection together with the `postgresql`
/// dialect tag and owns everything it persists through it.
#[derive(Debug, Clone)]
pub struct PostgresAdapter {
    db: DatabaseConnection,
}

impl PostgresAdapter {
    /// Wrap an existing database connection.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Connect to a database URL and wrap the resulting handle.
    ///
    /// The one place in this crate that performs I/O; binaries that manage
    /// their own pool should use [`PostgresAdapter::new`] instead.
    pub async fn connect(url: &str) -> Result<Self> {
        let db = sea_orm::Database::connect(url)
            .await
            .map_err(|e| ConfigError::DatabaseUnavailable(e.to_string()))?;
        Ok(Self { db })
    }

    /// Get a reference to the underlying DatabaseConnection.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl DatabaseAdapter for PostgresAdapter {
    fn dialect(&self) -> DatabaseDialect {
        DatabaseDialect::Postgresql
    }

    async fn ping(&self) -> Result<()> {
        self.db
            .ping()
            .await
            .map_err(|e| ConfigError::DatabaseUnavailable(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialect_is_postgresql() {
        let adapter = PostgresAdapter::new(DatabaseConnection::default());
        assert_eq!(adapter.dialect(), DatabaseDialect::Postgresql);
    }

    #[tokio::test]
    async fn ping_on_disconnected_handle_is_database_unavailable() {
        let adapter = PostgresAdapter::new(DatabaseConnection::default());
        let err = adapter.ping().await.unwrap_err();
        assert!(matches!(err, ConfigError::DatabaseUnavailable(_)));
    }
}
