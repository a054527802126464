// Database adapter contract.
//
// The engine persists users, sessions, and OAuth account links through an
// adapter; this crate only carries the handle and its dialect tag. The
// query surface belongs to the engine and its storage backend.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// SQL dialect spoken by the wrapped connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseDialect {
    Postgresql,
}

impl DatabaseDialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Postgresql => "postgresql",
        }
    }
}

impl fmt::Display for DatabaseDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A live database handle plus its dialect tag.
///
/// Implementations wrap an existing connection; they never establish one.
/// `ping` verifies the handle can still reach its database and surfaces
/// failures as `ConfigError::DatabaseUnavailable`.
#[async_trait]
pub trait DatabaseAdapter: Send + Sync + fmt::Debug {
    /// The dialect tag passed through to the engine.
    fn dialect(&self) -> DatabaseDialect;

    /// Verify the wrapped handle can reach its database.
    async fn ping(&self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialect_string_form() {
        assert_eq!(DatabaseDialect::Postgresql.as_str(), "postgresql");
        assert_eq!(DatabaseDialect::Postgresql.to_string(), "postgresql");
    }

    #[test]
    fn dialect_serde_round_trip() {
        let json = serde_json::to_string(&DatabaseDialect::Postgresql).unwrap();
        assert_eq!(json, "\"postgresql\"");
        let parsed: DatabaseDialect = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, DatabaseDialect::Postgresql);
    }
}
