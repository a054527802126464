#![doc = include_str!("../README.md")]

pub mod db;
pub mod env;
pub mod error;
pub mod options;
pub mod providers;

// Re-exports for convenience
pub use db::adapter::{DatabaseAdapter, DatabaseDialect};
pub use env::{EnvMode, EnvSource};
pub use error::{ConfigError, Result};
pub use options::{
    AuthOptions, EmailAndPasswordOptions, MissingCredentialPolicy, ProviderCredentials,
};
pub use providers::{ProviderConfig, ProviderId};
