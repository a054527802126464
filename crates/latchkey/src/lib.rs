#![doc = include_str!("../README.md")]

pub mod config;
pub mod init;

pub use config::{build_auth_config, build_auth_config_with_policy, AuthConfig};
pub use init::{init_auth_engine, AuthContext, AuthHandler};

// Re-export the core surface so callers need a single import.
pub use latchkey_core::{
    AuthOptions, ConfigError, DatabaseAdapter, DatabaseDialect, EmailAndPasswordOptions,
    EnvSource, MissingCredentialPolicy, ProviderCredentials, ProviderId, Result,
};
