// Engine initialization entry point.
//
// Takes an assembled AuthConfig, verifies the database handle is reachable,
// and returns the handler a routing layer mounts. Any failure aborts
// startup; there is no partial initialization.

use std::sync::Arc;

use tracing::info;

use latchkey_core::error::Result;
use latchkey_core::options::AuthOptions;
use latchkey_core::DatabaseAdapter;

use crate::config::AuthConfig;

/// Read-only state shared by everything mounted on top of the engine.
#[derive(Debug)]
pub struct AuthContext {
    pub options: AuthOptions,
    pub adapter: Arc<dyn DatabaseAdapter>,
}

/// The value returned from [`init_auth_engine`], later mounted onto an
/// HTTP routing layer.
#[derive(Debug)]
pub struct AuthHandler {
    /// The fully-initialized context (shared).
    pub context: Arc<AuthContext>,
}

impl AuthHandler {
    pub fn context(&self) -> &AuthContext {
        &self.context
    }

    pub fn options(&self) -> &AuthOptions {
        &self.context.options
    }
}

/// Initialize the authentication engine from an assembled configuration.
///
/// Pings the database adapter before anything is mounted; an unreachable
/// database surfaces as `ConfigError::DatabaseUnavailable` and the caller
/// should abort startup.
pub async fn init_auth_engine(config: AuthConfig) -> Result<AuthHandler> {
    config.adapter().ping().await?;

    let providers: Vec<&str> = config
        .options()
        .social_providers
        .keys()
        .map(|id| id.as_str())
        .collect();
    info!(
        dialect = %config.adapter().dialect(),
        credential_auth = config.credential_auth_enabled(),
        social_providers = ?providers,
        "auth engine initialized"
    );

    let (options, adapter) = config.into_parts();
    Ok(AuthHandler {
        context: Arc::new(AuthContext { options, adapter }),
    })
}
