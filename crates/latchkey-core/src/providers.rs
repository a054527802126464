// Social provider registry.
//
// Static configuration for every provider the surface can enable: the
// environment keys feeding its credential pair and the scopes requested on
// its behalf. The OAuth flows themselves belong to the engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Identifier of a supported social provider.
///
/// The string form is the lowercase provider key used in configuration maps
/// and wire formats (`"google"`, `"github"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    Google,
    Github,
}

impl ProviderId {
    /// All providers the registry knows, in map order.
    pub const ALL: &'static [ProviderId] = &[ProviderId::Google, ProviderId::Github];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Github => "github",
        }
    }

    /// Static registry entry for this provider.
    pub fn config(&self) -> &'static ProviderConfig {
        match self {
            Self::Google => &GOOGLE,
            Self::Github => &GITHUB,
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "google" => Ok(Self::Google),
            "github" => Ok(Self::Github),
            other => Err(ConfigError::UnknownProvider(other.to_string())),
        }
    }
}

/// Static configuration for a social provider.
#[derive(Debug, Clone, Copy)]
pub struct ProviderConfig {
    pub id: ProviderId,
    pub name: &'static str,
    /// Environment key holding the OAuth client ID.
    pub client_id_env: &'static str,
    /// Environment key holding the OAuth client secret.
    pub client_secret_env: &'static str,
    /// Scopes requested by default when the engine starts an authorization flow.
    pub default_scopes: &'static [&'static str],
}

static GOOGLE: ProviderConfig = ProviderConfig {
    id: ProviderId::Google,
    name: "Google",
    client_id_env: "GOOGLE_CLIENT_ID",
    client_secret_env: "GOOGLE_CLIENT_SECRET",
    default_scopes: &["openid", "profile", "email"],
};

static GITHUB: ProviderConfig = ProviderConfig {
    id: ProviderId::Github,
    name: "GitHub",
    client_id_env: "GITHUB_CLIENT_ID",
    client_secret_env: "GITHUB_CLIENT_SECRET",
    default_scopes: &["read:user", "user:email"],
};
