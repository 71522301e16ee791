//! Instance configuration
//!
//! Settings the engine needs but cannot derive from its inputs: the home
//! domain used to classify accounts as remote, and the admin path prefix used
//! to build moderation links.

use crate::account::validate_domain;
use crate::errors::CoreError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable overriding `local_domain`.
pub const ENV_LOCAL_DOMAIN: &str = "ROOST_LOCAL_DOMAIN";
/// Environment variable overriding `admin_path_prefix`.
pub const ENV_ADMIN_PATH_PREFIX: &str = "ROOST_ADMIN_PATH_PREFIX";

/// Instance-level configuration for the profile engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Domain of the server the viewer is signed in to
    pub local_domain: String,
    /// Path prefix of the moderation interface
    pub admin_path_prefix: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            local_domain: "localhost".to_string(),
            admin_path_prefix: "/admin".to_string(),
        }
    }
}

impl ProfileConfig {
    /// Create a config for the given home domain.
    pub fn for_domain(local_domain: impl Into<String>) -> Self {
        Self {
            local_domain: local_domain.into(),
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Io(format!("failed to read config file {}: {e}", path.display()))
        })?;
        let config: Self = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), domain = %config.local_domain, "loaded profile config");
        Ok(config)
    }

    /// Merge overrides from the process environment.
    pub fn merge_with_env(&mut self) {
        self.merge_with_vars(std::env::vars());
    }

    /// Merge overrides from `(key, value)` pairs using the `ROOST_*` names.
    pub fn merge_with_vars(&mut self, vars: impl IntoIterator<Item = (String, String)>) {
        for (key, value) in vars {
            match key.as_str() {
                ENV_LOCAL_DOMAIN => self.local_domain = value,
                ENV_ADMIN_PATH_PREFIX => self.admin_path_prefix = value,
                _ => {}
            }
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_domain(&self.local_domain)
            .map_err(|reason| CoreError::config(format!("local_domain: {reason}")))?;
        if !self.admin_path_prefix.starts_with('/') {
            return Err(CoreError::config("admin_path_prefix must start with '/'"));
        }
        Ok(())
    }

    /// Admin path with the trailing slash trimmed.
    pub fn admin_prefix(&self) -> &str {
        self.admin_path_prefix.trim_end_matches('/')
    }
}
