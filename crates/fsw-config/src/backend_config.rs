use crate::{ConfigError, ConfigErrorResult, DEFAULT_BACKEND_PORT, DEFAULT_BACKEND_SCRIPT, MIN_PORT};

use serde::Deserialize;

/// Face-recognition backend service.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Script name inside the services directory
    pub script: String,
    /// Port the backend is expected to listen on (display only, never probed)
    pub port: u16,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            script: String::from(DEFAULT_BACKEND_SCRIPT),
            port: DEFAULT_BACKEND_PORT,
        }
    }
}

impl BackendConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        validate_script("backend.script", &self.script)?;

        if self.port < MIN_PORT {
            return Err(ConfigError::config(format!(
                "backend.port must be >= {}, got {}",
                MIN_PORT, self.port
            )));
        }

        Ok(())
    }
}

/// Shared script-name rule for the backend and web sections.
pub(crate) fn validate_script(field: &str, script: &str) -> ConfigErrorResult<()> {
    if script.is_empty() {
        return Err(ConfigError::config(format!("{} must not be empty", field)));
    }

    if script.contains(['/', '\\']) {
        return Err(ConfigError::config(format!(
            "{} must be a plain file name, got {:?}",
            field, script
        )));
    }

    Ok(())
}
