use crate::backend_config::validate_script;
use crate::{ConfigError, ConfigErrorResult, DEFAULT_WEB_PORT, DEFAULT_WEB_SCRIPT, MIN_PORT};

use serde::Deserialize;

/// Upload web server. Its port is passed to the script as a trailing
/// argument, unlike the backend which owns its own port.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    /// Script name inside the services directory
    pub script: String,
    pub port: u16,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            script: String::from(DEFAULT_WEB_SCRIPT),
            port: DEFAULT_WEB_PORT,
        }
    }
}

impl WebConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        validate_script("web.script", &self.script)?;

        if self.port < MIN_PORT {
            return Err(ConfigError::config(format!(
                "web.port must be >= {}, got {}",
                MIN_PORT, self.port
            )));
        }

        Ok(())
    }
}
