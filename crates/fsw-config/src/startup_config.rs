use crate::{ConfigError, ConfigErrorResult, DEFAULT_BACKEND_DELAY_SECS, MAX_BACKEND_DELAY_SECS};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StartupConfig {
    /// Fixed wait between launching the backend and the web server.
    /// A heuristic to let the backend initialize, not a readiness probe.
    pub backend_delay_secs: u64,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            backend_delay_secs: DEFAULT_BACKEND_DELAY_SECS,
        }
    }
}

impl StartupConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.backend_delay_secs > MAX_BACKEND_DELAY_SECS {
            return Err(ConfigError::startup(format!(
                "startup.backend_delay_secs must be <= {}, got {}",
                MAX_BACKEND_DELAY_SECS, self.backend_delay_secs
            )));
        }

        Ok(())
    }
}
