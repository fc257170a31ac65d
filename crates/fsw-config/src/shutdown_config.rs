use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_TERM_TIMEOUT_SECS, MAX_TERM_TIMEOUT_SECS,
    MIN_TERM_TIMEOUT_SECS,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShutdownConfig {
    /// How long to wait after a graceful termination request before
    /// force-killing a child.
    pub term_timeout_secs: u64,
}

impl Default for ShutdownConfig {
    fn default() -> Self {
        Self {
            term_timeout_secs: DEFAULT_TERM_TIMEOUT_SECS,
        }
    }
}

impl ShutdownConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.term_timeout_secs < MIN_TERM_TIMEOUT_SECS
            || self.term_timeout_secs > MAX_TERM_TIMEOUT_SECS
        {
            return Err(ConfigError::shutdown(format!(
                "shutdown.term_timeout_secs must be {}-{}, got {}",
                MIN_TERM_TIMEOUT_SECS, MAX_TERM_TIMEOUT_SECS, self.term_timeout_secs
            )));
        }

        Ok(())
    }
}
