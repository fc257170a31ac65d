use crate::{ConfigError, ConfigErrorResult, DEFAULT_SERVICES_DIR, DEFAULT_VENV_DIR};

use serde::Deserialize;

/// Where the service scripts and their virtualenv live.
///
/// `dir` is also the working directory both children are spawned in.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServicesConfig {
    pub dir: String,
    /// Virtualenv directory name under `dir`
    pub venv: String,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_SERVICES_DIR),
            venv: String::from(DEFAULT_VENV_DIR),
        }
    }
}

impl ServicesConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.dir.is_empty() {
            return Err(ConfigError::services("services.dir must not be empty"));
        }

        // Keep the services directory anchored under the launch directory.
        if std::path::Path::new(&self.dir).is_absolute() || self.dir.contains("..") {
            return Err(ConfigError::services(
                "services.dir must be relative and cannot contain '..'",
            ));
        }

        if self.venv.is_empty() || self.venv.contains(['/', '\\']) {
            return Err(ConfigError::services(format!(
                "services.venv must be a plain directory name, got {:?}",
                self.venv
            )));
        }

        Ok(())
    }
}
