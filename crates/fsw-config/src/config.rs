use crate::{
    BackendConfig, ConfigError, ConfigErrorResult, DisplayConfig, LoggingConfig, ServicesConfig,
    ShutdownConfig, StartupConfig, WebConfig,
};

use std::path::PathBuf;
use std::str::FromStr;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub services: ServicesConfig,
    pub backend: BackendConfig,
    pub web: WebConfig,
    pub startup: StartupConfig,
    pub shutdown: ShutdownConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for FSW_CONFIG_DIR env var, else use ./.fsw/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply FSW_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: FSW_CONFIG_DIR env var > ./.fsw/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("FSW_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".fsw"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.services.validate()?;
        self.backend.validate()?;
        self.web.validate()?;
        self.startup.validate()?;
        self.shutdown.validate()?;
        self.display.validate()?;

        // The children must listen on distinct ports.
        if self.backend.port == self.web.port {
            return Err(ConfigError::config(format!(
                "backend.port and web.port must differ, both are {}",
                self.backend.port
            )));
        }

        Ok(())
    }

    /// Directory the service scripts run in, relative to the launch cwd.
    pub fn services_dir(&self) -> PathBuf {
        PathBuf::from(&self.services.dir)
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  services: dir={} (venv: {})",
            self.services.dir, self.services.venv
        );
        info!(
            "  backend: {} on port {}",
            self.backend.script, self.backend.port
        );
        info!("  web: {} on port {}", self.web.script, self.web.port);
        info!(
            "  startup: {}s backend delay",
            self.startup.backend_delay_secs
        );
        info!(
            "  shutdown: {}s termination timeout",
            self.shutdown.term_timeout_secs
        );
        info!(
            "  display: mobile_host={}",
            self.display.mobile_host.as_deref().unwrap_or("(unset)")
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Services
        Self::apply_env_string("FSW_SERVICES_DIR", &mut self.services.dir);
        Self::apply_env_string("FSW_VENV_DIR", &mut self.services.venv);

        // Backend
        Self::apply_env_string("FSW_BACKEND_SCRIPT", &mut self.backend.script);
        Self::apply_env_parse("FSW_BACKEND_PORT", &mut self.backend.port);

        // Web
        Self::apply_env_string("FSW_WEB_SCRIPT", &mut self.web.script);
        Self::apply_env_parse("FSW_WEB_PORT", &mut self.web.port);

        // Startup / shutdown
        Self::apply_env_parse(
            "FSW_BACKEND_DELAY_SECS",
            &mut self.startup.backend_delay_secs,
        );
        Self::apply_env_parse(
            "FSW_TERM_TIMEOUT_SECS",
            &mut self.shutdown.term_timeout_secs,
        );

        // Display
        Self::apply_env_option_string("FSW_MOBILE_HOST", &mut self.display.mobile_host);

        // Logging
        Self::apply_env_parse("FSW_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("FSW_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("FSW_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }

    /// Helper: Apply environment variable override for bool values
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            match val.to_lowercase().as_str() {
                "true" | "1" | "yes" => *target = true,
                "false" | "0" | "no" => *target = false,
                _ => {}
            }
        }
    }

    /// Helper: Apply environment variable override for FromStr values
    fn apply_env_parse<T: FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse::<T>()
        {
            *target = parsed;
        }
    }
}
