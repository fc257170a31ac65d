mod backend_config;
mod config;
mod display_config;
mod error;
mod logging_config;
mod services_config;
mod shutdown_config;
mod startup_config;
mod web_config;

#[cfg(test)]
mod tests;

pub use backend_config::BackendConfig;
pub use config::Config;
pub use display_config::DisplayConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use logging_config::{LogLevel, LoggingConfig};
pub use services_config::ServicesConfig;
pub use shutdown_config::ShutdownConfig;
pub use startup_config::StartupConfig;
pub use web_config::WebConfig;

const DEFAULT_SERVICES_DIR: &str = "backend";
const DEFAULT_VENV_DIR: &str = "venv";
const DEFAULT_BACKEND_SCRIPT: &str = "simple_face_service.py";
const DEFAULT_BACKEND_PORT: u16 = 8000;
const DEFAULT_WEB_SCRIPT: &str = "simple_upload_handler.py";
const DEFAULT_WEB_PORT: u16 = 8080;
const DEFAULT_BACKEND_DELAY_SECS: u64 = 3;
const DEFAULT_TERM_TIMEOUT_SECS: u64 = 5;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_DIRECTORY: &str = "log";

const MIN_PORT: u16 = 1024;
const MAX_BACKEND_DELAY_SECS: u64 = 300;
const MIN_TERM_TIMEOUT_SECS: u64 = 1;
const MAX_TERM_TIMEOUT_SECS: u64 = 120;
