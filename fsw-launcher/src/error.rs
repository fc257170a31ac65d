use crate::supervisor::ServiceRole;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LauncherError {
    /// A child failed to spawn. Fatal: the whole run aborts after
    /// cleaning up whatever was already launched.
    #[error("Failed to spawn {role} process: {source} {location}")]
    Spawn {
        role: ServiceRole,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Configuration error: {source}")]
    Config {
        #[from]
        source: fsw_config::ConfigError,
    },

    #[error("Logger initialization failed: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl LauncherError {
    #[track_caller]
    pub fn spawn(role: ServiceRole, source: std::io::Error) -> Self {
        Self::Spawn {
            role,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, LauncherError>;
