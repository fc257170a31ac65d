//! fsw-launcher - Face Search Web App launcher
//!
//! Starts the face-recognition backend and the upload web server as child
//! processes, reports their URLs, and tears both down on Ctrl-C.

pub mod error;
pub mod logger;
pub mod supervisor;

#[cfg(test)]
mod tests;

pub use error::{LauncherError, Result as LauncherResult};
pub use supervisor::{
    LaunchPlan, OsFamily, ServiceEndpoint, ServiceHandles, ServiceProcess, ServiceRole,
    ServiceSpawner, ShutdownCoordinator, Supervisor, SupervisorState,
};
