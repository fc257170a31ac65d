mod endpoints;
mod handles;
mod interpreter;
mod lifecycle;
mod role;
mod shutdown;
mod spawner;
mod state;

pub use endpoints::{ServiceEndpoint, banner_endpoints};
pub use handles::ServiceHandles;
pub use interpreter::{OsFamily, interpreter_path};
pub use lifecycle::Supervisor;
pub use role::ServiceRole;
pub use shutdown::ShutdownCoordinator;
pub use spawner::{LaunchPlan, OsSpawner, ServiceProcess, ServiceSpawner};
pub use state::SupervisorState;
