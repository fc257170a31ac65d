use crate::error::{LauncherError, Result as LauncherResult};
use crate::supervisor::ServiceRole;

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use tokio::process::{Child, Command};

/// Everything needed to start one service, derived from config up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    pub role: ServiceRole,
    /// Interpreter to run
    pub program: PathBuf,
    /// Script name plus any trailing arguments
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

/// One spawned child process, owned exclusively by the supervisor.
#[async_trait]
pub trait ServiceProcess: Send {
    fn pid(&self) -> Option<u32>;

    /// Ask the child to stop. Best effort: failures (e.g. the child
    /// already exited) are swallowed.
    fn request_terminate(&mut self);

    /// Wait up to `timeout` for the child to exit. Returns whether it did.
    async fn wait_exit(&mut self, timeout: Duration) -> bool;

    /// Force-kill the child. Best effort, not awaited.
    fn force_kill(&mut self);
}

/// Spawning seam so lifecycle tests can substitute a recording fake.
pub trait ServiceSpawner: Send + Sync {
    fn spawn(&self, plan: &LaunchPlan) -> LauncherResult<Box<dyn ServiceProcess>>;
}

/// Real spawner backed by tokio's process support. The children inherit
/// the launcher's stdio so their output shares the console.
pub struct OsSpawner;

impl ServiceSpawner for OsSpawner {
    fn spawn(&self, plan: &LaunchPlan) -> LauncherResult<Box<dyn ServiceProcess>> {
        let child = Command::new(&plan.program)
            .args(&plan.args)
            .current_dir(&plan.cwd)
            .spawn()
            .map_err(|e| LauncherError::spawn(plan.role, e))?;

        debug!(
            "Spawned {} ({} {}) with PID {:?}",
            plan.role,
            plan.program.display(),
            plan.args.join(" "),
            child.id()
        );

        Ok(Box::new(OsProcess {
            role: plan.role,
            child,
        }))
    }
}

struct OsProcess {
    role: ServiceRole,
    child: Child,
}

#[async_trait]
impl ServiceProcess for OsProcess {
    fn pid(&self) -> Option<u32> {
        self.child.id()
    }

    fn request_terminate(&mut self) {
        #[cfg(unix)]
        if let Some(pid) = self.child.id() {
            use nix::sys::signal::{Signal, kill};
            use nix::unistd::Pid;

            debug!("Sending SIGTERM to {} (pid {})", self.role, pid);
            kill(Pid::from_raw(pid as i32), Signal::SIGTERM).ok();
        }

        #[cfg(windows)]
        if let Some(pid) = self.child.id() {
            use windows_sys::Win32::System::Console::{
                CTRL_BREAK_EVENT, GenerateConsoleCtrlEvent,
            };

            debug!("Sending CTRL_BREAK to {} (pid {})", self.role, pid);
            unsafe {
                GenerateConsoleCtrlEvent(CTRL_BREAK_EVENT, pid);
            }
        }
    }

    async fn wait_exit(&mut self, timeout: Duration) -> bool {
        // A wait error counts as exited: there is nothing left to reap.
        tokio::time::timeout(timeout, self.child.wait()).await.is_ok()
    }

    fn force_kill(&mut self) {
        // start_kill requests the kill without awaiting the reap;
        // already-exited children error harmlessly
        self.child.start_kill().ok();
    }
}
