//! Launch sequencing and teardown for the two service children.

use crate::error::Result as LauncherResult;
use crate::supervisor::{
    LaunchPlan, OsFamily, ServiceHandles, ServiceRole, ServiceSpawner, ShutdownCoordinator,
    SupervisorState, banner_endpoints, interpreter_path,
};

use std::time::Duration;

use fsw_config::Config;
use log::{debug, info};
use tokio::sync::watch;

/// Orchestrates the two service children.
///
/// Sequence: launch backend, fixed initialization delay, launch web
/// server, operator banner, idle until the shutdown signal trips, then
/// terminate every child that was actually created. Cleanup runs on the
/// error path too.
pub struct Supervisor<S: ServiceSpawner> {
    config: Config,
    spawner: S,
    shutdown: ShutdownCoordinator,
    handles: ServiceHandles,
    state_tx: watch::Sender<SupervisorState>,
    state_rx: watch::Receiver<SupervisorState>,
}

impl<S: ServiceSpawner> Supervisor<S> {
    pub fn new(config: Config, spawner: S, shutdown: ShutdownCoordinator) -> Self {
        let (state_tx, state_rx) = watch::channel(SupervisorState::NotStarted);

        Self {
            config,
            spawner,
            shutdown,
            handles: ServiceHandles::new(),
            state_tx,
            state_rx,
        }
    }

    /// Subscribe to state transitions.
    pub fn subscribe(&self) -> watch::Receiver<SupervisorState> {
        self.state_rx.clone()
    }

    /// Current state.
    pub fn state(&self) -> SupervisorState {
        self.state_rx.borrow().clone()
    }

    /// Build the launch plan for one role. Pure, no I/O: a bad
    /// interpreter path surfaces at spawn time.
    pub fn launch_plan(&self, role: ServiceRole) -> LaunchPlan {
        let services_dir = self.config.services_dir();
        let program = interpreter_path(&services_dir, &self.config.services.venv, OsFamily::host());

        let mut args = match role {
            ServiceRole::Backend => vec![self.config.backend.script.clone()],
            ServiceRole::Web => vec![self.config.web.script.clone()],
        };

        // The web script takes its port as a trailing argument
        if role == ServiceRole::Web {
            args.push(self.config.web.port.to_string());
        }

        LaunchPlan {
            role,
            program,
            args,
            cwd: services_dir,
        }
    }

    /// Run the full supervise sequence. Returns once shutdown has
    /// completed (cleanly or after a launch error).
    pub async fn run(&mut self) -> LauncherResult<()> {
        let result = self.launch_and_idle().await;

        self.set_state(SupervisorState::Stopping);
        self.terminate_all().await;

        match result {
            Ok(()) => {
                self.set_state(SupervisorState::Stopped);
                Ok(())
            }
            Err(e) => {
                self.set_state(SupervisorState::Failed {
                    error: e.to_string(),
                });
                Err(e)
            }
        }
    }

    async fn launch_and_idle(&mut self) -> LauncherResult<()> {
        info!("Starting face recognition backend...");
        self.launch(ServiceRole::Backend)?;
        self.set_state(SupervisorState::BackendLaunched);
        info!(
            "Backend service started on http://localhost:{}",
            self.config.backend.port
        );

        // Fixed grace period for the backend to initialize. A heuristic,
        // not a readiness probe; cut short only by shutdown.
        let delay_secs = self.config.startup.backend_delay_secs;
        info!("Waiting {}s for backend to initialize...", delay_secs);
        tokio::select! {
            _ = tokio::time::sleep(Duration::from_secs(delay_secs)) => {}
            _ = self.shutdown.wait() => {
                info!("Interrupted during startup, stopping services...");
                return Ok(());
            }
        }

        info!("Starting web server...");
        self.launch(ServiceRole::Web)?;
        self.set_state(SupervisorState::WebLaunched);
        info!(
            "Web server started on http://localhost:{}",
            self.config.web.port
        );

        info!("Face Search Web App is running");
        for endpoint in banner_endpoints(&self.config) {
            info!("  {}: {}", endpoint.label, endpoint.url);
        }
        info!("Press Ctrl+C to stop both services");

        self.set_state(SupervisorState::Idle);
        self.shutdown.wait().await;
        info!("Stopping services...");

        Ok(())
    }

    fn launch(&mut self, role: ServiceRole) -> LauncherResult<()> {
        let plan = self.launch_plan(role);
        let process = self.spawner.spawn(&plan)?;
        self.handles.insert(role, process);
        Ok(())
    }

    /// Terminate every child that was actually created, web first.
    ///
    /// Best effort: a graceful request, a bounded wait, then force kill.
    /// Termination failures are never fatal.
    async fn terminate_all(&mut self) {
        let timeout = Duration::from_secs(self.config.shutdown.term_timeout_secs);

        for (role, mut process) in self.handles.drain() {
            debug!("Requesting termination of {} (pid {:?})", role, process.pid());
            process.request_terminate();

            if !process.wait_exit(timeout).await {
                debug!("{} did not exit within {:?}, force killing", role, timeout);
                process.force_kill();
            }

            info!("{} stopped successfully", role);
        }
    }

    fn set_state(&self, state: SupervisorState) {
        let _ = self.state_tx.send(state);
    }
}
