mod handles;
mod logger;

use crate::error::{LauncherError, Result as LauncherResult};
use crate::supervisor::{LaunchPlan, ServiceProcess, ServiceRole, ServiceSpawner};

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use fsw_config::Config;
use tokio::time::Instant;

/// Default config without touching the environment or filesystem.
pub(crate) fn test_config() -> Config {
    Config::default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Event {
    Spawned(ServiceRole),
    TerminateRequested(ServiceRole),
    ForceKilled(ServiceRole),
}

/// Shared log of spawner and process activity, timestamped with the
/// tokio clock so paused-time tests can check launch spacing.
#[derive(Clone, Default)]
pub(crate) struct Recorder {
    events: Arc<Mutex<Vec<(Event, Instant)>>>,
}

impl Recorder {
    pub(crate) fn record(&self, event: Event) {
        self.events.lock().unwrap().push((event, Instant::now()));
    }

    pub(crate) fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().iter().map(|(e, _)| *e).collect()
    }

    pub(crate) fn instant_of(&self, event: Event) -> Option<Instant> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .find(|(e, _)| *e == event)
            .map(|(_, at)| *at)
    }
}

/// Spawner double: records every call, optionally fails one role,
/// optionally produces children that ignore graceful termination.
pub(crate) struct FakeSpawner {
    recorder: Recorder,
    fail_role: Option<ServiceRole>,
    graceful_exit: bool,
}

impl FakeSpawner {
    pub(crate) fn new(recorder: Recorder) -> Self {
        Self {
            recorder,
            fail_role: None,
            graceful_exit: true,
        }
    }

    pub(crate) fn failing(recorder: Recorder, role: ServiceRole) -> Self {
        Self {
            recorder,
            fail_role: Some(role),
            graceful_exit: true,
        }
    }

    /// Children that never exit on request, forcing escalation.
    pub(crate) fn stubborn(recorder: Recorder) -> Self {
        Self {
            recorder,
            fail_role: None,
            graceful_exit: false,
        }
    }
}

impl ServiceSpawner for FakeSpawner {
    fn spawn(&self, plan: &LaunchPlan) -> LauncherResult<Box<dyn ServiceProcess>> {
        if self.fail_role == Some(plan.role) {
            return Err(LauncherError::spawn(
                plan.role,
                std::io::Error::other("no such interpreter"),
            ));
        }

        self.recorder.record(Event::Spawned(plan.role));

        Ok(Box::new(FakeProcess {
            role: plan.role,
            recorder: self.recorder.clone(),
            graceful_exit: self.graceful_exit,
        }))
    }
}

struct FakeProcess {
    role: ServiceRole,
    recorder: Recorder,
    graceful_exit: bool,
}

#[async_trait]
impl ServiceProcess for FakeProcess {
    fn pid(&self) -> Option<u32> {
        Some(4242)
    }

    fn request_terminate(&mut self) {
        self.recorder.record(Event::TerminateRequested(self.role));
    }

    async fn wait_exit(&mut self, _timeout: Duration) -> bool {
        self.graceful_exit
    }

    fn force_kill(&mut self) {
        self.recorder.record(Event::ForceKilled(self.role));
    }
}
