use crate::supervisor::{ServiceProcess, ServiceRole};

/// Fixed two-slot collection of spawned children, one per role.
///
/// Cleanup iterates this explicit structure, so a termination request is
/// issued for exactly the handles that were actually created.
#[derive(Default)]
pub struct ServiceHandles {
    backend: Option<Box<dyn ServiceProcess>>,
    web: Option<Box<dyn ServiceProcess>>,
}

impl ServiceHandles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, role: ServiceRole, process: Box<dyn ServiceProcess>) {
        match role {
            ServiceRole::Backend => self.backend = Some(process),
            ServiceRole::Web => self.web = Some(process),
        }
    }

    pub fn contains(&self, role: ServiceRole) -> bool {
        match role {
            ServiceRole::Backend => self.backend.is_some(),
            ServiceRole::Web => self.web.is_some(),
        }
    }

    pub fn created_count(&self) -> usize {
        usize::from(self.backend.is_some()) + usize::from(self.web.is_some())
    }

    /// Take all handles in teardown order: web first, then backend, so
    /// the frontend stops taking uploads before its API disappears.
    pub fn drain(&mut self) -> Vec<(ServiceRole, Box<dyn ServiceProcess>)> {
        let mut order = Vec::with_capacity(2);

        if let Some(process) = self.web.take() {
            order.push((ServiceRole::Web, process));
        }
        if let Some(process) = self.backend.take() {
            order.push((ServiceRole::Backend, process));
        }

        order
    }
}
