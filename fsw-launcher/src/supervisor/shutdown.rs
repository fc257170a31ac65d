use tokio::sync::watch;

/// Interrupt-driven shutdown signal.
///
/// Replaces a sleep-poll idle loop: waiters park on a watch channel and
/// wake as soon as the signal trips. Triggering is idempotent, so a
/// second Ctrl-C during shutdown has no additional effect.
#[derive(Clone)]
pub struct ShutdownCoordinator {
    tx: watch::Sender<bool>,
}

impl ShutdownCoordinator {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx }
    }

    /// Trip the shutdown signal. Safe to call any number of times.
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_triggered(&self) -> bool {
        *self.tx.borrow()
    }

    /// Wait until shutdown is triggered. Returns immediately if it
    /// already has.
    pub async fn wait(&self) {
        let mut rx = self.tx.subscribe();
        // Only fails if the sender is dropped, and we hold it
        let _ = rx.wait_for(|triggered| *triggered).await;
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
