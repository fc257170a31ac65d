/// Supervisor lifecycle state.
///
/// Transitions are strictly forward; `Stopping` is reachable from any
/// state via interrupt or launch error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SupervisorState {
    NotStarted,
    BackendLaunched,
    WebLaunched,
    /// Both children running, waiting for an interrupt
    Idle,
    Stopping,
    /// Clean exit
    Stopped,
    /// Launch-phase error, process exits non-zero
    Failed { error: String },
}
