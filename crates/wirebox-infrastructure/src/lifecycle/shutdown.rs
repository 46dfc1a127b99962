//! Shutdown coordination

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::Notify;
use tracing::info;
use wirebox_domain::ports::ShutdownCoordinator;

/// Default implementation of `ShutdownCoordinator` using atomics and `Notify`
///
/// The flag answers `is_shutting_down` without blocking; `Notify` wakes
/// every task parked in `wait_for_shutdown`.
pub struct DefaultShutdownCoordinator {
    shutdown_signal: AtomicBool,
    notify: Notify,
}

impl DefaultShutdownCoordinator {
    pub fn new() -> Self {
        Self {
            shutdown_signal: AtomicBool::new(false),
            notify: Notify::new(),
        }
    }

    /// Wait until `signal_shutdown()` has been called
    ///
    /// Returns immediately if the signal was already given.
    pub async fn wait_for_shutdown(&self) {
        let notified = self.notify.notified();
        tokio::pin!(notified);
        // Register interest before checking the flag so a signal in between is not lost.
        notified.as_mut().enable();
        if self.is_shutting_down() {
            return;
        }
        notified.await;
    }
}

impl Default for DefaultShutdownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DefaultShutdownCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultShutdownCoordinator")
            .field("is_shutting_down", &self.is_shutting_down())
            .finish()
    }
}

impl ShutdownCoordinator for DefaultShutdownCoordinator {
    fn signal_shutdown(&self) {
        info!("Shutdown signal received");
        self.shutdown_signal.store(true, Ordering::SeqCst);
        self.notify.notify_waiters();
    }

    fn is_shutting_down(&self) -> bool {
        self.shutdown_signal.load(Ordering::SeqCst)
    }
}
