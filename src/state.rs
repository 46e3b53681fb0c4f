use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::info;

use crate::types::Lifecycle;

/// Process-wide liveness flag plus the signal that closes the listener.
///
/// The flag starts `true` and only ever goes to `false`; the stop handler is
/// its only writer.
#[derive(Debug)]
pub struct Liveness {
    online: AtomicBool,
    shutdown: watch::Sender<bool>,
}

impl Liveness {
    pub fn new() -> Self {
        let (shutdown, _) = watch::channel(false);
        Self {
            online: AtomicBool::new(true),
            shutdown,
        }
    }

    pub fn is_up(&self) -> bool {
        self.online.load(Ordering::SeqCst)
    }

    pub fn lifecycle(&self) -> Lifecycle {
        if self.is_up() {
            Lifecycle::Running
        } else {
            Lifecycle::Stopped
        }
    }

    /// Flips the flag to down. Returns `true` only for the call that made the
    /// transition.
    pub fn mark_down(&self) -> bool {
        self.online.swap(false, Ordering::SeqCst)
    }

    /// Asks the server to close its listener.
    pub fn request_shutdown(&self) {
        self.shutdown.send_replace(true);
    }

    pub fn shutdown_requested(&self) -> bool {
        *self.shutdown.borrow()
    }

    /// Resolves once `request_shutdown` has been called, including calls made
    /// before this future was created.
    pub async fn wait_for_shutdown(&self) {
        let mut rx = self.shutdown.subscribe();
        rx.wait_for(|requested| *requested).await.ok();
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

/// State shared by every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub liveness: Arc<Liveness>,
    pub shutdown_grace: Duration,
}

impl AppState {
    pub fn new(shutdown_grace: Duration) -> Self {
        Self {
            liveness: Arc::new(Liveness::new()),
            shutdown_grace,
        }
    }

    /// Moves the service to `Stopped` and schedules listener shutdown after
    /// the grace period. Later calls are no-ops.
    pub fn stop(&self) -> Lifecycle {
        if self.liveness.mark_down() {
            let liveness = Arc::clone(&self.liveness);
            let grace = self.shutdown_grace;
            info!(?grace, "Stop requested, liveness is now DOWN");

            tokio::spawn(async move {
                tokio::time::sleep(grace).await;
                info!("Shutdown grace elapsed, closing listener");
                liveness.request_shutdown();
            });
        }
        self.liveness.lifecycle()
    }
}
