//! Graceful shutdown coordination.
//!
//! One `Shutdown` owns the trigger; every long-running task holds a
//! `ShutdownSignal` and awaits it. The flag is latched, so a task that
//! subscribes after the trigger still stops.

use tokio::sync::watch;

/// Owner of the shutdown trigger.
#[derive(Debug)]
pub struct Shutdown {
    tx: watch::Sender<bool>,
}

/// Receiving side handed to tasks that must stop on shutdown.
#[derive(Debug, Clone)]
pub struct ShutdownSignal {
    rx: watch::Receiver<bool>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx }
    }

    /// A signal that resolves once [`Shutdown::trigger`] is called.
    pub fn subscribe(&self) -> ShutdownSignal {
        ShutdownSignal {
            rx: self.tx.subscribe(),
        }
    }

    /// Ask every subscribed task to stop.
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_triggered(&self) -> bool {
        *self.tx.borrow()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

impl ShutdownSignal {
    /// Wait for the trigger. Also returns if the `Shutdown` was dropped.
    pub async fn recv(mut self) {
        // Err means the sender is gone, which is as final as a trigger.
        let _ = self.rx.wait_for(|triggered| *triggered).await;
    }
}
