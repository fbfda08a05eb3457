use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::broadcast;

/// One-shot signal that the board view has gone away.
pub struct UnmountSignal {
    unmounted: AtomicBool,
    unmount_tx: broadcast::Sender<()>,
}

impl UnmountSignal {
    pub fn new() -> Self {
        let (unmount_tx, _) = broadcast::channel(1);
        Self {
            unmounted: AtomicBool::new(false),
            unmount_tx,
        }
    }

    pub fn trigger(&self) {
        if !self.unmounted.swap(true, Ordering::SeqCst) {
            log::info!("Task board unmounted, cancelling pending fetches");
            let _ = self.unmount_tx.send(());
        }
    }

    pub fn is_unmounted(&self) -> bool {
        self.unmounted.load(Ordering::SeqCst)
    }

    /// Resolves once [`trigger`](Self::trigger) has been called.
    pub async fn unmounted(&self) {
        // Subscribe before checking the flag so a trigger in between is not missed
        let mut unmount_rx = self.unmount_tx.subscribe();
        if self.is_unmounted() {
            return;
        }
        let _ = unmount_rx.recv().await;
    }
}

impl Default for UnmountSignal {
    fn default() -> Self {
        Self::new()
    }
}
