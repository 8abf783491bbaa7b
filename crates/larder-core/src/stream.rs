// ── Reactive item snapshots ──
//
// Subscription type for consuming inventory changes from the controller.

use std::sync::Arc;

use tokio::sync::watch;

use crate::model::InventoryItem;

/// A subscription to the inventory snapshot.
///
/// Provides both point-in-time access and reactive change notification via
/// [`changed`](Self::changed).
pub struct ItemsStream {
    current: Arc<Vec<InventoryItem>>,
    receiver: watch::Receiver<Arc<Vec<InventoryItem>>>,
}

impl ItemsStream {
    pub(crate) fn new(receiver: watch::Receiver<Arc<Vec<InventoryItem>>>) -> Self {
        let current = receiver.borrow().clone();
        Self { current, receiver }
    }

    /// Get the snapshot captured at creation time.
    pub fn current(&self) -> &Arc<Vec<InventoryItem>> {
        &self.current
    }

    /// Wait for the next change, returning the new snapshot.
    /// Returns `None` if the controller has been dropped.
    pub async fn changed(&mut self) -> Option<Arc<Vec<InventoryItem>>> {
        self.receiver.changed().await.ok()?;
        let snap = self.receiver.borrow_and_update().clone();
        self.current = snap.clone();
        Some(snap)
    }
}
