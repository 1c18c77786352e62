//! Optimistic-update helper: snapshot, apply, then commit or revert.
//!
//! Used wherever local view state is updated ahead of a remote confirmation
//! (transcript upload, transcript delete), so every call site rolls back the
//! same way.

use tokio::sync::RwLock;

/// A pending optimistic update holding the prior state.
#[must_use = "an optimistic update must be committed or reverted"]
pub(crate) struct Optimistic<T: Clone> {
    prior: T,
}

impl<T: Clone> Optimistic<T> {
    /// Snapshot the current value and write the optimistic one.
    pub(crate) async fn apply(slot: &RwLock<T>, value: T) -> Self {
        let mut guard = slot.write().await;
        let prior = guard.clone();
        *guard = value;
        Self { prior }
    }

    /// The remote operation failed: restore the snapshot.
    pub(crate) async fn revert(self, slot: &RwLock<T>) {
        *slot.write().await = self.prior;
    }

    /// The remote operation succeeded: keep the (possibly updated) state.
    pub(crate) fn commit(self) {}
}
