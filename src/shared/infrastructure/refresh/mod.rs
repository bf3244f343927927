// Refresh notifications for the presentation layer.
//
// Purpose
// - After a mutating waitlist call succeeds, tell subscribers to re-read from the store.
//
// Boundaries
// - Fire and forget. Having no subscriber is normal and never fails the mutation.

use serde::Serialize;
use tokio::sync::broadcast;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RefreshSignal {
    EntryAdded,
    EntryRemoved,
    LikeIncremented,
}

#[derive(Debug, Clone)]
pub struct RefreshNotifier {
    sender: broadcast::Sender<RefreshSignal>,
}

impl RefreshNotifier {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<RefreshSignal> {
        self.sender.subscribe()
    }

    pub fn notify(&self, signal: RefreshSignal) {
        if self.sender.send(signal).is_err() {
            tracing::trace!(?signal, "no refresh subscribers");
        }
    }
}

impl Default for RefreshNotifier {
    fn default() -> Self {
        Self::new(16)
    }
}
