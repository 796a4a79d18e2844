//! Poll observer port
//!
//! Each poll start supplies its own observer. `on_update` is only called
//! while the poll is active and never with a total at or below the last
//! reported one; `on_ended` is called exactly once per accepted start (or
//! once with a synthesized failure when the start is rejected).

use pollcast_domain::{ChoiceTally, PollResult};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Callbacks for a single poll
pub trait PollObserver: Send + Sync {
    fn on_update(&self, tallies: &[ChoiceTally]);

    fn on_ended(&self, result: PollResult);
}

/// Poll events as channel messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollEvent {
    Updated(Vec<ChoiceTally>),
    Ended(PollResult),
}

/// Observer forwarding every callback to an unbounded channel
pub struct ChannelPollObserver {
    tx: mpsc::UnboundedSender<PollEvent>,
}

impl ChannelPollObserver {
    pub fn new(tx: mpsc::UnboundedSender<PollEvent>) -> Self {
        Self { tx }
    }

    /// Create an observer together with the receiving end of its channel
    pub fn channel() -> (Arc<Self>, mpsc::UnboundedReceiver<PollEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Arc::new(Self::new(tx)), rx)
    }
}

impl PollObserver for ChannelPollObserver {
    fn on_update(&self, tallies: &[ChoiceTally]) {
        // Receiver may be gone if the caller stopped listening
        let _ = self.tx.send(PollEvent::Updated(tallies.to_vec()));
    }

    fn on_ended(&self, result: PollResult) {
        let _ = self.tx.send(PollEvent::Ended(result));
    }
}
