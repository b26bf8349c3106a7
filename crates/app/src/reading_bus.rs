//! In-process reading bus backed by a tokio broadcast channel.

use tokio::sync::broadcast;

use sensordash_domain::reading::Reading;

/// Fan-out of sensor readings to every connected stream subscriber.
///
/// Publishing succeeds even when there are no active subscribers
/// (the reading is simply dropped).
pub struct ReadingBus {
    sender: broadcast::Sender<Reading>,
}

impl ReadingBus {
    /// Create a new bus with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to readings published *after* this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Reading> {
        self.sender.subscribe()
    }

    /// Publish a reading to all current subscribers.
    ///
    /// Returns the number of subscribers that received it.
    pub fn publish(&self, reading: Reading) -> usize {
        // send fails only when there are zero receivers
        self.sender.send(reading).unwrap_or(0)
    }

    /// Number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}
