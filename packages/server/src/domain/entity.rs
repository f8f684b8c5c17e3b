//! Core domain models for the relay.

use std::sync::{
    Arc,
    atomic::{AtomicU8, Ordering},
};

use tokio::sync::mpsc::UnboundedSender;

use super::value_object::{ConnectionId, ConnectionState, Timestamp};

/// Result of handing one encoded frame to one connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// Frame was queued on the connection's outbox
    Delivered,
    /// Connection was not open at the moment of iteration
    Skipped,
    /// Outbox is gone (writer task ended)
    Failed,
}

/// Handle to one open duplex channel to a client.
///
/// Clones share the same state and outbox, so a handle taken from a registry
/// snapshot observes closes that happen after the snapshot was taken.
#[derive(Debug, Clone)]
pub struct Connection {
    /// Connection identifier
    pub id: ConnectionId,
    /// Timestamp when the connection was accepted
    pub connected_at: Timestamp,
    state: Arc<AtomicU8>,
    outbox: UnboundedSender<String>,
}

impl Connection {
    /// Create a new open connection whose outbound frames go to `outbox`
    pub fn new(id: ConnectionId, connected_at: Timestamp, outbox: UnboundedSender<String>) -> Self {
        Self {
            id,
            connected_at,
            state: Arc::new(AtomicU8::new(ConnectionState::Open.as_u8())),
            outbox,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> ConnectionState {
        ConnectionState::from_u8(self.state.load(Ordering::Acquire))
    }

    pub fn is_open(&self) -> bool {
        self.state() == ConnectionState::Open
    }

    /// Move `Open -> Closing`. No effect once closing or closed.
    pub fn begin_close(&self) {
        let _ = self.state.compare_exchange(
            ConnectionState::Open.as_u8(),
            ConnectionState::Closing.as_u8(),
            Ordering::AcqRel,
            Ordering::Acquire,
        );
    }

    /// Move to `Closed` from any state.
    pub fn mark_closed(&self) {
        self.state
            .store(ConnectionState::Closed.as_u8(), Ordering::Release);
    }

    /// Queue one encoded frame for this connection.
    ///
    /// Never blocks: the outbox is unbounded and a dropped receiver fails
    /// immediately.
    pub fn deliver(&self, frame: &str) -> DeliveryOutcome {
        if !self.is_open() {
            return DeliveryOutcome::Skipped;
        }
        match self.outbox.send(frame.to_owned()) {
            Ok(()) => DeliveryOutcome::Delivered,
            Err(_) => DeliveryOutcome::Failed,
        }
    }
}
