//! Fan-out of one encoded frame to a set of connections.

use super::entity::{Connection, DeliveryOutcome};

/// Tally of one broadcast attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BroadcastReport {
    pub delivered: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl BroadcastReport {
    fn record(&mut self, outcome: DeliveryOutcome) {
        match outcome {
            DeliveryOutcome::Delivered => self.delivered += 1,
            DeliveryOutcome::Skipped => self.skipped += 1,
            DeliveryOutcome::Failed => self.failed += 1,
        }
    }

    /// Number of connections attempted.
    pub fn total(&self) -> usize {
        self.delivered + self.skipped + self.failed
    }
}

/// Deliver `frame` to every connection in `connections` that is open.
///
/// A failed delivery never stops the loop and never removes the connection
/// from the registry; that is left to the connection's own task.
pub fn broadcast<'a, I>(frame: &str, connections: I) -> BroadcastReport
where
    I: IntoIterator<Item = &'a Connection>,
{
    let mut report = BroadcastReport::default();
    for connection in connections {
        let outcome = connection.deliver(frame);
        if outcome == DeliveryOutcome::Failed {
            tracing::debug!("Delivery to connection '{}' failed", connection.id);
        }
        report.record(outcome);
    }
    report
}
