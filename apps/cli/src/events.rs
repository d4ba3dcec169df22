//! Store event sink for the command line.

use synkr_core::events::{StoreEvent, StoreEventSink};

/// Logs every store event at debug level.
#[derive(Clone, Default)]
pub struct TracingEventSink;

impl StoreEventSink for TracingEventSink {
    fn emit(&self, event: StoreEvent) {
        match &event {
            StoreEvent::GoalProgressChanged {
                goal_id,
                completion_percentage,
            } => {
                tracing::debug!(goal_id = %goal_id, completion_percentage, "goal progress changed");
            }
            other => {
                tracing::debug!(account_id = ?other.account_id(), event = ?other, "store event");
            }
        }
    }
}
