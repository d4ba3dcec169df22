//! Store event sink trait and implementations.

use std::sync::{Arc, Mutex, PoisonError};

use super::StoreEvent;

/// Trait for receiving store events.
///
/// # Design Rules
///
/// - `emit()` must be fast and non-blocking
/// - It is called after the store lock is released, so it may call back
///   into the store
/// - Failure to emit must not affect store operations (best-effort)
///
/// # Ordering
///
/// Events of one operation arrive as one batch, in the order the mutation
/// produced them. Operations made one after another by the same caller are
/// delivered in that order. Batches from operations racing on different
/// threads may interleave out of mutation order; sinks that need a global
/// order should carry their own sequencing.
pub trait StoreEventSink: Send + Sync {
    /// Emit a single store event.
    fn emit(&self, event: StoreEvent);

    /// Emit multiple store events in order.
    fn emit_batch(&self, events: Vec<StoreEvent>) {
        for event in events {
            self.emit(event);
        }
    }
}

/// Sink that discards every event.
#[derive(Clone, Default)]
pub struct NoOpStoreEventSink;

impl StoreEventSink for NoOpStoreEventSink {
    fn emit(&self, _event: StoreEvent) {}
}

/// Mock sink for testing - collects emitted events.
#[derive(Clone, Default)]
pub struct MockStoreEventSink {
    events: Arc<Mutex<Vec<StoreEvent>>>,
}

impl MockStoreEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected events.
    pub fn events(&self) -> Vec<StoreEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Clears collected events.
    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Returns the number of collected events.
    pub fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true if no events have been collected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StoreEventSink for MockStoreEventSink {
    fn emit(&self, event: StoreEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task_updated(id: &str) -> StoreEvent {
        StoreEvent::TaskUpdated {
            task_id: id.to_string(),
        }
    }

    #[test]
    fn test_noop_sink_does_not_panic() {
        let sink = NoOpStoreEventSink;
        sink.emit(task_updated("t1"));
        sink.emit_batch(vec![task_updated("t2"), task_updated("t3")]);
    }

    #[test]
    fn test_mock_sink_collects_events() {
        let sink = MockStoreEventSink::new();
        assert!(sink.is_empty());

        sink.emit(task_updated("t1"));
        assert_eq!(sink.len(), 1);

        sink.emit_batch(vec![task_updated("t2"), task_updated("t3")]);
        assert_eq!(sink.len(), 3);
        assert_eq!(sink.events()[2], task_updated("t3"));

        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_event_account_scope() {
        let event = StoreEvent::TaskCreated {
            account_id: "a1".to_string(),
            task_id: "t1".to_string(),
        };
        assert_eq!(event.account_id(), Some("a1"));
        assert_eq!(StoreEvent::session_changed(None).account_id(), None);
        assert_eq!(task_updated("t1").account_id(), None);
    }

    #[test]
    fn test_event_serializes_with_type_tag() {
        let json = serde_json::to_value(StoreEvent::goal_progress_changed("g1", 50.0)).unwrap();
        assert_eq!(json["type"], "goal_progress_changed");
        assert_eq!(json["goal_id"], "g1");
        assert_eq!(json["completion_percentage"], 50.0);
    }
}
