use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::{
    AggregateId, EventEnvelope, EventStoreError, Result,
    store::EventStore,
};

/// In-memory event store.
///
/// Keeps one ordered log per aggregate behind a shared lock, so a clone of
/// the store is a handle onto the same histories. The lock only guards the
/// map itself; the read-then-append sequence of a command handler is not
/// serialized here (see the [`EventStore`] docs).
#[derive(Clone, Default)]
pub struct InMemoryEventStore {
    histories: Arc<RwLock<HashMap<AggregateId, Vec<EventEnvelope>>>>,
}

impl InMemoryEventStore {
    /// Creates a new empty in-memory event store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of events stored across all aggregates.
    pub fn event_count(&self) -> usize {
        self.histories
            .read()
            .map(|h| h.values().map(Vec::len).sum())
            .unwrap_or(0)
    }

    /// Clears all histories.
    pub fn clear(&self) {
        if let Ok(mut histories) = self.histories.write() {
            histories.clear();
        }
    }
}

fn poisoned() -> EventStoreError {
    EventStoreError::Unavailable {
        reason: "event log lock poisoned".to_string(),
    }
}

impl EventStore for InMemoryEventStore {
    fn read_history(&self, aggregate_id: AggregateId) -> Result<Vec<EventEnvelope>> {
        let histories = self.histories.read().map_err(|_| poisoned())?;
        Ok(histories.get(&aggregate_id).cloned().unwrap_or_default())
    }

    fn append(&self, aggregate_id: AggregateId, events: Vec<EventEnvelope>) -> Result<()> {
        if let Some(stray) = events.iter().find(|e| e.aggregate_id != aggregate_id) {
            return Err(EventStoreError::AggregateMismatch {
                expected: aggregate_id,
                found: stray.aggregate_id,
            });
        }

        let mut histories = self.histories.write().map_err(|_| poisoned())?;
        let history = histories.entry(aggregate_id).or_default();
        tracing::debug!(
            %aggregate_id,
            appended = events.len(),
            history_len = history.len() + events.len(),
            "events appended"
        );
        history.extend(events);
        Ok(())
    }
}
