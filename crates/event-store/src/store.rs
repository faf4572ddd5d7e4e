use crate::{AggregateId, EventEnvelope, Result};

/// Core trait for event store implementations.
///
/// A history is an ordered, append-only log of envelopes keyed by aggregate
/// id. Events are facts: once appended they are never mutated or removed,
/// and their order is significant.
///
/// There is no expected-version parameter on [`append`](EventStore::append):
/// this design assumes at most one command is in flight against a given
/// aggregate at a time. Two callers that both read a history and then both
/// append can lose updates. Extending this store for concurrent writers
/// requires an optimistic-concurrency check at append time or a single
/// writer in front of it.
pub trait EventStore: Send + Sync {
    /// Returns the full history for an aggregate, oldest event first.
    ///
    /// An aggregate with no events yet has an empty history.
    fn read_history(&self, aggregate_id: AggregateId) -> Result<Vec<EventEnvelope>>;

    /// Appends events to the aggregate's history, preserving their order.
    ///
    /// Fails with [`Unavailable`](crate::EventStoreError::Unavailable) when
    /// the store cannot be reached and with
    /// [`AggregateMismatch`](crate::EventStoreError::AggregateMismatch) when
    /// an envelope targets a different aggregate.
    fn append(&self, aggregate_id: AggregateId, events: Vec<EventEnvelope>) -> Result<()>;
}
