//! Domain event trait and the envelope codec.

use event_store::{AggregateId, EventEnvelope};
use serde::{Serialize, de::DeserializeOwned};

use crate::error::DomainError;

/// Trait for domain events.
///
/// Domain events represent facts that have happened in the domain.
/// They are immutable and named in past tense.
pub trait DomainEvent: Serialize + DeserializeOwned + Clone + std::fmt::Debug {
    /// Returns the event type name, used as envelope metadata and in
    /// observability output.
    fn event_type(&self) -> &'static str;
}

/// Encodes freshly produced events into envelopes for appending.
pub fn encode_events<E: DomainEvent>(
    aggregate_id: AggregateId,
    events: &[E],
) -> Result<Vec<EventEnvelope>, DomainError> {
    events
        .iter()
        .map(|event| {
            let payload = serde_json::to_value(event)?;
            Ok(EventEnvelope::new(aggregate_id, event.event_type(), payload))
        })
        .collect()
}

/// Decodes a stored history back into typed events, oldest first.
///
/// A payload that does not decode into a known event kind means the history
/// is corrupted or written by an incompatible version; the whole load is
/// abandoned so an aggregate is never built from a partial replay.
pub fn decode_history<E: DomainEvent>(
    aggregate_id: AggregateId,
    envelopes: &[EventEnvelope],
) -> Result<Vec<E>, DomainError> {
    envelopes
        .iter()
        .map(|envelope| {
            serde_json::from_value(envelope.payload.clone()).map_err(|source| {
                DomainError::CorruptHistory {
                    aggregate_id,
                    source,
                }
            })
        })
        .collect()
}
