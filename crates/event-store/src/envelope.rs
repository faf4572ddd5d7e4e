use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{AggregateId, EventId};

/// A stored event along with its metadata.
///
/// The store does not interpret the payload; it is the serialized domain
/// event as JSON. The `event_type` name rides alongside it so histories can
/// be inspected without decoding payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// The type of the event (e.g., "ItemCheckedIn").
    pub event_type: String,

    /// The aggregate this event belongs to.
    pub aggregate_id: AggregateId,

    /// When the event was recorded.
    pub recorded_at: DateTime<Utc>,

    /// The event payload as JSON.
    pub payload: serde_json::Value,
}

impl EventEnvelope {
    /// Creates an envelope for a freshly produced event.
    ///
    /// The event ID is generated and the timestamp set to now.
    pub fn new(
        aggregate_id: AggregateId,
        event_type: impl Into<String>,
        payload: serde_json::Value,
    ) -> Self {
        Self {
            event_id: EventId::new(),
            event_type: event_type.into(),
            aggregate_id,
            recorded_at: Utc::now(),
            payload,
        }
    }
}
