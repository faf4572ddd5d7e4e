use thiserror::Error;

use crate::types::AggregateId;

/// Errors that can occur when interacting with the event store.
#[derive(Debug, Error)]
pub enum EventStoreError {
    /// The store could not be reached or its state is no longer trustworthy.
    #[error("Event store unavailable: {reason}")]
    Unavailable { reason: String },

    /// An appended envelope targets a different aggregate than the append call.
    #[error("Append for aggregate {expected} contained an event for aggregate {found}")]
    AggregateMismatch {
        expected: AggregateId,
        found: AggregateId,
    },
}

/// Result type for event store operations.
pub type Result<T> = std::result::Result<T, EventStoreError>;
