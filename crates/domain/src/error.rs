//! Domain error types.

use event_store::{AggregateId, EventStoreError};
use thiserror::Error;

use crate::inventory::InventoryError;

/// Errors that can surface from the command pipeline.
#[derive(Debug, Error)]
pub enum DomainError {
    /// An error occurred in the event store.
    #[error("Event store error: {0}")]
    EventStore(#[from] EventStoreError),

    /// The aggregate rejected an operation.
    #[error("Inventory error: {0}")]
    Inventory(#[from] InventoryError),

    /// A stored history contains an event the aggregate does not know how
    /// to fold. This is corrupted or incompatible data, not a domain error;
    /// loading the aggregate is abandoned entirely.
    #[error("Corrupt event history for aggregate {aggregate_id}: {source}")]
    CorruptHistory {
        aggregate_id: AggregateId,
        #[source]
        source: serde_json::Error,
    },

    /// Serialization error while encoding produced events.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
