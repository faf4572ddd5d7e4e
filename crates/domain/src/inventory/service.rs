//! Application service for the check-item-out command.

use event_store::{AggregateId, EventStore};

use crate::error::DomainError;
use crate::event::{DomainEvent, decode_history, encode_events};
use crate::handler::Handler;

use super::{CheckItemOut, InventoryBucket, InventoryEvent};

/// Innermost handler for [`CheckItemOut`]: load, decide, persist.
///
/// Each command replays the bucket's full history into a fresh aggregate,
/// invokes the operation, and appends whatever events it produced. State is
/// never stored; only the history is. The bucket identity is fixed at
/// construction, one service per bucket.
pub struct CheckItemOutHandler<S> {
    store: S,
    bucket_id: AggregateId,
}

impl<S: EventStore> CheckItemOutHandler<S> {
    /// Creates a handler over the given event store and bucket.
    pub fn new(store: S, bucket_id: AggregateId) -> Self {
        Self { store, bucket_id }
    }

    /// Returns the id of the bucket this handler operates on.
    pub fn bucket_id(&self) -> AggregateId {
        self.bucket_id
    }

    /// Rebuilds the bucket from its stored history.
    pub fn load(&self) -> Result<InventoryBucket, DomainError> {
        let envelopes = self.store.read_history(self.bucket_id)?;
        let history: Vec<InventoryEvent> = decode_history(self.bucket_id, &envelopes)?;
        Ok(InventoryBucket::from_history(history))
    }
}

impl<S: EventStore> Handler<CheckItemOut> for CheckItemOutHandler<S> {
    #[tracing::instrument(skip(self), fields(bucket_id = %self.bucket_id))]
    fn handle(&self, command: CheckItemOut) -> Result<(), DomainError> {
        let mut bucket = self.load()?;

        bucket.check_item_out(command.quantity)?;

        let produced = bucket.take_produced_events();
        if produced.is_empty() {
            return Ok(());
        }

        let envelopes = encode_events(self.bucket_id, &produced)?;
        self.store.append(self.bucket_id, envelopes)?;

        metrics::counter!("inventory_events_appended").increment(produced.len() as u64);
        for event in &produced {
            tracing::info!(event_type = event.event_type(), event = ?event, "event appended");
        }

        Ok(())
    }
}
