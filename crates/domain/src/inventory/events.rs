//! Inventory domain events.

use serde::{Deserialize, Serialize};

use crate::event::DomainEvent;

/// Events that can occur on an inventory bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum InventoryEvent {
    /// A bucket was created for an item with an opening count.
    ///
    /// Defined for aggregate-creation flows; none of the current operations
    /// produce it.
    BucketCreated {
        item_name: String,
        opening_count: u32,
    },

    /// Stock was checked in.
    ItemCheckedIn { quantity: u32 },

    /// Stock was checked out.
    ItemCheckedOut { quantity: u32 },
}

impl DomainEvent for InventoryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::BucketCreated { .. } => "BucketCreated",
            InventoryEvent::ItemCheckedIn { .. } => "ItemCheckedIn",
            InventoryEvent::ItemCheckedOut { .. } => "ItemCheckedOut",
        }
    }
}
