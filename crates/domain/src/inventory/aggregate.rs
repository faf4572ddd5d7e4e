//! Inventory bucket aggregate.

use super::{InventoryError, InventoryEvent};

/// Inventory bucket aggregate root.
///
/// State is derived solely by folding the bucket's event history. Mutating
/// operations validate first, then raise an event; the event is buffered
/// for persistence and applied to in-memory state in the same step, so a
/// bucket always agrees with what its caller is about to append.
#[derive(Debug, Clone, Default)]
pub struct InventoryBucket {
    /// Item name, set by `BucketCreated`.
    item_name: Option<String>,

    /// Current quantity on hand. Equals the checked-in sum minus the
    /// checked-out sum of every event applied so far.
    quantity_on_hand: u32,

    /// Events raised by operations on this instance, not yet persisted.
    produced_events: Vec<InventoryEvent>,
}

impl InventoryBucket {
    /// Creates an empty bucket with no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a bucket by replaying an ordered event history.
    ///
    /// Replay reconstructs state only; it never re-raises facts, so the
    /// produced-events buffer of the returned bucket is empty.
    pub fn from_history(history: impl IntoIterator<Item = InventoryEvent>) -> Self {
        let mut bucket = Self::default();
        for event in history {
            bucket.apply(event);
        }
        bucket
    }

    /// Returns the current quantity on hand.
    pub fn quantity_on_hand(&self) -> u32 {
        self.quantity_on_hand
    }

    /// Returns the item name, if the bucket has been created for one.
    pub fn item_name(&self) -> Option<&str> {
        self.item_name.as_deref()
    }

    /// Checks stock in.
    pub fn check_item_in(&mut self, quantity: u32) -> Result<(), InventoryError> {
        if quantity == 0 {
            return Err(InventoryError::InvalidQuantity { quantity });
        }

        self.raise(InventoryEvent::ItemCheckedIn { quantity });
        Ok(())
    }

    /// Checks stock out.
    ///
    /// All checks run before any mutation: a rejected command leaves both
    /// the quantity on hand and the produced-events buffer untouched.
    pub fn check_item_out(&mut self, quantity: u32) -> Result<(), InventoryError> {
        if quantity == 0 {
            return Err(InventoryError::InvalidQuantity { quantity });
        }
        if self.quantity_on_hand < quantity {
            return Err(InventoryError::InsufficientStock {
                on_hand: self.quantity_on_hand,
                requested: quantity,
            });
        }

        self.raise(InventoryEvent::ItemCheckedOut { quantity });
        Ok(())
    }

    /// Returns the buffered produced events and resets the buffer.
    ///
    /// A destructive read: each produced event is delivered exactly once.
    pub fn take_produced_events(&mut self) -> Vec<InventoryEvent> {
        std::mem::take(&mut self.produced_events)
    }

    /// Buffers the event, then applies it.
    fn raise(&mut self, event: InventoryEvent) {
        self.produced_events.push(event.clone());
        self.apply(event);
    }

    /// Folds one event into state.
    ///
    /// Total over the event enum and pure: all validation happens before an
    /// event is raised, never here.
    fn apply(&mut self, event: InventoryEvent) {
        match event {
            InventoryEvent::BucketCreated {
                item_name,
                opening_count,
            } => {
                self.item_name = Some(item_name);
                self.quantity_on_hand = opening_count;
            }
            InventoryEvent::ItemCheckedIn { quantity } => self.quantity_on_hand += quantity,
            InventoryEvent::ItemCheckedOut { quantity } => self.quantity_on_hand -= quantity,
        }
    }
}

impl std::fmt::Display for InventoryBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.item_name {
            Some(name) => write!(f, "{name}: {} on hand", self.quantity_on_hand),
            None => write!(f, "{} on hand", self.quantity_on_hand),
        }
    }
}
