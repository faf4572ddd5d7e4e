//! Inventory aggregate and related types.

mod aggregate;
mod commands;
mod events;
mod service;

pub use aggregate::InventoryBucket;
pub use commands::CheckItemOut;
pub use events::InventoryEvent;
pub use service::CheckItemOutHandler;

use thiserror::Error;

/// Errors that can occur during inventory operations.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Invalid quantity supplied to an operation.
    #[error("Invalid quantity: {quantity} (must be greater than 0)")]
    InvalidQuantity { quantity: u32 },

    /// Check-out requested for more than the quantity on hand.
    #[error("Insufficient stock: requested {requested} with {on_hand} on hand")]
    InsufficientStock { on_hand: u32, requested: u32 },
}
