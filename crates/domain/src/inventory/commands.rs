//! Inventory commands.
//!
//! `CheckItemOut` is the one command routed through the handler pipeline.
//! Checking stock in is a direct aggregate operation with no command type;
//! see [`InventoryBucket::check_item_in`](super::InventoryBucket::check_item_in).

use crate::command::Command;

/// Command to check stock out of the bucket.
///
/// The target bucket is the one the handling service was constructed for,
/// so the command carries only the quantity.
#[derive(Debug, Clone, Copy)]
pub struct CheckItemOut {
    /// Quantity to check out.
    pub quantity: u32,
}

impl CheckItemOut {
    /// Creates a new CheckItemOut command.
    pub fn new(quantity: u32) -> Self {
        Self { quantity }
    }
}

impl Command for CheckItemOut {
    fn command_type(&self) -> &'static str {
        "CheckItemOut"
    }
}
