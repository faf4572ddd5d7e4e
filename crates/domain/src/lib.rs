//! Domain layer for the event-sourced inventory system.
//!
//! This crate provides:
//! - The `InventoryBucket` aggregate, rebuilt by replaying its event history
//! - `DomainEvent` and the envelope codec between typed events and the store
//! - The `Handler` contract and the `LoggingHandler` decorator
//! - The `CheckItemOutHandler` application service (load, decide, persist)

pub mod command;
pub mod error;
pub mod event;
pub mod handler;
pub mod inventory;

pub use command::Command;
pub use error::DomainError;
pub use event::{DomainEvent, decode_history, encode_events};
pub use handler::{Handler, LoggingHandler};
pub use inventory::{
    CheckItemOut, CheckItemOutHandler, InventoryBucket, InventoryError, InventoryEvent,
};
