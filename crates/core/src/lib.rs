//! Inventory records and reply formatting.
//!
//! This crate contains **pure domain** logic (no IO, no async): the record
//! shape as it comes back from the external database, quantity resolution
//! across that database's heterogeneous numeric representations, and the
//! plain-text rendering of lookup replies. The HTTP surfaces live in
//! `stockbot-notion`, `stockbot-slack` and `stockbot-server`.

pub mod format;
pub mod record;

pub use format::{FAILURE_MESSAGE, USAGE_MESSAGE, format_record, no_match_message, render_reply};
pub use record::{InventoryRecord, Quantity};
