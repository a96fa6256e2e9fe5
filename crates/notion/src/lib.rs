//! The inventory database behind the bot.
//!
//! Defines the read-only lookup port ([`InventorySource`]) and implements it
//! against the hosted document-database service's query API: typed search
//! filters, the wire model for query responses, and the mapping from page
//! properties onto [`stockbot_core::InventoryRecord`].

pub mod client;
pub mod filter;
pub mod page;
pub mod schema;
pub mod source;

pub use client::{DatabaseId, NotionClient};
pub use source::{InventorySource, SourceError};
