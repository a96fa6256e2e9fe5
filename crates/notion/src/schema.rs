//! Property names of the inventory database.
//!
//! The schema lives in the external service and is edited by hand there;
//! these names are the contract this client relies on. A renamed property
//! degrades to an absent field rather than an error (see
//! [`crate::page::Page::to_record`]).

/// Title property holding the item's display name. Searched.
pub const ITEM: &str = "Item";

/// Rich-text property holding the part number. Searched.
pub const PART_NUMBER: &str = "Part Number";

/// Select property holding the category label.
pub const CATEGORY: &str = "Category";

/// Numeric property holding the quantity when tracking started.
pub const STARTING_QUANTITY: &str = "Starting Quantity";

/// Numeric property holding net movement since tracking started.
pub const MOVEMENT: &str = "Movement";

/// Numeric property holding the current stock level.
pub const CURRENT_STOCK: &str = "Current Stock";
