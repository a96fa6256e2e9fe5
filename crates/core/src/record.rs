//! Inventory records and quantity resolution.

/// A numeric field as the external database exposes it.
///
/// The same logical quantity can surface as a directly stored number, as a
/// formula computed by the database, or as a rollup aggregated from related
/// records. A record carries every representation that was present;
/// [`Quantity::resolve`] collapses them to a single value using a fixed
/// preference order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Quantity {
    /// Directly stored number.
    pub number: Option<f64>,
    /// Formula result computed by the database.
    pub formula: Option<f64>,
    /// Rollup aggregate over related records.
    pub rollup: Option<f64>,
}

impl Quantity {
    /// A quantity with no numeric representation at all.
    pub fn absent() -> Self {
        Self::default()
    }

    /// A quantity backed by a directly stored number.
    pub fn number(value: f64) -> Self {
        Self {
            number: Some(value),
            ..Self::default()
        }
    }

    /// A quantity backed only by a formula result.
    pub fn formula(value: f64) -> Self {
        Self {
            formula: Some(value),
            ..Self::default()
        }
    }

    /// A quantity backed only by a rollup aggregate.
    pub fn rollup(value: f64) -> Self {
        Self {
            rollup: Some(value),
            ..Self::default()
        }
    }

    /// Collapse to a single value: stored number first, then formula, then
    /// rollup. `None` when no representation is present.
    ///
    /// Zero is a legitimate value and must survive resolution; only a
    /// genuinely missing representation falls through to the next one.
    pub fn resolve(&self) -> Option<f64> {
        self.number.or(self.formula).or(self.rollup)
    }
}

/// One inventory entry retrieved from the external database.
///
/// Records are read-only snapshots; the bot never writes inventory back.
/// Every field is optional because the database schema is owned by the
/// other side and rows are routinely half-filled.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InventoryRecord {
    /// Display name of the item.
    pub item_name: Option<String>,
    /// Manufacturer or internal part number.
    pub part_number: Option<String>,
    /// Category label.
    pub category: Option<String>,
    /// Quantity on hand when tracking started.
    pub starting_quantity: Quantity,
    /// Net movement since tracking started; negative means net outflow.
    pub movement_total: Quantity,
    /// Current stock level.
    pub current_stock: Quantity,
}
