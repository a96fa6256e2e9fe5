//! Wire model for query responses and the page-to-record mapping.

use std::collections::HashMap;

use serde::Deserialize;
use uuid::Uuid;

use stockbot_core::{InventoryRecord, Quantity};

use crate::schema;

/// One page of query results.
#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    pub results: Vec<Page>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// One page (row) of the queried database.
#[derive(Debug, Deserialize)]
pub struct Page {
    pub id: Uuid,
    #[serde(default)]
    pub properties: HashMap<String, PropertyValue>,
}

/// A property value, discriminated by the service's `type` field.
///
/// Only the kinds the inventory schema uses are modeled. Anything else
/// deserializes as [`PropertyValue::Unknown`] and reads as absent, so a
/// schema edit on the service side cannot break lookups.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyValue {
    Title { title: Vec<RichTextFragment> },
    RichText { rich_text: Vec<RichTextFragment> },
    Select { select: Option<SelectValue> },
    Number { number: Option<f64> },
    Formula { formula: FormulaValue },
    Rollup { rollup: RollupValue },
    #[serde(other)]
    Unknown,
}

/// One fragment of a rich-text array. Only the rendered text matters here.
#[derive(Debug, Deserialize)]
pub struct RichTextFragment {
    pub plain_text: String,
}

/// A chosen select option.
#[derive(Debug, Deserialize)]
pub struct SelectValue {
    pub name: String,
}

/// A formula property's computed result.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormulaValue {
    Number { number: Option<f64> },
    String { string: Option<String> },
    Boolean { boolean: Option<bool> },
    #[serde(other)]
    Unknown,
}

/// A rollup property's aggregate.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RollupValue {
    Number { number: Option<f64> },
    #[serde(other)]
    Unknown,
}

impl Page {
    /// Map this page's properties onto an [`InventoryRecord`].
    ///
    /// Total by construction: a missing property, an unexpected property
    /// kind, or a non-numeric formula/rollup all land as absent fields. The
    /// schema is owned by the external service and can drift ahead of this
    /// client; extraction must not turn that into a failed lookup.
    pub fn to_record(&self) -> InventoryRecord {
        InventoryRecord {
            item_name: self.text_of(schema::ITEM),
            part_number: self.text_of(schema::PART_NUMBER),
            category: self.select_of(schema::CATEGORY),
            starting_quantity: self.quantity_of(schema::STARTING_QUANTITY),
            movement_total: self.quantity_of(schema::MOVEMENT),
            current_stock: self.quantity_of(schema::CURRENT_STOCK),
        }
    }

    /// First rendered fragment of a title or rich-text property, if any.
    fn text_of(&self, name: &str) -> Option<String> {
        let fragments = match self.properties.get(name) {
            Some(PropertyValue::Title { title }) => title,
            Some(PropertyValue::RichText { rich_text }) => rich_text,
            _ => return None,
        };
        fragments
            .first()
            .map(|fragment| fragment.plain_text.clone())
            .filter(|text| !text.is_empty())
    }

    fn select_of(&self, name: &str) -> Option<String> {
        match self.properties.get(name) {
            Some(PropertyValue::Select { select }) => {
                select.as_ref().map(|value| value.name.clone())
            }
            _ => None,
        }
    }

    /// Pick up whichever numeric representation the property carries.
    fn quantity_of(&self, name: &str) -> Quantity {
        match self.properties.get(name) {
            Some(PropertyValue::Number { number }) => Quantity {
                number: *number,
                ..Quantity::default()
            },
            Some(PropertyValue::Formula {
                formula: FormulaValue::Number { number },
            }) => Quantity {
                formula: *number,
                ..Quantity::default()
            },
            Some(PropertyValue::Rollup {
                rollup: RollupValue::Number { number },
            }) => Quantity {
                rollup: *number,
                ..Quantity::default()
            },
            _ => Quantity::absent(),
        }
    }
}
