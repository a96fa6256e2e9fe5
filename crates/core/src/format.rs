//! Reply formatting.
//!
//! Everything the bot ever says is assembled here: the fixed guidance and
//! failure messages, the per-record display block, and the full multi-record
//! reply. Keeping the wording in one place lets the lookup pipeline and the
//! tests share the exact strings.

use crate::record::InventoryRecord;

/// Sent when the command is invoked with an empty search term.
pub const USAGE_MESSAGE: &str = "Please specify an item. Example: `/inventory VT5`";

/// Sent when the database query or its response handling fails. Diagnostic
/// detail stays in the logs; the channel only ever sees this fixed line.
pub const FAILURE_MESSAGE: &str = "Sorry, there was an error querying the inventory.";

/// Shown in place of the item name when a record has none.
const NAME_PLACEHOLDER: &str = "N/A";

/// Sent when the query succeeds but matches nothing.
pub fn no_match_message(term: &str) -> String {
    format!("No items found matching \"{term}\"")
}

/// Render one record as a display block.
///
/// `position` is the record's 1-based position in the result listing. The
/// name line is always present; part number and category appear only when
/// non-empty; the quantity lines appear whenever any numeric representation
/// resolved, so a stock level of zero still shows. Only the stock line has
/// an explicit "not available" form.
pub fn format_record(record: &InventoryRecord, position: usize) -> String {
    let name = record.item_name.as_deref().unwrap_or(NAME_PLACEHOLDER);
    let mut block = format!("{position}. *{name}*");

    if let Some(part_number) = non_empty(&record.part_number) {
        block.push_str(&format!("\n   Part #: {part_number}"));
    }
    if let Some(category) = non_empty(&record.category) {
        block.push_str(&format!("\n   Category: {category}"));
    }
    if let Some(starting) = record.starting_quantity.resolve() {
        block.push_str(&format!("\n   Starting: {starting}"));
    }
    if let Some(movement) = record.movement_total.resolve() {
        block.push_str(&format!("\n   Movement: {}", signed(movement)));
    }
    match record.current_stock.resolve() {
        Some(stock) => block.push_str(&format!("\n   Current stock: {stock} units")),
        None => block.push_str("\n   Current stock: not available"),
    }

    block
}

/// Assemble the full reply: a header echoing the search term and the match
/// count, then one block per record in result order, blank-line separated.
pub fn render_reply(term: &str, records: &[InventoryRecord]) -> String {
    let mut reply = format!(
        "📦 *Inventory Results for \"{term}\"*\nFound {} item(s)",
        records.len()
    );

    for (index, record) in records.iter().enumerate() {
        reply.push_str("\n\n");
        reply.push_str(&format_record(record, index + 1));
    }

    reply
}

/// Positive movement gets an explicit `+`; zero and negative keep the
/// default rendering.
fn signed(value: f64) -> String {
    if value > 0.0 {
        format!("+{value}")
    } else {
        value.to_string()
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Quantity;

    fn full_record() -> InventoryRecord {
        InventoryRecord {
            item_name: Some("VT5 Widget".to_string()),
            part_number: Some("VT5-100".to_string()),
            category: Some("Widgets".to_string()),
            starting_quantity: Quantity::number(8.0),
            movement_total: Quantity::rollup(-1.0),
            current_stock: Quantity::formula(7.0),
        }
    }

    #[test]
    fn formats_a_fully_populated_record() {
        let block = format_record(&full_record(), 1);
        assert_eq!(
            block,
            "1. *VT5 Widget*\n   \
             Part #: VT5-100\n   \
             Category: Widgets\n   \
             Starting: 8\n   \
             Movement: -1\n   \
             Current stock: 7 units"
        );
    }

    #[test]
    fn nameless_record_gets_a_placeholder() {
        let record = InventoryRecord {
            item_name: None,
            ..full_record()
        };
        assert!(format_record(&record, 3).starts_with("3. *N/A*"));
    }

    #[test]
    fn empty_part_number_and_category_lines_are_omitted() {
        let record = InventoryRecord {
            part_number: Some(String::new()),
            category: None,
            ..full_record()
        };
        let block = format_record(&record, 1);
        assert!(!block.contains("Part #:"));
        assert!(!block.contains("Category:"));
    }

    #[test]
    fn zero_quantities_are_rendered_not_dropped() {
        let record = InventoryRecord {
            starting_quantity: Quantity::number(0.0),
            movement_total: Quantity::number(0.0),
            current_stock: Quantity::number(0.0),
            ..Default::default()
        };
        let block = format_record(&record, 1);
        assert!(block.contains("Starting: 0"));
        assert!(block.contains("Movement: 0"));
        assert!(block.contains("Current stock: 0 units"));
    }

    #[test]
    fn positive_movement_is_prefixed_negative_is_not() {
        let gain = InventoryRecord {
            movement_total: Quantity::number(5.0),
            ..Default::default()
        };
        let loss = InventoryRecord {
            movement_total: Quantity::number(-5.0),
            ..Default::default()
        };
        assert!(format_record(&gain, 1).contains("Movement: +5"));
        assert!(format_record(&loss, 1).contains("Movement: -5"));
    }

    #[test]
    fn unresolvable_stock_says_not_available() {
        let record = InventoryRecord {
            current_stock: Quantity::absent(),
            ..Default::default()
        };
        assert!(format_record(&record, 1).contains("Current stock: not available"));
    }

    #[test]
    fn stock_resolution_prefers_number_then_formula_then_rollup() {
        let record = InventoryRecord {
            current_stock: Quantity {
                number: None,
                formula: Some(7.0),
                rollup: Some(100.0),
            },
            ..Default::default()
        };
        assert!(format_record(&record, 1).contains("Current stock: 7 units"));
    }

    #[test]
    fn reply_header_echoes_term_and_count() {
        let records = vec![full_record(), InventoryRecord::default()];
        let reply = render_reply("VT5", &records);
        assert!(reply.starts_with("📦 *Inventory Results for \"VT5\"*\nFound 2 item(s)\n\n"));
    }

    #[test]
    fn reply_blocks_follow_result_order() {
        let first = InventoryRecord {
            item_name: Some("Alpha".to_string()),
            ..Default::default()
        };
        let second = InventoryRecord {
            item_name: Some("Beta".to_string()),
            ..Default::default()
        };
        let reply = render_reply("a", &[first, second]);
        let alpha = reply.find("1. *Alpha*").unwrap();
        let beta = reply.find("2. *Beta*").unwrap();
        assert!(alpha < beta);
    }

    // The worked lookup for `/inventory VT5` against a database holding one
    // widget row and one nameless spare row.
    #[test]
    fn vt5_lookup_renders_the_expected_reply() {
        let widget = full_record();
        let spare = InventoryRecord {
            item_name: None,
            part_number: Some("VT5-EXTRA".to_string()),
            category: None,
            starting_quantity: Quantity::number(1.0),
            movement_total: Quantity::number(0.0),
            current_stock: Quantity::number(1.0),
        };

        let reply = render_reply("VT5", &[widget, spare]);
        assert_eq!(
            reply,
            "📦 *Inventory Results for \"VT5\"*\n\
             Found 2 item(s)\n\
             \n\
             1. *VT5 Widget*\n   \
             Part #: VT5-100\n   \
             Category: Widgets\n   \
             Starting: 8\n   \
             Movement: -1\n   \
             Current stock: 7 units\n\
             \n\
             2. *N/A*\n   \
             Part #: VT5-EXTRA\n   \
             Starting: 1\n   \
             Movement: 0\n   \
             Current stock: 1 units"
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_quantity() -> impl Strategy<Value = Quantity> {
            (
                proptest::option::of(-1000.0f64..1000.0),
                proptest::option::of(-1000.0f64..1000.0),
                proptest::option::of(-1000.0f64..1000.0),
            )
                .prop_map(|(number, formula, rollup)| Quantity {
                    number,
                    formula,
                    rollup,
                })
        }

        fn arb_record() -> impl Strategy<Value = InventoryRecord> {
            (
                proptest::option::of("[A-Za-z0-9 ]{1,12}"),
                proptest::option::of("[A-Z0-9-]{1,10}"),
                proptest::option::of("[A-Za-z]{1,10}"),
                arb_quantity(),
                arb_quantity(),
                arb_quantity(),
            )
                .prop_map(
                    |(item_name, part_number, category, starting, movement, stock)| {
                        InventoryRecord {
                            item_name,
                            part_number,
                            category,
                            starting_quantity: starting,
                            movement_total: movement,
                            current_stock: stock,
                        }
                    },
                )
        }

        proptest! {
            #![proptest_config(ProptestConfig { cases: 256, ..ProptestConfig::default() })]

            // One block per record, every position marker present, count
            // echoed in the header.
            #[test]
            fn reply_has_one_block_per_record(records in proptest::collection::vec(arb_record(), 0..8)) {
                let reply = render_reply("term", &records);

                let header_count = format!("Found {} item(s)", records.len());
                prop_assert!(reply.contains(&header_count));
                prop_assert_eq!(reply.matches("\n\n").count(), records.len());
                for position in 1..=records.len() {
                    let marker = format!("\n\n{position}. *");
                    prop_assert!(reply.contains(&marker));
                }
            }

            // The stock line renders the resolved value or the explicit
            // fallback, never silently disappears.
            #[test]
            fn stock_line_is_always_present(record in arb_record()) {
                let block = format_record(&record, 1);
                match record.current_stock.resolve() {
                    Some(stock) => {
                        let stock_line = format!("Current stock: {stock} units");
                        prop_assert!(block.contains(&stock_line));
                    }
                    None => prop_assert!(block.contains("Current stock: not available")),
                }
            }
        }
    }
}
