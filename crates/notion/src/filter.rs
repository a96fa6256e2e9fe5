//! Typed query filters for the database search endpoint.

use serde::Serialize;

use crate::schema;

/// Body of a database query request.
#[derive(Debug, Serialize)]
pub struct QueryRequest {
    pub filter: Filter,
}

/// Disjunction over per-property conditions.
#[derive(Debug, Serialize)]
pub struct Filter {
    pub or: Vec<PropertyFilter>,
}

/// A condition on a single property.
///
/// The condition serializes keyed by the property kind (`title`,
/// `rich_text`), which is how the service distinguishes them.
#[derive(Debug, Serialize)]
pub struct PropertyFilter {
    pub property: &'static str,
    #[serde(flatten)]
    pub condition: Condition,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Title(Contains),
    RichText(Contains),
}

/// Substring match with the service's own matching semantics, case
/// handling included. The term is passed through verbatim; nothing is
/// normalized on this side.
#[derive(Debug, Serialize)]
pub struct Contains {
    pub contains: String,
}

impl QueryRequest {
    /// Match records whose item name or part number contains `term`.
    pub fn matching(term: &str) -> Self {
        Self {
            filter: Filter {
                or: vec![
                    PropertyFilter {
                        property: schema::ITEM,
                        condition: Condition::Title(Contains {
                            contains: term.to_string(),
                        }),
                    },
                    PropertyFilter {
                        property: schema::PART_NUMBER,
                        condition: Condition::RichText(Contains {
                            contains: term.to_string(),
                        }),
                    },
                ],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_serializes_to_a_two_property_or_filter() {
        let request = QueryRequest::matching("VT5");

        let expected = serde_json::json!({
            "filter": {
                "or": [
                    { "property": "Item", "title": { "contains": "VT5" } },
                    { "property": "Part Number", "rich_text": { "contains": "VT5" } },
                ]
            }
        });
        assert_eq!(serde_json::to_value(&request).unwrap(), expected);
    }

    #[test]
    fn term_is_passed_through_unmodified() {
        let request = QueryRequest::matching(" Vt5 \"quoted\" ");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json["filter"]["or"][0]["title"]["contains"],
            " Vt5 \"quoted\" "
        );
    }
}
