use serde_json::{Value, json};
use sps_types::{Record, Set, Store, property_name};

use crate::error::DriverError;

/// JSON renderer: one pretty-printed document describing the store.
///
/// ```text
/// {
///   "sets": [ { "identifier": ..., "records": [ { ... } ], ... } ],
///   "source_len": 141
/// }
/// ```
///
/// Every record carries its `display_value`, plus the raw payload as
/// `data` hex when hex output is enabled. Absent keys (`entry_name` on a
/// numeric record, unknown `format_class`) are `null`.
pub struct JsonRenderer;

impl JsonRenderer {
    /// # Errors
    ///
    /// Returns [`DriverError::Json`] if serialization fails.
    pub fn render_all(
        store: &Store,
        sets: &[(usize, &Set)],
        show_hex: bool,
    ) -> Result<String, DriverError> {
        let sets: Vec<Value> = sets
            .iter()
            .map(|(index, set)| Self::set_value(*index, set, show_hex))
            .collect();
        let doc = json!({
            "source_len": store.source_len(),
            "sets": sets,
        });
        Ok(serde_json::to_string_pretty(&doc)?)
    }

    fn set_value(index: usize, set: &Set, show_hex: bool) -> Value {
        let records: Vec<Value> = set
            .records()
            .iter()
            .enumerate()
            .map(|(i, record)| Self::record_value(i, set, record, show_hex))
            .collect();
        json!({
            "index": index,
            "size": set.size(),
            "signature": set.signature().to_string(),
            "identifier": set.identifier().to_string(),
            "format_class": set.format_class().map(|class| class.name()),
            "trailing_bytes": set.trailing_bytes(),
            "records": records,
        })
    }

    fn record_value(index: usize, set: &Set, record: &Record, show_hex: bool) -> Value {
        let value_type = record.value_type();
        let property = match (set.format_class(), record.entry_type()) {
            (Some(class), Some(entry_type)) => {
                property_name(class, entry_type, value_type.wire_id()).map(|p| p.identifier)
            }
            _ => None,
        };
        let mut value = json!({
            "index": index,
            "size": record.size(),
            "entry_type": record.entry_type(),
            "entry_name": record.entry_name(),
            "property": property,
            "value_type": value_type.label(),
            "value_type_id": value_type.wire_id(),
            "value": record.display_value(),
        });
        if show_hex {
            value["data"] = Value::String(hex::encode(record.data()));
        }
        value
    }
}
