use std::fmt::Write;

use sps_types::{Record, RecordKey, Set, Store, property_name};

/// Text renderer: an indented, one-field-per-line listing.
///
/// Example output:
///
/// ```text
/// store: 141 bytes, 1 set
///
/// set 0
///   size:        137
///   signature:   1SPS
///   identifier:  {46588AE2-4CBC-4338-BBFC-139326986DCE}
///   records:     1
///
///   record 0
///     entry type:  4
///     value type:  VT_LPWSTR (0x001F)
///     size:        109
///     value:       S-1-5-21-4060289323-199701022-3924801681-1000
/// ```
///
/// Well-known format classes and property names are annotated where
/// they apply.
pub struct TextRenderer;

impl TextRenderer {
    /// Render the selected `(index, set)` pairs of `store`.
    #[must_use]
    pub fn render_all(store: &Store, sets: &[(usize, &Set)], show_hex: bool) -> String {
        let mut blocks = vec![store_line(store)];
        for (index, set) in sets {
            blocks.push(Self::render_set(*index, set, show_hex));
        }
        blocks.join("\n\n")
    }

    fn render_set(index: usize, set: &Set, show_hex: bool) -> String {
        let mut out = format!("set {index}\n");
        field(&mut out, 2, "size", set.size());
        field(&mut out, 2, "signature", set.signature());
        field(&mut out, 2, "identifier", set.identifier());
        if let Some(class) = set.format_class() {
            field(
                &mut out,
                2,
                "class",
                format_args!("{} ({})", class.name(), class.description()),
            );
        }
        field(&mut out, 2, "records", set.record_count());
        if set.trailing_bytes() > 0 {
            field(
                &mut out,
                2,
                "trailing",
                format_args!("{} bytes", set.trailing_bytes()),
            );
        }

        for (i, record) in set.records().iter().enumerate() {
            out.push('\n');
            out.push_str(&Self::render_record(i, set, record, show_hex));
        }
        out.trim_end().to_owned()
    }

    fn render_record(index: usize, set: &Set, record: &Record, show_hex: bool) -> String {
        let mut out = format!("  record {index}\n");
        match record.key() {
            RecordKey::Numeric(entry_type) => {
                let name = set.format_class().and_then(|class| {
                    property_name(class, *entry_type, record.value_type().wire_id())
                });
                match name {
                    Some(name) => field(
                        &mut out,
                        4,
                        "entry type",
                        format_args!("{entry_type} ({})", name.identifier),
                    ),
                    None => field(&mut out, 4, "entry type", entry_type),
                }
            }
            RecordKey::Named(name) => field(&mut out, 4, "entry name", format_args!("{name:?}")),
        }
        field(&mut out, 4, "value type", record.value_type());
        field(&mut out, 4, "size", record.size());
        field(&mut out, 4, "value", record.display_value());
        if show_hex {
            field(&mut out, 4, "data", hex::encode(record.data()));
        }
        out
    }
}

fn store_line(store: &Store) -> String {
    let count = store.set_count();
    let noun = if count == 1 { "set" } else { "sets" };
    format!("store: {} bytes, {count} {noun}", store.source_len())
}

fn field(out: &mut String, indent: usize, label: &str, value: impl std::fmt::Display) {
    let label = format!("{label}:");
    let _ = writeln!(out, "{:indent$}{label:<13}{value}", "");
}
