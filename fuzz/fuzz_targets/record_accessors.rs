#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sps_types::{Codepage, Record, RecordKey, ValueType};

#[derive(Debug, Arbitrary)]
struct Input {
    value_type_index: u8,
    utf8: bool,
    data: Vec<u8>,
}

// Fuzz target: typed accessors on hand-built records.
//
// Records built outside the decoder can carry payloads of the wrong
// width, which the accessors must reject instead of panicking.
fuzz_target!(|input: Input| {
    let value_type = ValueType::ALL[input.value_type_index as usize % ValueType::ALL.len()];
    let codepage = if input.utf8 {
        Codepage::Utf8
    } else {
        Codepage::Windows1252
    };
    let record = Record::new(0, RecordKey::Numeric(0), value_type, input.data, codepage);

    let _ = record.as_bool();
    let _ = record.as_i64();
    let _ = record.as_u64();
    let _ = record.as_f64();
    let _ = record.as_string();
    let _ = record.as_filetime().map(|ft| ft.to_string());
    let _ = record.as_guid();
    let _ = record.display_value();
});
