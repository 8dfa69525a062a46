#![no_main]

use libfuzzer_sys::fuzz_target;
use sps_decoder::{DecoderConfig, StoreDecoder};

// Fuzz target: whole-store decoding.
//
// Catches bugs in:
// - Set and record size arithmetic
// - Truncated headers and payloads
// - Huge declared counts (bounded by max_value_size)
//
// Every decoded record's accessors and display path run too, since the
// decoder hands out records whose payloads come straight from the input.
fuzz_target!(|data: &[u8]| {
    let decoder = StoreDecoder::new(DecoderConfig {
        max_value_size: 1 << 16,
        ..DecoderConfig::default()
    });
    if let Ok(store) = decoder.decode(data) {
        assert_eq!(store.source_len(), data.len());
        for set in store.sets() {
            assert!(set.size() as usize <= data.len());
            for record in set.records() {
                let _ = record.display_value();
            }
        }
    }
});
