#![no_main]

use libfuzzer_sys::fuzz_target;
use sps_decoder::StoreDecoder;

// Fuzz target: single-set decoding, including the named-record layout.
//
// The first 16 input bytes after the signature are the format
// identifier, so the fuzzer reaches the name-keyed path once it finds
// the user-defined properties GUID.
fuzz_target!(|data: &[u8]| {
    let _ = StoreDecoder::default().decode_set(data);
});
