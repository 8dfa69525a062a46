#![no_main]

use libfuzzer_sys::fuzz_target;
use sps_wire::ByteCursor;

// Fuzz target: ByteCursor windowing.
//
// Input format:
//   byte 0: window length
//   bytes 1..: buffer
//
// Splits a window off the buffer and drains it with mixed-width reads.
// Offsets must stay within the buffer whatever happens.
fuzz_target!(|data: &[u8]| {
    let Some((&split, rest)) = data.split_first() else {
        return;
    };
    let mut cursor = ByteCursor::with_base(rest, 1);
    let Ok(mut window) = cursor.split(split as usize) else {
        return;
    };
    while window.remaining() > 0 {
        let before = window.offset();
        let ok = match window.remaining() % 4 {
            0 => window.read_u32_le().is_ok(),
            1 => window.read_u8().is_ok(),
            2 => window.read_u16_le().is_ok(),
            _ => window.read_u64_le().is_ok(),
        };
        assert!(window.offset() <= data.len());
        if !ok {
            assert_eq!(window.offset(), before);
            break;
        }
    }
});
