/// Implementation of `sps validate`.
///
/// Runs a full decode and reports either success checkmarks or a single
/// diagnostic line.
///
/// # Success output
///
/// ```text
/// ✓ Store: 141 bytes
/// ✓ Sets: 1 set decoded
/// ✓ Records: 1 record decoded
/// ```
///
/// Sets with bytes left after their record chain add a `!` line; those
/// bytes are skipped and do not fail validation.
///
/// # Failure output
///
/// ```text
/// ✗ Error: invalid set signature [31, 53, 50, 54] at offset 4 (at byte 4)
/// ```
use anyhow::{Result, anyhow};
use sps_decoder::{DecodeError, StoreDecoder};

use crate::{ValidateArgs, read_file};

/// # Errors
///
/// Returns an error if the file cannot be read or fails to decode.
pub fn run(args: &ValidateArgs) -> Result<()> {
    let bytes = read_file(&args.file)?;

    match StoreDecoder::new(args.decode.decoder_config()).decode(&bytes) {
        Ok(store) => {
            let records: usize = store.sets().iter().map(|s| s.record_count()).sum();
            println!("✓ Store: {} bytes", store.source_len());
            println!(
                "✓ Sets: {} set{} decoded",
                store.set_count(),
                plural(store.set_count())
            );
            println!("✓ Records: {records} record{} decoded", plural(records));
            for (i, set) in store.sets().iter().enumerate() {
                if set.trailing_bytes() > 0 {
                    println!(
                        "! Set {i}: {} trailing byte{} skipped",
                        set.trailing_bytes(),
                        plural(set.trailing_bytes())
                    );
                }
            }
            Ok(())
        }
        Err(e) => {
            println!("✗ Error: {}", diagnostic(&e));
            Err(anyhow!("validation failed"))
        }
    }
}

fn diagnostic(e: &DecodeError) -> String {
    match e.offset() {
        Some(offset) => format!("{e} (at byte {offset})"),
        None => e.to_string(),
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}
