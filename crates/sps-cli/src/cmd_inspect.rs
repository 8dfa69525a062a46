/// Implementation of `sps inspect`.
///
/// Decodes the whole store and hands it to the default driver. Text mode
/// prints the indented listing; `--json` prints a JSON document.
use anyhow::{Context, Result};
use sps_driver::{DefaultDriver, DriverConfig, OutputMode, StoreDriver};

use crate::InspectArgs;

/// # Errors
///
/// Returns an error if the file cannot be read or decoded, if the store
/// is empty, or if `--set` is out of range.
pub fn run(args: &InspectArgs) -> Result<()> {
    let store = args.decode.decode_file(&args.file)?;
    tracing::debug!(sets = store.set_count(), "decoded {}", args.file.display());

    let config = DriverConfig {
        mode: if args.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        },
        set_index: args.set,
        show_hex: args.show_hex,
    };
    let output = DefaultDriver
        .render(&store, &config)
        .with_context(|| format!("cannot render {}", args.file.display()))?;
    println!("{output}");
    Ok(())
}
