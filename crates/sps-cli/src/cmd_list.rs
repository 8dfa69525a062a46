/// Implementation of `sps list`.
///
/// One tab-separated line per record, for grepping and scripting:
///
/// ```text
/// 0.0	4	VT_LPWSTR	S-1-5-21-4060289323-199701022-3924801681-1000
/// 1.0	"Owner"	VT_LPWSTR	alice
/// ```
///
/// Columns: `set.record`, key (entry type, or quoted entry name), value
/// type label, display value.
use anyhow::Result;
use sps_types::RecordKey;

use crate::ListArgs;

/// # Errors
///
/// Returns an error if the file cannot be read or decoded.
pub fn run(args: &ListArgs) -> Result<()> {
    let store = args.decode.decode_file(&args.file)?;

    for (s, set) in store.sets().iter().enumerate() {
        for (r, record) in set.records().iter().enumerate() {
            let key = match record.key() {
                RecordKey::Numeric(entry_type) => entry_type.to_string(),
                RecordKey::Named(name) => format!("{name:?}"),
            };
            println!(
                "{s}.{r}\t{key}\t{}\t{}",
                record.value_type().label(),
                record.display_value()
            );
        }
    }
    Ok(())
}
