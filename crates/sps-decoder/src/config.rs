use sps_types::Codepage;

/// Largest payload a single record may declare by default (16 MiB).
pub const DEFAULT_MAX_VALUE_SIZE: usize = 16 * 1024 * 1024;

/// Decoder options.
///
/// ```text
/// ┌────────────────┬──────────────┬─────────────────────────────────────┐
/// │ Field          │ Default      │ Effect                              │
/// ├────────────────┼──────────────┼─────────────────────────────────────┤
/// │ codepage       │ Windows-1252 │ stamped on records, used by 8-bit   │
/// │                │              │ string accessors                    │
/// │ max_value_size │ 16 MiB       │ larger payloads fail ValueTooLarge  │
/// └────────────────┴──────────────┴─────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecoderConfig {
    pub codepage: Codepage,
    pub max_value_size: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            codepage: Codepage::Windows1252,
            max_value_size: DEFAULT_MAX_VALUE_SIZE,
        }
    }
}
