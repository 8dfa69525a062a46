use sps_types::LookupError;

/// Errors that can occur while rendering a store.
///
/// ```text
/// ┌──────────────┬──────────────────────────────────────────────────┐
/// │ Variant      │ Cause                                            │
/// ├──────────────┼──────────────────────────────────────────────────┤
/// │ EmptyInput   │ The store has no sets to render                  │
/// │ Lookup       │ `set_index` names a set the store does not have  │
/// │ Json         │ JSON serialization failed                        │
/// └──────────────┴──────────────────────────────────────────────────┘
/// ```
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("store contains no sets")]
    EmptyInput,

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}
