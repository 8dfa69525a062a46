/// Configuration for rendering a decoded store.
///
/// ```text
/// ┌────────────┬──────────────────────────────────────────────────────┐
/// │ Field      │ Purpose                                              │
/// ├────────────┼──────────────────────────────────────────────────────┤
/// │ mode       │ Text (indented listing) or JSON                      │
/// │ set_index  │ Render only this set; all sets when `None`           │
/// │ show_hex   │ Include each record's raw payload as hex             │
/// └────────────┴──────────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DriverConfig {
    pub mode: OutputMode,
    pub set_index: Option<usize>,
    pub show_hex: bool,
}

impl Default for DriverConfig {
    /// Text mode, every set, no hex dump.
    fn default() -> Self {
        Self {
            mode: OutputMode::Text,
            set_index: None,
            show_hex: false,
        }
    }
}

/// Output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Indented human-readable listing.
    #[default]
    Text,
    /// Pretty-printed JSON document.
    Json,
}
