use sps_types::{Set, Store};

use crate::config::{DriverConfig, OutputMode};
use crate::error::DriverError;
use crate::render_json::JsonRenderer;
use crate::render_text::TextRenderer;

/// Renders a decoded [`Store`] for people or tools.
///
/// ```text
/// Store ──▶ StoreDriver::render() ──▶ String
///                  │
///            DriverConfig
///            (mode, set_index, show_hex)
/// ```
pub trait StoreDriver {
    /// # Errors
    ///
    /// - `DriverError::EmptyInput` if the store has no sets.
    /// - `DriverError::Lookup` if `config.set_index` is out of range.
    fn render(&self, store: &Store, config: &DriverConfig) -> Result<String, DriverError>;
}

/// Default driver: selects sets, then dispatches to the renderer for
/// `config.mode`.
///
/// ```text
/// ┌─────────┐     ┌──────────────┐     ┌──────────────┐
/// │ &Store  │────▶│ select sets  │────▶│ TextRenderer │
/// │         │     │ + dispatch   │     │ JsonRenderer │
/// └─────────┘     └──────────────┘     └──────────────┘
/// ```
pub struct DefaultDriver;

impl StoreDriver for DefaultDriver {
    fn render(&self, store: &Store, config: &DriverConfig) -> Result<String, DriverError> {
        if store.is_empty() {
            return Err(DriverError::EmptyInput);
        }

        let selected: Vec<(usize, &Set)> = match config.set_index {
            Some(index) => vec![(index, store.try_set(index)?)],
            None => store.sets().iter().enumerate().collect(),
        };

        match config.mode {
            OutputMode::Text => Ok(TextRenderer::render_all(store, &selected, config.show_hex)),
            OutputMode::Json => JsonRenderer::render_all(store, &selected, config.show_hex),
        }
    }
}
