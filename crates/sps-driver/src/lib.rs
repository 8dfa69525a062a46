#![warn(clippy::pedantic)]

pub mod config;
pub mod driver;
pub mod error;
pub mod render_json;
pub mod render_text;

pub use config::{DriverConfig, OutputMode};
pub use driver::{DefaultDriver, StoreDriver};
pub use error::DriverError;
