#![warn(clippy::pedantic)]

pub mod config;
pub mod decoder;
pub mod error;
pub mod streaming;

mod record;
mod set;

pub use config::{DEFAULT_MAX_VALUE_SIZE, DecoderConfig};
pub use decoder::{StoreDecoder, decode_store};
pub use error::{DecodeError, DecodeErrorKind};
pub use streaming::StreamingDecoder;
