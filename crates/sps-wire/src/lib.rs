#![warn(clippy::pedantic)]

pub mod cursor;
pub mod error;
pub mod guid;
pub mod source;

pub use cursor::ByteCursor;
pub use error::WireError;
pub use guid::Guid;
pub use source::{ByteSource, SeekSource};
