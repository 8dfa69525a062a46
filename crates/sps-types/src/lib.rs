#![warn(clippy::pedantic)]

pub mod codepage;
pub mod error;
pub mod format_class;
pub mod property;
pub mod record;
pub mod set;
pub mod signature;
pub mod store;
pub mod value;
pub mod value_type;

pub use codepage::Codepage;
pub use error::{LookupError, TypeError};
pub use format_class::{FormatClass, RecordLayout};
pub use property::{PropertyName, property_name};
pub use record::{Record, RecordKey};
pub use set::Set;
pub use signature::Signature;
pub use store::Store;
pub use value::Filetime;
pub use value_type::{ValueEncoding, ValueType};

pub use sps_wire::Guid;
