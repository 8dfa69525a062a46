use crate::value_type::ValueType;

/// Errors raised when interpreting a decoded record's payload.
///
/// These never come out of the decoder itself. They are local to a single
/// accessor call: a failed `as_i64()` says nothing about whether the record
/// is structurally sound, and the record stays usable through the other
/// accessors.
///
/// ```text
/// ┌─────────────────────────────────────────────────────┐
/// │ TypeError (this crate)                              │
/// │   ├── TypeMismatch     accessor vs. declared type   │
/// │   ├── InvalidText      undecodable string payload   │
/// │   ├── InvalidDataSize  payload width != type width  │
/// │   └── UnknownValueType value-type code not defined  │
/// └─────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TypeError {
  /// The accessor asked for an interpretation the record's value type
  /// does not support (e.g. `as_bool()` on a UTF-16 string).
  #[error("cannot read {found} value as {requested}")]
  TypeMismatch {
    requested: &'static str,
    found: ValueType,
  },

  /// A string payload is not valid in its encoding (unpaired UTF-16
  /// surrogate, malformed UTF-8, unmapped Windows-1252 byte).
  #[error("invalid text in {value_type} value")]
  InvalidText { value_type: ValueType },

  /// The payload length disagrees with the fixed width of its type.
  ///
  /// Records built by the decoder always have the right width; this only
  /// surfaces for hand-constructed records.
  #[error("{value_type} value has {actual} bytes, expected {expected}")]
  InvalidDataSize {
    value_type: ValueType,
    expected: usize,
    actual: usize,
  },

  /// A 16-bit value-type code outside the supported enumeration.
  #[error("unknown value type {value:#06X}")]
  UnknownValueType { value: u16 },
}

/// Errors from index-based lookups on a [`Store`](crate::Store) or
/// [`Set`](crate::Set).
///
/// The plain `set(i)` / `record(i)` lookups return `Option`; the
/// `try_*` variants return this error for callers that want a message.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LookupError {
  #[error("{kind} index {index} out of range (count {count})")]
  IndexOutOfRange {
    kind: &'static str,
    index: usize,
    count: usize,
  },
}
