use sps_wire::WireError;

/// Errors that abort decoding of a property store.
///
/// Every structural variant carries the absolute byte offset (from the
/// start of the store) at which the inconsistency was detected.
///
/// ```text
///   DecodeError
///   ├── Wire(WireError)         ← a field ran past its buffer/window
///   ├── InvalidSignature        ← set signature is not "1SPS"
///   ├── SizeMismatch            ← declared set/record size impossible
///   ├── UnsupportedValueType    ← value-type code outside the enumeration
///   ├── ValueTooLarge           ← payload above the configured limit
///   └── Io(std::io::Error)      ← from the streaming reader
/// ```
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// A read needed more bytes than the buffer, or the record or set
    /// window, had left.
    #[error(transparent)]
    Wire(#[from] WireError),

    /// The 4 bytes after a set's size field are not a known signature.
    #[error("invalid set signature {found:02x?} at offset {offset}")]
    InvalidSignature { offset: usize, found: [u8; 4] },

    /// A declared size cannot hold its own header, or overruns the
    /// enclosing set.
    #[error("declared size {declared} at offset {offset} does not fit (available {available})")]
    SizeMismatch {
        offset: usize,
        declared: u32,
        available: usize,
    },

    #[error("unsupported value type {value_type:#06x} at offset {offset}")]
    UnsupportedValueType { offset: usize, value_type: u16 },

    /// A record declared a payload bigger than
    /// [`DecoderConfig::max_value_size`](crate::DecoderConfig::max_value_size).
    #[error("value of {size} bytes at offset {offset} exceeds limit {limit}")]
    ValueTooLarge {
        offset: usize,
        size: u64,
        limit: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Coarse classification of a [`DecodeError`], for callers that branch on
/// the failure kind without caring about the details.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeErrorKind {
    OutOfData,
    InvalidSignature,
    SizeMismatch,
    UnsupportedValueType,
    ValueTooLarge,
    Io,
}

impl DecodeError {
    #[must_use]
    pub fn kind(&self) -> DecodeErrorKind {
        match self {
            Self::Wire(WireError::Io(_)) | Self::Io(_) => DecodeErrorKind::Io,
            Self::Wire(_) => DecodeErrorKind::OutOfData,
            Self::InvalidSignature { .. } => DecodeErrorKind::InvalidSignature,
            Self::SizeMismatch { .. } => DecodeErrorKind::SizeMismatch,
            Self::UnsupportedValueType { .. } => DecodeErrorKind::UnsupportedValueType,
            Self::ValueTooLarge { .. } => DecodeErrorKind::ValueTooLarge,
        }
    }

    /// Absolute byte offset of the failure, when one is known.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::Wire(
                WireError::OutOfData { offset, .. } | WireError::SeekOutOfRange { offset, .. },
            )
            | Self::InvalidSignature { offset, .. }
            | Self::SizeMismatch { offset, .. }
            | Self::UnsupportedValueType { offset, .. }
            | Self::ValueTooLarge { offset, .. } => Some(*offset),
            Self::Wire(WireError::Io(_)) | Self::Io(_) => None,
        }
    }
}
