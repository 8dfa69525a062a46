/// Low-level errors raised while reading raw bytes.
///
/// Every variant carries the absolute byte offset at which the read was
/// attempted, so a failure deep inside a nested window cursor still points
/// at the right spot in the original buffer.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// A read asked for more bytes than the cursor (or source) has left.
    #[error("out of data at offset {offset}: requested {requested} bytes, {remaining} remaining")]
    OutOfData {
        offset: usize,
        requested: usize,
        remaining: usize,
    },

    /// A seek targeted a position outside `[start, end]` of the cursor.
    #[error("seek to offset {offset} outside of buffer of length {len}")]
    SeekOutOfRange { offset: usize, len: usize },

    /// I/O error while reading from a seekable source.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// The offsets here are positions from the start of the input, never
// relative to a window. ByteCursor adds its base offset before building
// the error.
