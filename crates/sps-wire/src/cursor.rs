use crate::error::WireError;

/// Bounds-checked reader over a fixed-length byte buffer.
///
/// A cursor is a window into a larger input: `base` is the absolute offset
/// of `buf[0]`, so [`offset`](Self::offset) and every error report positions
/// relative to the start of the whole store, not the window.
///
/// ```text
///   input:  ┌──────────────┬──────────────────────┬─────────┐
///           │   ...        │ buf (this window)    │   ...   │
///           └──────────────┴──────────────────────┴─────────┘
///                          ^ base       ^ base + pos
/// ```
///
/// Reads are atomic: they either return the full requested width and
/// advance, or fail with [`WireError::OutOfData`] and leave the position
/// untouched.
#[derive(Clone, Debug)]
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    pos: usize,
    base: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor positioned at the start of `buf`, with absolute
    /// offset 0.
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self::with_base(buf, 0)
    }

    /// Create a cursor whose first byte sits at absolute offset `base`.
    #[must_use]
    pub fn with_base(buf: &'a [u8], base: usize) -> Self {
        Self { buf, pos: 0, base }
    }

    /// Absolute offset of the next byte to be read.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.base + self.pos
    }

    /// Absolute offset one past the last byte of this window.
    #[must_use]
    pub fn end(&self) -> usize {
        self.base + self.buf.len()
    }

    /// Number of bytes consumed from this window so far.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Total length of this window.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Bytes left between the current position and the end of the window.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Move to absolute offset `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::SeekOutOfRange`] unless
    /// `base <= offset <= base + len`.
    pub fn seek(&mut self, offset: usize) -> Result<(), WireError> {
        match offset.checked_sub(self.base) {
            Some(pos) if pos <= self.buf.len() => {
                self.pos = pos;
                Ok(())
            }
            _ => Err(WireError::SeekOutOfRange {
                offset,
                len: self.end(),
            }),
        }
    }

    /// Advance past `n` bytes without looking at them.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::OutOfData`] if fewer than `n` bytes remain.
    pub fn skip(&mut self, n: usize) -> Result<(), WireError> {
        self.read_bytes(n).map(|_| ())
    }

    /// Borrow the next `n` bytes and advance past them.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::OutOfData`] if fewer than `n` bytes remain.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], WireError> {
        if n > self.remaining() {
            return Err(self.out_of_data(n));
        }
        let start = self.pos;
        self.pos += n;
        Ok(&self.buf[start..self.pos])
    }

    /// Read exactly `N` bytes into a fixed-size array.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::OutOfData`] if fewer than `N` bytes remain.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], WireError> {
        let bytes = self.read_bytes(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// # Errors
    ///
    /// Returns [`WireError::OutOfData`] at end of window.
    pub fn read_u8(&mut self) -> Result<u8, WireError> {
        Ok(self.read_array::<1>()?[0])
    }

    /// # Errors
    ///
    /// Returns [`WireError::OutOfData`] if fewer than 2 bytes remain.
    pub fn read_u16_le(&mut self) -> Result<u16, WireError> {
        self.read_array().map(u16::from_le_bytes)
    }

    /// # Errors
    ///
    /// Returns [`WireError::OutOfData`] if fewer than 4 bytes remain.
    pub fn read_u32_le(&mut self) -> Result<u32, WireError> {
        self.read_array().map(u32::from_le_bytes)
    }

    /// # Errors
    ///
    /// Returns [`WireError::OutOfData`] if fewer than 8 bytes remain.
    pub fn read_u64_le(&mut self) -> Result<u64, WireError> {
        self.read_array().map(u64::from_le_bytes)
    }

    /// Peek at the next little-endian `u32` without advancing.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::OutOfData`] if fewer than 4 bytes remain.
    pub fn peek_u32_le(&self) -> Result<u32, WireError> {
        self.clone().read_u32_le()
    }

    /// Carve the next `n` bytes off as a child cursor and advance past them.
    ///
    /// The child keeps absolute offsets, so errors raised inside it are
    /// reported at their true position in the input.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::OutOfData`] if fewer than `n` bytes remain.
    pub fn split(&mut self, n: usize) -> Result<ByteCursor<'a>, WireError> {
        let base = self.offset();
        let bytes = self.read_bytes(n)?;
        Ok(ByteCursor::with_base(bytes, base))
    }

    fn out_of_data(&self, requested: usize) -> WireError {
        WireError::OutOfData {
            offset: self.offset(),
            requested,
            remaining: self.remaining(),
        }
    }
}
