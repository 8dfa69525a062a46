use std::io::{Read, Seek, SeekFrom};

use crate::error::WireError;

/// A random-access byte source with a known total length.
///
/// This is the seam between the decoder and whatever owns the bytes: an
/// in-memory buffer, an open file, a memory-mapped region. The decoder
/// asks for `(offset, length)` ranges and never assumes the whole input
/// is resident.
pub trait ByteSource {
    /// Total number of bytes available.
    fn len(&self) -> u64;

    /// `true` when the source holds no bytes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read exactly `length` bytes starting at `offset`.
    ///
    /// # Errors
    ///
    /// - [`WireError::OutOfData`] if the range runs past [`len`](Self::len).
    /// - [`WireError::Io`] if the underlying reader fails.
    fn read(&mut self, offset: u64, length: usize) -> Result<Vec<u8>, WireError>;
}

impl ByteSource for &[u8] {
    fn len(&self) -> u64 {
        <[u8]>::len(self) as u64
    }

    fn read(&mut self, offset: u64, length: usize) -> Result<Vec<u8>, WireError> {
        let total = <[u8]>::len(self);
        let start = usize::try_from(offset).unwrap_or(usize::MAX).min(total);
        match start.checked_add(length) {
            Some(end) if end <= total && offset <= total as u64 => Ok(self[start..end].to_vec()),
            _ => Err(WireError::OutOfData {
                offset: start,
                requested: length,
                remaining: total - start,
            }),
        }
    }
}

/// [`ByteSource`] adapter over any `Read + Seek` value (files, `io::Cursor`).
///
/// The length is captured once at construction by seeking to the end.
pub struct SeekSource<R> {
    inner: R,
    len: u64,
}

impl<R: Read + Seek> SeekSource<R> {
    /// Wrap a reader, measuring its length.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::Io`] if seeking fails.
    pub fn new(mut inner: R) -> Result<Self, WireError> {
        let len = inner.seek(SeekFrom::End(0))?;
        inner.seek(SeekFrom::Start(0))?;
        Ok(Self { inner, len })
    }

    /// Give back the wrapped reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read + Seek> ByteSource for SeekSource<R> {
    fn len(&self) -> u64 {
        self.len
    }

    fn read(&mut self, offset: u64, length: usize) -> Result<Vec<u8>, WireError> {
        let remaining = self.len.saturating_sub(offset);
        if (length as u64) > remaining {
            return Err(WireError::OutOfData {
                offset: usize::try_from(offset).unwrap_or(usize::MAX),
                requested: length,
                remaining: usize::try_from(remaining).unwrap_or(usize::MAX),
            });
        }
        self.inner.seek(SeekFrom::Start(offset))?;
        let mut buf = vec![0u8; length];
        self.inner.read_exact(&mut buf)?;
        Ok(buf)
    }
}
