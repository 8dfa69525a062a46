use sps_types::{Set, Store};
use sps_wire::{ByteCursor, ByteSource};

use crate::config::DecoderConfig;
use crate::error::DecodeError;
use crate::set::{SET_HEADER_SIZE, read_set};

/// Decode a complete in-memory property store with the default
/// configuration.
///
/// # Errors
///
/// See [`StoreDecoder::decode`].
pub fn decode_store(buf: &[u8]) -> Result<Store, DecodeError> {
    StoreDecoder::default().decode(buf)
}

/// Synchronous property store decoder.
///
/// Decoding walks the input set by set from offset 0:
///
///   1. **Size**: read the set's `u32` size. Zero ends the store.
///   2. **Header**: check the `"1SPS"` signature, read the format class
///      identifier and pick the record layout from it.
///   3. **Records**: decode the record chain, each record through a
///      window limited to its declared size.
///   4. **Advance**: move to the next set by the declared set size.
///
/// The store also ends at the end of the buffer, or when fewer than 4
/// bytes remain after at least one set. Any structural problem aborts the
/// whole decode; there is no partial result.
///
/// # Example
///
/// ```rust
/// use sps_decoder::{DecoderConfig, StoreDecoder};
///
/// let store = StoreDecoder::new(DecoderConfig::default()).decode(&[]).unwrap();
/// assert_eq!(store.set_count(), 0);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct StoreDecoder {
    config: DecoderConfig,
}

impl StoreDecoder {
    #[must_use]
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode every set in `buf`.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::Wire`] if a field runs past the buffer or its
    ///   enclosing window, including a non-empty buffer shorter than one
    ///   size field.
    /// - [`DecodeError::InvalidSignature`] for an unknown set signature.
    /// - [`DecodeError::SizeMismatch`] for a set smaller than its header or a
    ///   record larger than what is left of its set.
    /// - [`DecodeError::UnsupportedValueType`] for an unknown value-type code.
    /// - [`DecodeError::ValueTooLarge`] for a payload above
    ///   [`DecoderConfig::max_value_size`].
    pub fn decode(&self, buf: &[u8]) -> Result<Store, DecodeError> {
        let mut cursor = ByteCursor::new(buf);
        let mut sets: Vec<Set> = Vec::new();

        while cursor.remaining() > 0 {
            if cursor.remaining() < 4 && !sets.is_empty() {
                tracing::debug!(
                    offset = cursor.offset(),
                    fragment = cursor.remaining(),
                    "ignoring trailing fragment"
                );
                break;
            }
            if cursor.peek_u32_le()? == 0 {
                tracing::trace!(offset = cursor.offset(), "store terminator");
                break;
            }
            sets.push(read_set(&mut cursor, &self.config)?);
        }

        tracing::debug!(sets = sets.len(), len = buf.len(), "decoded store");
        Ok(Store::new(sets, buf.len()))
    }

    /// Decode a buffer holding exactly one set, starting with its size
    /// field.
    ///
    /// # Errors
    ///
    /// The same structural errors as [`decode`](Self::decode). A zero size
    /// is a [`DecodeError::SizeMismatch`] here, since there is no store to
    /// terminate.
    pub fn decode_set(&self, buf: &[u8]) -> Result<Set, DecodeError> {
        read_set(&mut ByteCursor::new(buf), &self.config)
    }

    /// Decode a store from a random-access source, reading one set at a
    /// time instead of the whole input.
    ///
    /// # Errors
    ///
    /// The same structural errors as [`decode`](Self::decode), plus
    /// [`DecodeError::Wire`] wrapping any I/O failure from the source.
    pub fn decode_source<S: ByteSource + ?Sized>(&self, source: &mut S) -> Result<Store, DecodeError> {
        let len = source.len();
        let mut offset: u64 = 0;
        let mut sets: Vec<Set> = Vec::new();

        while offset < len {
            if len - offset < 4 && !sets.is_empty() {
                break;
            }
            let head = source.read(offset, 4)?;
            let size = u32::from_le_bytes([head[0], head[1], head[2], head[3]]);
            if size == 0 {
                break;
            }
            let base = usize::try_from(offset).unwrap_or(usize::MAX);
            if (size as usize) < SET_HEADER_SIZE {
                return Err(DecodeError::SizeMismatch {
                    offset: base,
                    declared: size,
                    available: usize::try_from(len - offset).unwrap_or(usize::MAX),
                });
            }
            let bytes = source.read(offset, size as usize)?;
            let mut cursor = ByteCursor::with_base(&bytes, base);
            sets.push(read_set(&mut cursor, &self.config)?);
            offset += u64::from(size);
        }

        Ok(Store::new(sets, usize::try_from(len).unwrap_or(usize::MAX)))
    }
}
