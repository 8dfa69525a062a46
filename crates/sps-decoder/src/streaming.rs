use sps_types::Set;
use sps_wire::{ByteCursor, WireError};
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::config::DecoderConfig;
use crate::error::DecodeError;
use crate::set::{SET_HEADER_SIZE, read_set};

/// Asynchronous decoder that yields one [`Set`] at a time from an
/// `AsyncRead` source.
///
/// Only the set currently being decoded is buffered. Each call to
/// [`next`](Self::next) reads one size field, then exactly that many
/// bytes, and decodes them with the same rules as
/// [`StoreDecoder`](crate::StoreDecoder). Reported offsets are absolute
/// positions in the stream.
///
/// # Example
///
/// ```rust,no_run
/// use sps_decoder::StreamingDecoder;
/// use tokio::io::AsyncRead;
///
/// async fn count_sets(reader: impl AsyncRead + Unpin) -> usize {
///   let mut stream = StreamingDecoder::new(reader);
///   let mut count = 0;
///   while let Some(set) = stream.next().await {
///     set.unwrap();
///     count += 1;
///   }
///   count
/// }
/// ```
pub struct StreamingDecoder<R> {
  reader: R,
  config: DecoderConfig,
  state: StreamState,
  /// Absolute offset of the next unread byte.
  offset: u64,
  sets_read: usize,
  /// Reused across sets.
  buf: Vec<u8>,
}

/// ```text
///   ReadSets → Done
/// ```
///
/// `Done` is entered at end of stream, at the zero terminator, or after
/// the first error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StreamState {
  ReadSets,
  Done,
}

impl<R: AsyncRead + Unpin> StreamingDecoder<R> {
  #[must_use]
  pub fn new(reader: R) -> Self {
    Self::with_config(reader, DecoderConfig::default())
  }

  #[must_use]
  pub fn with_config(reader: R, config: DecoderConfig) -> Self {
    Self {
      reader,
      config,
      state: StreamState::ReadSets,
      offset: 0,
      sets_read: 0,
      buf: Vec::with_capacity(4096),
    }
  }

  /// Read the next set.
  ///
  /// Returns `Some(Ok(set))` per decoded set, `None` once the store has
  /// ended, and `Some(Err(_))` at most once, after which the stream is
  /// finished.
  pub async fn next(&mut self) -> Option<Result<Set, DecodeError>> {
    match self.state {
      StreamState::ReadSets => match self.read_next_set().await {
        Ok(Some(set)) => {
          self.sets_read += 1;
          Some(Ok(set))
        }
        Ok(None) => {
          self.state = StreamState::Done;
          None
        }
        Err(e) => {
          self.state = StreamState::Done;
          Some(Err(e))
        }
      },
      StreamState::Done => None,
    }
  }

  /// Number of sets yielded so far.
  #[must_use]
  pub fn sets_read(&self) -> usize {
    self.sets_read
  }

  pub fn into_inner(self) -> R {
    self.reader
  }

  async fn read_next_set(&mut self) -> Result<Option<Set>, DecodeError> {
    let base = usize::try_from(self.offset).unwrap_or(usize::MAX);

    self.buf.clear();
    let got = self.fill(4).await?;
    if got == 0 {
      return Ok(None);
    }
    if got < 4 {
      if self.sets_read > 0 {
        tracing::debug!(offset = base, fragment = got, "ignoring trailing fragment");
        return Ok(None);
      }
      return Err(out_of_data(base, 4, got));
    }

    let size = u32::from_le_bytes([self.buf[0], self.buf[1], self.buf[2], self.buf[3]]);
    if size == 0 {
      return Ok(None);
    }
    if (size as usize) < SET_HEADER_SIZE {
      return Err(DecodeError::SizeMismatch {
        offset: base,
        declared: size,
        available: 4,
      });
    }

    let rest = size as usize - 4;
    let got = self.fill(rest).await?;
    if got < rest {
      return Err(out_of_data(base, size as usize, got + 4));
    }

    let mut cursor = ByteCursor::with_base(&self.buf, base);
    let set = read_set(&mut cursor, &self.config)?;
    self.offset += u64::from(size);
    Ok(Some(set))
  }

  /// Append up to `n` bytes from the reader to `buf`, stopping early only
  /// at end of stream. Returns the number of bytes appended.
  ///
  /// The buffer grows with the data actually received, so a huge declared
  /// size on a short stream allocates only what arrives.
  async fn fill(&mut self, n: usize) -> Result<usize, DecodeError> {
    let got = (&mut self.reader)
      .take(n as u64)
      .read_to_end(&mut self.buf)
      .await?;
    Ok(got)
  }
}

fn out_of_data(offset: usize, requested: usize, remaining: usize) -> DecodeError {
  DecodeError::Wire(WireError::OutOfData {
    offset,
    requested,
    remaining,
  })
}
