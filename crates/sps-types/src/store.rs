use crate::error::LookupError;
use crate::set::Set;

/// A fully decoded property store: every set, in source order.
///
/// Built once by the decoder and never modified afterwards, so it can be
/// shared freely across threads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Store {
  sets: Vec<Set>,
  source_len: usize,
}

impl Store {
  #[must_use]
  pub fn new(sets: Vec<Set>, source_len: usize) -> Self {
    Self { sets, source_len }
  }

  #[must_use]
  pub fn set_count(&self) -> usize {
    self.sets.len()
  }

  #[must_use]
  pub fn set(&self, index: usize) -> Option<&Set> {
    self.sets.get(index)
  }

  /// # Errors
  ///
  /// [`LookupError::IndexOutOfRange`] if `index >= set_count()`.
  pub fn try_set(&self, index: usize) -> Result<&Set, LookupError> {
    self.sets.get(index).ok_or(LookupError::IndexOutOfRange {
      kind: "set",
      index,
      count: self.sets.len(),
    })
  }

  #[must_use]
  pub fn sets(&self) -> &[Set] {
    &self.sets
  }

  /// Byte length of the buffer the store was decoded from.
  #[must_use]
  pub fn source_len(&self) -> usize {
    self.source_len
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.sets.is_empty()
  }
}
