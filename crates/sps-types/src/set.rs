use sps_wire::Guid;

use crate::error::LookupError;
use crate::format_class::{FormatClass, RecordLayout};
use crate::record::Record;
use crate::signature::Signature;

/// A decoded property set: one signature, one format class identifier and
/// the chain of records that followed it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Set {
  size: u32,
  signature: Signature,
  identifier: Guid,
  records: Vec<Record>,
  trailing_bytes: usize,
}

impl Set {
  #[must_use]
  pub fn new(
    size: u32,
    signature: Signature,
    identifier: Guid,
    records: Vec<Record>,
    trailing_bytes: usize,
  ) -> Self {
    Self {
      size,
      signature,
      identifier,
      records,
      trailing_bytes,
    }
  }

  /// Declared set length in bytes, including the size field itself.
  #[must_use]
  pub fn size(&self) -> u32 {
    self.size
  }

  #[must_use]
  pub fn signature(&self) -> Signature {
    self.signature
  }

  /// Format class identifier.
  #[must_use]
  pub fn identifier(&self) -> Guid {
    self.identifier
  }

  /// Well-known format class, if the identifier is one.
  #[must_use]
  pub fn format_class(&self) -> Option<FormatClass> {
    FormatClass::from_identifier(&self.identifier)
  }

  #[must_use]
  pub fn layout(&self) -> RecordLayout {
    RecordLayout::for_identifier(&self.identifier)
  }

  #[must_use]
  pub fn record_count(&self) -> usize {
    self.records.len()
  }

  #[must_use]
  pub fn record(&self, index: usize) -> Option<&Record> {
    self.records.get(index)
  }

  /// Like [`record`](Self::record), reporting the valid range on failure.
  ///
  /// # Errors
  ///
  /// [`LookupError::IndexOutOfRange`] if `index >= record_count()`.
  pub fn try_record(&self, index: usize) -> Result<&Record, LookupError> {
    self.records.get(index).ok_or(LookupError::IndexOutOfRange {
      kind: "record",
      index,
      count: self.records.len(),
    })
  }

  #[must_use]
  pub fn records(&self) -> &[Record] {
    &self.records
  }

  /// Bytes inside the declared size that came after the record chain and
  /// were skipped unparsed.
  #[must_use]
  pub fn trailing_bytes(&self) -> usize {
    self.trailing_bytes
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{Codepage, RecordKey, ValueType};

  fn sample() -> Set {
    let record = Record::new(
      13,
      RecordKey::Numeric(2),
      ValueType::Empty,
      Vec::new(),
      Codepage::default(),
    );
    Set::new(
      41,
      Signature::SerializedPropertyStorage,
      FormatClass::SummaryInformation.identifier(),
      vec![record],
      0,
    )
  }

  #[test]
  fn record_lookup() {
    let set = sample();
    assert_eq!(set.record_count(), 1);
    assert!(set.record(0).is_some());
    assert!(set.record(1).is_none());
    assert_eq!(
      set.try_record(3),
      Err(LookupError::IndexOutOfRange {
        kind: "record",
        index: 3,
        count: 1
      })
    );
  }

  #[test]
  fn format_class_and_layout() {
    let set = sample();
    assert_eq!(set.format_class(), Some(FormatClass::SummaryInformation));
    assert_eq!(set.layout(), RecordLayout::Numeric);
  }
}
