use crate::codepage::Codepage;
use crate::value_type::ValueType;

/// How a record is keyed inside its set.
///
/// The set's format class decides which one applies to all of its
/// records; a single set never mixes the two.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RecordKey {
  /// Integer property identifier (the "entry type").
  Numeric(u32),
  /// Property name, decoded from UTF-16 with its terminator stripped.
  Named(String),
}

/// One decoded property: key, declared value type and raw payload.
///
/// The payload is stored exactly as read. Interpretation lives in the
/// accessor methods (`as_bool`, `as_i64`, `as_string`, ...) which runs on
/// every call, so a record that fails one interpretation is still fine for
/// another.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
  size: u32,
  key: RecordKey,
  value_type: ValueType,
  data: Vec<u8>,
  codepage: Codepage,
}

impl Record {
  #[must_use]
  pub fn new(
    size: u32,
    key: RecordKey,
    value_type: ValueType,
    data: Vec<u8>,
    codepage: Codepage,
  ) -> Self {
    Self {
      size,
      key,
      value_type,
      data,
      codepage,
    }
  }

  /// Declared record length in bytes, including the size field itself.
  #[must_use]
  pub fn size(&self) -> u32 {
    self.size
  }

  #[must_use]
  pub fn key(&self) -> &RecordKey {
    &self.key
  }

  /// Integer key, or `None` for a name-keyed record.
  #[must_use]
  pub fn entry_type(&self) -> Option<u32> {
    match self.key {
      RecordKey::Numeric(entry_type) => Some(entry_type),
      RecordKey::Named(_) => None,
    }
  }

  /// Name key, or `None` for an integer-keyed record.
  #[must_use]
  pub fn entry_name(&self) -> Option<&str> {
    match &self.key {
      RecordKey::Named(name) => Some(name),
      RecordKey::Numeric(_) => None,
    }
  }

  #[must_use]
  pub fn value_type(&self) -> ValueType {
    self.value_type
  }

  /// Raw payload bytes, excluding any length prefix.
  #[must_use]
  pub fn data(&self) -> &[u8] {
    &self.data
  }

  /// Codepage used for 8-bit string payloads.
  #[must_use]
  pub fn codepage(&self) -> Codepage {
    self.codepage
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn keys_are_exclusive() {
    let numeric = Record::new(
      13,
      RecordKey::Numeric(4),
      ValueType::Empty,
      Vec::new(),
      Codepage::default(),
    );
    assert_eq!(numeric.entry_type(), Some(4));
    assert_eq!(numeric.entry_name(), None);

    let named = Record::new(
      20,
      RecordKey::Named("Owner".into()),
      ValueType::Empty,
      Vec::new(),
      Codepage::default(),
    );
    assert_eq!(named.entry_type(), None);
    assert_eq!(named.entry_name(), Some("Owner"));
  }
}
