use std::fmt;

/// Recognized 4-byte set signatures.
///
/// The signature sits right after a set's size field and decides how the
/// rest of the set is laid out. An unrecognized signature stops decoding:
/// without it there is no way to know the record header shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Signature {
  /// ASCII `"1SPS"`: serialized property storage.
  SerializedPropertyStorage,
}

impl Signature {
  /// Length of a signature on the wire.
  pub const SIZE: usize = 4;

  /// Match raw signature bytes against the recognized set.
  #[must_use]
  pub fn from_bytes(bytes: [u8; 4]) -> Option<Self> {
    match &bytes {
      b"1SPS" => Some(Self::SerializedPropertyStorage),
      _ => None,
    }
  }

  /// The signature exactly as it appears on the wire.
  #[must_use]
  pub fn as_bytes(self) -> [u8; 4] {
    match self {
      Self::SerializedPropertyStorage => *b"1SPS",
    }
  }
}

impl fmt::Display for Signature {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::SerializedPropertyStorage => "1SPS",
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn recognizes_1sps() {
    assert_eq!(
      Signature::from_bytes(*b"1SPS"),
      Some(Signature::SerializedPropertyStorage)
    );
    assert_eq!(Signature::SerializedPropertyStorage.as_bytes(), *b"1SPS");
  }

  #[test]
  fn rejects_others() {
    assert_eq!(Signature::from_bytes(*b"SPS1"), None);
    assert_eq!(Signature::from_bytes([0; 4]), None);
  }
}
