/// Codepage used to interpret 8-bit (`VT_LPSTR`) string payloads.
///
/// UTF-16 strings are self-describing; 8-bit strings are not, so the
/// decoder stamps every record with the codepage it was configured with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Codepage {
  /// Windows-1252 (Western European). The common default for property
  /// stores written by Windows shell components.
  #[default]
  Windows1252,
  /// UTF-8 (codepage 65001).
  Utf8,
}

/// Windows-1252 code points for bytes 0x80..=0x9F. `None` marks the five
/// bytes the codepage leaves undefined.
const WINDOWS_1252_HIGH: [Option<char>; 32] = [
  Some('\u{20AC}'),
  None,
  Some('\u{201A}'),
  Some('\u{0192}'),
  Some('\u{201E}'),
  Some('\u{2026}'),
  Some('\u{2020}'),
  Some('\u{2021}'),
  Some('\u{02C6}'),
  Some('\u{2030}'),
  Some('\u{0160}'),
  Some('\u{2039}'),
  Some('\u{0152}'),
  None,
  Some('\u{017D}'),
  None,
  None,
  Some('\u{2018}'),
  Some('\u{2019}'),
  Some('\u{201C}'),
  Some('\u{201D}'),
  Some('\u{2022}'),
  Some('\u{2013}'),
  Some('\u{2014}'),
  Some('\u{02DC}'),
  Some('\u{2122}'),
  Some('\u{0161}'),
  Some('\u{203A}'),
  Some('\u{0153}'),
  None,
  Some('\u{017E}'),
  Some('\u{0178}'),
];

impl Codepage {
  /// Look up a codepage by its Windows numeric identifier.
  #[must_use]
  pub fn from_id(id: u32) -> Option<Self> {
    match id {
      1252 => Some(Self::Windows1252),
      65001 => Some(Self::Utf8),
      _ => None,
    }
  }

  /// Windows numeric identifier.
  #[must_use]
  pub fn id(self) -> u32 {
    match self {
      Self::Windows1252 => 1252,
      Self::Utf8 => 65001,
    }
  }

  /// Decode `bytes` in this codepage. Returns `None` if any byte sequence
  /// has no mapping.
  #[must_use]
  pub fn decode(self, bytes: &[u8]) -> Option<String> {
    match self {
      Self::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_owned),
      Self::Windows1252 => bytes
        .iter()
        .map(|&b| match b {
          0x80..=0x9F => WINDOWS_1252_HIGH[usize::from(b - 0x80)],
          _ => Some(char::from(b)),
        })
        .collect(),
    }
  }
}
