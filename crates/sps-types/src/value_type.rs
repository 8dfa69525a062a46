use std::fmt;

use crate::error::TypeError;

/// How many payload bytes follow a record's value-type field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueEncoding {
  /// A fixed number of bytes, no length prefix (0 for empty/null).
  Fixed(usize),
  /// A `u32` byte count, then that many bytes.
  ByteCounted,
  /// A `u32` count of UTF-16 code units, then `count * 2` bytes.
  Utf16Counted,
}

// ── Macro for value-type boilerplate ──────────────────────────────────
//
// Each variant carries its 16-bit wire code, its payload encoding, and
// the conventional VT_* label used in diagnostics. The macro generates
// the lookup and reverse-lookup tables from that single list.

macro_rules! value_types {
  (
    $(#[$meta:meta])*
    pub enum $name:ident {
      $( $(#[$vmeta:meta])* $variant:ident = ($wire:literal, $encoding:expr, $label:literal) ),+ $(,)?
    }
  ) => {
    $(#[$meta])*
    pub enum $name {
      $( $(#[$vmeta])* $variant ),+
    }

    impl $name {
      /// Every supported value type, in wire-code order.
      pub const ALL: &'static [Self] = &[ $( Self::$variant ),+ ];

      /// The 16-bit code written on the wire.
      #[must_use]
      pub fn wire_id(self) -> u16 {
        match self {
          $( Self::$variant => $wire ),+
        }
      }

      /// Map a wire code to a value type.
      ///
      /// # Errors
      ///
      /// Returns [`TypeError::UnknownValueType`] for codes outside the
      /// supported set (including vector and array flag combinations).
      pub fn from_wire_id(value: u16) -> Result<Self, TypeError> {
        match value {
          $( $wire => Ok(Self::$variant), )+
          other => Err(TypeError::UnknownValueType { value: other }),
        }
      }

      /// Payload layout that follows the value-type field.
      #[must_use]
      pub fn encoding(self) -> ValueEncoding {
        match self {
          $( Self::$variant => $encoding ),+
        }
      }

      /// Conventional `VT_*` name.
      #[must_use]
      pub fn label(self) -> &'static str {
        match self {
          $( Self::$variant => $label ),+
        }
      }
    }
  };
}

value_types! {
  /// Value-type codes a record can declare.
  ///
  /// ```text
  /// ┌────────┬─────────────┬────────────────┐
  /// │ Wire   │ Label       │ Payload        │
  /// ├────────┼─────────────┼────────────────┤
  /// │ 0x0000 │ VT_EMPTY    │ none           │
  /// │ 0x0001 │ VT_NULL     │ none           │
  /// │ 0x0002 │ VT_I2       │ 2 bytes        │
  /// │ 0x0003 │ VT_I4       │ 4 bytes        │
  /// │ 0x0004 │ VT_R4       │ 4 bytes        │
  /// │ 0x0005 │ VT_R8       │ 8 bytes        │
  /// │ 0x0006 │ VT_CY       │ 8 bytes        │
  /// │ 0x0008 │ VT_BSTR     │ u32 + bytes    │
  /// │ 0x000A │ VT_ERROR    │ 4 bytes        │
  /// │ 0x000B │ VT_BOOL     │ 1 byte         │
  /// │ 0x000E │ VT_DECIMAL  │ 16 bytes       │
  /// │ 0x0010 │ VT_I1       │ 1 byte         │
  /// │ 0x0011 │ VT_UI1      │ 1 byte         │
  /// │ 0x0012 │ VT_UI2      │ 2 bytes        │
  /// │ 0x0013 │ VT_UI4      │ 4 bytes        │
  /// │ 0x0014 │ VT_I8       │ 8 bytes        │
  /// │ 0x0015 │ VT_UI8      │ 8 bytes        │
  /// │ 0x001E │ VT_LPSTR    │ u32 + bytes    │
  /// │ 0x001F │ VT_LPWSTR   │ u32 + 2*chars  │
  /// │ 0x0040 │ VT_FILETIME │ 8 bytes        │
  /// │ 0x0041 │ VT_BLOB     │ u32 + bytes    │
  /// │ 0x0048 │ VT_CLSID    │ 16 bytes       │
  /// └────────┴─────────────┴────────────────┘
  /// ```
  #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
  pub enum ValueType {
    Empty = (0x0000, ValueEncoding::Fixed(0), "VT_EMPTY"),
    Null = (0x0001, ValueEncoding::Fixed(0), "VT_NULL"),
    Int16 = (0x0002, ValueEncoding::Fixed(2), "VT_I2"),
    Int32 = (0x0003, ValueEncoding::Fixed(4), "VT_I4"),
    Float32 = (0x0004, ValueEncoding::Fixed(4), "VT_R4"),
    Float64 = (0x0005, ValueEncoding::Fixed(8), "VT_R8"),
    /// Signed 64-bit fixed point, scaled by 10 000.
    Currency = (0x0006, ValueEncoding::Fixed(8), "VT_CY"),
    BinaryString = (0x0008, ValueEncoding::ByteCounted, "VT_BSTR"),
    /// 32-bit HRESULT-style status code.
    Error = (0x000A, ValueEncoding::Fixed(4), "VT_ERROR"),
    Boolean = (0x000B, ValueEncoding::Fixed(1), "VT_BOOL"),
    Decimal = (0x000E, ValueEncoding::Fixed(16), "VT_DECIMAL"),
    Int8 = (0x0010, ValueEncoding::Fixed(1), "VT_I1"),
    UInt8 = (0x0011, ValueEncoding::Fixed(1), "VT_UI1"),
    UInt16 = (0x0012, ValueEncoding::Fixed(2), "VT_UI2"),
    UInt32 = (0x0013, ValueEncoding::Fixed(4), "VT_UI4"),
    Int64 = (0x0014, ValueEncoding::Fixed(8), "VT_I8"),
    UInt64 = (0x0015, ValueEncoding::Fixed(8), "VT_UI8"),
    /// 8-bit string in the store's codepage.
    AsciiString = (0x001E, ValueEncoding::ByteCounted, "VT_LPSTR"),
    /// UTF-16 little-endian string.
    UnicodeString = (0x001F, ValueEncoding::Utf16Counted, "VT_LPWSTR"),
    Filetime = (0x0040, ValueEncoding::Fixed(8), "VT_FILETIME"),
    BinaryData = (0x0041, ValueEncoding::ByteCounted, "VT_BLOB"),
    Guid = (0x0048, ValueEncoding::Fixed(16), "VT_CLSID"),
  }
}

impl fmt::Display for ValueType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} ({:#06X})", self.label(), self.wire_id())
  }
}
