//! Typed interpretation of record payloads.
//!
//! Every accessor re-reads [`Record::data`] on each call; nothing is
//! cached. A request that does not fit the record's declared value type
//! fails with [`TypeError::TypeMismatch`] and leaves the record untouched.
//!
//! ```text
//! ┌──────────────┬──────────────────────────────────────────────┐
//! │ Accessor     │ Value types                                   │
//! ├──────────────┼──────────────────────────────────────────────┤
//! │ as_bool      │ VT_BOOL                                       │
//! │ as_i64       │ VT_I1, VT_I2, VT_I4, VT_I8, VT_CY             │
//! │ as_u64       │ VT_UI1, VT_UI2, VT_UI4, VT_UI8, VT_ERROR      │
//! │ as_f64       │ VT_R4, VT_R8                                  │
//! │ as_string    │ VT_LPWSTR, VT_LPSTR, VT_BSTR                  │
//! │ as_filetime  │ VT_FILETIME                                   │
//! │ as_guid      │ VT_CLSID                                      │
//! │ as_bytes     │ any                                           │
//! └──────────────┴──────────────────────────────────────────────┘
//! ```

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use sps_wire::Guid;

use crate::error::TypeError;
use crate::record::Record;
use crate::value_type::ValueType;

/// Seconds between 1601-01-01 and 1970-01-01.
const FILETIME_UNIX_EPOCH_SECS: i64 = 11_644_473_600;
const FILETIME_TICKS_PER_SECOND: u64 = 10_000_000;

/// A FILETIME: 100-nanosecond ticks since 1601-01-01 00:00:00 UTC.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Filetime(pub u64);

impl Filetime {
  #[must_use]
  pub fn ticks(self) -> u64 {
    self.0
  }

  /// Convert to a UTC timestamp. `None` if chrono cannot represent it.
  #[must_use]
  pub fn to_datetime(self) -> Option<DateTime<Utc>> {
    let secs = i64::try_from(self.0 / FILETIME_TICKS_PER_SECOND).ok()? - FILETIME_UNIX_EPOCH_SECS;
    let nanos = u32::try_from(self.0 % FILETIME_TICKS_PER_SECOND).ok()? * 100;
    DateTime::from_timestamp(secs, nanos)
  }
}

impl fmt::Display for Filetime {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.to_datetime() {
      Some(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
      None => write!(f, "{:#018x}", self.0),
    }
  }
}

impl Record {
  /// # Errors
  ///
  /// [`TypeError::TypeMismatch`] unless the value type is `VT_BOOL`.
  pub fn as_bool(&self) -> Result<bool, TypeError> {
    match self.value_type() {
      ValueType::Boolean => {
        let [byte] = self.fixed::<1>()?;
        Ok(byte != 0)
      }
      other => Err(mismatch("bool", other)),
    }
  }

  /// Signed integers (sign-extended) and currency (raw scaled value).
  ///
  /// # Errors
  ///
  /// [`TypeError::TypeMismatch`] for any non-signed-integer value type.
  pub fn as_i64(&self) -> Result<i64, TypeError> {
    match self.value_type() {
      ValueType::Int8 => Ok(i64::from(i8::from_le_bytes(self.fixed()?))),
      ValueType::Int16 => Ok(i64::from(i16::from_le_bytes(self.fixed()?))),
      ValueType::Int32 => Ok(i64::from(i32::from_le_bytes(self.fixed()?))),
      ValueType::Int64 | ValueType::Currency => Ok(i64::from_le_bytes(self.fixed()?)),
      other => Err(mismatch("i64", other)),
    }
  }

  /// Unsigned integers and `VT_ERROR` status codes.
  ///
  /// # Errors
  ///
  /// [`TypeError::TypeMismatch`] for any non-unsigned-integer value type.
  pub fn as_u64(&self) -> Result<u64, TypeError> {
    match self.value_type() {
      ValueType::UInt8 => Ok(u64::from(self.fixed::<1>()?[0])),
      ValueType::UInt16 => Ok(u64::from(u16::from_le_bytes(self.fixed()?))),
      ValueType::UInt32 | ValueType::Error => Ok(u64::from(u32::from_le_bytes(self.fixed()?))),
      ValueType::UInt64 => Ok(u64::from_le_bytes(self.fixed()?)),
      other => Err(mismatch("u64", other)),
    }
  }

  /// # Errors
  ///
  /// [`TypeError::TypeMismatch`] unless the value type is `VT_R4` or `VT_R8`.
  pub fn as_f64(&self) -> Result<f64, TypeError> {
    match self.value_type() {
      ValueType::Float32 => Ok(f64::from(f32::from_le_bytes(self.fixed()?))),
      ValueType::Float64 => Ok(f64::from_le_bytes(self.fixed()?)),
      other => Err(mismatch("f64", other)),
    }
  }

  /// Text up to the first NUL. UTF-16 strings decode as UTF-16LE; 8-bit
  /// strings use the record's codepage.
  ///
  /// # Errors
  ///
  /// [`TypeError::TypeMismatch`] for non-string value types,
  /// [`TypeError::InvalidText`] if the payload does not decode.
  pub fn as_string(&self) -> Result<String, TypeError> {
    let value_type = self.value_type();
    let invalid = TypeError::InvalidText { value_type };
    match value_type {
      ValueType::UnicodeString => {
        let data = self.data();
        if data.len() % 2 != 0 {
          return Err(invalid);
        }
        let units = data
          .chunks_exact(2)
          .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
          .take_while(|&unit| unit != 0);
        char::decode_utf16(units)
          .collect::<Result<String, _>>()
          .map_err(|_| invalid)
      }
      ValueType::AsciiString | ValueType::BinaryString => {
        let data = self.data();
        let end = data.iter().position(|&b| b == 0).unwrap_or(data.len());
        self.codepage().decode(&data[..end]).ok_or(invalid)
      }
      other => Err(mismatch("string", other)),
    }
  }

  /// # Errors
  ///
  /// [`TypeError::TypeMismatch`] unless the value type is `VT_FILETIME`.
  pub fn as_filetime(&self) -> Result<Filetime, TypeError> {
    match self.value_type() {
      ValueType::Filetime => Ok(Filetime(u64::from_le_bytes(self.fixed()?))),
      other => Err(mismatch("filetime", other)),
    }
  }

  /// # Errors
  ///
  /// [`TypeError::TypeMismatch`] unless the value type is `VT_CLSID`.
  pub fn as_guid(&self) -> Result<Guid, TypeError> {
    match self.value_type() {
      ValueType::Guid => Ok(Guid::from_bytes(self.fixed()?)),
      other => Err(mismatch("guid", other)),
    }
  }

  /// The raw payload. Works for every value type.
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    self.data()
  }

  /// Human-readable rendering for diagnostics. Never fails: whatever
  /// cannot be interpreted is shown as hex.
  #[must_use]
  pub fn display_value(&self) -> String {
    let rendered = match self.value_type() {
      ValueType::Empty => Some("<empty>".to_owned()),
      ValueType::Null => Some("<null>".to_owned()),
      ValueType::Boolean => self.as_bool().ok().map(|b| b.to_string()),
      ValueType::Currency => self.as_i64().ok().map(format_currency),
      ValueType::Int8 | ValueType::Int16 | ValueType::Int32 | ValueType::Int64 => {
        self.as_i64().ok().map(|v| v.to_string())
      }
      ValueType::Error => self.as_u64().ok().map(|v| format!("{v:#010X}")),
      ValueType::UInt8 | ValueType::UInt16 | ValueType::UInt32 | ValueType::UInt64 => {
        self.as_u64().ok().map(|v| v.to_string())
      }
      ValueType::Float32 | ValueType::Float64 => self.as_f64().ok().map(|v| v.to_string()),
      ValueType::UnicodeString | ValueType::AsciiString | ValueType::BinaryString => {
        self.as_string().ok()
      }
      ValueType::Filetime => self.as_filetime().ok().map(|ft| ft.to_string()),
      ValueType::Guid => self.as_guid().ok().map(|g| g.to_string()),
      ValueType::Decimal | ValueType::BinaryData => None,
    };
    rendered.unwrap_or_else(|| hex::encode(self.data()))
  }

  fn fixed<const N: usize>(&self) -> Result<[u8; N], TypeError> {
    self
      .data()
      .try_into()
      .map_err(|_| TypeError::InvalidDataSize {
        value_type: self.value_type(),
        expected: N,
        actual: self.data().len(),
      })
  }
}

fn mismatch(requested: &'static str, found: ValueType) -> TypeError {
  TypeError::TypeMismatch { requested, found }
}

fn format_currency(value: i64) -> String {
  let sign = if value < 0 { "-" } else { "" };
  let abs = value.unsigned_abs();
  format!("{sign}{}.{:04}", abs / 10_000, abs % 10_000)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{Codepage, RecordKey};

  fn record(value_type: ValueType, data: &[u8]) -> Record {
    Record::new(
      0,
      RecordKey::Numeric(1),
      value_type,
      data.to_vec(),
      Codepage::default(),
    )
  }

  fn utf16(text: &str) -> Vec<u8> {
    text
      .encode_utf16()
      .chain(std::iter::once(0))
      .flat_map(u16::to_le_bytes)
      .collect()
  }

  #[test]
  fn bool_is_nonzero() {
    assert_eq!(record(ValueType::Boolean, &[0]).as_bool(), Ok(false));
    assert_eq!(record(ValueType::Boolean, &[0xFF]).as_bool(), Ok(true));
  }

  #[test]
  fn signed_values_sign_extend() {
    assert_eq!(record(ValueType::Int8, &[0xFF]).as_i64(), Ok(-1));
    assert_eq!(record(ValueType::Int16, &[0x00, 0x80]).as_i64(), Ok(-32768));
    assert_eq!(
      record(ValueType::Int32, &7i32.to_le_bytes()).as_i64(),
      Ok(7)
    );
  }

  #[test]
  fn unsigned_values() {
    assert_eq!(record(ValueType::UInt8, &[0xFF]).as_u64(), Ok(255));
    assert_eq!(
      record(ValueType::UInt32, &0xDEAD_BEEFu32.to_le_bytes()).as_u64(),
      Ok(0xDEAD_BEEF)
    );
    assert!(record(ValueType::UInt32, &[0; 4]).as_i64().is_err());
  }

  #[test]
  fn floats_widen() {
    assert_eq!(
      record(ValueType::Float32, &1.5f32.to_le_bytes()).as_f64(),
      Ok(1.5)
    );
    assert_eq!(
      record(ValueType::Float64, &(-0.25f64).to_le_bytes()).as_f64(),
      Ok(-0.25)
    );
  }

  #[test]
  fn utf16_stops_at_nul() {
    let mut data = utf16("abc");
    data.extend_from_slice(&[b'x', 0]);
    assert_eq!(
      record(ValueType::UnicodeString, &data).as_string().as_deref(),
      Ok("abc")
    );
  }

  #[test]
  fn unpaired_surrogate_is_invalid_text() {
    let rec = record(ValueType::UnicodeString, &[0x00, 0xD8, 0x41, 0x00]);
    assert_eq!(
      rec.as_string(),
      Err(TypeError::InvalidText {
        value_type: ValueType::UnicodeString
      })
    );
    assert_eq!(rec.display_value(), "00d84100");
  }

  #[test]
  fn ascii_uses_codepage() {
    let latin = record(ValueType::AsciiString, &[b'c', b'a', b'f', 0xE9, 0]);
    assert_eq!(latin.as_string().as_deref(), Ok("café"));

    let utf8 = Record::new(
      0,
      RecordKey::Numeric(1),
      ValueType::AsciiString,
      "café\0".as_bytes().to_vec(),
      Codepage::Utf8,
    );
    assert_eq!(utf8.as_string().as_deref(), Ok("café"));
  }

  #[test]
  fn mismatch_names_both_sides() {
    let err = record(ValueType::UnicodeString, &utf16("x"))
      .as_bool()
      .unwrap_err();
    assert_eq!(
      err,
      TypeError::TypeMismatch {
        requested: "bool",
        found: ValueType::UnicodeString
      }
    );
    assert_eq!(err.to_string(), "cannot read VT_LPWSTR (0x001F) value as bool");
  }

  #[test]
  fn wrong_width_is_reported() {
    assert_eq!(
      record(ValueType::Int32, &[1, 2]).as_i64(),
      Err(TypeError::InvalidDataSize {
        value_type: ValueType::Int32,
        expected: 4,
        actual: 2
      })
    );
  }

  #[test]
  fn filetime_converts_to_utc() {
    // 2009-07-25 23:00:00 UTC
    let ticks: u64 = 128_930_364_000_000_000;
    let rec = record(ValueType::Filetime, &ticks.to_le_bytes());
    let ft = rec.as_filetime().unwrap();
    assert_eq!(ft.ticks(), ticks);
    assert_eq!(rec.display_value(), "2009-07-25T23:00:00Z");
    assert_eq!(Filetime(0).to_string(), "1601-01-01T00:00:00Z");
  }

  #[test]
  fn guid_value() {
    let id = Guid::from_fields(0x0011_2233, 0x4455, 0x6677, [8, 9, 10, 11, 12, 13, 14, 15]);
    let rec = record(ValueType::Guid, id.as_bytes());
    assert_eq!(rec.as_guid(), Ok(id));
  }

  #[test]
  fn display_renders_each_kind() {
    assert_eq!(record(ValueType::Empty, &[]).display_value(), "<empty>");
    assert_eq!(record(ValueType::Null, &[]).display_value(), "<null>");
    assert_eq!(
      record(ValueType::Error, &0x8000_4005u32.to_le_bytes()).display_value(),
      "0x80004005"
    );
    assert_eq!(
      record(ValueType::Currency, &(-12_345i64).to_le_bytes()).display_value(),
      "-1.2345"
    );
    assert_eq!(
      record(ValueType::BinaryData, &[0xCA, 0xFE]).display_value(),
      "cafe"
    );
    assert_eq!(record(ValueType::Boolean, &[1]).display_value(), "true");
  }

  #[test]
  fn as_bytes_never_fails() {
    let rec = record(ValueType::Decimal, &[7; 16]);
    assert_eq!(rec.as_bytes(), &[7; 16]);
  }
}
