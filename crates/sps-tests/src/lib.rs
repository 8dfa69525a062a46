//! Test fixtures for the SPS workspace.
//!
//! The decoder has no encoder counterpart, so the integration tests,
//! benchmarks and golden generator build their input bytes here.
//!
//! ```text
//! StoreBuilder
//!   ├── SetBuilder (identifier, records, trailing bytes)
//!   ├── SetBuilder ...
//!   └── 4-byte terminator (optional)
//! ```
//!
//! Builders write exactly the on-disk layout: a `u32` set size, the
//! `1SPS` signature, the 16-byte format identifier, the record chain and
//! a zero `u32` sentinel.

#![allow(clippy::pedantic)]

use sps_types::{FormatClass, Guid, ValueType};

/// Identifier of the set in [`REFERENCE_STORE`].
pub const REFERENCE_IDENTIFIER: Guid = Guid::from_fields(
    0x4658_8AE2,
    0x4CBC,
    0x4338,
    [0xBB, 0xFC, 0x13, 0x93, 0x26, 0x98, 0x6D, 0xCE],
);

/// The string stored in [`REFERENCE_STORE`]'s only record.
pub const REFERENCE_SID: &str = "S-1-5-21-4060289323-199701022-3924801681-1000";

/// A single-set store holding one `VT_LPWSTR` record (entry type 4),
/// followed by the set sentinel and the store terminator.
pub const REFERENCE_STORE: [u8; 141] = [
    0x89, 0x00, 0x00, 0x00, 0x31, 0x53, 0x50, 0x53, 0xe2, 0x8a, 0x58, 0x46,
    0xbc, 0x4c, 0x38, 0x43, 0xbb, 0xfc, 0x13, 0x93, 0x26, 0x98, 0x6d, 0xce,
    0x6d, 0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x00, 0x1f, 0x00, 0x00,
    0x00, 0x2e, 0x00, 0x00, 0x00, 0x53, 0x00, 0x2d, 0x00, 0x31, 0x00, 0x2d,
    0x00, 0x35, 0x00, 0x2d, 0x00, 0x32, 0x00, 0x31, 0x00, 0x2d, 0x00, 0x34,
    0x00, 0x30, 0x00, 0x36, 0x00, 0x30, 0x00, 0x32, 0x00, 0x38, 0x00, 0x39,
    0x00, 0x33, 0x00, 0x32, 0x00, 0x33, 0x00, 0x2d, 0x00, 0x31, 0x00, 0x39,
    0x00, 0x39, 0x00, 0x37, 0x00, 0x30, 0x00, 0x31, 0x00, 0x30, 0x00, 0x32,
    0x00, 0x32, 0x00, 0x2d, 0x00, 0x33, 0x00, 0x39, 0x00, 0x32, 0x00, 0x34,
    0x00, 0x38, 0x00, 0x30, 0x00, 0x31, 0x00, 0x36, 0x00, 0x38, 0x00, 0x31,
    0x00, 0x2d, 0x00, 0x31, 0x00, 0x30, 0x00, 0x30, 0x00, 0x30, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// FILETIME ticks for 2009-07-25T23:00:00Z.
pub const SAMPLE_FILETIME: u64 = 128_930_364_000_000_000;

// ── Value payloads ──────────────────────────────────────────────────────

/// `VT_LPWSTR` payload: code-unit count (terminator included), then
/// UTF-16LE text and a NUL unit.
pub fn lpwstr(text: &str) -> Vec<u8> {
    let units: Vec<u16> = text.encode_utf16().chain(std::iter::once(0)).collect();
    let mut out = (units.len() as u32).to_le_bytes().to_vec();
    for unit in units {
        out.extend_from_slice(&unit.to_le_bytes());
    }
    out
}

/// Byte-counted payload (`VT_LPSTR`, `VT_BSTR`, `VT_BLOB`): `u32` length
/// then the bytes as given.
pub fn counted(bytes: &[u8]) -> Vec<u8> {
    let mut out = (bytes.len() as u32).to_le_bytes().to_vec();
    out.extend_from_slice(bytes);
    out
}

fn utf16z(text: &str) -> Vec<u8> {
    text.encode_utf16()
        .chain(std::iter::once(0))
        .flat_map(u16::to_le_bytes)
        .collect()
}

// ── Set builder ─────────────────────────────────────────────────────────

/// Builds one serialized set.
#[derive(Clone, Debug)]
pub struct SetBuilder {
    signature: [u8; 4],
    identifier: Guid,
    records: Vec<u8>,
    sentinel: bool,
    trailing: Vec<u8>,
}

impl SetBuilder {
    pub fn new(identifier: Guid) -> Self {
        Self {
            signature: *b"1SPS",
            identifier,
            records: Vec::new(),
            sentinel: true,
            trailing: Vec::new(),
        }
    }

    pub fn for_class(class: FormatClass) -> Self {
        Self::new(class.identifier())
    }

    /// Replace the `1SPS` signature.
    pub fn signature(mut self, signature: [u8; 4]) -> Self {
        self.signature = signature;
        self
    }

    /// Numeric-keyed record. `value` is everything after the value-type
    /// and padding fields, length prefix included.
    pub fn numeric(mut self, entry_type: u32, value_type: ValueType, value: &[u8]) -> Self {
        self.push_record(&entry_type.to_le_bytes(), value_type.wire_id(), value);
        self
    }

    /// Numeric-keyed record with a raw value-type code.
    pub fn numeric_raw(mut self, entry_type: u32, value_type: u16, value: &[u8]) -> Self {
        self.push_record(&entry_type.to_le_bytes(), value_type, value);
        self
    }

    /// Name-keyed record, for sets in the user-defined format class.
    pub fn named(mut self, name: &str, value_type: ValueType, value: &[u8]) -> Self {
        let name = utf16z(name);
        let mut key = (name.len() as u32).to_le_bytes().to_vec();
        key.push(0);
        key.extend_from_slice(&name);
        let size = 4 + key.len() + 4 + value.len();
        self.records.extend_from_slice(&(size as u32).to_le_bytes());
        self.records.extend_from_slice(&key);
        self.records.extend_from_slice(&value_type.wire_id().to_le_bytes());
        self.records.extend_from_slice(&[0, 0]);
        self.records.extend_from_slice(value);
        self
    }

    pub fn string(self, entry_type: u32, text: &str) -> Self {
        self.numeric(entry_type, ValueType::UnicodeString, &lpwstr(text))
    }

    /// Append the raw bytes of a pre-encoded record.
    pub fn raw_record(mut self, bytes: &[u8]) -> Self {
        self.records.extend_from_slice(bytes);
        self
    }

    /// Leave out the zero sentinel after the last record.
    pub fn without_sentinel(mut self) -> Self {
        self.sentinel = false;
        self
    }

    /// Bytes written after the sentinel and counted in the set size.
    pub fn trailing(mut self, bytes: &[u8]) -> Self {
        self.trailing.extend_from_slice(bytes);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let size = 24
            + self.records.len()
            + if self.sentinel { 4 } else { 0 }
            + self.trailing.len();
        let mut out = Vec::with_capacity(size);
        out.extend_from_slice(&(size as u32).to_le_bytes());
        out.extend_from_slice(&self.signature);
        out.extend_from_slice(self.identifier.as_bytes());
        out.extend_from_slice(&self.records);
        if self.sentinel {
            out.extend_from_slice(&[0; 4]);
        }
        out.extend_from_slice(&self.trailing);
        out
    }

    fn push_record(&mut self, entry_type: &[u8; 4], value_type: u16, value: &[u8]) {
        let size = 4 + 4 + 1 + 4 + value.len();
        self.records.extend_from_slice(&(size as u32).to_le_bytes());
        self.records.extend_from_slice(entry_type);
        self.records.push(0);
        self.records.extend_from_slice(&value_type.to_le_bytes());
        self.records.extend_from_slice(&[0, 0]);
        self.records.extend_from_slice(value);
    }
}

// ── Store builder ───────────────────────────────────────────────────────

/// Concatenates sets and, by default, the zero terminator.
#[derive(Clone, Debug)]
pub struct StoreBuilder {
    sets: Vec<SetBuilder>,
    terminator: bool,
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreBuilder {
    pub fn new() -> Self {
        Self {
            sets: Vec::new(),
            terminator: true,
        }
    }

    pub fn set(mut self, set: SetBuilder) -> Self {
        self.sets.push(set);
        self
    }

    pub fn without_terminator(mut self) -> Self {
        self.terminator = false;
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut out: Vec<u8> = self.sets.iter().flat_map(SetBuilder::build).collect();
        if self.terminator {
            out.extend_from_slice(&[0; 4]);
        }
        out
    }
}

// ── Canned stores ───────────────────────────────────────────────────────

/// Two sets: summary information with five well-known properties, then
/// a user-defined set with two named records.
pub fn summary_store() -> Vec<u8> {
    let summary = SetBuilder::for_class(FormatClass::SummaryInformation)
        .numeric(0x01, ValueType::Int16, &1252i16.to_le_bytes())
        .numeric(0x02, ValueType::AsciiString, &counted(b"Quarterly report\0"))
        .string(0x04, "Ana Lopez")
        .numeric(0x0C, ValueType::Filetime, &SAMPLE_FILETIME.to_le_bytes())
        .numeric(0x0E, ValueType::Int32, &12i32.to_le_bytes());
    let user = SetBuilder::for_class(FormatClass::UserDefinedProperties)
        .named("Reviewed", ValueType::Boolean, &[1])
        .named("Build", ValueType::UInt32, &4711u32.to_le_bytes());
    StoreBuilder::new().set(summary).set(user).build()
}

/// Rebuilds [`REFERENCE_STORE`] through the builders.
pub fn reference_store() -> Vec<u8> {
    StoreBuilder::new()
        .set(SetBuilder::new(REFERENCE_IDENTIFIER).string(4, REFERENCE_SID))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_reproduces_reference_vector() {
        assert_eq!(reference_store(), REFERENCE_STORE);
    }

    #[test]
    fn summary_store_layout() {
        let bytes = summary_store();
        assert_eq!(bytes.len(), 245);
        assert_eq!(&bytes[..4], &152u32.to_le_bytes());
        assert_eq!(&bytes[152..156], &89u32.to_le_bytes());
        assert_eq!(&bytes[241..], &[0; 4]);
    }

    #[test]
    fn named_record_size_covers_name() {
        let bytes = SetBuilder::new(REFERENCE_IDENTIFIER)
            .named("A", ValueType::Boolean, &[0])
            .build();
        // size(4) + name size(4) + reserved(1) + "A\0"(4) + type(4) + value(1)
        assert_eq!(&bytes[24..28], &18u32.to_le_bytes());
        assert_eq!(&bytes[28..32], &4u32.to_le_bytes());
    }
}
