use std::fmt;

/// Size of a GUID on the wire.
pub const GUID_SIZE: usize = 16;

/// A 128-bit identifier stored in the Windows mixed-endian GUID layout.
///
/// ```text
/// ┌────────┬─────────┬──────────────────────────────┐
/// │ Offset │ Size    │ Field                        │
/// ├────────┼─────────┼──────────────────────────────┤
/// │ 0x00   │ 4 bytes │ data1 (little-endian u32)    │
/// │ 0x04   │ 2 bytes │ data2 (little-endian u16)    │
/// │ 0x06   │ 2 bytes │ data3 (little-endian u16)    │
/// │ 0x08   │ 8 bytes │ data4 (verbatim)             │
/// └────────┴─────────┴──────────────────────────────┘
/// ```
///
/// The raw 16 bytes are kept as read, so two identifiers compare equal
/// exactly when their wire bytes do.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Guid([u8; GUID_SIZE]);

impl Guid {
    /// Wrap 16 raw bytes in wire order.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; GUID_SIZE]) -> Self {
        Self(bytes)
    }

    /// Build a GUID from its numeric fields, as written in the canonical
    /// `{data1-data2-data3-data4}` form.
    #[must_use]
    pub const fn from_fields(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> Self {
        let d1 = data1.to_le_bytes();
        let d2 = data2.to_le_bytes();
        let d3 = data3.to_le_bytes();
        Self([
            d1[0], d1[1], d1[2], d1[3], d2[0], d2[1], d3[0], d3[1], data4[0], data4[1], data4[2],
            data4[3], data4[4], data4[5], data4[6], data4[7],
        ])
    }

    /// The 16 bytes in wire order.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; GUID_SIZE] {
        &self.0
    }

    #[must_use]
    pub fn data1(&self) -> u32 {
        u32::from_le_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }

    #[must_use]
    pub fn data2(&self) -> u16 {
        u16::from_le_bytes([self.0[4], self.0[5]])
    }

    #[must_use]
    pub fn data3(&self) -> u16 {
        u16::from_le_bytes([self.0[6], self.0[7]])
    }

    #[must_use]
    pub fn data4(&self) -> [u8; 8] {
        let mut out = [0u8; 8];
        out.copy_from_slice(&self.0[8..]);
        out
    }
}

impl fmt::Display for Guid {
    /// Upper-case, brace-wrapped: `{46588AE2-4CBC-4338-BBFC-139326986DCE}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d4 = self.data4();
        write!(
            f,
            "{{{:08X}-{:04X}-{:04X}-{:02X}{:02X}-{:02X}{:02X}{:02X}{:02X}{:02X}{:02X}}}",
            self.data1(),
            self.data2(),
            self.data3(),
            d4[0],
            d4[1],
            d4[2],
            d4[3],
            d4[4],
            d4[5],
            d4[6],
            d4[7]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [u8; 16] = [
        0xe2, 0x8a, 0x58, 0x46, 0xbc, 0x4c, 0x38, 0x43, 0xbb, 0xfc, 0x13, 0x93, 0x26, 0x98, 0x6d,
        0xce,
    ];

    #[test]
    fn fields_are_mixed_endian() {
        let guid = Guid::from_bytes(SAMPLE);
        assert_eq!(guid.data1(), 0x4658_8AE2);
        assert_eq!(guid.data2(), 0x4CBC);
        assert_eq!(guid.data3(), 0x4338);
        assert_eq!(guid.data4(), [0xbb, 0xfc, 0x13, 0x93, 0x26, 0x98, 0x6d, 0xce]);
    }

    #[test]
    fn display_is_braced_upper_case() {
        let guid = Guid::from_bytes(SAMPLE);
        assert_eq!(guid.to_string(), "{46588AE2-4CBC-4338-BBFC-139326986DCE}");
    }

    #[test]
    fn from_fields_matches_wire_bytes() {
        let guid = Guid::from_fields(
            0x4658_8AE2,
            0x4CBC,
            0x4338,
            [0xbb, 0xfc, 0x13, 0x93, 0x26, 0x98, 0x6d, 0xce],
        );
        assert_eq!(guid, Guid::from_bytes(SAMPLE));
    }
}
