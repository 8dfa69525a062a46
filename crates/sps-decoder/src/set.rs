use sps_types::{Guid, RecordLayout, Set, Signature};
use sps_wire::ByteCursor;

use crate::config::DecoderConfig;
use crate::error::DecodeError;
use crate::record::read_record;

/// size(4) + signature(4) + identifier(16).
pub(crate) const SET_HEADER_SIZE: usize = 24;

/// Decode the set starting at the cursor's position and advance the
/// cursor past its declared size.
///
/// ```text
/// ┌──────────┬───────────┬──────────────────┬─────────┬─────┬─────────┐
/// │ size:u32 │ "1SPS"    │ identifier: GUID │ record  │ ... │ 0:u32   │
/// └──────────┴───────────┴──────────────────┴─────────┴─────┴─────────┘
///  ◄──────────────────────── size bytes ──────────────────────────────►
/// ```
///
/// Records are read until the zero-size sentinel or until the declared
/// size is used up. Whatever follows the sentinel inside the declared size
/// is counted in `trailing_bytes` and skipped.
pub(crate) fn read_set(
    cursor: &mut ByteCursor<'_>,
    config: &DecoderConfig,
) -> Result<Set, DecodeError> {
    let start = cursor.offset();
    let size = cursor.peek_u32_le()?;
    if (size as usize) < SET_HEADER_SIZE {
        return Err(DecodeError::SizeMismatch {
            offset: start,
            declared: size,
            available: cursor.remaining(),
        });
    }
    let mut window = cursor.split(size as usize)?;
    window.skip(4)?;

    let signature_offset = window.offset();
    let raw_signature = window.read_array::<4>()?;
    let signature =
        Signature::from_bytes(raw_signature).ok_or(DecodeError::InvalidSignature {
            offset: signature_offset,
            found: raw_signature,
        })?;
    let identifier = Guid::from_bytes(window.read_array()?);
    let layout = RecordLayout::for_identifier(&identifier);

    tracing::debug!(
        offset = start,
        size,
        identifier = %identifier,
        ?layout,
        "decoding set"
    );

    let mut records = Vec::new();
    while window.remaining() > 0 {
        let record_offset = window.offset();
        let record_size = window.peek_u32_le()?;
        if record_size == 0 {
            window.skip(4)?;
            break;
        }
        if record_size as usize > window.remaining() {
            return Err(DecodeError::SizeMismatch {
                offset: record_offset,
                declared: record_size,
                available: window.remaining(),
            });
        }
        let mut record_window = window.split(record_size as usize)?;
        records.push(read_record(&mut record_window, layout, config)?);
    }

    let trailing_bytes = window.remaining();
    if trailing_bytes > 0 {
        tracing::debug!(
            offset = window.offset(),
            trailing_bytes,
            "skipping bytes after record chain"
        );
    }

    Ok(Set::new(
        size,
        signature,
        identifier,
        records,
        trailing_bytes,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sps_types::FormatClass;
    use sps_wire::WireError;

    fn set_bytes(identifier: Guid, body: &[u8]) -> Vec<u8> {
        let size = u32::try_from(SET_HEADER_SIZE + body.len()).unwrap();
        let mut buf = Vec::new();
        buf.extend_from_slice(&size.to_le_bytes());
        buf.extend_from_slice(b"1SPS");
        buf.extend_from_slice(identifier.as_bytes());
        buf.extend_from_slice(body);
        buf
    }

    fn bool_record(entry_type: u32, value: u8) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&14u32.to_le_bytes());
        buf.extend_from_slice(&entry_type.to_le_bytes());
        buf.push(0);
        buf.extend_from_slice(&[0x0B, 0x00, 0x00, 0x00, value]);
        buf
    }

    fn decode(buf: &[u8]) -> Result<Set, DecodeError> {
        read_set(&mut ByteCursor::new(buf), &DecoderConfig::default())
    }

    #[test]
    fn records_until_sentinel() {
        let mut body = bool_record(1, 1);
        body.extend(bool_record(2, 0));
        body.extend_from_slice(&[0; 4]);
        let set = decode(&set_bytes(Guid::default(), &body)).unwrap();
        assert_eq!(set.record_count(), 2);
        assert_eq!(set.record(1).and_then(|r| r.entry_type()), Some(2));
        assert_eq!(set.trailing_bytes(), 0);
    }

    #[test]
    fn chain_may_end_at_declared_size() {
        let set = decode(&set_bytes(Guid::default(), &bool_record(3, 1))).unwrap();
        assert_eq!(set.record_count(), 1);
    }

    #[test]
    fn bytes_after_sentinel_are_trailing() {
        let mut body = bool_record(1, 1);
        body.extend_from_slice(&[0; 4]);
        body.extend_from_slice(&[0xAA; 6]);
        let set = decode(&set_bytes(Guid::default(), &body)).unwrap();
        assert_eq!(set.record_count(), 1);
        assert_eq!(set.trailing_bytes(), 6);
    }

    #[test]
    fn bad_signature_fails_before_records() {
        let mut buf = set_bytes(Guid::default(), &[0xFF; 8]);
        buf[4..8].copy_from_slice(b"1SPT");
        let err = decode(&buf).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::InvalidSignature {
                offset: 4,
                found: [b'1', b'S', b'P', b'T']
            }
        ));
    }

    #[test]
    fn size_below_header_is_size_mismatch() {
        let mut buf = set_bytes(Guid::default(), &[]);
        buf[0..4].copy_from_slice(&23u32.to_le_bytes());
        assert!(matches!(
            decode(&buf).unwrap_err(),
            DecodeError::SizeMismatch { declared: 23, .. }
        ));
    }

    #[test]
    fn size_beyond_buffer_is_out_of_data() {
        let mut buf = set_bytes(Guid::default(), &[0; 4]);
        buf[0..4].copy_from_slice(&100u32.to_le_bytes());
        assert!(matches!(
            decode(&buf).unwrap_err(),
            DecodeError::Wire(WireError::OutOfData { offset: 0, .. })
        ));
    }

    #[test]
    fn record_larger_than_set_is_size_mismatch() {
        let mut body = bool_record(1, 1);
        body[0..4].copy_from_slice(&40u32.to_le_bytes());
        let err = decode(&set_bytes(Guid::default(), &body)).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::SizeMismatch {
                offset: 24,
                declared: 40,
                available: 14
            }
        ));
    }

    #[test]
    fn user_defined_sets_are_named() {
        let name: Vec<u8> = "A\0".encode_utf16().flat_map(u16::to_le_bytes).collect();
        let mut record = Vec::new();
        record.extend_from_slice(&18u32.to_le_bytes());
        record.extend_from_slice(&4u32.to_le_bytes());
        record.push(0);
        record.extend_from_slice(&name);
        record.extend_from_slice(&[0x0B, 0x00, 0x00, 0x00, 0x01]);
        record.extend_from_slice(&[0; 4]);

        let set = decode(&set_bytes(
            FormatClass::UserDefinedProperties.identifier(),
            &record,
        ))
        .unwrap();
        assert_eq!(set.layout(), RecordLayout::Named);
        assert_eq!(set.record(0).and_then(|r| r.entry_name()), Some("A"));
    }
}
