use sps_types::{Record, RecordKey, RecordLayout, ValueEncoding, ValueType};
use sps_wire::ByteCursor;

use crate::config::DecoderConfig;
use crate::error::DecodeError;

/// Decode one record from a window cursor covering exactly its declared
/// size.
///
/// ```text
/// Numeric: size:u32 entry_type:u32 reserved:u8
/// Named:   size:u32 name_size:u32  reserved:u8 name[name_size]
///          value_type:u16 padding:u16 [count:u32] data...
/// ```
///
/// Fields that run past the window fail with `OutOfData`. Bytes left in
/// the window after the payload are ignored.
pub(crate) fn read_record(
    window: &mut ByteCursor<'_>,
    layout: RecordLayout,
    config: &DecoderConfig,
) -> Result<Record, DecodeError> {
    let size = window.read_u32_le()?;
    let key_field = window.read_u32_le()?;
    let _reserved = window.read_u8()?;

    let key = match layout {
        RecordLayout::Numeric => RecordKey::Numeric(key_field),
        RecordLayout::Named => RecordKey::Named(decode_name(window.read_bytes(key_field as usize)?)),
    };

    let type_offset = window.offset();
    let code = window.read_u16_le()?;
    let _padding = window.read_u16_le()?;
    let value_type = ValueType::from_wire_id(code).map_err(|_| DecodeError::UnsupportedValueType {
        offset: type_offset,
        value_type: code,
    })?;

    let data_offset = window.offset();
    let data_size = match value_type.encoding() {
        ValueEncoding::Fixed(width) => width as u64,
        ValueEncoding::ByteCounted => u64::from(window.read_u32_le()?),
        ValueEncoding::Utf16Counted => u64::from(window.read_u32_le()?) * 2,
    };
    if data_size > config.max_value_size as u64 {
        return Err(DecodeError::ValueTooLarge {
            offset: data_offset,
            size: data_size,
            limit: config.max_value_size,
        });
    }
    #[allow(clippy::cast_possible_truncation)]
    let data = window.read_bytes(data_size as usize)?.to_vec();

    tracing::trace!(
        offset = window.offset() - window.position(),
        size,
        value_type = code,
        data_size,
        "decoded record"
    );

    Ok(Record::new(size, key, value_type, data, config.codepage))
}

/// Property names are UTF-16LE and usually NUL-terminated. Unpaired
/// surrogates are replaced rather than rejected.
fn decode_name(raw: &[u8]) -> String {
    let units: Vec<u16> = raw
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .take_while(|&unit| unit != 0)
        .collect();
    String::from_utf16_lossy(&units)
}
