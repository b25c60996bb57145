//! MessagePack serialization with transparent envelope compression.

use std::borrow::Cow;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::EnvelopeConfig;
use crate::types::error::LzmpResult;

use super::envelope;

/// How structs are laid out in MessagePack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StructMode {
    /// Fields as a map keyed by field name.
    #[default]
    Map,
    /// Fields as a positional array.
    Array,
}

/// Serialize `value` with struct fields as a named map.
pub fn to_msgpack<T: Serialize + ?Sized>(value: &T) -> LzmpResult<Vec<u8>> {
    Ok(rmp_serde::to_vec_named(value)?)
}

/// Serialize `value` with struct fields as a positional array.
pub fn to_msgpack_array<T: Serialize + ?Sized>(value: &T) -> LzmpResult<Vec<u8>> {
    Ok(rmp_serde::to_vec(value)?)
}

/// Deserialize plain MessagePack. Accepts both struct layouts.
pub fn from_msgpack<T: DeserializeOwned>(bytes: &[u8]) -> LzmpResult<T> {
    Ok(rmp_serde::from_slice(bytes)?)
}

/// Serialize `value` in the given mode and wrap it in an envelope if that pays off.
pub fn marshal_with<T: Serialize + ?Sized>(value: &T, mode: StructMode) -> LzmpResult<Vec<u8>> {
    let raw = match mode {
        StructMode::Map => to_msgpack(value)?,
        StructMode::Array => to_msgpack_array(value)?,
    };
    let wrapped = match envelope::encode(&raw) {
        Cow::Owned(wrapped) => Some(wrapped),
        Cow::Borrowed(_) => None,
    };
    Ok(wrapped.unwrap_or(raw))
}

/// Serialize with struct fields as a named map, then compress.
pub fn marshal<T: Serialize + ?Sized>(value: &T) -> LzmpResult<Vec<u8>> {
    marshal_with(value, StructMode::Map)
}

/// Serialize with struct fields as a positional array, then compress.
pub fn marshal_as_array<T: Serialize + ?Sized>(value: &T) -> LzmpResult<Vec<u8>> {
    marshal_with(value, StructMode::Array)
}

/// Decompress if needed, then deserialize.
pub fn unmarshal<T: DeserializeOwned>(data: &[u8]) -> LzmpResult<T> {
    unmarshal_with(data, &EnvelopeConfig::default())
}

/// Counterpart of [`marshal_as_array`].
///
/// The decoder reads both struct layouts, so this is [`unmarshal`] under the name
/// callers pair with the array encoder.
pub fn unmarshal_as_array<T: DeserializeOwned>(data: &[u8]) -> LzmpResult<T> {
    unmarshal(data)
}

/// [`unmarshal`] with explicit decoder limits.
pub fn unmarshal_with<T: DeserializeOwned>(data: &[u8], config: &EnvelopeConfig) -> LzmpResult<T> {
    let plain = envelope::decode_with(data, config)?;
    from_msgpack(&plain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LzmpError;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn test_modes_differ_on_the_wire() {
        let p = Point { x: 1, y: 2 };
        let map = to_msgpack(&p).unwrap();
        let array = to_msgpack_array(&p).unwrap();
        assert_eq!(map[0], 0x82); // fixmap, 2 entries
        assert_eq!(array[0], 0x92); // fixarray, 2 entries
        assert_eq!(from_msgpack::<Point>(&map).unwrap(), p);
        assert_eq!(from_msgpack::<Point>(&array).unwrap(), p);
    }

    #[test]
    fn test_json_values_ignore_struct_mode() {
        let doc = serde_json::json!({"id": 7, "tags": ["a", "b"], "nested": {"ok": true}});
        assert_eq!(to_msgpack(&doc).unwrap(), to_msgpack_array(&doc).unwrap());
        assert_eq!(
            marshal(&doc).unwrap(),
            marshal_with(&doc, StructMode::Array).unwrap()
        );
    }

    #[test]
    fn test_small_value_stays_plain() {
        let p = Point { x: 3, y: 4 };
        assert_eq!(marshal(&p).unwrap(), to_msgpack(&p).unwrap());
    }

    #[test]
    fn test_codec_error_surfaces() {
        match unmarshal::<Point>(&[0xC1]) {
            Err(LzmpError::Codec(_)) => {}
            other => panic!("Expected Codec error, got {:?}", other),
        }
    }
}
