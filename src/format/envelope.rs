//! Wrapping and unwrapping of the LZ4 ext envelope.
//!
//! Envelope layout:
//! `[ext header][type = 99][0xD2][uncompressed len: u32 BE][lz4 block]`
//!
//! Anything else is plain MessagePack and passes through untouched.

use std::borrow::Cow;

use log::{debug, trace, warn};

use crate::config::EnvelopeConfig;
use crate::types::error::{LzmpError, LzmpResult};
use crate::types::header::ExtHeader;
use crate::types::{EXT_PREFIX_SIZE, EXT_TYPE_LZ4, MSGPACK_INT32, UNCOMPRESSED_LEN_SIZE};

use super::compression::{compress_block, decompress_block};

/// Description of an envelope found at the start of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvelopeInfo {
    /// Header shape in use.
    pub header: ExtHeader,
    /// Value of the header's size field.
    pub declared_ext_len: u32,
    /// Declared length of the payload before compression.
    pub uncompressed_len: u32,
    /// Bytes of LZ4 block following the length field.
    pub compressed_len: usize,
    /// Length of the whole buffer.
    pub total_len: usize,
}

/// Wrap a serialized payload in a compressed envelope when that makes it smaller.
///
/// Compression is best-effort: on a compressor error, an empty block, or no
/// size gain, the input is returned as-is.
pub fn encode(raw: &[u8]) -> Cow<'_, [u8]> {
    let Ok(uncompressed_len) = u32::try_from(raw.len()) else {
        debug!(
            "payload of {} bytes exceeds the u32 length field, storing raw",
            raw.len()
        );
        return Cow::Borrowed(raw);
    };

    let compressed = match compress_block(raw) {
        Ok(block) if !block.is_empty() => block,
        Ok(_) => {
            debug!("compressor produced no output, storing {} bytes raw", raw.len());
            return Cow::Borrowed(raw);
        }
        Err(e) => {
            warn!("compression failed, storing raw: {}", e);
            return Cow::Borrowed(raw);
        }
    };

    let ext_len = EXT_PREFIX_SIZE + compressed.len();
    let header = ExtHeader::for_data_len(ext_len);
    // header + type byte + ext data
    let envelope_len = header.type_code_offset() + 1 + ext_len;
    trace!(
        "raw={} compressed={} envelope={} header={}",
        raw.len(),
        compressed.len(),
        envelope_len,
        header.name()
    );

    if envelope_len >= raw.len() {
        debug!(
            "compression saves nothing ({} >= {}), storing raw",
            envelope_len,
            raw.len()
        );
        return Cow::Borrowed(raw);
    }

    let mut out = Vec::with_capacity(envelope_len);
    // ext_len < raw.len() <= u32::MAX here
    header.write_to(ext_len as u32, &mut out);
    out.push(EXT_TYPE_LZ4);
    out.push(MSGPACK_INT32);
    out.extend_from_slice(&uncompressed_len.to_be_bytes());
    out.extend_from_slice(&compressed);
    debug_assert_eq!(out.len(), envelope_len);

    debug!(
        "wrapped {} bytes into {} byte {} envelope",
        raw.len(),
        out.len(),
        header.name()
    );
    Cow::Owned(out)
}

/// Unwrap an envelope with the default [`EnvelopeConfig`].
pub fn decode(data: &[u8]) -> LzmpResult<Cow<'_, [u8]>> {
    decode_with(data, &EnvelopeConfig::default())
}

/// Recover the plain MessagePack payload from `data`.
///
/// Plain payloads and foreign ext types are returned borrowed and unchanged.
/// A recognized envelope that fails to decompress is an error, never a fallback.
pub fn decode_with<'a>(data: &'a [u8], config: &EnvelopeConfig) -> LzmpResult<Cow<'a, [u8]>> {
    let Some(header) = locate(data) else {
        return Ok(Cow::Borrowed(data));
    };

    let len_marker_at = header.type_code_offset() + 1;
    let len_at = len_marker_at + 1;
    let block_at = len_at + UNCOMPRESSED_LEN_SIZE;
    if data.len() < block_at {
        return Err(LzmpError::Decompression(format!(
            "truncated {} envelope: {} bytes, length field needs {}",
            header.name(),
            data.len(),
            block_at
        )));
    }

    // A zero size field is accepted for hand-built envelopes; anything else
    // must be fully present, since LZ4 can stop cleanly at a sequence boundary.
    let declared = header.read_data_len(data).unwrap_or(0) as usize;
    let expected_len = header.type_code_offset() + 1 + declared;
    if declared != 0 && data.len() < expected_len {
        return Err(LzmpError::Decompression(format!(
            "truncated {} envelope: {} bytes, header declares {}",
            header.name(),
            data.len(),
            expected_len
        )));
    }

    if data[len_marker_at] != MSGPACK_INT32 {
        debug!(
            "unexpected length marker 0x{:02X} in {} envelope",
            data[len_marker_at],
            header.name()
        );
    }

    let uncompressed_len = u32::from_be_bytes([
        data[len_at],
        data[len_at + 1],
        data[len_at + 2],
        data[len_at + 3],
    ]) as usize;
    if uncompressed_len > config.max_uncompressed_len {
        return Err(LzmpError::TooLarge {
            size: uncompressed_len,
            max: config.max_uncompressed_len,
        });
    }

    let out = decompress_block(&data[block_at..], uncompressed_len)?;
    debug!(
        "unwrapped {} envelope: {} -> {} bytes",
        header.name(),
        data.len(),
        out.len()
    );
    Ok(Cow::Owned(out))
}

/// Describe the envelope at the start of `data` without decompressing it.
///
/// Returns `None` for plain or foreign data, and for envelopes too short to
/// carry their length field.
pub fn inspect(data: &[u8]) -> Option<EnvelopeInfo> {
    let header = locate(data)?;
    let len_at = header.type_code_offset() + 2;
    let block_at = len_at + UNCOMPRESSED_LEN_SIZE;
    let len_field = data.get(len_at..block_at)?;
    Some(EnvelopeInfo {
        header,
        declared_ext_len: header.read_data_len(data)?,
        uncompressed_len: u32::from_be_bytes([
            len_field[0],
            len_field[1],
            len_field[2],
            len_field[3],
        ]),
        compressed_len: data.len() - block_at,
        total_len: data.len(),
    })
}

/// Whether `data` starts with an LZ4 envelope header.
pub fn is_compressed(data: &[u8]) -> bool {
    locate(data).is_some()
}

/// Detect the header of an LZ4 envelope.
///
/// Only the ext8/16/32 family can carry one; fixext and every other leading
/// byte is plain data.
fn locate(data: &[u8]) -> Option<ExtHeader> {
    let leading = *data.first()?;
    let header = ExtHeader::from_marker(leading)?;
    match data.get(header.type_code_offset()) {
        Some(&EXT_TYPE_LZ4) => Some(header),
        Some(&other) => {
            trace!("foreign {} ext type {}, passing through", header.name(), other as i8);
            None
        }
        None => None,
    }
}
