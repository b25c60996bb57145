//! MessagePack ext header shapes used by the envelope.

use crate::types::{MSGPACK_EXT16, MSGPACK_EXT32, MSGPACK_EXT8};

/// The three variable-width ext headers an envelope may start with.
///
/// Layout on the wire (size fields big-endian):
/// - `Ext8`:  `[0xC7][size: u8]`
/// - `Ext16`: `[0xC8][size: u16]`
/// - `Ext32`: `[0xC9][size: u32]`
///
/// `size` counts the ext data bytes that follow the type byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtHeader {
    Ext8,
    Ext16,
    Ext32,
}

impl ExtHeader {
    /// Pick the narrowest header able to describe `data_len` ext data bytes.
    pub fn for_data_len(data_len: usize) -> Self {
        if data_len <= u8::MAX as usize {
            ExtHeader::Ext8
        } else if data_len <= u16::MAX as usize {
            ExtHeader::Ext16
        } else {
            ExtHeader::Ext32
        }
    }

    /// Map a leading byte to its header shape, if it is an ext8/16/32 marker.
    pub fn from_marker(byte: u8) -> Option<Self> {
        match byte {
            MSGPACK_EXT8 => Some(ExtHeader::Ext8),
            MSGPACK_EXT16 => Some(ExtHeader::Ext16),
            MSGPACK_EXT32 => Some(ExtHeader::Ext32),
            _ => None,
        }
    }

    /// The leading byte of this header.
    pub const fn marker(self) -> u8 {
        match self {
            ExtHeader::Ext8 => MSGPACK_EXT8,
            ExtHeader::Ext16 => MSGPACK_EXT16,
            ExtHeader::Ext32 => MSGPACK_EXT32,
        }
    }

    /// Width of the size field in bytes: 1, 2 or 4.
    pub const fn size_width(self) -> usize {
        match self {
            ExtHeader::Ext8 => 1,
            ExtHeader::Ext16 => 2,
            ExtHeader::Ext32 => 4,
        }
    }

    /// Offset of the ext type byte, which is also the encoded header length.
    pub const fn type_code_offset(self) -> usize {
        1 + self.size_width()
    }

    /// Human-readable name, as used by the CLI.
    pub fn name(self) -> &'static str {
        match self {
            ExtHeader::Ext8 => "ext8",
            ExtHeader::Ext16 => "ext16",
            ExtHeader::Ext32 => "ext32",
        }
    }

    /// Append the marker and big-endian size field.
    ///
    /// The caller guarantees `data_len` fits the width (see [`ExtHeader::for_data_len`]).
    pub fn write_to(self, data_len: u32, out: &mut Vec<u8>) {
        out.push(self.marker());
        match self {
            ExtHeader::Ext8 => out.push(data_len as u8),
            ExtHeader::Ext16 => out.extend_from_slice(&(data_len as u16).to_be_bytes()),
            ExtHeader::Ext32 => out.extend_from_slice(&data_len.to_be_bytes()),
        }
    }

    /// Read the size field following the marker. `None` if `data` is too short.
    pub fn read_data_len(self, data: &[u8]) -> Option<u32> {
        let field = data.get(1..self.type_code_offset())?;
        Some(match self {
            ExtHeader::Ext8 => field[0] as u32,
            ExtHeader::Ext16 => u16::from_be_bytes([field[0], field[1]]) as u32,
            ExtHeader::Ext32 => u32::from_be_bytes([field[0], field[1], field[2], field[3]]),
        })
    }
}

/// Offset of the ext type byte for a payload starting with `leading`.
///
/// ext8 -> 2, ext16 -> 3, ext32 -> 5, anything else -> 1 (the fixext rule).
/// Shared by the encoder (header length) and the decoder (type byte lookup).
pub fn type_code_offset(leading: u8) -> usize {
    ExtHeader::from_marker(leading)
        .map(ExtHeader::type_code_offset)
        .unwrap_or(crate::types::FIXEXT_TYPE_OFFSET)
}
