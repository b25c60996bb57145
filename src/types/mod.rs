//! Wire constants and core types for the LZ4 MessagePack envelope.

pub mod error;
pub mod header;

pub use error::{LzmpError, LzmpResult};
pub use header::{type_code_offset, ExtHeader};

/// MessagePack `ext 8` leading byte.
pub const MSGPACK_EXT8: u8 = 0xC7;

/// MessagePack `ext 16` leading byte.
pub const MSGPACK_EXT16: u8 = 0xC8;

/// MessagePack `ext 32` leading byte.
pub const MSGPACK_EXT32: u8 = 0xC9;

/// MessagePack `int 32` marker, reused to flag the 4-byte uncompressed length.
pub const MSGPACK_INT32: u8 = 0xD2;

/// Extension type code reserved for LZ4-compressed MessagePack.
pub const EXT_TYPE_LZ4: u8 = 99;

/// Offset of the type byte for header shapes without a size field (fixext).
pub const FIXEXT_TYPE_OFFSET: usize = 1;

/// Width of the big-endian uncompressed-length field.
pub const UNCOMPRESSED_LEN_SIZE: usize = 4;

/// Bytes of ext data that precede the compressed block:
/// the length marker plus the 4-byte uncompressed length.
pub const EXT_PREFIX_SIZE: usize = 1 + UNCOMPRESSED_LEN_SIZE;

/// Default ceiling on the declared uncompressed length accepted by the decoder: 256MB.
pub const DEFAULT_MAX_UNCOMPRESSED_LEN: usize = 256 * 1024 * 1024;
