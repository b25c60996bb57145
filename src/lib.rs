//! lz4-msgpack: transparent LZ4 compression for MessagePack payloads.
//!
//! A serialized payload is compressed and wrapped in a MessagePack ext value
//! (type 99) when that makes it smaller. Decoders that know the envelope unwrap
//! it; plain payloads and foreign ext types pass through untouched.

pub mod cli;
pub mod config;
pub mod format;
pub mod types;

// Re-export commonly used types at the crate root
pub use config::EnvelopeConfig;
pub use format::{
    decode, decode_with, encode, inspect, is_compressed, marshal, marshal_as_array, marshal_with,
    unmarshal, unmarshal_as_array, unmarshal_with, EnvelopeInfo, StructMode,
};
pub use types::{
    ExtHeader, LzmpError, LzmpResult, DEFAULT_MAX_UNCOMPRESSED_LEN, EXT_TYPE_LZ4, MSGPACK_EXT16,
    MSGPACK_EXT32, MSGPACK_EXT8, MSGPACK_INT32,
};
