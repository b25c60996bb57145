//! Envelope framing, LZ4 blocks and the MessagePack codec.

pub mod codec;
pub mod compression;
pub mod envelope;

pub use codec::{
    from_msgpack, marshal, marshal_as_array, marshal_with, to_msgpack, to_msgpack_array,
    unmarshal, unmarshal_as_array, unmarshal_with, StructMode,
};
pub use envelope::{decode, decode_with, encode, inspect, is_compressed, EnvelopeInfo};
