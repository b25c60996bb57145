//! LZ4 block compression/decompression.
//!
//! Raw blocks only: no size prefix and no frame. The envelope carries the
//! uncompressed length itself.

use crate::types::error::{LzmpError, LzmpResult};

/// Worst-case compressed size for an input of `input_len` bytes.
pub fn max_compressed_size(input_len: usize) -> usize {
    lz4_flex::block::get_maximum_output_size(input_len)
}

/// Compress `src` into a fresh LZ4 block.
pub fn compress_block(src: &[u8]) -> LzmpResult<Vec<u8>> {
    let mut buf = vec![0u8; max_compressed_size(src.len())];
    let len = lz4_flex::block::compress_into(src, &mut buf)
        .map_err(|e| LzmpError::Compression(e.to_string()))?;
    buf.truncate(len);
    Ok(buf)
}

/// Decompress an LZ4 block into a buffer of `capacity` bytes.
///
/// The result is truncated to the number of bytes actually produced.
pub fn decompress_block(src: &[u8], capacity: usize) -> LzmpResult<Vec<u8>> {
    let mut buf = vec![0u8; capacity];
    let len = lz4_flex::block::decompress_into(src, &mut buf)
        .map_err(|e| LzmpError::Decompression(e.to_string()))?;
    buf.truncate(len);
    Ok(buf)
}
