//! Gzip decompression for the fetched object.

use std::io::Read;

use flate2::read::GzDecoder;

use crate::error::DecompressError;

/// Decompress a gzip byte buffer fully into memory.
///
/// The whole object is already resident when this runs, so the result is
/// returned as one contiguous buffer rather than a streaming reader.
pub fn gunzip(data: &[u8]) -> Result<Vec<u8>, DecompressError> {
    let mut decoder = GzDecoder::new(data);
    let mut buf = Vec::new();
    decoder.read_to_end(&mut buf)?;
    Ok(buf)
}
