//! zlib compression shared by the decoder and the encoder.
//!
//! Both directions are plain functions over byte slices. The deflate backend is
//! chosen through `flate2` features, not here.

use crate::error::LogoError;
use crate::logo_header::COMPRESSION_LEVEL;
use flate2::write::ZlibEncoder;
use flate2::{Compression, Decompress, FlushDecompress, Status};
use std::io::Write;

/// Compresses `raw` into a zlib stream at level 3.
///
/// Writing into a `Vec` does not fail, so in practice this always returns `Ok`.
/// Empty input produces a valid stream that decompresses to nothing.
pub fn compress(raw: &[u8]) -> Result<Vec<u8>, LogoError> {
    let mut encoder = ZlibEncoder::new(
        Vec::with_capacity(raw.len() / 2 + 16),
        Compression::new(COMPRESSION_LEVEL),
    );
    encoder.write_all(raw)?;
    Ok(encoder.finish()?)
}

/// Decompresses a complete zlib stream.
///
/// The stream must reach its end marker; a corrupt header, bad checksum, or a
/// stream cut short (including an empty slice) yields [`LogoError::Format`].
/// Bytes after the end marker are ignored.
pub fn decompress(compressed: &[u8]) -> Result<Vec<u8>, LogoError> {
    let mut inflater = Decompress::new(true);
    let mut output = Vec::with_capacity(compressed.len().saturating_mul(4).max(64));

    loop {
        if output.len() == output.capacity() {
            output.reserve(output.capacity());
        }
        let consumed = inflater.total_in() as usize;
        let produced = inflater.total_out();
        let status = inflater
            .decompress_vec(&compressed[consumed..], &mut output, FlushDecompress::None)
            .map_err(|e| LogoError::Format(format!("corrupt zlib stream: {e}")))?;

        match status {
            Status::StreamEnd => return Ok(output),
            Status::Ok | Status::BufError => {
                let stalled = inflater.total_in() as usize == consumed
                    && inflater.total_out() == produced;
                if stalled && output.len() < output.capacity() {
                    return Err(LogoError::Format(format!(
                        "zlib stream ends after {} bytes without an end marker",
                        compressed.len()
                    )));
                }
            }
        }
    }
}
