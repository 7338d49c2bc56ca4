//! Whole-buffer gzip compression helpers.
//!
//! Stateless codec wrappers over the standard gzip container format: whole
//! buffer in, whole buffer out, no streaming API. Unlike the rendering core,
//! nothing here is contained: a malformed stream on decompress propagates to
//! the caller as an error.

use std::io::{Read, Write};
use std::string::FromUtf8Error;

use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use thiserror::Error;

/// A failure while compressing or decompressing a buffer.
#[derive(Debug, Error)]
pub enum CompressionError {
    /// The underlying codec failed, typically a malformed gzip stream on
    /// decompress.
    #[error("gzip codec error")]
    Io(#[from] std::io::Error),

    /// Decompressed bytes were not valid UTF-8.
    #[error("decompressed data is not valid UTF-8")]
    InvalidUtf8(#[from] FromUtf8Error),
}

/// Compression-effort trade-off for the encode operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompressionLevel {
    /// Fastest encoding, larger output.
    Fast,
    /// Smallest output, slower encoding.
    #[default]
    Best,
}

impl From<CompressionLevel> for Compression {
    fn from(level: CompressionLevel) -> Self {
        match level {
            CompressionLevel::Fast => Compression::fast(),
            CompressionLevel::Best => Compression::best(),
        }
    }
}

/// Gzip-compress a byte buffer.
pub fn compress_bytes(data: &[u8], level: CompressionLevel) -> Result<Vec<u8>, CompressionError> {
    let mut encoder = GzEncoder::new(Vec::new(), level.into());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

/// Decompress a gzip byte buffer.
///
/// # Errors
///
/// Returns [`CompressionError::Io`] if `data` is not a well-formed gzip
/// stream.
pub fn decompress_bytes(data: &[u8]) -> Result<Vec<u8>, CompressionError> {
    let mut decoder = GzDecoder::new(data);
    let mut out = Vec::new();
    decoder.read_to_end(&mut out)?;
    Ok(out)
}

/// UTF-8 encode a string, then gzip-compress it.
pub fn compress_string(text: &str, level: CompressionLevel) -> Result<Vec<u8>, CompressionError> {
    compress_bytes(text.as_bytes(), level)
}

/// Decompress a gzip buffer, then UTF-8 decode the result.
pub fn decompress_string(data: &[u8]) -> Result<String, CompressionError> {
    let bytes = decompress_bytes(data)?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_round_trip_at_both_levels() {
        let data = b"the quick brown fox jumps over the lazy dog".repeat(50);
        for level in [CompressionLevel::Fast, CompressionLevel::Best] {
            let compressed = compress_bytes(&data, level).unwrap();
            assert_eq!(decompress_bytes(&compressed).unwrap(), data);
        }
    }

    #[test]
    fn string_round_trip() {
        let compressed = compress_string("hello", CompressionLevel::Fast).unwrap();
        assert_eq!(decompress_string(&compressed).unwrap(), "hello");
    }

    #[test]
    fn non_ascii_string_round_trip() {
        let text = "héllo wörld — ☃";
        let compressed = compress_string(text, CompressionLevel::Best).unwrap();
        assert_eq!(decompress_string(&compressed).unwrap(), text);
    }

    #[test]
    fn empty_buffer_round_trip() {
        let compressed = compress_bytes(&[], CompressionLevel::Best).unwrap();
        assert_eq!(decompress_bytes(&compressed).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn best_level_never_larger_on_repetitive_input() {
        let data = vec![b'a'; 64 * 1024];
        let fast = compress_bytes(&data, CompressionLevel::Fast).unwrap();
        let best = compress_bytes(&data, CompressionLevel::Best).unwrap();
        assert!(best.len() <= fast.len());
        assert!(best.len() < data.len());
    }

    #[test]
    fn malformed_stream_is_an_error() {
        let result = decompress_bytes(b"definitely not gzip");
        assert!(matches!(result, Err(CompressionError::Io(_))));
    }

    #[test]
    fn decompressing_invalid_utf8_to_string_fails() {
        let compressed = compress_bytes(&[0xff, 0xfe, 0xfd], CompressionLevel::Fast).unwrap();
        assert!(matches!(
            decompress_string(&compressed),
            Err(CompressionError::InvalidUtf8(_))
        ));
    }
}
