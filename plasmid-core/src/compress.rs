//! Compressed-input detection with streaming decoders.
//!
//! Sequence files are frequently shipped gzip- or zstd-compressed. The
//! readers here sniff the magic bytes of a stream and hand back a buffered
//! line reader over the decoded text, so callers can parse plain and
//! compressed files the same way.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::{PlasmidError, Result};

const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];
const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

/// Supported compression algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Zstd,
    Gzip,
}

/// Detect the compression algorithm from the magic bytes of `data`.
///
/// Returns `None` if the data does not match a known format.
pub fn detect_algorithm(data: &[u8]) -> Option<Algorithm> {
    if data.starts_with(&ZSTD_MAGIC) {
        Some(Algorithm::Zstd)
    } else if data.starts_with(&GZIP_MAGIC) {
        Some(Algorithm::Gzip)
    } else {
        None
    }
}

/// Wrap `reader` in a decoder matching its leading magic bytes.
///
/// Streams without a recognised signature are passed through unchanged.
pub fn decoding_reader<R>(mut reader: R) -> Result<Box<dyn BufRead + Send>>
where
    R: BufRead + Send + 'static,
{
    let algorithm = detect_algorithm(reader.fill_buf()?);
    Ok(match algorithm {
        Some(Algorithm::Gzip) => Box::new(BufReader::new(flate2::bufread::MultiGzDecoder::new(
            reader,
        ))),
        Some(Algorithm::Zstd) => {
            let decoder = zstd::stream::read::Decoder::with_buffer(reader)
                .map_err(|e| PlasmidError::Compression(e.to_string()))?;
            Box::new(BufReader::new(decoder))
        }
        None => Box::new(reader),
    })
}

/// Open a file for line-oriented reading, decoding gzip or zstd on the fly.
pub fn open_path(path: impl AsRef<Path>) -> Result<Box<dyn BufRead + Send>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        PlasmidError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })?;
    decoding_reader(BufReader::new(file))
}
