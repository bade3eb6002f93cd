use super::Decompressor;
use crate::error::Result;
use flate2::read::MultiGzDecoder;
use std::io::{Read, Write};

/// gzip (RFC 1952). Concatenated members decode as a single stream; the
/// trailer CRC and size are checked by the decoder.
pub struct Gzip;

impl Decompressor for Gzip {
    fn extension(&self) -> &'static str {
        "gz"
    }

    fn decompress(&self, src: &mut dyn Read, dst: &mut dyn Write) -> Result<u64> {
        let mut dec = MultiGzDecoder::new(src);
        let written_uncompressed = std::io::copy(&mut dec, dst)?;
        Ok(written_uncompressed)
    }
}
