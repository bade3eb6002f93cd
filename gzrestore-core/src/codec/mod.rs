use crate::error::Result;
use std::io::{Read, Write};

pub trait Decompressor: Send + Sync {
    /// File extension (without the dot) this codec restores from.
    fn extension(&self) -> &'static str;
    /// Stream `src` into `dst`, returning the number of bytes written.
    fn decompress(&self, src: &mut dyn Read, dst: &mut dyn Write) -> Result<u64>;
}

pub mod gzip;
