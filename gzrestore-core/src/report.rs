use std::fmt;
use std::path::PathBuf;

/// One decompressed file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Restored {
    /// The `.gz` path as found under the root.
    pub source: PathBuf,
    pub dest: PathBuf,
    /// Size of the compressed source on disk.
    pub compressed: u64,
    /// Bytes written to `dest`.
    pub restored: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RestoreReport {
    pub files: u64,
    /// Regular files without the codec's extension.
    pub skipped: u64,
    pub compressed_bytes: u64,
    pub restored_bytes: u64,
}

impl RestoreReport {
    pub fn record(&mut self, r: &Restored) {
        self.files += 1;
        self.compressed_bytes = self.compressed_bytes.saturating_add(r.compressed);
        self.restored_bytes = self.restored_bytes.saturating_add(r.restored);
    }
}

impl fmt::Display for RestoreReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "restored {} file(s), skipped {}, {} -> {} bytes",
            self.files, self.skipped, self.compressed_bytes, self.restored_bytes
        )
    }
}
