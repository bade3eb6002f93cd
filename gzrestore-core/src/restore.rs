use crate::codec::Decompressor;
use crate::codec::gzip::Gzip;
use crate::error::{GzError, Result};
use crate::report::{RestoreReport, Restored};
use crate::walk;

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Clone, Debug)]
pub struct RestoreOptions {
    /// Tree to scan for compressed files.
    pub root: PathBuf,
    /// Existing directory that receives the decompressed tree.
    pub restore: PathBuf,
}

/// Restore every `.gz` file under `opts.root` into `opts.restore`, writing
/// each source path to `out` once its file is done.
pub fn run(opts: &RestoreOptions, out: &mut dyn Write) -> Result<RestoreReport> {
    run_with(opts, &Gzip, out)
}

pub fn run_with(
    opts: &RestoreOptions,
    codec: &dyn Decompressor,
    out: &mut dyn Write,
) -> Result<RestoreReport> {
    check_restore_dir(&opts.restore)?;

    let mut report = RestoreReport::default();
    for entry in walk::files(&opts.root) {
        let path = entry?;
        if !walk::has_extension(&path, codec.extension()) {
            report.skipped += 1;
            continue;
        }
        let r = restore_file(&opts.root, &path, &opts.restore, codec)?;
        out.write_all(r.source.as_os_str().as_encoded_bytes())?;
        out.write_all(b"\n")?;
        report.record(&r);
    }
    out.flush()?;

    info!(root = %opts.root.display(), restore = %opts.restore.display(), "{report}");
    Ok(report)
}

/// Decompress a single file found under `root` to its mirrored location
/// under `restore`. An existing destination is truncated; if decoding
/// fails the partial destination is removed.
pub fn restore_file(
    root: &Path,
    path: &Path,
    restore: &Path,
    codec: &dyn Decompressor,
) -> Result<Restored> {
    let dest = walk::restore_path(root, path, restore);
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut src = File::open(path)?;
    let compressed = src.metadata()?.len();
    let mut dst = File::create(&dest)?;
    let restored = match codec
        .decompress(&mut src, &mut dst)
        .and_then(|n| dst.flush().map(|_| n).map_err(Into::into))
    {
        Ok(n) => n,
        Err(e) => {
            drop(dst);
            if let Err(rm) = fs::remove_file(&dest) {
                warn!(dest = %dest.display(), "could not remove partial file: {rm}");
            }
            return Err(e);
        }
    };

    debug!(
        src = %path.display(),
        dest = %dest.display(),
        compressed,
        restored,
        "restored"
    );
    Ok(Restored {
        source: path.to_path_buf(),
        dest,
        compressed,
        restored,
    })
}

fn check_restore_dir(restore: &Path) -> Result<()> {
    let md =
        fs::metadata(restore).map_err(|e| GzError::RestoreMissing(restore.to_path_buf(), e))?;
    if !md.is_dir() {
        return Err(GzError::NotADirectory(restore.to_path_buf()));
    }
    Ok(())
}
