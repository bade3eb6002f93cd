use std::io::{BufWriter, Write};
use std::path::PathBuf;

use gzrestore_core::error::Result;
use gzrestore_core::{RestoreOptions, run};

pub fn handle_restore(root: PathBuf, restore: PathBuf) -> Result<()> {
    let opts = RestoreOptions { root, restore };
    let mut out = BufWriter::new(std::io::stdout().lock());
    let report = run(&opts, &mut out)?;
    out.flush()?;
    tracing::debug!(files = report.files, skipped = report.skipped, "done");
    Ok(())
}
