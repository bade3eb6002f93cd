use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Decompress every .gz file under a tree into a mirrored directory",
    long_about = None
)]
pub struct Cli {
    /// Root directory to start
    #[arg(long, env = "GZRESTORE_ROOT", value_name = "DIR")]
    pub root: PathBuf,

    /// Directory to restore gzip files to (must already exist)
    #[arg(long, env = "GZRESTORE_RESTORE", value_name = "DIR")]
    pub restore: PathBuf,

    /// Log more to stderr (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Long flags that may also be spelled with a single dash (`-root`).
const SINGLE_DASH_LONG: &[&str] = &["root", "restore", "verbose", "help", "version"];

/// Rewrite `-root`/`-restore=dir` style flags to their `--` form so clap
/// accepts both spellings. Arguments after a bare `--` are left alone.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;
    for arg in args {
        if passthrough {
            out.push(arg);
            continue;
        }
        let rewritten = match arg.to_str() {
            Some("--") => {
                passthrough = true;
                None
            }
            Some(s) if s.starts_with('-') && !s.starts_with("--") => {
                let name = s[1..].split('=').next().unwrap_or_default();
                SINGLE_DASH_LONG
                    .contains(&name)
                    .then(|| OsString::from(format!("-{s}")))
            }
            _ => None,
        };
        out.push(rewritten.unwrap_or(arg));
    }
    out
}
