pub mod handlers;

use crate::presentation::cli::{Cli, normalize_args};
use clap::Parser;
use gzrestore_core::error::Result;

pub fn run() -> Result<()> {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    crate::init_tracing(cli.verbose);
    handlers::handle_restore(cli.root, cli.restore)
}
