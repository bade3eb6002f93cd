use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GzError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Walk(#[from] walkdir::Error),

    #[error("{}: {}", .0.display(), .1)]
    RestoreMissing(PathBuf, #[source] std::io::Error),

    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, GzError>;
