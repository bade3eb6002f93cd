#![forbid(unsafe_code)]

pub mod error;

pub mod codec;

pub mod walk;

pub mod report;
pub mod restore;

// Re-exports: stable API surface
pub use report::{RestoreReport, Restored};
pub use restore::{RestoreOptions, run};
