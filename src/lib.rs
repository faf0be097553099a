pub mod config;
pub mod error;
pub mod executor;
pub mod git;
pub mod ignore_file;
pub mod manifest;
pub mod precondition;
pub mod release;
pub mod tag;
pub mod ui;

pub use error::{ReleaseError, Result};
