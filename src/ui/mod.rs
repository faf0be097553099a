//! User interface module - console output for the release run.

pub mod formatter;

pub use formatter::{
    display_error, display_report, display_skip, display_status, display_success,
};
