//! Command-line argument parsing and the non-interactive modes.

pub mod definition;
pub mod install;
pub mod list;
pub mod utils;

pub use definition::{Args, apply_overrides, process_args};
pub use utils::determine_log_level;
