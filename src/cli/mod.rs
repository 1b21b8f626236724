// Command-line handlers for the credcheck binary

pub mod check;
pub mod utils;

pub use check::{check_credential, init_config, show_patterns, CheckOptions};
