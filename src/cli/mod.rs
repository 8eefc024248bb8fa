//! Command-line interface

mod args;
mod output;

pub use args::{Args, OutputFormat};
pub use output::{print_json, print_report};
