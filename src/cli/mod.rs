//! CLI module - argument parsing, prompts, and subcommands

pub mod analyze;
pub mod apply;
pub mod args;
pub mod prompts;

pub use analyze::*;
pub use apply::*;
pub use args::*;
pub use prompts::*;
