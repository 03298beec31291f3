// src/cli/mod.rs
//! CLI command handlers.

pub mod args;
pub mod handlers;

pub use args::{Cli, Commands, OutputArgs, OutputFormat};
pub use handlers::{handle_init, handle_scan, handle_text, load_config};

#[cfg(feature = "tui")]
pub use handlers::handle_view;
