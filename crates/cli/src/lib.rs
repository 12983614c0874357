//! cmdy CLI Library
//!
//! This crate provides the command-line interface for cmdy: argument parsing,
//! the selectors that present the menu, and the small leaf subcommands.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`selector`]: `fzf` and built-in pickers behind the core `Selector` trait
//! - [`editor`]: Editor lookup for `cmdy config`
//!
//! # Examples
//!
//! ```bash
//! # Interactive menu built from config.yaml and scripts/
//! cmdy
//!
//! # Use another config file
//! cmdy --config ~/menus/work.yaml
//!
//! # Edit the config file
//! cmdy config
//!
//! # Show the version
//! cmdy version
//! ```

pub mod cli_args;
pub mod editor;
pub mod selector;

/// The line printed by `cmdy version`.
#[must_use]
pub fn version_line() -> String {
    format!("cmdy version: {}", env!("CARGO_PKG_VERSION"))
}
