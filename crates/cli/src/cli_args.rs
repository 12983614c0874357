//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate.

use clap::{Parser, Subcommand};

/// Command-line arguments for the `cmdy` launcher.
///
/// Without a subcommand the interactive menu is shown.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use cmdy_cli::cli_args::Args;
///
/// let args = Args::parse_from(["cmdy", "--config", "menu.yaml"]);
/// assert_eq!(args.config_path.as_deref(), Some("menu.yaml"));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(name = "cmdy", about = "cmdy - Modern CLI Command Assistant")]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the menu config file YAML.
    ///
    /// If not provided, defaults to `CMDY_CONFIG_FILE` or `config.yaml` in the
    /// current directory.
    #[arg(long = "config", short = 'c', global = true)]
    pub config_path: Option<String>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum CliCommand {
    /// Show current version
    Version,
    /// Edit config file
    Config,
}
