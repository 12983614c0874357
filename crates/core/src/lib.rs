//! cmdy Core Library
//!
//! This crate provides the core of cmdy, an interactive command launcher that
//! shows a fuzzy-searchable menu of named actions and runs the chosen action's
//! shell command for the current operating system, over and over until the
//! user cancels.
//!
//! # Key Features
//!
//! - **Menu Options**: Declared in a YAML config file, one shell command per OS
//! - **Script Discovery**: Executable files in the script directories become options
//! - **Merging**: Declared options first, discovered scripts after, without duplicates
//! - **Selection Loop**: Present, select, dispatch, repeat; failures never end the run
//! - **Settings**: All tunables gathered once from `CMDY_*` environment variables
//!
//! # Examples
//!
//! Building the menu for the current directory:
//!
//! ```no_run
//! use cmdy_core::config::Settings;
//! use cmdy_core::discovery::discover_scripts;
//! use cmdy_core::file_handling::load_declared_options;
//! use cmdy_core::merge::merge_options;
//!
//! let settings = Settings::from_env();
//! let declared = load_declared_options(&settings.config_file)?;
//! let discovered = discover_scripts(&settings);
//! let options = merge_options(declared, discovered, &settings.script_prefixes());
//! for option in &options {
//!     println!("Option: {}", option);
//! }
//! # Ok::<(), cmdy_core::error::Error>(())
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod execution;
pub mod file_handling;
pub mod menu;
pub mod menu_option;
pub mod merge;
pub mod platform;
