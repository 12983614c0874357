//! Loading the declared menu options from the YAML config file.

use std::fs;

use log::debug;

use crate::error::{Error, Result};
use crate::menu_option::{MenuConfig, MenuOption};

fn read_file(file_description: &str, path: &str) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::config_io(file_description.to_string(), path.to_string(), e))
}

/// Loads the declared menu options from a configuration file.
///
/// A file without a `menu_options` key yields no options; the loader does not
/// deduplicate entries.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration file cannot be read
/// - The YAML is malformed or doesn't match the expected structure
///
/// # Examples
///
/// ```no_run
/// use cmdy_core::file_handling::load_declared_options;
///
/// let options = load_declared_options("config.yaml")?;
/// println!("Loaded {} options", options.len());
/// # Ok::<(), cmdy_core::error::Error>(())
/// ```
pub fn load_declared_options(config_path: &str) -> Result<Vec<MenuOption>> {
    let content = read_file("config", config_path)?;

    // A blank document is `null` to YAML, not an empty mapping
    if content.trim().is_empty() {
        debug!("Config `{config_path}` is empty");
        return Ok(Vec::new());
    }

    let parsed: MenuConfig = serde_yaml::from_str(&content).map_err(|e| {
        Error::config_yaml("config".to_string(), config_path.to_string(), e)
    })?;

    let options = parsed.menu_options;
    debug!("Loaded {} declared options from `{config_path}`", options.len());

    Ok(options)
}
