//! Script discovery.
//!
//! Scans the configured script directories, in order, and turns every
//! executable file into a [`MenuOption`]. Directories that cannot be read are
//! skipped silently; discovery never fails.

use std::fs::{self, DirEntry};
use std::io::{self, Write};
use std::path::Path;

use log::debug;

use crate::config::{invocation_path, ScriptDir, Settings};
use crate::menu_option::MenuOption;

/// File names that are never offered as scripts.
pub const RESERVED_FILE_NAMES: [&str; 1] = ["README.md"];

/// Printed when no directory yields a script.
pub const NO_SCRIPTS_MESSAGE: &str = "No executable scripts found in scripts/ directories";
/// Printed right after [`NO_SCRIPTS_MESSAGE`].
pub const ADD_SCRIPTS_HINT: &str = "Add scripts to scripts/user/ or scripts/examples/";

/// Discovers scripts in every directory of `settings`, reporting to the user
/// when nothing was found.
#[must_use]
pub fn discover_scripts(settings: &Settings) -> Vec<MenuOption> {
    let discovered = discover(&settings.script_dirs, settings);

    if let Err(e) = report_discovery(&discovered, &mut io::stdout()) {
        debug!("Cannot report discovery result: {e}");
    }

    discovered
}

/// Writes the "no scripts" notice to `out` when `discovered` is empty.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn report_discovery<W: Write>(discovered: &[MenuOption], out: &mut W) -> io::Result<()> {
    if discovered.is_empty() {
        writeln!(out, "{NO_SCRIPTS_MESSAGE}")?;
        writeln!(out, "{ADD_SCRIPTS_HINT}")?;
    }
    Ok(())
}

/// Scans `directories` in the given order. No deduplication happens across
/// directories.
#[must_use]
pub fn discover(directories: &[ScriptDir], settings: &Settings) -> Vec<MenuOption> {
    directories
        .iter()
        .flat_map(|directory| scan_script_directory(directory, settings))
        .collect()
}

fn scan_script_directory(directory: &ScriptDir, settings: &Settings) -> Vec<MenuOption> {
    let entries = match fs::read_dir(&directory.path) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("Skipping script directory `{}`: {e}", directory.path.display());
            return Vec::new();
        }
    };

    let mut entries: Vec<DirEntry> = entries.filter_map(std::result::Result::ok).collect();
    entries.sort_by_key(DirEntry::file_name);

    let prefix = settings.prefix_for(directory.tier);

    let discovered: Vec<MenuOption> = entries
        .iter()
        .filter(|entry| is_candidate(entry))
        .filter_map(|entry| script_option(entry, prefix))
        .collect();

    debug!(
        "Discovered {} scripts in `{}`",
        discovered.len(),
        directory.path.display()
    );

    discovered
}

fn script_option(entry: &DirEntry, prefix: &str) -> Option<MenuOption> {
    let path = entry.path();

    // A lossy name would point the command at a file that does not exist
    let (Some(_), Some(stem)) = (path.to_str(), path.file_stem().and_then(|s| s.to_str())) else {
        debug!("Skipping `{}`: path is not valid UTF-8", path.display());
        return None;
    };

    Some(MenuOption::discovered(
        format!("{prefix}{stem}"),
        invocation_path(&path),
    ))
}

fn is_candidate(entry: &DirEntry) -> bool {
    let file_name = entry.file_name();
    if RESERVED_FILE_NAMES
        .iter()
        .any(|reserved| file_name.as_os_str() == *reserved)
    {
        return false;
    }

    let path = entry.path();
    !path.is_dir() && is_executable(&path)
}

/// Whether any of the owner, group or other execute bits is set.
#[cfg(unix)]
#[must_use]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    fs::metadata(path)
        .map(|metadata| metadata.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// Non-Unix filesystems carry no execute bits.
#[cfg(not(unix))]
#[must_use]
pub fn is_executable(_path: &Path) -> bool {
    false
}
