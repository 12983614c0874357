//! Mapping the host operating system to a menu command key.

use std::env::consts::OS;

const OS_KEY_MAPPINGS: [(&str, &str); 1] = [("darwin", "mac")];

/// The running platform's identifier, using `darwin` for macOS.
#[must_use]
pub fn host_os() -> &'static str {
    if cfg!(target_os = "macos") {
        "darwin"
    } else {
        OS
    }
}

/// Maps an OS identifier to the key used in an option's `commands` table.
///
/// Unknown identifiers pass through unchanged.
///
/// ```
/// use cmdy_core::platform::resolve_os_key;
///
/// assert_eq!(resolve_os_key("darwin"), "mac");
/// assert_eq!(resolve_os_key("linux"), "linux");
/// ```
#[must_use]
pub fn resolve_os_key(host_os: &str) -> String {
    OS_KEY_MAPPINGS
        .iter()
        .find(|(from, _)| *from == host_os)
        .map_or(host_os, |(_, to)| *to)
        .to_string()
}

/// The command key for the machine cmdy is running on.
#[must_use]
pub fn current_os_key() -> String {
    resolve_os_key(host_os())
}
