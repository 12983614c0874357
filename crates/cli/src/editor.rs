//! `cmdy config`: open the config file in a text editor.

use std::process::Command;

use log::{debug, warn};

use cmdy_core::error::{Error, Result};
use cmdy_core::execution::execute_command;

/// Editors tried, in order, when `$EDITOR` is unusable.
pub const EDITOR_CANDIDATES: [&str; 6] = ["nano", "vi", "vim", "emacs", "code", "notepad"];

/// Picks an editor: `$EDITOR` if it can be found, else the first available
/// candidate.
///
/// # Errors
///
/// Returns [`Error::NoEditor`] if nothing usable is installed.
pub fn find_editor<F>(env_editor: Option<&str>, candidates: &[&str], exists: F) -> Result<String>
where
    F: Fn(&str) -> bool,
{
    if let Some(editor) = env_editor.filter(|editor| !editor.is_empty()) {
        if exists(editor) {
            return Ok(editor.to_string());
        }
        warn!("EDITOR `{editor}` not found, trying fallbacks");
        println!("Warning: EDITOR '{editor}' not found, trying fallbacks...");
    }

    candidates
        .iter()
        .find(|candidate| exists(candidate))
        .map(|candidate| (*candidate).to_string())
        .ok_or(Error::NoEditor)
}

fn command_exists(command: &str) -> bool {
    which::which(command).is_ok()
}

/// Opens `config_path` in the editor chosen by [`find_editor`].
///
/// # Errors
///
/// Returns an error if no editor is found or the editor fails.
pub fn edit_config(config_path: &str) -> Result<()> {
    let env_editor = std::env::var("EDITOR").ok();
    let editor = find_editor(env_editor.as_deref(), &EDITOR_CANDIDATES, command_exists)?;

    println!("Opening {config_path} with {editor}...");
    debug!("Launching editor `{editor}`");

    let mut command = Command::new(&editor);
    command.arg(config_path);

    execute_command(command).map_err(|e| Error::Editor {
        editor,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_editor_preferred() {
        let editor = find_editor(Some("hx"), &EDITOR_CANDIDATES, |_| true).unwrap();
        assert_eq!(editor, "hx");
    }

    #[test]
    fn test_missing_env_editor_falls_back() {
        let editor = find_editor(Some("hx"), &EDITOR_CANDIDATES, |c| c == "vim").unwrap();
        assert_eq!(editor, "vim");
    }

    #[test]
    fn test_fallback_order() {
        let editor = find_editor(None, &EDITOR_CANDIDATES, |c| c == "vi" || c == "vim").unwrap();
        assert_eq!(editor, "vi");
    }

    #[test]
    fn test_empty_env_editor_is_ignored() {
        let editor = find_editor(Some(""), &EDITOR_CANDIDATES, |c| c == "nano").unwrap();
        assert_eq!(editor, "nano");
    }

    #[test]
    fn test_no_editor() {
        let result = find_editor(None, &EDITOR_CANDIDATES, |_| false);
        assert!(matches!(result, Err(Error::NoEditor)));
    }
}
