//! The selection loop: present the menu, dispatch the choice, repeat.
//!
//! The loop only ends when the selector reports a cancellation or fails. A
//! selection that matches nothing, an option without a command for this OS and
//! a failing command all leave the user in the menu.

use std::collections::HashMap;

use log::{debug, info};

use crate::error::{Error, Result};
use crate::execution::CommandRunner;
use crate::menu_option::MenuOption;

/// An interactive picker over display strings.
pub trait Selector {
    /// Presents `displays` under `header` and waits for the user.
    ///
    /// Returns `Ok(None)` when the user cancelled.
    ///
    /// # Errors
    ///
    /// Returns an error if the picker itself failed.
    fn select(&mut self, displays: &[&str], header: &str) -> Result<Option<String>>;
}

/// What happened to one dispatched selection.
#[derive(Debug)]
#[must_use]
pub enum DispatchOutcome {
    Completed,
    Failed(Error),
}

/// Builds the display → option lookup used by the loop.
///
/// When several options share a display string the last one wins.
#[must_use]
pub fn build_display_lookup(options: &[MenuOption]) -> HashMap<&str, &MenuOption> {
    options
        .iter()
        .map(|option| (option.display.as_str(), option))
        .collect()
}

/// Runs `command` and reports a failure as a one-line diagnostic.
pub fn dispatch<R: CommandRunner + ?Sized>(runner: &mut R, command: &str) -> DispatchOutcome {
    match runner.run(command) {
        Ok(()) => DispatchOutcome::Completed,
        Err(e) => {
            println!("Error: {e}");
            DispatchOutcome::Failed(e)
        }
    }
}

/// Drives the present → select → dispatch cycle until the user cancels.
///
/// Exactly one command runs at a time; the next prompt appears only after the
/// previous command has exited.
///
/// # Errors
///
/// Returns [`Error::NoMenuOptions`] if `options` is empty. Selector failures
/// end the loop normally and are not returned.
pub fn run_menu<S, R>(
    options: &[MenuOption],
    os_key: &str,
    header: &str,
    selector: &mut S,
    runner: &mut R,
) -> Result<()>
where
    S: Selector + ?Sized,
    R: CommandRunner + ?Sized,
{
    if options.is_empty() {
        return Err(Error::NoMenuOptions);
    }

    let lookup = build_display_lookup(options);
    let displays: Vec<&str> = options.iter().map(|option| option.display.as_str()).collect();

    loop {
        let selected = match selector.select(&displays, header) {
            Ok(Some(selected)) if !selected.is_empty() => selected,
            Ok(_) => {
                debug!("Selector cancelled");
                return Ok(());
            }
            Err(e) => {
                debug!("Selector ended the menu: {e}");
                return Ok(());
            }
        };

        let Some(option) = lookup.get(selected.as_str()) else {
            debug!("Ignoring unknown selection `{selected}`");
            continue;
        };

        let Some(command) = option.command_for(os_key) else {
            info!("`{}` has no command for `{os_key}`", option.display);
            continue;
        };

        if let DispatchOutcome::Failed(e) = dispatch(runner, command) {
            debug!("`{}` failed, back to the menu: {e}", option.display);
        }
    }
}
