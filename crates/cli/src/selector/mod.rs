//! Selectors: the interactive pickers the menu loop asks for a choice.
//!
//! `fzf` is used when it is on `PATH`; otherwise the built-in picker takes over.

pub mod fzf;
pub mod inline;

use cmdy_core::config::Settings;
use cmdy_core::menu::Selector;
use log::warn;

pub use fzf::FzfSelector;
pub use inline::InlineSelector;

/// Where to get fzf when it is missing.
pub const FZF_INSTALL_URL: &str = "https://github.com/junegunn/fzf#installation";

/// Picks the selector for this run.
#[must_use]
pub fn for_settings(settings: &Settings) -> Box<dyn Selector> {
    match which::which(&settings.fzf_command) {
        Ok(path) => Box::new(FzfSelector::new(path.display().to_string())),
        Err(_) => {
            warn!(
                "`{}` not found on PATH, using the built-in picker (install: {FZF_INSTALL_URL})",
                settings.fzf_command
            );
            Box::new(InlineSelector::default())
        }
    }
}
