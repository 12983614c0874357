//! Run-wide settings for cmdy.
//!
//! Every tunable string the launcher uses (config file name, script directories,
//! display prefixes, selector header, shell invocation) lives in [`Settings`],
//! built once at start-up and handed to the components that need it.

use std::env;
use std::path::{Component, Path, PathBuf};

/// Default path for the menu configuration file
const DEFAULT_CONFIG_FILE: &str = "config.yaml";

const DEFAULT_SCRIPTS_EXAMPLES: &str = "scripts/examples";
const DEFAULT_SCRIPTS_USER: &str = "scripts/user";
const DEFAULT_SCRIPTS_LEGACY: &str = "scripts";

const DEFAULT_PREFIX_EXAMPLE: &str = "[example] ";
const DEFAULT_PREFIX_USER: &str = "[user] ";

/// Header shown above the option list in the selector
pub const DEFAULT_SELECTOR_HEADER: &str = "Select an option:";

/// Default shell invocation prefix; the command string is appended as one argument
pub const DEFAULT_SHELL_COMMAND: &str = "sh -c";

const DEFAULT_FZF_COMMAND: &str = "fzf";

/// Which script directory a discovered script came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Examples,
    User,
    Legacy,
}

/// A directory scanned for executable scripts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptDir {
    pub path: PathBuf,
    pub tier: Tier,
}

impl ScriptDir {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, tier: Tier) -> Self {
        Self {
            path: path.into(),
            tier,
        }
    }

    /// How scripts in this directory are invoked.
    ///
    /// Relative directories are spelled explicitly relative to the working
    /// directory (`./scripts/user`), absolute ones are kept as they are.
    #[must_use]
    pub fn invocation_root(&self) -> String {
        invocation_path(&self.path)
    }
}

/// Renders a path the way the launcher invokes it from the working directory.
///
/// A relative path gets exactly one leading `./`, whether or not it was
/// already spelled with one.
#[must_use]
pub fn invocation_path(path: &Path) -> String {
    if path.is_absolute() {
        return path.display().to_string();
    }

    let relative: PathBuf = path
        .components()
        .skip_while(|component| *component == Component::CurDir)
        .collect();
    format!("./{}", relative.display())
}

/// Settings for one launcher run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub config_file: String,
    pub script_dirs: Vec<ScriptDir>,
    pub prefix_example: String,
    pub prefix_user: String,
    pub selector_header: String,
    pub shell_command: String,
    pub fzf_command: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Settings {
    /// Builds settings from the process environment (`CMDY_*` variables).
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary variable lookup.
    ///
    /// A variable that is unset or empty falls back to its default. Paths are
    /// tilde-expanded.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| -> String {
            lookup(key)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        let path = |key: &str, default: &str| -> PathBuf {
            PathBuf::from(shellexpand::tilde(&get(key, default)).to_string())
        };

        Self {
            config_file: shellexpand::tilde(&get("CMDY_CONFIG_FILE", DEFAULT_CONFIG_FILE))
                .to_string(),
            script_dirs: vec![
                ScriptDir::new(
                    path("CMDY_SCRIPTS_EXAMPLES", DEFAULT_SCRIPTS_EXAMPLES),
                    Tier::Examples,
                ),
                ScriptDir::new(path("CMDY_SCRIPTS_USER", DEFAULT_SCRIPTS_USER), Tier::User),
                ScriptDir::new(
                    path("CMDY_SCRIPTS_LEGACY", DEFAULT_SCRIPTS_LEGACY),
                    Tier::Legacy,
                ),
            ],
            prefix_example: get("CMDY_PREFIX_EXAMPLE", DEFAULT_PREFIX_EXAMPLE),
            prefix_user: get("CMDY_PREFIX_USER", DEFAULT_PREFIX_USER),
            selector_header: get("CMDY_FZF_HEADER", DEFAULT_SELECTOR_HEADER),
            shell_command: get("CMDY_SHELL_COMMAND", DEFAULT_SHELL_COMMAND),
            fzf_command: get("CMDY_FZF_COMMAND", DEFAULT_FZF_COMMAND),
        }
    }

    /// Replaces the config file path, expanding `~`.
    #[must_use]
    pub fn with_config_file(mut self, config_file: Option<&str>) -> Self {
        if let Some(config_file) = config_file {
            self.config_file = shellexpand::tilde(config_file).to_string();
        }
        self
    }

    /// Display prefix for scripts of the given tier.
    #[must_use]
    pub fn prefix_for(&self, tier: Tier) -> &str {
        match tier {
            Tier::Examples => &self.prefix_example,
            Tier::User => &self.prefix_user,
            Tier::Legacy => "",
        }
    }

    /// Invocation prefixes that mark a declared command as pointing into a
    /// script directory.
    #[must_use]
    pub fn script_prefixes(&self) -> Vec<String> {
        self.script_dirs.iter().map(ScriptDir::invocation_root).collect()
    }
}
