use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// OS keys every discovered script is registered under.
pub const DISCOVERED_OS_KEYS: [&str; 3] = ["linux", "mac", "windows"];

/// One entry of the menu: a display name and a shell command per OS key.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    pub display: String,
    #[serde(default)]
    pub commands: IndexMap<String, String>,
    /// OS-agnostic invocation path, set only for options found by script discovery.
    #[serde(skip)]
    pub script_path: Option<String>,
}

impl MenuOption {
    /// A declared option, as it would come out of the config file.
    pub fn declared<I, K, V>(display: impl Into<String>, commands: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            display: display.into(),
            commands: commands
                .into_iter()
                .map(|(os, command)| (os.into(), command.into()))
                .collect(),
            script_path: None,
        }
    }

    /// A discovered option: the same invocation under every OS key.
    pub fn discovered(display: impl Into<String>, script_path: impl Into<String>) -> Self {
        let script_path = script_path.into();
        Self {
            display: display.into(),
            commands: DISCOVERED_OS_KEYS
                .iter()
                .map(|os| ((*os).to_string(), script_path.clone()))
                .collect(),
            script_path: Some(script_path),
        }
    }

    #[must_use]
    pub fn command_for(&self, os_key: &str) -> Option<&str> {
        self.commands.get(os_key).map(String::as_str)
    }
}

impl Display for MenuOption {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.display)
    }
}

/// Top-level shape of the config file.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct MenuConfig {
    #[serde(default)]
    pub menu_options: Vec<MenuOption>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discovered_uses_same_path_for_every_os() {
        let option = MenuOption::discovered("deploy", "./scripts/deploy.sh");

        for os in DISCOVERED_OS_KEYS {
            assert_eq!(option.command_for(os), Some("./scripts/deploy.sh"));
        }
        assert_eq!(option.script_path.as_deref(), Some("./scripts/deploy.sh"));
    }

    #[test]
    fn test_declared_keeps_command_order() {
        let option = MenuOption::declared(
            "Build",
            [("windows", "build.bat"), ("linux", "make"), ("mac", "make")],
        );

        let keys: Vec<&str> = option.commands.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["windows", "linux", "mac"]);
        assert!(option.script_path.is_none());
    }

    #[test]
    fn test_command_for_missing_os() {
        let option = MenuOption::declared("Build", [("linux", "make")]);
        assert_eq!(option.command_for("windows"), None);
    }

    #[test]
    fn test_display_is_display_name() {
        let option = MenuOption::declared("Build", [("linux", "make")]);
        assert_eq!(option.to_string(), "Build");
    }
}
