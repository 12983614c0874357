//! Integration tests for cmdy-core
//!
//! These tests build a menu the way the launcher does (config file, script
//! directories, merge) and drive the selection loop with scripted collaborators.

use cmdy_core::{
    config::{ScriptDir, Settings, Tier},
    discovery::discover,
    error::{Error, Result},
    execution::CommandRunner,
    file_handling::load_declared_options,
    menu::{run_menu, Selector},
    menu_option::MenuOption,
    merge::merge_options,
    platform::resolve_os_key,
};
use std::cell::RefCell;
use std::fs;
use std::io::Write;
use std::rc::Rc;
use tempfile::{NamedTempFile, TempDir};

struct Picks(Vec<&'static str>);

impl Selector for Picks {
    fn select(&mut self, _displays: &[&str], _header: &str) -> Result<Option<String>> {
        if self.0.is_empty() {
            Ok(None)
        } else {
            Ok(Some(self.0.remove(0).to_string()))
        }
    }
}

#[derive(Clone, Default)]
struct SharedLog(Rc<RefCell<Vec<String>>>);

impl CommandRunner for SharedLog {
    fn run(&mut self, command: &str) -> Result<()> {
        self.0.borrow_mut().push(command.to_string());
        Ok(())
    }
}

fn write_config(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{content}").unwrap();
    temp_file
}

fn displays(options: &[MenuOption]) -> Vec<&str> {
    options.iter().map(|o| o.display.as_str()).collect()
}

/// Declared `Build` plus a discovered `deploy.sh` gives two options in order.
#[test]
fn test_declared_and_discovered_scenario() {
    let declared = vec![MenuOption::declared("Build", [("linux", "make")])];
    let discovered = vec![MenuOption::discovered("deploy", "./scripts/deploy.sh")];

    let merged = merge_options(declared, discovered, &Settings::default().script_prefixes());

    assert_eq!(displays(&merged), vec!["Build", "deploy"]);
    assert_eq!(merged[1].command_for("linux"), Some("./scripts/deploy.sh"));
    assert_eq!(merged[1].command_for("mac"), Some("./scripts/deploy.sh"));
    assert_eq!(merged[1].command_for("windows"), Some("./scripts/deploy.sh"));
}

/// A config that already points at `./scripts/deploy.sh` suppresses the script.
#[test]
fn test_declared_script_suppression_scenario() {
    let config = write_config(
        r#"
menu_options:
  - display: "Build"
    commands:
      linux: "make"
      mac: "./scripts/deploy.sh"
"#,
    );
    let declared = load_declared_options(config.path().to_str().unwrap()).unwrap();
    let discovered = vec![MenuOption::discovered("deploy", "./scripts/deploy.sh")];

    let merged = merge_options(declared, discovered, &Settings::default().script_prefixes());

    assert_eq!(displays(&merged), vec!["Build"]);
}

#[cfg(unix)]
#[test]
fn test_discover_merge_and_run_workflow() {
    use std::os::unix::fs::PermissionsExt;

    let scripts = TempDir::new().unwrap();
    let user_dir = scripts.path().join("user");
    fs::create_dir(&user_dir).unwrap();
    for (name, mode) in [("backup.sh", 0o755), ("notes.md", 0o644), ("sync", 0o700)] {
        let path = user_dir.join(name);
        fs::write(&path, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
    }

    let settings = Settings {
        script_dirs: vec![
            ScriptDir::new(scripts.path().join("examples"), Tier::Examples),
            ScriptDir::new(&user_dir, Tier::User),
        ],
        ..Settings::default()
    };

    let backup_path = user_dir.join("backup.sh").display().to_string();
    let config = write_config(&format!(
        "menu_options:\n  - display: \"Backup now\"\n    commands:\n      linux: \"{backup_path}\"\n"
    ));

    let declared = load_declared_options(config.path().to_str().unwrap()).unwrap();
    let discovered = discover(&settings.script_dirs, &settings);
    assert_eq!(displays(&discovered), vec!["[user] backup", "[user] sync"]);

    let merged = merge_options(declared, discovered, &settings.script_prefixes());
    assert_eq!(displays(&merged), vec!["Backup now", "[user] sync"]);

    let log = SharedLog::default();
    let mut runner = log.clone();
    let mut selector = Picks(vec!["[user] sync", "Backup now", "missing"]);

    run_menu(&merged, "linux", &settings.selector_header, &mut selector, &mut runner).unwrap();

    let sync_path = user_dir.join("sync").display().to_string();
    assert_eq!(*log.0.borrow(), vec![sync_path, backup_path]);
}

#[test]
fn test_empty_menu_is_fatal() {
    let config = write_config("menu_options: []\n");
    let declared = load_declared_options(config.path().to_str().unwrap()).unwrap();
    let settings = Settings {
        script_dirs: vec![ScriptDir::new("/this/path/does/not/exist", Tier::User)],
        ..Settings::default()
    };
    let discovered = discover(&settings.script_dirs, &settings);

    let merged = merge_options(declared, discovered, &settings.script_prefixes());
    let result = run_menu(
        &merged,
        "linux",
        "",
        &mut Picks(vec![]),
        &mut SharedLog::default(),
    );

    let error = result.unwrap_err();
    assert!(matches!(error, Error::NoMenuOptions));
    assert!(!error.hints().is_empty());
}

#[test]
fn test_mac_commands_resolve_from_darwin() {
    let options = vec![MenuOption::declared(
        "Open",
        [("linux", "xdg-open ."), ("mac", "open .")],
    )];
    let log = SharedLog::default();
    let mut runner = log.clone();

    run_menu(
        &options,
        &resolve_os_key("darwin"),
        "",
        &mut Picks(vec!["Open"]),
        &mut runner,
    )
    .unwrap();

    assert_eq!(*log.0.borrow(), vec!["open ."]);
}
