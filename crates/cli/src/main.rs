use std::process::ExitCode;

use clap::Parser;
use log::debug;

use cmdy_cli::cli_args::{Args, CliCommand};
use cmdy_cli::{editor, selector, version_line};
use cmdy_core::config::Settings;
use cmdy_core::error::{Error, Result};
use cmdy_core::execution::ShellDispatcher;
use cmdy_core::{discovery, file_handling, menu, merge, platform};

/// Loads the menu, then runs the selection loop until the user cancels.
fn run_interactive_menu(settings: &Settings) -> Result<()> {
    debug!("Config path: `{}`", settings.config_file);

    let declared = file_handling::load_declared_options(&settings.config_file)?;
    let discovered = discovery::discover_scripts(settings);
    let options = merge::merge_options(declared, discovered, &settings.script_prefixes());

    let os_key = platform::current_os_key();
    debug!("OS key: `{os_key}`");

    let mut selector = selector::for_settings(settings);
    let mut dispatcher = ShellDispatcher::new(settings.shell_command.as_str());

    menu::run_menu(
        &options,
        &os_key,
        &settings.selector_header,
        selector.as_mut(),
        &mut dispatcher,
    )
}

fn print_error(error: &Error) {
    eprintln!("Error: {error}");

    let hints = error.hints();
    if !hints.is_empty() {
        eprintln!();
        eprintln!("Solutions:");
        for hint in hints {
            eprintln!("{hint}");
        }
    }
}

fn execute(args: Args) -> Result<()> {
    let settings = Settings::from_env().with_config_file(args.config_path.as_deref());

    match args.command {
        None => run_interactive_menu(&settings),
        Some(CliCommand::Version) => {
            println!("{}", version_line());
            Ok(())
        }
        Some(CliCommand::Config) => match editor::edit_config(&settings.config_file) {
            // A missing or failing editor is reported but not fatal
            Err(e @ (Error::NoEditor | Error::Editor { .. })) => {
                print_error(&e);
                Ok(())
            }
            other => other,
        },
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match execute(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}
