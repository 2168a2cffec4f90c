use std::io::{stdin, stdout, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use git_helper_cli::cli_args::Args;
use git_helper_cli::settings;
use git_helper_core::config;
use git_helper_core::console::Console;
use git_helper_core::error::{Error, Result};
use git_helper_core::execution::ProcessRunner;
use git_helper_core::file_handling;
use git_helper_core::session::Session;

fn execute() -> Result<()> {
    let args = Args::parse();

    let config_path = config::get_config_path(&args.config_path);
    debug!("Config path: `{}`", config_path);

    let file_settings = file_handling::get_settings(&config_path)?;
    let resolved = settings::resolve(&args, file_settings, stdout().is_terminal());
    debug!("Resolved settings: {:?}", resolved);

    let main_menu = file_handling::load_main_menu(resolved.catalog_path.as_deref())?;

    // Looked up before any output so an unknown name fails cleanly
    let direct_sub_menu = match &args.menu {
        Some(menu) => Some(
            main_menu
                .find_sub_menu(menu)
                .ok_or_else(|| Error::MenuNotFound(menu.clone()))?,
        ),
        None => None,
    };

    let console = Console::new(stdin().lock(), stdout());
    let mut session = Session::new(&main_menu, console, ProcessRunner, resolved.options);

    match direct_sub_menu {
        Some(sub_menu) => {
            session.run_sub_menu(sub_menu)?;
            Ok(())
        }
        None => session.run(),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
