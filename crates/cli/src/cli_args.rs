//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate.

use clap::Parser;

/// Command-line arguments for the git-helper CLI tool.
///
/// This structure defines all available command-line options and arguments
/// that can be passed to the `gh` binary. Options given here take precedence
/// over the settings file.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use git_helper_cli::cli_args::Args;
///
/// let args = Args::parse_from(["gh", "--dry-run", "config"]);
/// assert!(args.dry_run);
/// assert_eq!(args.menu.as_deref(), Some("config"));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
#[command(
    about = "Git helper assists with learning git by providing documentation and shortcuts.",
    long_about = None
)]
#[allow(clippy::struct_excessive_bools)] // silence clippy's warning on this struct
pub struct Args {
    /// Path to the settings file YAML.
    ///
    /// If not provided, defaults to `~/.git-helper/config.yml`.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// Path to a catalog YAML file that replaces the built-in menus.
    #[arg(long, short = 'k')]
    pub catalog_path: Option<String>,

    /// External program that composed commands are passed to.
    ///
    /// If not provided, the settings file value or `git` is used.
    #[arg(long, short = 'p')]
    pub program: Option<String>,

    /// Perform a dry run, which just prints out the command but does not execute it.
    #[arg(long, short = 'd', action)]
    pub dry_run: bool,

    /// Run the command without first confirming if the command should be run.
    #[arg(long, short = 'f', action)]
    pub force: bool,

    /// Print the composed command line without color.
    #[arg(long, action)]
    pub no_color: bool,

    /// Open this sub-menu directly, once, and exit.
    ///
    /// Either the entry name (e.g. `config`) or its letter in the main menu.
    #[arg(num_args(1))]
    pub menu: Option<String>,
}
