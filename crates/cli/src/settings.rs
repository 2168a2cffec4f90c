//! Merging command-line arguments with the settings file.

use git_helper_core::config::{expand_path, Settings, DEFAULT_PROGRAM};
use git_helper_core::confirm::ExecutionOptions;

use crate::cli_args::Args;

/// Everything the session needs that comes from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSettings {
    pub catalog_path: Option<String>,
    pub options: ExecutionOptions,
}

/// Combines `args` and `settings`, arguments winning.
///
/// `is_terminal` tells whether stdout is a terminal; color is only used when
/// it is and neither the arguments nor the settings file turn it off.
#[must_use]
pub fn resolve(args: &Args, settings: Option<Settings>, is_terminal: bool) -> ResolvedSettings {
    let settings = settings.unwrap_or_default();

    let program = args
        .program
        .clone()
        .or(settings.program)
        .unwrap_or_else(|| DEFAULT_PROGRAM.to_string());

    let color = is_terminal && !args.no_color && settings.color.unwrap_or(true);

    let catalog_path = expand_path(&args.catalog_path.clone().or(settings.catalog_path));

    ResolvedSettings {
        catalog_path,
        options: ExecutionOptions {
            program,
            dry_run: args.dry_run,
            force: args.force,
            color,
        },
    }
}
