//! Configuration paths and settings for git-helper.
//!
//! This module provides the settings file structure, resolution of its path,
//! and expansion of shell variables like `~` in configured paths.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Default path for the settings file
const DEFAULT_CONFIG_PATH: &str = "~/.git-helper/config.yml";

/// Default external program that composed commands are passed to
pub const DEFAULT_PROGRAM: &str = "git";

/// Settings read from the YAML settings file.
///
/// Every key is optional; command-line flags take precedence over them.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// External program to run, `git` when unset.
    pub program: Option<String>,
    /// Whether the echoed command line is colored.
    pub color: Option<bool>,
    /// Path to a catalog YAML file replacing the built-in menus. A relative
    /// path is taken from the directory holding the settings file.
    pub catalog_path: Option<String>,
}

impl Settings {
    /// Expands `~` in `catalog_path` and joins a relative result onto
    /// `base`, the directory the settings file was read from.
    #[must_use]
    pub fn with_catalog_relative_to(mut self, base: Option<&Path>) -> Self {
        if let Some(catalog_path) = self.catalog_path.take() {
            let expanded = shellexpand::tilde(&catalog_path).to_string();
            self.catalog_path = Some(match base {
                Some(base) if Path::new(&expanded).is_relative() => {
                    base.join(&expanded).to_string_lossy().into_owned()
                }
                _ => expanded,
            });
        }
        self
    }
}

/// Resolves the settings file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// settings path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use git_helper_core::config::get_config_path;
///
/// // Use default path
/// let default_path = get_config_path(&None);
///
/// // Use custom path
/// let custom_path = get_config_path(&Some("/path/to/config.yml".to_string()));
/// assert_eq!(custom_path, "/path/to/config.yml");
/// ```
#[must_use]
pub fn get_config_path(config_path_arg: &Option<String>) -> String {
    let config_path = match config_path_arg {
        Some(config_path) => config_path,
        None => DEFAULT_CONFIG_PATH,
    };

    shellexpand::tilde(config_path).to_string()
}

/// Expands shell variables like `~` in an optional path.
///
/// # Examples
///
/// ```
/// use git_helper_core::config::expand_path;
///
/// let expanded = expand_path(&Some("~/catalog.yml".to_string()));
/// assert!(expanded.is_some());
///
/// assert!(expand_path(&None).is_none());
/// ```
#[must_use]
pub fn expand_path(path: &Option<String>) -> Option<String> {
    path.as_ref()
        .map(|path| shellexpand::tilde(path).to_string())
}
