//! Reading settings and catalogs from disk.
//!
//! This module loads the optional settings file and the menu catalog, either
//! the one built into the binary or a user-supplied YAML file, and validates
//! catalogs into [`Menu`] values.

use std::fs::File;
use std::path::Path;

use crate::catalog_definitions::MenuDefinition;
use crate::config::Settings;
use crate::error::{Error, Result};
use crate::menu::Menu;

/// The catalog shipped with git-helper.
const BUILTIN_CATALOG: &str = include_str!("../catalog.yml");

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    match File::open(path) {
        Ok(reader) => Ok(reader),
        Err(e) => Err(Error::io_error(
            file_description.to_string(),
            path.to_string(),
            e,
        )),
    }
}

/// Reads the settings file.
///
/// # Returns
///
/// `None` if the file doesn't exist, otherwise the parsed settings with a
/// relative `catalog_path` resolved against the settings file's directory.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or is not valid
/// settings YAML.
pub fn get_settings(settings_path: &str) -> Result<Option<Settings>> {
    if !Path::exists(Path::new(settings_path)) {
        return Ok(None);
    }

    let reader = get_reader("settings", settings_path)?;

    let settings: Settings = serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "settings".to_string(),
            settings_path.to_string(),
            e,
        )
    })?;

    Ok(Some(
        settings.with_catalog_relative_to(Path::new(settings_path).parent()),
    ))
}

/// Parses the catalog built into the binary.
///
/// # Errors
///
/// Returns an error if the built-in catalog is not valid catalog YAML.
pub fn get_builtin_catalog_definition() -> Result<MenuDefinition> {
    serde_yaml::from_str(BUILTIN_CATALOG).map_err(Error::BuiltinCatalog)
}

/// Reads a catalog definition from a YAML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid catalog YAML.
pub fn get_catalog_definition(catalog_path: &str) -> Result<MenuDefinition> {
    let reader = get_reader("catalog", catalog_path)?;

    serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "catalog".to_string(),
            catalog_path.to_string(),
            e,
        )
    })
}

/// Loads and validates the main menu.
///
/// Uses the catalog at `catalog_path` when given, the built-in catalog
/// otherwise.
///
/// # Errors
///
/// Returns an error if the catalog cannot be read or parsed, or fails
/// validation (empty menus, empty names, more than 26 entries, sub-menus
/// nested more than one level).
///
/// # Examples
///
/// ```
/// use git_helper_core::file_handling::load_main_menu;
///
/// let main_menu = load_main_menu(None)?;
/// assert_eq!(main_menu.title(), "MAIN MENU");
/// # Ok::<(), git_helper_core::error::Error>(())
/// ```
pub fn load_main_menu(catalog_path: Option<&str>) -> Result<Menu> {
    let definition = match catalog_path {
        Some(catalog_path) => get_catalog_definition(catalog_path)?,
        None => get_builtin_catalog_definition()?,
    };

    Menu::from_definition(&definition)
}
