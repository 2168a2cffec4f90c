//! Validated, immutable menus built from catalog definitions.

use crate::catalog_definitions::MenuDefinition;
use crate::error::{Error, Result};
use crate::letter_index::LetterIndex;

/// One selectable action.
///
/// An entry either opens a sub-menu or contributes its `name` (a literal flag
/// or a placeholder such as `show value`) to a composed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub name: String,
    pub description: String,
    pub sub_menu: Option<Menu>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    title: String,
    command: Option<String>,
    column_width: usize,
    index: LetterIndex,
}

impl Menu {
    /// Creates a menu from already-built entries.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no entries, an entry name is empty, or
    /// there are more entries than letters.
    pub fn new(
        title: String,
        command: Option<String>,
        column_width: usize,
        entries: Vec<MenuEntry>,
    ) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::EmptyMenu(title));
        }

        if entries.iter().any(|entry| entry.name.is_empty()) {
            return Err(Error::EmptyEntryName(title));
        }

        let index = LetterIndex::build(&title, entries)?;

        Ok(Self {
            title,
            command,
            column_width,
            index,
        })
    }

    /// Validates a catalog definition and builds the top-level menu from it.
    ///
    /// # Errors
    ///
    /// Returns an error if any menu is invalid or a sub-menu itself contains
    /// a sub-menu.
    pub fn from_definition(definition: &MenuDefinition) -> Result<Self> {
        Self::build(definition, None)
    }

    fn build(definition: &MenuDefinition, parent_name: Option<&str>) -> Result<Self> {
        let is_sub_menu = parent_name.is_some();
        let mut entries = Vec::with_capacity(definition.entries.len());

        for entry in &definition.entries {
            let sub_menu = match &entry.sub_menu {
                None => None,
                Some(_) if is_sub_menu => return Err(Error::NestedSubMenu(entry.name.clone())),
                Some(sub_menu) => Some(Self::build(sub_menu, Some(&entry.name))?),
            };

            entries.push(MenuEntry {
                name: entry.name.clone(),
                description: entry.description.clone(),
                sub_menu,
            });
        }

        let command = definition
            .command
            .clone()
            .or_else(|| parent_name.map(str::to_string));

        Self::new(
            definition.title.clone(),
            command,
            definition.column_width,
            entries,
        )
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Token placed first on commands composed from this menu.
    #[must_use]
    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    #[must_use]
    pub fn column_width(&self) -> usize {
        self.column_width
    }

    #[must_use]
    pub fn index(&self) -> &LetterIndex {
        &self.index
    }

    /// Finds the sub-menu opened by the entry with the given letter or name.
    #[must_use]
    pub fn find_sub_menu(&self, letter_or_name: &str) -> Option<&Menu> {
        let mut chars = letter_or_name.chars();
        let by_letter = match (chars.next(), chars.next()) {
            (Some(letter), None) => self.index.resolve(letter),
            _ => None,
        };

        by_letter
            .or_else(|| {
                self.index
                    .entries()
                    .iter()
                    .find(|entry| entry.name == letter_or_name)
            })
            .and_then(|entry| entry.sub_menu.as_ref())
    }
}
