use serde::{Deserialize, Serialize};

/// Column width used when a menu definition does not give one.
pub const DEFAULT_COLUMN_WIDTH: usize = 8;

fn default_column_width() -> usize {
    DEFAULT_COLUMN_WIDTH
}

/// One selectable line of a menu as written in catalog YAML.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct EntryDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub sub_menu: Option<MenuDefinition>,
}

/// A menu as written in catalog YAML.
///
/// `command` is the token placed first on every command line composed from
/// this menu. For a sub-menu it falls back to the name of the entry that
/// opens it.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MenuDefinition {
    pub title: String,
    pub command: Option<String>,
    #[serde(default = "default_column_width")]
    pub column_width: usize,
    pub entries: Vec<EntryDefinition>,
}
