use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Error parsing the built-in catalog: {}", .0)]
    BuiltinCatalog(serde_yaml::Error),

    #[error("No entries were found in menu `{}`.", .0)]
    EmptyMenu(String),

    #[error("Menu `{}` has an entry with an empty name.", .0)]
    EmptyEntryName(String),

    #[error("Menu `{}` has {} entries, only {} letters are available.", .title, .count, .max)]
    TooManyEntries {
        title: String,
        count: usize,
        max: usize,
    },

    #[error("Entry `{}` opens a sub-menu inside a sub-menu; only two menu levels are supported.", .0)]
    NestedSubMenu(String),

    #[error("No menu found for `{}`.", .0)]
    MenuNotFound(String),

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn too_many_entries(title: String, count: usize, max: usize) -> Self {
        Self::TooManyEntries { title, count, max }
    }
}
