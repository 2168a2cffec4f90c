//! git-helper Core Library
//!
//! This crate provides the core functionality for git-helper, an interactive
//! menu that builds command lines for an external version-control tool,
//! shows them for confirmation and runs them.
//!
//! # Key Features
//!
//! - **Catalogs**: Menus and sub-menus defined in YAML, built in or user supplied
//! - **Letter Addressing**: Entries addressed by consecutive letters from `a`
//! - **Command Composition**: Selection strings turned into ordered arguments,
//!   prompting for setting names and values
//! - **Confirm and Execute**: Echo, go/no-go prompt and a subprocess attached
//!   to the terminal
//! - **Error Handling**: Error types for every startup failure mode
//!
//! # Examples
//!
//! Composing a command from a selection string:
//!
//! ```
//! use std::io::Cursor;
//!
//! use git_helper_core::compose::compose;
//! use git_helper_core::console::Console;
//! use git_helper_core::file_handling::load_main_menu;
//!
//! let main_menu = load_main_menu(None)?;
//! let config = main_menu.find_sub_menu("config").expect("built-in config menu");
//!
//! let mut console = Console::new(Cursor::new(b"user.name\n".to_vec()), Vec::new());
//! let command = compose(config, "a", &mut console)?;
//!
//! assert_eq!(command.tokens(), ["config", "user.name"]);
//! # Ok::<(), git_helper_core::error::Error>(())
//! ```

pub mod catalog_definitions;
pub mod compose;
pub mod config;
pub mod confirm;
pub mod console;
pub mod error;
pub mod execution;
pub mod file_handling;
pub mod letter_index;
pub mod menu;
pub mod render;
pub mod session;
