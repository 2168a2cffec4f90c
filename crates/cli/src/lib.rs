//! git-helper CLI Library
//!
//! This crate provides the command-line interface for git-helper, an
//! interactive menu that composes `git` command lines, asks for confirmation
//! and runs them.
//!
//! # Architecture
//!
//! The CLI is organized into two modules:
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`settings`]: Merging arguments with the settings file
//!
//! The menus, composition and execution live in `git_helper_core`.
//!
//! # Examples
//!
//! The CLI binary (`gh`) can be used in several ways:
//!
//! ```bash
//! # Interactive mode - shows the main menu until empty input
//! gh
//!
//! # Open the config menu directly, once
//! gh config
//!
//! # Show composed commands without running them
//! gh --dry-run
//!
//! # Run composed commands without asking
//! gh --force
//! ```

pub mod cli_args;
pub mod settings;
