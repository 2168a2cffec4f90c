//! Turning a sub-menu selection string into a command line.

use std::fmt::{Display, Formatter};
use std::io::{BufRead, Write};

use log::debug;

use crate::console::Console;
use crate::error::Result;
use crate::menu::Menu;

pub const NAME_PROMPT: &str = "Enter name: ";
pub const VALUE_PROMPT: &str = "Enter value: ";
pub const UNSET_PROMPT: &str = "Enter name to remove: ";

/// How a selected entry contributes to the composed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind<'a> {
    /// Prompts for a setting name and appends it.
    ShowValue,
    /// Prompts for a name and a value. `flag` is emitted before the name when
    /// present.
    AddOrReplace { flag: Option<&'a str> },
    /// Emits `--unset` and prompts for the name to remove.
    Unset,
    /// A scope flag, moved to the front of the arguments.
    Scope(&'a str),
    /// Emitted as-is.
    Literal(&'a str),
}

impl<'a> EntryKind<'a> {
    #[must_use]
    pub fn classify(name: &'a str) -> Self {
        match name {
            "show value" => Self::ShowValue,
            "add/change" => Self::AddOrReplace { flag: None },
            "--add" | "--replace-all" => Self::AddOrReplace { flag: Some(name) },
            "--unset" => Self::Unset,
            "--global" | "--local" => Self::Scope(name),
            _ => Self::Literal(name),
        }
    }
}

/// Ordered tokens of one external-tool invocation, command name first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComposedCommand {
    tokens: Vec<String>,
}

impl ComposedCommand {
    #[must_use]
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The line shown to the user before running: `program` and the tokens
    /// joined with single spaces. Never executed.
    #[must_use]
    pub fn display_line(&self, program: &str) -> String {
        if self.tokens.is_empty() {
            program.to_string()
        } else {
            format!("{program} {self}")
        }
    }
}

impl Display for ComposedCommand {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.tokens.join(" "))
    }
}

impl From<ComposedCommand> for Vec<String> {
    fn from(value: ComposedCommand) -> Self {
        value.tokens
    }
}

/// Composes the command for `selection` against `menu`, prompting on
/// `console` for the free-text values the selected entries need.
///
/// Characters that do not address an entry are skipped.
pub fn compose<R: BufRead, W: Write>(
    menu: &Menu,
    selection: &str,
    console: &mut Console<R, W>,
) -> Result<ComposedCommand> {
    let mut arguments: Vec<String> = Vec::new();

    for letter in selection.chars() {
        let Some(entry) = menu.index().resolve(letter) else {
            debug!("Skipping `{letter}`, no entry in {}", menu.title());
            continue;
        };

        match EntryKind::classify(&entry.name) {
            EntryKind::ShowValue => {
                arguments.push(console.prompt_string(NAME_PROMPT)?);
            }
            EntryKind::AddOrReplace { flag } => {
                let name = console.prompt_string(NAME_PROMPT)?;
                if let Some(flag) = flag {
                    arguments.push(flag.to_string());
                }
                arguments.push(name);
                arguments.push(console.prompt_string(VALUE_PROMPT)?);
            }
            EntryKind::Unset => {
                let name = console.prompt_string(UNSET_PROMPT)?;
                arguments.push(entry.name.clone());
                arguments.push(name);
            }
            EntryKind::Scope(flag) => {
                arguments.insert(0, flag.to_string());
            }
            EntryKind::Literal(token) => {
                arguments.push(token.to_string());
            }
        }
    }

    if let Some(command) = menu.command() {
        arguments.insert(0, command.to_string());
    }

    debug!("Composed arguments: {arguments:?}");

    Ok(ComposedCommand::new(arguments))
}
