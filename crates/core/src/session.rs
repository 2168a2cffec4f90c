//! The interactive loop: main menu, sub-menu, compose, confirm, execute.
//!
//! Every sub-menu cycle, whether its command ran, was declined or was never
//! composed, returns to the main menu. The loop ends on empty input or a
//! letter with no main menu entry.

use std::io::{BufRead, Write};

use log::debug;

use crate::compose::compose;
use crate::confirm::{confirm_and_execute, ConfirmOutcome, ExecutionOptions};
use crate::console::Console;
use crate::error::Result;
use crate::execution::CommandRunner;
use crate::menu::Menu;
use crate::render::render_menu;

pub const MAIN_PROMPT: &str = "Option: ";
pub const SUB_MENU_PROMPT: &str = "Options: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    MainMenu,
    Terminated,
}

/// Result of one sub-menu cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubMenuOutcome {
    /// The selection was empty; nothing was composed.
    NothingSelected,
    Finished(ConfirmOutcome),
}

pub struct Session<'a, R, W, X> {
    main_menu: &'a Menu,
    console: Console<R, W>,
    runner: X,
    options: ExecutionOptions,
}

impl<'a, R, W, X> Session<'a, R, W, X>
where
    R: BufRead,
    W: Write,
    X: CommandRunner,
{
    pub fn new(
        main_menu: &'a Menu,
        console: Console<R, W>,
        runner: X,
        options: ExecutionOptions,
    ) -> Self {
        Self {
            main_menu,
            console,
            runner,
            options,
        }
    }

    /// Runs the main menu until it terminates.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing to the console fails.
    pub fn run(&mut self) -> Result<()> {
        while self.step()? == MenuState::MainMenu {}
        Ok(())
    }

    /// Shows the main menu once and handles the chosen entry.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing to the console fails.
    pub fn step(&mut self) -> Result<MenuState> {
        render_menu(self.console.output(), self.main_menu)?;

        let Some(letter) = self.console.prompt_char(MAIN_PROMPT)? else {
            debug!("No option given, exiting");
            return Ok(MenuState::Terminated);
        };

        let Some(entry) = self.main_menu.index().resolve(letter) else {
            debug!("No entry for `{letter}`, exiting");
            return Ok(MenuState::Terminated);
        };

        match &entry.sub_menu {
            Some(sub_menu) => {
                self.run_sub_menu(sub_menu)?;
            }
            None => debug!("`{}` has no sub-menu", entry.name),
        }

        Ok(MenuState::MainMenu)
    }

    /// Shows `sub_menu`, composes a command from the selection and hands it
    /// to the confirm-execute step.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing to the console fails.
    pub fn run_sub_menu(&mut self, sub_menu: &Menu) -> Result<SubMenuOutcome> {
        render_menu(self.console.output(), sub_menu)?;

        let selection = self.console.prompt_string(SUB_MENU_PROMPT)?;
        if selection.is_empty() {
            debug!("Nothing selected in {}", sub_menu.title());
            return Ok(SubMenuOutcome::NothingSelected);
        }

        let command = compose(sub_menu, &selection, &mut self.console)?;
        let outcome =
            confirm_and_execute(&mut self.console, &mut self.runner, &self.options, &command)?;

        Ok(SubMenuOutcome::Finished(outcome))
    }

    pub fn runner(&self) -> &X {
        &self.runner
    }

    /// Ends the session, giving back the console and the runner.
    pub fn into_parts(self) -> (Console<R, W>, X) {
        (self.console, self.runner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::execution::RunStatus;
    use crate::file_handling::load_main_menu;
    use std::io::Cursor;

    #[derive(Default)]
    struct RecordingRunner {
        calls: Vec<Vec<String>>,
    }

    impl CommandRunner for RecordingRunner {
        fn run(&mut self, _program: &str, arguments: &[String]) -> Result<RunStatus> {
            self.calls.push(arguments.to_vec());
            Ok(RunStatus::Success)
        }
    }

    fn session<'a>(
        main_menu: &'a Menu,
        input: &str,
    ) -> Session<'a, Cursor<Vec<u8>>, Vec<u8>, RecordingRunner> {
        Session::new(
            main_menu,
            Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new()),
            RecordingRunner::default(),
            ExecutionOptions::default(),
        )
    }

    #[test]
    fn test_empty_input_terminates() {
        let main_menu = load_main_menu(None).unwrap();
        let mut session = session(&main_menu, "");

        assert_eq!(session.step().unwrap(), MenuState::Terminated);
        assert!(session.runner().calls.is_empty());
    }

    #[test]
    fn test_unmapped_letter_terminates() {
        let main_menu = load_main_menu(None).unwrap();
        let mut session = session(&main_menu, "z\n");

        assert_eq!(session.step().unwrap(), MenuState::Terminated);
    }

    #[test]
    fn test_entry_without_sub_menu_returns_to_main_menu() {
        let main_menu = load_main_menu(None).unwrap();
        let mut session = session(&main_menu, "d\n");

        assert_eq!(session.step().unwrap(), MenuState::MainMenu);
        assert!(session.runner().calls.is_empty());
    }

    #[test]
    fn test_sub_menu_cycle_returns_to_main_menu() {
        let main_menu = load_main_menu(None).unwrap();
        let mut session = session(&main_menu, "a\nc\n\n");

        assert_eq!(session.step().unwrap(), MenuState::MainMenu);
        assert_eq!(session.runner().calls, vec![vec!["config", "--list"]]);
        assert_eq!(session.step().unwrap(), MenuState::Terminated);
    }

    #[test]
    fn test_empty_selection_skips_confirmation() {
        let main_menu = load_main_menu(None).unwrap();
        let config = main_menu.find_sub_menu("config").unwrap();
        let mut session = session(&main_menu, "\n");

        let outcome = session.run_sub_menu(config).unwrap();
        assert_eq!(outcome, SubMenuOutcome::NothingSelected);

        let (console, runner) = session.into_parts();
        assert!(runner.calls.is_empty());
        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(!output.contains("Execute?"));
    }

    #[test]
    fn test_declined_sub_menu_outcome() {
        let main_menu = load_main_menu(None).unwrap();
        let config = main_menu.find_sub_menu("config").unwrap();
        let mut session = session(&main_menu, "c\nn\n");

        let outcome = session.run_sub_menu(config).unwrap();
        assert_eq!(
            outcome,
            SubMenuOutcome::Finished(ConfirmOutcome::Declined)
        );
    }
}
