//! Showing a composed command, asking whether to run it, and running it.

use std::io::{BufRead, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use log::{info, warn};

use crate::compose::ComposedCommand;
use crate::config::DEFAULT_PROGRAM;
use crate::console::Console;
use crate::error::Result;
use crate::execution::{CommandRunner, RunStatus};

pub const CONFIRM_PROMPT: &str = "\nExecute? (Y/n) ";

/// The user's answer to the confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunChoice {
    Yes,
    No,
}

impl RunChoice {
    /// Only an exact `n` or `N` declines. Anything else, including an empty
    /// answer, accepts.
    #[must_use]
    pub fn from_response(response: &str) -> Self {
        match response {
            "n" | "N" => Self::No,
            _ => Self::Yes,
        }
    }
}

/// What happened to a composed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Executed(RunStatus),
    /// Accepted, but the program could not be started.
    SpawnFailed,
    Declined,
    DryRun,
}

/// Settings for the confirm-execute step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOptions {
    /// External program the composed tokens are passed to.
    pub program: String,
    /// Show the command but never run it.
    pub dry_run: bool,
    /// Run without asking.
    pub force: bool,
    /// Color the echoed command line.
    pub color: bool,
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            dry_run: false,
            force: false,
            color: false,
        }
    }
}

/// Echoes `command`, asks for confirmation and runs it on accept.
///
/// Failures of the external program are reported on the console and in the
/// returned outcome; they are not errors.
///
/// # Errors
///
/// Returns an error only if writing to the console fails.
pub fn confirm_and_execute<R, W, X>(
    console: &mut Console<R, W>,
    runner: &mut X,
    options: &ExecutionOptions,
    command: &ComposedCommand,
) -> Result<ConfirmOutcome>
where
    R: BufRead,
    W: Write,
    X: CommandRunner,
{
    writeln!(console.output())?;
    write_command_line(
        console.output(),
        &command.display_line(&options.program),
        options.color,
    )?;

    if options.dry_run {
        writeln!(console.output(), "Dry run is specified, not executing.")?;
        return Ok(ConfirmOutcome::DryRun);
    }

    if !options.force {
        let response = console.prompt_string(CONFIRM_PROMPT)?;
        writeln!(console.output())?;

        if RunChoice::from_response(&response) == RunChoice::No {
            info!("Execution of `{command}` declined");
            return Ok(ConfirmOutcome::Declined);
        }
    }

    console.flush()?;

    let outcome = match runner.run(&options.program, command.tokens()) {
        Ok(status) => {
            writeln!(console.output())?;
            if let RunStatus::Failure(code) = status {
                report_failure(console.output(), &options.program, code)?;
            }
            ConfirmOutcome::Executed(status)
        }
        Err(e) => {
            warn!("Could not run `{}`: {e}", options.program);
            writeln!(console.output(), "Could not run {}: {e}", options.program)?;
            ConfirmOutcome::SpawnFailed
        }
    };

    console.flush()?;
    Ok(outcome)
}

fn write_command_line<W: Write>(out: &mut W, line: &str, color: bool) -> Result<()> {
    if color {
        queue!(
            out,
            SetForegroundColor(Color::Red),
            Print(line),
            ResetColor,
            Print("\n")
        )?;
    } else {
        writeln!(out, "{line}")?;
    }

    Ok(())
}

fn report_failure<W: Write>(out: &mut W, program: &str, code: Option<i32>) -> Result<()> {
    match code {
        Some(code) => writeln!(out, "{program} exited with status {code}")?,
        None => writeln!(out, "{program} was terminated by a signal")?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::{self, Cursor};

    #[derive(Default)]
    struct RecordingRunner {
        calls: Vec<(String, Vec<String>)>,
        status: Option<RunStatus>,
    }

    impl CommandRunner for RecordingRunner {
        fn run(&mut self, program: &str, arguments: &[String]) -> Result<RunStatus> {
            self.calls.push((program.to_string(), arguments.to_vec()));
            match self.status {
                Some(status) => Ok(status),
                None => Err(Error::Stdio(io::Error::new(
                    io::ErrorKind::NotFound,
                    "not found",
                ))),
            }
        }
    }

    fn succeeding_runner() -> RecordingRunner {
        RecordingRunner {
            calls: Vec::new(),
            status: Some(RunStatus::Success),
        }
    }

    fn config_list() -> ComposedCommand {
        ComposedCommand::new(vec!["config".to_string(), "--list".to_string()])
    }

    fn run(
        response: &str,
        runner: &mut RecordingRunner,
        options: &ExecutionOptions,
    ) -> (ConfirmOutcome, String) {
        let mut console = Console::new(Cursor::new(response.as_bytes().to_vec()), Vec::new());
        let outcome = confirm_and_execute(&mut console, runner, options, &config_list()).unwrap();
        (outcome, String::from_utf8(console.into_output()).unwrap())
    }

    #[test]
    fn test_run_choice_from_response() {
        for accepted in ["", "y", "Y", "Yes", "anything-else", "no", "nn"] {
            assert_eq!(RunChoice::from_response(accepted), RunChoice::Yes, "{accepted}");
        }
        assert_eq!(RunChoice::from_response("n"), RunChoice::No);
        assert_eq!(RunChoice::from_response("N"), RunChoice::No);
    }

    #[test]
    fn test_accepting_responses_execute() {
        for response in ["\n", "y\n", "Yes\n", "anything-else\n", ""] {
            let mut runner = succeeding_runner();
            let (outcome, _) = run(response, &mut runner, &ExecutionOptions::default());

            assert_eq!(outcome, ConfirmOutcome::Executed(RunStatus::Success));
            assert_eq!(
                runner.calls,
                vec![(
                    "git".to_string(),
                    vec!["config".to_string(), "--list".to_string()]
                )]
            );
        }
    }

    #[test]
    fn test_declining_responses_skip_execution() {
        for response in ["n\n", "N\n", "  n  \n"] {
            let mut runner = succeeding_runner();
            let (outcome, _) = run(response, &mut runner, &ExecutionOptions::default());

            assert_eq!(outcome, ConfirmOutcome::Declined);
            assert!(runner.calls.is_empty());
        }
    }

    #[test]
    fn test_echo_and_prompt_output() {
        let mut runner = succeeding_runner();
        let (_, output) = run("y\n", &mut runner, &ExecutionOptions::default());
        assert_eq!(output, "\ngit config --list\n\nExecute? (Y/n) \n\n");
    }

    #[test]
    fn test_colored_echo() {
        let mut runner = succeeding_runner();
        let options = ExecutionOptions {
            color: true,
            ..ExecutionOptions::default()
        };
        let (_, output) = run("n\n", &mut runner, &options);

        assert!(output.contains("git config --list"));
        assert!(output.contains('\u{1b}'));
    }

    #[test]
    fn test_failure_status_is_reported() {
        let mut runner = RecordingRunner {
            calls: Vec::new(),
            status: Some(RunStatus::Failure(Some(128))),
        };
        let (outcome, output) = run("\n", &mut runner, &ExecutionOptions::default());

        assert_eq!(outcome, ConfirmOutcome::Executed(RunStatus::Failure(Some(128))));
        assert!(output.ends_with("git exited with status 128\n"));
    }

    #[test]
    fn test_spawn_failure_is_reported_not_returned() {
        let mut runner = RecordingRunner::default();
        let (outcome, output) = run("\n", &mut runner, &ExecutionOptions::default());

        assert_eq!(outcome, ConfirmOutcome::SpawnFailed);
        assert!(output.contains("Could not run git:"));
    }

    #[test]
    fn test_dry_run_never_prompts_or_executes() {
        let mut runner = succeeding_runner();
        let options = ExecutionOptions {
            dry_run: true,
            ..ExecutionOptions::default()
        };
        let (outcome, output) = run("", &mut runner, &options);

        assert_eq!(outcome, ConfirmOutcome::DryRun);
        assert!(runner.calls.is_empty());
        assert!(!output.contains("Execute?"));
    }

    #[test]
    fn test_force_skips_prompt() {
        let mut runner = succeeding_runner();
        let options = ExecutionOptions {
            force: true,
            program: "echo".to_string(),
            ..ExecutionOptions::default()
        };
        let (outcome, output) = run("", &mut runner, &options);

        assert_eq!(outcome, ConfirmOutcome::Executed(RunStatus::Success));
        assert_eq!(runner.calls[0].0, "echo");
        assert_eq!(output, "\necho config --list\n\n");
    }
}
