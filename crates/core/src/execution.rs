use std::process::{Command, Stdio};

use log::info;

use crate::error::Result;

/// How a finished subprocess ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    /// Non-zero exit. `None` when the process was ended by a signal.
    Failure(Option<i32>),
}

/// Runs the external tool to completion.
pub trait CommandRunner {
    /// Runs `program` with `arguments` as discrete process arguments and
    /// waits for it to finish.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or waited on.
    fn run(&mut self, program: &str, arguments: &[String]) -> Result<RunStatus>;
}

/// Runs commands as child processes attached to this process's terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&mut self, program: &str, arguments: &[String]) -> Result<RunStatus> {
        info!("Running `{program}` with arguments {arguments:?}");

        let exit_status = Command::new(program)
            .args(arguments)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()?
            .wait()?;

        if exit_status.success() {
            Ok(RunStatus::Success)
        } else {
            Ok(RunStatus::Failure(exit_status.code()))
        }
    }
}
