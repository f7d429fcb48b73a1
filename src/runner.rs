//! External command execution for the hook.
//!
//! Every step (and the stash pair) goes through a [`CommandRunner`]. The
//! system implementation spawns the child with both streams piped and waits
//! for it; there is no timeout.

use crate::error::HookError;
use crate::types::{CommandResult, HookCommand};
use log::{debug, error, trace};
use std::process::{Command, ExitStatus, Stdio};
use std::time::Instant;

/// Runs one external command to completion.
///
/// Succeeds only when the child exits 0 with nothing on stderr. Anything else
/// is a [`HookError`] the caller propagates; it is never retried.
pub trait CommandRunner {
    fn run(&self, command: &HookCommand) -> Result<CommandResult, HookError>;
}

/// Spawns real child processes in the current working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command: &HookCommand) -> Result<CommandResult, HookError> {
        let tokens = command.tokens();
        debug!("Running {:?}", tokens);

        let Some((program, args)) = tokens.split_first() else {
            let source = std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command");
            error!("'{}' failed: {}", command, source);
            return Err(HookError::Spawn { command: command.to_string(), source });
        };

        let start = Instant::now();

        let output = match Command::new(program).args(args).stdout(Stdio::piped()).stderr(Stdio::piped()).output() {
            Ok(output) => output,
            Err(e) => {
                error!("'{:?}' failed: {}", tokens, e);
                return Err(HookError::Spawn { command: command.to_string(), source: e });
            }
        };

        trace!("{:?} finished in {:?} with {}", tokens, start.elapsed(), output.status);

        let result = CommandResult {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        };

        check_result(command, exit_code(output.status), result)
    }
}

/// Apply the success rule to a finished child, logging its output on failure.
pub fn check_result(command: &HookCommand, code: i32, result: CommandResult) -> Result<CommandResult, HookError> {
    if code == 0 && result.stderr.is_empty() {
        return Ok(result);
    }

    if !result.stdout.is_empty() {
        error!("{}", result.stdout);
    }
    if !result.stderr.is_empty() {
        error!("{}", result.stderr);
    }

    Err(HookError::CommandFailed { command: command.to_string(), code })
}

/// The child's exit code; a signal-killed child reports 128 + signal on Unix.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod runner_test;
