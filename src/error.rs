//! The hook's single error type.
//!
//! Every error is fatal to the invocation; `main` turns it into the process
//! exit code via [`HookError::exit_code`].

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HookError {
    /// The child could not be started at all (not found, permission denied, empty command).
    #[error("'{command}' failed: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The child ran but exited non-zero or wrote to stderr.
    #[error("'{command}' failed with exit code {code}")]
    CommandFailed { command: String, code: i32 },

    #[error("config file not found: {}", .0.display())]
    ConfigMissing(PathBuf),

    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl HookError {
    /// Exit code the hook process ends with.
    ///
    /// A failed command propagates the child's own code verbatim, which is 0
    /// when the child exited cleanly but wrote to stderr.
    pub fn exit_code(&self) -> i32 {
        match self {
            HookError::CommandFailed { code, .. } => *code,
            _ => 1,
        }
    }

    /// Whether the error was already reported through the log by the runner.
    pub fn is_logged(&self) -> bool {
        matches!(self, HookError::Spawn { .. } | HookError::CommandFailed { .. })
    }
}
