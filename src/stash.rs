//! Stash handling so checks run against only the staged content.
//!
//! [`StashGuard::push`] stashes the unstaged changes; the guard must be given
//! back with [`StashGuard::pop`] once the steps are done. If the guard is
//! dropped without that (a panic unwinding through the steps), it pops on drop
//! and can only log a failure.

use crate::error::HookError;
use crate::runner::CommandRunner;
use crate::types::HookCommand;
use log::{debug, error};

pub struct StashGuard<'a> {
    runner: &'a dyn CommandRunner,
    unstash: HookCommand,
    popped: bool,
}

impl<'a> StashGuard<'a> {
    /// Run the stash command. On failure nothing was stashed and no guard exists.
    pub fn push(runner: &'a dyn CommandRunner, stash: &HookCommand, unstash: &HookCommand) -> Result<Self, HookError> {
        debug!("Stashing unstaged changes");
        runner.run(stash)?;
        Ok(Self { runner, unstash: unstash.clone(), popped: false })
    }

    /// Restore the stashed changes.
    pub fn pop(mut self) -> Result<(), HookError> {
        self.popped = true;
        debug!("Restoring stashed changes");
        self.runner.run(&self.unstash).map(|_| ())
    }
}

impl Drop for StashGuard<'_> {
    fn drop(&mut self) {
        if self.popped {
            return;
        }
        debug!("Restoring stashed changes on unwind");
        if let Err(e) = self.runner.run(&self.unstash) {
            error!("Failed to restore stashed changes: {}", e);
        }
    }
}
