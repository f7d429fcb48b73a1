//! Pre-commit orchestration.
//!
//! Runs the enabled steps in order (make_rpm, make_sdist, run_tests),
//! optionally inside a stash/unstash pair, and decides the exit code.

use crate::error::HookError;
use crate::runner::CommandRunner;
use crate::stash::StashGuard;
use crate::types::{CommandResult, HookPlan, RunRecord, Step};
use log::{debug, error, warn};

/// Validate the packaging build.
pub fn make_rpm(runner: &dyn CommandRunner, plan: &HookPlan) -> Result<CommandResult, HookError> {
    runner.run(&plan.commands.make_rpm)
}

/// Build a source distribution. Only runs when explicitly enabled.
pub fn make_sdist(runner: &dyn CommandRunner, plan: &HookPlan) -> Result<CommandResult, HookError> {
    runner.run(&plan.commands.make_sdist)
}

/// Run the test suite.
pub fn run_tests(runner: &dyn CommandRunner, plan: &HookPlan) -> Result<CommandResult, HookError> {
    runner.run(&plan.commands.run_tests)
}

fn run_step(step: Step, runner: &dyn CommandRunner, plan: &HookPlan) -> Result<CommandResult, HookError> {
    match step {
        Step::MakeRpm => make_rpm(runner, plan),
        Step::MakeSdist => make_sdist(runner, plan),
        Step::RunTests => run_tests(runner, plan),
    }
}

/// Run every enabled step, stopping at the first failure.
pub fn run_steps(runner: &dyn CommandRunner, plan: &HookPlan) -> Result<RunRecord, HookError> {
    let mut record = RunRecord::new();

    for step in plan.steps() {
        debug!("{}: START", step.label());
        let result = run_step(step, runner, plan)?;
        warn!("{}: PASS", step.label());
        record.push(step, result);
    }

    Ok(record)
}

/// Run the whole hook: stash, steps, unstash.
///
/// The unstash runs whether or not a step failed. If it fails itself, its
/// error replaces the step outcome.
pub fn run_hook(runner: &dyn CommandRunner, plan: &HookPlan) -> Result<RunRecord, HookError> {
    if !plan.stash_first {
        return run_steps(runner, plan);
    }

    let guard = StashGuard::push(runner, &plan.commands.stash, &plan.commands.unstash)?;
    let outcome = run_steps(runner, plan);

    if let Err(e) = guard.pop() {
        if let Err(step_err) = &outcome {
            error!("Step failure superseded by unstash failure: {}", step_err);
        }
        return Err(e);
    }

    outcome
}

/// Exit code for a run that finished without a failing command.
///
/// This only checks that at least one step ran; a failing step never gets
/// here because it already ended the run with its own code.
pub fn decide_exit_code(record: &RunRecord) -> i32 {
    if record.is_empty() { 1 } else { 0 }
}

#[cfg(test)]
#[path = "hook_test.rs"]
mod hook_test;
