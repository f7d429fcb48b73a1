/// Tests for hook orchestration
#[cfg(test)]
mod tests {
    use crate::error::HookError;
    use crate::hook::{decide_exit_code, run_hook, run_steps};
    use crate::runner::CommandRunner;
    use crate::types::{CommandResult, HookCommand, HookCommands, HookPlan, Step};
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Records every command and fails the ones it was told to fail
    #[derive(Default)]
    struct FakeRunner {
        calls: RefCell<Vec<String>>,
        failures: HashMap<String, i32>,
    }

    impl FakeRunner {
        fn failing(command: &str, code: i32) -> Self {
            let mut runner = FakeRunner::default();
            runner.failures.insert(command.to_string(), code);
            runner
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl CommandRunner for FakeRunner {
        fn run(&self, command: &HookCommand) -> Result<CommandResult, HookError> {
            let line = command.tokens().join(" ");
            self.calls.borrow_mut().push(line.clone());
            match self.failures.get(&line) {
                Some(&code) => Err(HookError::CommandFailed { command: line, code }),
                None => Ok(CommandResult { stdout: format!("{} ok\n", line), stderr: String::new() }),
            }
        }
    }

    fn plan_with_stash() -> HookPlan {
        HookPlan { stash_first: true, ..HookPlan::default() }
    }

    #[test]
    fn test_defaults_run_both_steps_in_order() {
        let runner = FakeRunner::default();
        let record = run_hook(&runner, &HookPlan::default()).unwrap();

        assert_eq!(runner.calls(), vec!["make build", "py.test source/tests"]);
        assert_eq!(record.steps(), vec![Step::MakeRpm, Step::RunTests]);
        assert_eq!(record.entries()[0].result.stdout, "make build ok\n");
        assert_eq!(decide_exit_code(&record), 0);
    }

    #[test]
    fn test_stash_wraps_all_steps() {
        let runner = FakeRunner::default();
        run_hook(&runner, &plan_with_stash()).unwrap();

        assert_eq!(
            runner.calls(),
            vec!["git stash -q --keep-index", "make build", "py.test source/tests", "git stash pop -q"]
        );
    }

    #[test]
    fn test_failing_step_stops_later_steps_and_still_unstashes() {
        let runner = FakeRunner::failing("make build", 2);
        let err = run_hook(&runner, &plan_with_stash()).unwrap_err();

        assert_eq!(err.exit_code(), 2);
        assert_eq!(runner.calls(), vec!["git stash -q --keep-index", "make build", "git stash pop -q"]);
    }

    #[test]
    fn test_failing_stash_runs_nothing_else() {
        let runner = FakeRunner::failing("git stash -q --keep-index", 128);
        let err = run_hook(&runner, &plan_with_stash()).unwrap_err();

        assert_eq!(err.exit_code(), 128);
        assert_eq!(runner.calls(), vec!["git stash -q --keep-index"]);
    }

    #[test]
    fn test_unstash_failure_replaces_step_failure() {
        let mut runner = FakeRunner::failing("py.test source/tests", 4);
        runner.failures.insert("git stash pop -q".to_string(), 1);

        let err = run_hook(&runner, &plan_with_stash()).unwrap_err();
        assert_eq!(err.exit_code(), 1);
        assert_eq!(runner.calls().last().map(String::as_str), Some("git stash pop -q"));
    }

    #[test]
    fn test_without_stash_no_git_commands_run() {
        let runner = FakeRunner::default();
        run_hook(&runner, &HookPlan::default()).unwrap();
        assert!(runner.calls().iter().all(|c| !c.starts_with("git")));
    }

    #[test]
    fn test_sdist_runs_between_rpm_and_tests() {
        let runner = FakeRunner::default();
        let plan = HookPlan { make_sdist: true, ..HookPlan::default() };
        let record = run_steps(&runner, &plan).unwrap();

        assert_eq!(record.steps(), vec![Step::MakeRpm, Step::MakeSdist, Step::RunTests]);
        assert_eq!(runner.calls()[1], "python setup.py sdist");
    }

    #[test]
    fn test_no_steps_configured_exits_one() {
        let runner = FakeRunner::default();
        let plan = HookPlan { make_rpm: false, run_tests: false, ..HookPlan::default() };
        let record = run_hook(&runner, &plan).unwrap();

        assert!(record.is_empty());
        assert!(runner.calls().is_empty());
        assert_eq!(decide_exit_code(&record), 1);
    }

    #[test]
    fn test_custom_commands_are_used() {
        let runner = FakeRunner::default();
        let plan = HookPlan {
            commands: HookCommands {
                make_rpm: HookCommand::argv(["make", "rpm"]),
                run_tests: HookCommand::line("cargo test --quiet"),
                ..HookCommands::default()
            },
            ..HookPlan::default()
        };
        run_hook(&runner, &plan).unwrap();
        assert_eq!(runner.calls(), vec!["make rpm", "cargo test --quiet"]);
    }
}
