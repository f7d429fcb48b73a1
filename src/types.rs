/// Core data structures for a hook run
///
/// This module defines the commands the hook spawns, the output captured from
/// them, and the per-step record accumulated during one invocation.
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A command to spawn, written either as one line or as an explicit argv
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HookCommand {
    /// Split on whitespace before spawning: "make build" -> ["make", "build"]
    Line(String),
    /// Passed through unsplit
    Argv(Vec<String>),
}

impl HookCommand {
    pub fn line(line: &str) -> Self {
        HookCommand::Line(line.to_string())
    }

    pub fn argv<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        HookCommand::Argv(args.into_iter().map(Into::into).collect())
    }

    /// Tokens handed to the process spawner, program first
    pub fn tokens(&self) -> Vec<String> {
        match self {
            HookCommand::Line(line) => line.split_whitespace().map(|s| s.to_string()).collect(),
            HookCommand::Argv(args) => args.clone(),
        }
    }
}

impl fmt::Display for HookCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HookCommand::Line(line) => write!(f, "{}", line),
            HookCommand::Argv(args) => write!(f, "{:?}", args),
        }
    }
}

/// Output captured from one successful command invocation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
}

/// A named step of the hook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    MakeRpm,
    MakeSdist,
    RunTests,
}

impl Step {
    /// Key used in the run record and JSON output
    pub fn name(&self) -> &'static str {
        match self {
            Step::MakeRpm => "make_rpm",
            Step::MakeSdist => "make_sdist",
            Step::RunTests => "run_tests",
        }
    }

    /// Label used in START/PASS log lines
    pub fn label(&self) -> &'static str {
        match self {
            Step::MakeRpm => "RPM Build",
            Step::MakeSdist => "SDIST Build",
            Step::RunTests => "TESTS RUN",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One completed step: serializes as `{"<step name>": <result>}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunEntry {
    pub step: Step,
    pub result: CommandResult,
}

impl Serialize for RunEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.step.name(), &self.result)?;
        map.end()
    }
}

/// Ordered results of every step that completed during one invocation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RunRecord {
    entries: Vec<RunEntry>,
}

impl RunRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, step: Step, result: CommandResult) {
        self.entries.push(RunEntry { step, result });
    }

    pub fn entries(&self) -> &[RunEntry] {
        &self.entries
    }

    pub fn steps(&self) -> Vec<Step> {
        self.entries.iter().map(|e| e.step).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Everything one invocation needs, merged from CLI flags and config
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookPlan {
    pub make_rpm: bool,
    pub make_sdist: bool,
    pub run_tests: bool,
    pub stash_first: bool,
    pub commands: HookCommands,
}

impl HookPlan {
    /// Steps that will run, in execution order
    pub fn steps(&self) -> Vec<Step> {
        let mut steps = Vec::new();
        if self.make_rpm {
            steps.push(Step::MakeRpm);
        }
        if self.make_sdist {
            steps.push(Step::MakeSdist);
        }
        if self.run_tests {
            steps.push(Step::RunTests);
        }
        steps
    }
}

impl Default for HookPlan {
    fn default() -> Self {
        Self { make_rpm: true, make_sdist: false, run_tests: true, stash_first: false, commands: HookCommands::default() }
    }
}

/// The concrete command behind each step, plus the stash pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HookCommands {
    pub make_rpm: HookCommand,
    pub make_sdist: HookCommand,
    pub run_tests: HookCommand,
    pub stash: HookCommand,
    pub unstash: HookCommand,
}

impl Default for HookCommands {
    fn default() -> Self {
        Self {
            make_rpm: HookCommand::line("make build"),
            make_sdist: HookCommand::line("python setup.py sdist"),
            run_tests: HookCommand::line("py.test source/tests"),
            stash: HookCommand::line("git stash -q --keep-index"),
            unstash: HookCommand::line("git stash pop -q"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_command_splits_on_whitespace() {
        let cmd = HookCommand::line("make build");
        assert_eq!(cmd.tokens(), vec!["make", "build"]);

        let cmd = HookCommand::line("  py.test   source/tests\t-q ");
        assert_eq!(cmd.tokens(), vec!["py.test", "source/tests", "-q"]);
    }

    #[test]
    fn test_argv_command_passes_through_unsplit() {
        let cmd = HookCommand::argv(["sh", "-c", "echo one two"]);
        assert_eq!(cmd.tokens(), vec!["sh", "-c", "echo one two"]);
    }

    #[test]
    fn test_plan_steps_order() {
        let mut plan = HookPlan::default();
        assert_eq!(plan.steps(), vec![Step::MakeRpm, Step::RunTests]);

        plan.make_sdist = true;
        assert_eq!(plan.steps(), vec![Step::MakeRpm, Step::MakeSdist, Step::RunTests]);

        plan.make_rpm = false;
        plan.make_sdist = false;
        plan.run_tests = false;
        assert!(plan.steps().is_empty());
    }

    #[test]
    fn test_run_record_json_shape() {
        let mut record = RunRecord::new();
        record.push(Step::MakeRpm, CommandResult { stdout: "built\n".to_string(), stderr: String::new() });
        record.push(Step::RunTests, CommandResult::default());

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"make_rpm": {"stdout": "built\n", "stderr": ""}},
                {"run_tests": {"stdout": "", "stderr": ""}},
            ])
        );
    }
}
