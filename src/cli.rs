use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "pre-commit-gate")]
#[command(about = "Git pre-commit hook: build the packages and run the tests before every commit")]
#[command(version)]
pub struct CliArgs {
    /// Build RPMs from source (on by default; a config file may turn it off)
    #[arg(long)]
    pub make_rpm: bool,

    /// Run all available tests (on by default; a config file may turn it off)
    #[arg(long)]
    pub run_tests: bool,

    /// Also build a source distribution
    #[arg(long)]
    pub make_sdist: bool,

    /// Stash unstaged changes first so checks see only the staged content
    #[arg(long)]
    pub stash_first: bool,

    /// Config file (default: ./pre-commit-gate.toml, then the user config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Minimum log level: off, error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL", default_value = "trace")]
    pub log_level: LevelFilter,

    /// Print the per-step results as JSON on success
    #[arg(long)]
    pub json: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }
}
