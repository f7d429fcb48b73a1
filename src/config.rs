/// Hook configuration
///
/// This module handles:
/// - Locating the optional TOML config file
/// - Parsing step toggles and command overrides
/// - Merging config with CLI flags into a `HookPlan`
use crate::cli::CliArgs;
use crate::error::HookError;
use crate::types::{HookCommands, HookPlan};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "pre-commit-gate.toml";

/// Get the per-user config file location
/// - Linux: ~/.config/pre-commit-gate/config.toml
/// - macOS: ~/Library/Application Support/pre-commit-gate/config.toml
/// - Windows: %APPDATA%/pre-commit-gate/config.toml
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("pre-commit-gate").join("config.toml"))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HookConfig {
    pub steps: StepToggles,
    pub commands: HookCommands,
}

/// Which steps run when the CLI does not ask for them
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StepToggles {
    pub make_rpm: bool,
    pub make_sdist: bool,
    pub run_tests: bool,
    pub stash_first: bool,
}

impl Default for StepToggles {
    fn default() -> Self {
        Self { make_rpm: true, make_sdist: false, run_tests: true, stash_first: false }
    }
}

impl HookConfig {
    pub fn parse(content: &str, path: &Path) -> Result<Self, HookError> {
        toml::from_str(content).map_err(|source| HookError::ConfigParse { path: path.to_path_buf(), source })
    }

    pub fn load(path: &Path) -> Result<Self, HookError> {
        debug!("Loading config from {:?}", path);
        let content = std::fs::read_to_string(path)
            .map_err(|source| HookError::ConfigRead { path: path.to_path_buf(), source })?;
        Self::parse(&content, path)
    }
}

/// Find the config file to use, if any.
///
/// An explicit path must exist. Otherwise the working directory is checked
/// first, then the per-user location.
pub fn find_config(explicit: Option<&Path>, cwd: &Path, user: Option<&Path>) -> Result<Option<PathBuf>, HookError> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(HookError::ConfigMissing(path.to_path_buf()));
        }
        return Ok(Some(path.to_path_buf()));
    }

    let local = cwd.join(LOCAL_CONFIG_FILE);
    if local.is_file() {
        return Ok(Some(local));
    }

    Ok(user.filter(|p| p.is_file()).map(Path::to_path_buf))
}

/// Load the config the CLI points at (or the discovered one, or defaults).
pub fn load_config(args: &CliArgs) -> Result<HookConfig, HookError> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let user = user_config_path();

    match find_config(args.config.as_deref(), &cwd, user.as_deref())? {
        Some(path) => HookConfig::load(&path),
        None => {
            debug!("No config file found, using defaults");
            Ok(HookConfig::default())
        }
    }
}

/// Merge CLI flags with config. A flag given on the command line always wins;
/// an absent flag falls back to the config toggle.
pub fn build_plan(args: &CliArgs, config: HookConfig) -> HookPlan {
    let plan = HookPlan {
        make_rpm: args.make_rpm || config.steps.make_rpm,
        make_sdist: args.make_sdist || config.steps.make_sdist,
        run_tests: args.run_tests || config.steps.run_tests,
        stash_first: args.stash_first || config.steps.stash_first,
        commands: config.commands,
    };
    debug!("Hook plan: steps {:?}, stash first: {}", plan.steps(), plan.stash_first);
    plan
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
