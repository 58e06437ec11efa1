//! Configuration handling for the CLI.
//!
//! This module validates CLI arguments, locates the CODEOWNERS file and
//! resolves the paths to look up.

use crate::cli::Args;
use gitlab_codeowners_core::files::{FileWalkerConfig, list_files, to_query_path};
use gitlab_codeowners_core::{
    CodeownersFile, ParseError, find_codeowners_file, parse_codeowners_reader,
    possible_codeowners_locations,
};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Invalid(String),

    /// No CODEOWNERS file in any of the known locations.
    #[error("CODEOWNERS file not found in repository '{repo}'. Searched in: {searched}")]
    CodeownersNotFound { repo: String, searched: String },

    /// Failed to read CODEOWNERS file.
    #[error("failed to read CODEOWNERS file '{path}': {source}")]
    ReadCodeowners {
        path: String,
        #[source]
        source: ParseError,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Lookup completed.
    Success = 0,
    /// Application startup failed (wrong configuration or internal error).
    StartupFailure = 1,
    /// Some paths are not owned by any section and `--fail-on-unowned` is set.
    UnownedPaths = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

/// Validated and processed configuration for running a lookup.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Path to the repository root.
    pub repo_path: PathBuf,
    /// Path to the CODEOWNERS file.
    pub codeowners_path: PathBuf,
    /// Paths given on the command line, already normalized.
    pub paths: Vec<String>,
    /// How to walk the repository when no paths are given.
    pub walker_config: FileWalkerConfig,
    /// Whether unowned paths fail the run.
    pub fail_on_unowned: bool,
    /// Whether to output JSON.
    pub json_output: bool,
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let repo_path = args.repository_path.canonicalize().map_err(|e| {
            ConfigError::Invalid(format!(
                "repository path '{}' is invalid: {}",
                args.repository_path.display(),
                e
            ))
        })?;

        let codeowners_path = match &args.codeowners_path {
            Some(path) if path.is_file() => path.clone(),
            Some(path) => {
                return Err(ConfigError::Invalid(format!(
                    "CODEOWNERS path '{}' is not a file",
                    path.display()
                )));
            }
            None => find_codeowners_file(&repo_path).ok_or_else(|| {
                ConfigError::CodeownersNotFound {
                    repo: repo_path.display().to_string(),
                    searched: possible_codeowners_locations().join(", "),
                }
            })?,
        };

        let walker_config = FileWalkerConfig::new()
            .with_hidden(args.include_hidden)
            .with_gitignore(args.respect_gitignore);

        Ok(Self {
            repo_path,
            codeowners_path,
            paths: args.paths.iter().map(|path| to_query_path(path)).collect(),
            walker_config,
            fail_on_unowned: args.fail_on_unowned,
            json_output: args.json,
        })
    }

    /// Reads and parses the CODEOWNERS file.
    pub fn load_codeowners(&self) -> Result<CodeownersFile, ConfigError> {
        let file = File::open(&self.codeowners_path)?;
        parse_codeowners_reader(BufReader::new(file)).map_err(|source| {
            ConfigError::ReadCodeowners {
                path: self.codeowners_path.display().to_string(),
                source,
            }
        })
    }

    /// Returns the paths to look up.
    ///
    /// Falls back to every file in the repository when no paths were given.
    pub fn query_paths(&self) -> Vec<String> {
        if !self.paths.is_empty() {
            return self.paths.clone();
        }

        debug!("No paths given, walking {}", self.repo_path.display());
        list_files(&self.repo_path, &self.walker_config)
    }

    /// Determines the exit code based on lookup results.
    pub fn exit_code_for_results(&self, has_unowned: bool) -> ExitCode {
        if self.fail_on_unowned && has_unowned {
            ExitCode::UnownedPaths
        } else {
            ExitCode::Success
        }
    }
}
