//! CLI module for the GitLab CODEOWNERS approvals tool.
//!
//! Command-line arguments are parsed with Clap; every option can also be
//! set through an environment variable.

pub mod config;
pub mod output;

use clap::Parser;
use std::path::PathBuf;

/// GitLab CODEOWNERS approvals - shows which approvals a change requires.
///
/// Resolves the sections, owners and approval counts that apply to the given
/// paths. Without paths, every file in the repository is checked. Supports
/// both human-readable and JSON output formats.
#[derive(Parser, Debug)]
#[command(name = "gitlab-codeowners")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Paths to look up, relative to the repository root.
    /// When omitted, all files of the repository are used.
    pub paths: Vec<String>,

    /// Path to the repository root.
    #[arg(long, env = "REPOSITORY_PATH", default_value = ".")]
    pub repository_path: PathBuf,

    /// Path to the CODEOWNERS file.
    /// Defaults to CODEOWNERS, docs/CODEOWNERS or .gitlab/CODEOWNERS in the repository.
    #[arg(long, env = "CODEOWNERS_PATH")]
    pub codeowners_path: Option<PathBuf>,

    /// Include hidden files when walking the repository.
    #[arg(long, env = "INCLUDE_HIDDEN")]
    pub include_hidden: bool,

    /// Skip files ignored by .gitignore when walking the repository.
    #[arg(
        long,
        env = "RESPECT_GITIGNORE",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub respect_gitignore: bool,

    /// Exit with code 3 when some paths have no owner in any section.
    #[arg(long, env = "FAIL_ON_UNOWNED")]
    pub fail_on_unowned: bool,

    /// Output results as JSON instead of human-readable format.
    #[arg(long, short = 'j')]
    pub json: bool,

    /// Increase verbosity level (-v for info, -vv for debug, -vvv for trace).
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["gitlab-codeowners"]);
        assert_eq!(args.repository_path, PathBuf::from("."));
        assert!(args.codeowners_path.is_none());
        assert!(args.paths.is_empty());
        assert!(!args.include_hidden);
        assert!(args.respect_gitignore);
        assert!(!args.fail_on_unowned);
    }

    #[test]
    fn test_positional_paths() {
        let args = Args::parse_from(["gitlab-codeowners", "README.md", "/docs/index.md"]);
        assert_eq!(args.paths, vec!["README.md", "/docs/index.md"]);
    }

    #[test]
    fn test_codeowners_path() {
        let args = Args::parse_from([
            "gitlab-codeowners",
            "--codeowners-path",
            "custom/CODEOWNERS",
        ]);
        assert_eq!(
            args.codeowners_path,
            Some(PathBuf::from("custom/CODEOWNERS"))
        );
    }

    #[test]
    fn test_respect_gitignore_can_be_disabled() {
        let args = Args::parse_from(["gitlab-codeowners", "--respect-gitignore", "false"]);
        assert!(!args.respect_gitignore);
    }

    #[test]
    fn test_walker_flags() {
        let args = Args::parse_from([
            "gitlab-codeowners",
            "--include-hidden",
            "--fail-on-unowned",
        ]);
        assert!(args.include_hidden);
        assert!(args.fail_on_unowned);
    }

    #[test]
    fn test_json_output_flag() {
        let args = Args::parse_from(["gitlab-codeowners", "--json"]);
        assert!(args.json);

        let args = Args::parse_from(["gitlab-codeowners", "-j"]);
        assert!(args.json);
    }

    #[test]
    fn test_verbose_flag() {
        let args = Args::parse_from(["gitlab-codeowners"]);
        assert_eq!(args.verbose, 0);

        let args = Args::parse_from(["gitlab-codeowners", "-v"]);
        assert_eq!(args.verbose, 1);

        let args = Args::parse_from(["gitlab-codeowners", "-vvv"]);
        assert_eq!(args.verbose, 3);
    }
}
