//! GitLab CODEOWNERS Core
//!
//! A library for parsing GitLab CODEOWNERS files and answering which
//! approvals a change to a set of paths requires.
//!
//! # Features
//!
//! - **Parser**: Sections with approval counts, optional sections and default owners
//! - **Matching**: GitLab's gitignore-like patterns, anchored and unanchored
//! - **Approvals**: Per-section lookup of the rule that governs a path
//!
//! # Quick Start
//!
//! ```rust
//! use gitlab_codeowners_core::parse_codeowners;
//!
//! let input = r#"
//! # CODEOWNERS file
//! *.rs @rustacean
//!
//! [Documentation][2] @docs-team
//! /docs/
//! "#;
//!
//! let file = parse_codeowners(input);
//!
//! for (section, approval) in file.required_approvals_for_file("/docs/index.md") {
//!     println!(
//!         "[{}] {} needs {} approval(s) from {:?}",
//!         section, approval.pattern, approval.required_approvals, approval.owners
//!     );
//! }
//!
//! let approvals = file.required_approvals_for_file("/src/lib.rs");
//! assert_eq!(approvals[""].owners, vec!["@rustacean"]);
//! ```
//!
//! # Modules
//!
//! - [`parse`]: Parser for CODEOWNERS files
//! - [`matching`]: Pattern matching for CODEOWNERS files
//! - [`approvals`]: Required approval queries
//! - [`files`]: Repository file listing

use std::path::{Path, PathBuf};

pub mod approvals;
pub mod files;
#[cfg(feature = "generate")]
pub mod generate;
pub mod matching;
pub mod parse;

// Re-export commonly used types at the crate root
pub use approvals::{Approval, ApprovalSet};
pub use matching::Pattern;
pub use parse::{
    CodeownersFile, ParseError, Rule, Section, parse_codeowners, parse_codeowners_reader,
};

/// Returns the locations GitLab looks for a CODEOWNERS file, relative to
/// the repository root, in lookup order.
pub fn possible_codeowners_locations() -> [&'static str; 3] {
    ["/CODEOWNERS", "/docs/CODEOWNERS", "/.gitlab/CODEOWNERS"]
}

/// Finds the CODEOWNERS file in a repository.
///
/// Searches the [`possible_codeowners_locations`] in order and returns the
/// first one that exists.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use gitlab_codeowners_core::find_codeowners_file;
///
/// let repo_path = Path::new("/path/to/repo");
/// if let Some(codeowners_path) = find_codeowners_file(repo_path) {
///     println!("Found CODEOWNERS at: {}", codeowners_path.display());
/// } else {
///     eprintln!("CODEOWNERS file not found");
/// }
/// ```
pub fn find_codeowners_file(repo_path: &Path) -> Option<PathBuf> {
    possible_codeowners_locations()
        .into_iter()
        .map(|location| repo_path.join(location.trim_start_matches('/')))
        .find(|path| path.is_file())
}
