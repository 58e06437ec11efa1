//! Repository file listing.
//!
//! Produces the root-relative, `/`-prefixed paths that approval queries
//! expect.

use ignore::WalkBuilder;
use log::{debug, trace};
use std::path::Path;

/// Configuration for walking a repository.
#[derive(Debug, Clone, Default)]
pub struct FileWalkerConfig {
    /// Whether to include hidden files and directories (starting with `.`).
    /// Default: false
    pub include_hidden: bool,
    /// Whether to respect `.gitignore` rules (only works in git repos).
    /// Default: false
    pub respect_gitignore: bool,
}

impl FileWalkerConfig {
    /// Creates a new config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether to include hidden files.
    pub fn with_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    /// Sets whether to respect .gitignore rules.
    pub fn with_gitignore(mut self, respect: bool) -> Self {
        self.respect_gitignore = respect;
        self
    }
}

/// Converts a path relative to the repository root into a query path.
///
/// Backslashes become forward slashes and a leading `/` is added.
pub fn to_query_path(relative: &str) -> String {
    let normalized = relative.replace('\\', "/");
    if normalized.starts_with('/') {
        normalized
    } else {
        format!("/{}", normalized)
    }
}

/// Lists the files of a repository as query paths, sorted.
///
/// The `.git` directory is never listed.
pub fn list_files(repo_path: &Path, config: &FileWalkerConfig) -> Vec<String> {
    debug!(
        "Listing files in {:?} (hidden={}, gitignore={})",
        repo_path, config.include_hidden, config.respect_gitignore
    );

    let walker = WalkBuilder::new(repo_path)
        .hidden(!config.include_hidden)
        .ignore(false)
        .git_ignore(config.respect_gitignore)
        .git_global(config.respect_gitignore)
        .git_exclude(config.respect_gitignore)
        .require_git(false)
        .follow_links(false)
        .filter_entry(|entry| entry.file_name() != ".git")
        .build();

    let mut files: Vec<String> = walker
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
        .filter_map(|entry| {
            let relative = entry.path().strip_prefix(repo_path).ok()?;
            relative.to_str().map(to_query_path)
        })
        .collect();
    files.sort();

    debug!("Found {} files", files.len());
    trace!("Files: {:?}", files);
    files
}
