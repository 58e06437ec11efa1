//! Pattern matching for GitLab CODEOWNERS files.
//!
//! Raw patterns are first normalized into a canonical glob, then matched
//! against repository paths that start with `/` (the repository root).
//!
//! Normalization applies these steps in order:
//!
//! 1. A lone `*` becomes `/**/*` (everything, at any depth)
//! 2. A leading `\#` is unescaped to `#`
//! 3. A backslash followed by whitespace collapses to a single space
//! 4. Patterns without a leading `/` are prefixed with `/**/`
//! 5. Patterns ending in `/` get `**/*` appended
//!
//! In the canonical glob `*` matches anything except `/`, `**` matches any
//! number of path segments and `\` escapes the next character.

use globset::{GlobBuilder, GlobMatcher};
use log::trace;
use std::fmt::{self, Display};

/// A CODEOWNERS pattern together with its canonical glob form.
///
/// The glob is compiled once on construction. Patterns whose canonical form
/// is not a valid glob are kept, but never match anything.
#[derive(Debug, Clone)]
pub struct Pattern {
    /// The pattern as written in the file.
    raw: String,
    /// The normalized glob used for matching.
    canonical: String,
    /// The compiled glob, if the canonical form compiles.
    matcher: Option<GlobMatcher>,
}

impl Pattern {
    /// Creates a pattern from its raw text.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let canonical = normalize_pattern(&raw);
        let matcher = compile_glob(&canonical);

        Self {
            raw,
            canonical,
            matcher,
        }
    }

    /// Returns the pattern as it was written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the canonical glob form.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Returns true if the canonical glob compiled successfully.
    pub fn is_valid(&self) -> bool {
        self.matcher.is_some()
    }

    /// Checks if this pattern matches the given path.
    ///
    /// The path must be relative to the repository root and start with `/`.
    pub fn matches(&self, path: &str) -> bool {
        self.matcher
            .as_ref()
            .is_some_and(|matcher| matcher.is_match(path))
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw && self.canonical == other.canonical
    }
}

impl Eq for Pattern {}

impl Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Normalizes a raw CODEOWNERS pattern into its canonical glob.
pub fn normalize_pattern(raw: &str) -> String {
    if raw == "*" {
        return String::from("/**/*");
    }

    let unescaped = match raw.strip_prefix("\\#") {
        Some(rest) => format!("#{rest}"),
        None => raw.to_string(),
    };

    let mut pattern = collapse_escaped_whitespace(&unescaped);

    if !pattern.starts_with('/') {
        pattern = format!("/**/{pattern}");
    }

    if pattern.ends_with('/') {
        pattern.push_str("**/*");
    }

    pattern
}

/// Matches a path against a canonical glob.
///
/// An invalid glob is reported as a non-match.
pub fn glob_matches(canonical: &str, path: &str) -> bool {
    compile_glob(canonical).is_some_and(|matcher| matcher.is_match(path))
}

/// Replaces every backslash followed by a run of whitespace with one space.
fn collapse_escaped_whitespace(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' && chars.peek().is_some_and(char::is_ascii_whitespace) {
            while chars.next_if(char::is_ascii_whitespace).is_some() {}
            out.push(' ');
        } else {
            out.push(c);
        }
    }

    out
}

fn compile_glob(canonical: &str) -> Option<GlobMatcher> {
    // literal_separator keeps `*` from crossing `/`
    match GlobBuilder::new(canonical)
        .literal_separator(true)
        .backslash_escape(true)
        .build()
    {
        Ok(glob) => Some(glob.compile_matcher()),
        Err(err) => {
            trace!("Pattern '{}' is not a valid glob: {}", canonical, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PATHS: &[&str] = &[
        "/todo.txt",
        "/README.md",
        "/CONTRIBUTING.md",
        "/docs/README.md",
        "/docs/usage.md",
        "/docs/internal/notes.txt",
        "/internal/README.md",
        "/internal/testing/README.md",
        "/internal/testing/run.sh",
        "/internal/testing/docs/content/integration/intro.md",
    ];

    fn matching_paths(pattern: &str) -> Vec<&'static str> {
        let pattern = Pattern::new(pattern);
        PATHS
            .iter()
            .copied()
            .filter(|path| pattern.matches(path))
            .collect()
    }

    #[test]
    fn relative_directory() {
        assert_eq!(
            matching_paths("docs/"),
            vec![
                "/docs/README.md",
                "/docs/usage.md",
                "/docs/internal/notes.txt",
                "/internal/testing/docs/content/integration/intro.md",
            ]
        );
    }

    #[test]
    fn relative_directory_with_single_star() {
        assert_eq!(
            matching_paths("docs/*/"),
            vec![
                "/docs/internal/notes.txt",
                "/internal/testing/docs/content/integration/intro.md",
            ]
        );
    }

    #[test]
    fn relative_directory_with_double_star() {
        assert_eq!(
            matching_paths("testing/**/integration/"),
            vec!["/internal/testing/docs/content/integration/intro.md"]
        );
    }

    #[test]
    fn relative_file() {
        assert_eq!(
            matching_paths("README.md"),
            vec![
                "/README.md",
                "/docs/README.md",
                "/internal/README.md",
                "/internal/testing/README.md",
            ]
        );
    }

    #[test]
    fn relative_extension() {
        assert_eq!(
            matching_paths("*.md"),
            vec![
                "/README.md",
                "/CONTRIBUTING.md",
                "/docs/README.md",
                "/docs/usage.md",
                "/internal/README.md",
                "/internal/testing/README.md",
                "/internal/testing/docs/content/integration/intro.md",
            ]
        );
    }

    #[test]
    fn anchored_directory() {
        assert_eq!(
            matching_paths("/docs/"),
            vec![
                "/docs/README.md",
                "/docs/usage.md",
                "/docs/internal/notes.txt",
            ]
        );
    }

    #[test]
    fn anchored_directory_with_single_star() {
        assert_eq!(
            matching_paths("/internal/*/"),
            vec![
                "/internal/testing/README.md",
                "/internal/testing/run.sh",
                "/internal/testing/docs/content/integration/intro.md",
            ]
        );
    }

    #[test]
    fn anchored_directory_with_double_star() {
        assert_eq!(
            matching_paths("/internal/**/integration/"),
            vec!["/internal/testing/docs/content/integration/intro.md"]
        );
    }

    #[test]
    fn anchored_file() {
        assert_eq!(matching_paths("/README.md"), vec!["/README.md"]);
    }

    #[test]
    fn anchored_single_star() {
        assert_eq!(
            matching_paths("/docs/*"),
            vec!["/docs/README.md", "/docs/usage.md"]
        );
    }

    #[test]
    fn anchored_double_star_extension() {
        assert_eq!(
            matching_paths("/internal/**/*.md"),
            vec![
                "/internal/README.md",
                "/internal/testing/README.md",
                "/internal/testing/docs/content/integration/intro.md",
            ]
        );
    }

    #[test]
    fn catch_all_matches_everything() {
        assert_eq!(matching_paths("*"), PATHS.to_vec());

        let pattern = Pattern::new("*");
        assert!(pattern.matches("/.hidden"));
        assert!(pattern.matches("/a/b/c/d/e/f.txt"));
    }

    #[test]
    fn directory_does_not_match_prefix_sibling() {
        let pattern = Pattern::new("docs/");
        assert!(!pattern.matches("/docsother/readme.md"));
        assert!(!pattern.matches("/a/docsother/readme.md"));
        assert!(!pattern.matches("/docs"));
        assert!(pattern.matches("/a/b/docs/c/d/readme.md"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let pattern = Pattern::new("README.md");
        assert!(!pattern.matches("/readme.md"));
    }

    #[test]
    fn escaped_pound_matches_literal_pound() {
        let pattern = Pattern::new("\\#file\\#with\\#pound.txt");
        assert!(pattern.matches("/#file#with#pound.txt"));
        assert!(pattern.matches("/nested/#file#with#pound.txt"));
        assert!(!pattern.matches("/file#with#pound.txt"));
    }

    #[test]
    fn escaped_whitespace_matches_space() {
        let pattern = Pattern::new("path\\ with\\ spaces/");
        assert!(pattern.matches("/path with spaces/file.txt"));
        assert!(!pattern.matches("/path/file.txt"));
    }

    #[test]
    fn invalid_glob_never_matches() {
        let pattern = Pattern::new("[Section");
        assert!(!pattern.is_valid());
        assert!(!pattern.matches("/[Section"));
        assert!(!pattern.matches("/anything"));
    }

    #[test]
    fn normalize_pattern_cases() {
        for (raw, canonical) in [
            ("*", "/**/*"),
            ("*.md", "/**/*.md"),
            ("/scripts/*.sh", "/scripts/*.sh"),
            ("build/", "/**/build/**/*"),
            ("/tmp/", "/tmp/**/*"),
            ("\\#file\\#with\\#pound.txt", "/**/#file\\#with\\#pound.txt"),
            ("file\\ with\\ spaces.txt", "/**/file with spaces.txt"),
            ("file\\  \tgap.txt", "/**/file gap.txt"),
            ("\\\\ x", "/**/\\ x"),
        ] {
            assert_eq!(normalize_pattern(raw), canonical, "raw pattern {raw:?}");
        }
    }

    #[test]
    fn pattern_keeps_raw_and_canonical() {
        let pattern = Pattern::new("docs/");
        assert_eq!(pattern.as_str(), "docs/");
        assert_eq!(pattern.canonical(), "/**/docs/**/*");
        assert_eq!(pattern.to_string(), "docs/");
    }

    #[test]
    fn pattern_equality_ignores_matcher() {
        assert_eq!(Pattern::new("*.rs"), Pattern::new("*.rs"));
        assert_ne!(Pattern::new("*.rs"), Pattern::new("/*.rs"));
    }

    #[test]
    fn glob_matches_canonical_directly() {
        assert!(glob_matches("/**/*.md", "/docs/README.md"));
        assert!(!glob_matches("/docs/*", "/docs/internal/notes.txt"));
        assert!(!glob_matches("/**/[unclosed", "/[unclosed"));
    }
}
