//! Required approval lookup for repository paths.
//!
//! Within each section the last valid rule matching a path wins. Sections
//! without a matching rule do not contribute an approval.

use crate::parse::{CodeownersFile, Section};
use indexmap::IndexMap;
use log::trace;
use serde::Serialize;
use std::collections::HashSet;

/// An approval required for a path by one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Approval {
    /// The matching rule's pattern, as written.
    pub pattern: String,
    /// Number of approvals the section requires.
    #[serde(rename = "approvals")]
    pub required_approvals: usize,
    /// Owners eligible to approve.
    pub owners: Vec<String>,
}

impl Section {
    /// Finds the approval this section requires for a path, if any.
    pub fn approval_for(&self, path: &str) -> Option<Approval> {
        self.rules
            .iter()
            .rev()
            .find(|rule| self.is_valid_rule(rule) && rule.pattern.matches(path))
            .map(|rule| Approval {
                pattern: rule.pattern.as_str().to_string(),
                required_approvals: self.required_approvals,
                owners: self.owners_for(rule).to_vec(),
            })
    }
}

/// Collects approvals across several paths.
///
/// Approvals of a section are kept in the order they are added. Repeated
/// patterns within a section are only kept once.
#[derive(Debug, Clone, Default)]
pub struct ApprovalSet {
    sections: IndexMap<String, Vec<Approval>>,
    seen: HashSet<(String, String)>,
}

impl ApprovalSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the approvals found for one path.
    pub fn extend(&mut self, approvals: IndexMap<String, Approval>) {
        for (section, approval) in approvals {
            if self.seen.insert((section.clone(), approval.pattern.clone())) {
                self.sections.entry(section).or_default().push(approval);
            }
        }
    }

    /// Returns the collected approvals keyed by section name.
    pub fn into_sections(self) -> IndexMap<String, Vec<Approval>> {
        self.sections
    }
}

impl CodeownersFile {
    /// Returns the approvals required for a single path, keyed by section name.
    ///
    /// The path must be relative to the repository root and start with `/`.
    /// The unnamed section is keyed by the empty string.
    pub fn required_approvals_for_file(&self, path: &str) -> IndexMap<String, Approval> {
        self.sections()
            .iter()
            .filter_map(|section| {
                let approval = section.approval_for(path)?;
                trace!(
                    "Path '{}' matched '{}' in section '{}'",
                    path, approval.pattern, section.name
                );
                Some((section.name.clone(), approval))
            })
            .collect()
    }

    /// Returns the approvals required for several paths, keyed by section name.
    ///
    /// Approvals of a section are listed in path order. Repeated patterns
    /// within a section are only listed once.
    pub fn required_approvals_for_files<I, P>(&self, paths: I) -> IndexMap<String, Vec<Approval>>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        let mut approvals = ApprovalSet::new();
        for path in paths {
            approvals.extend(self.required_approvals_for_file(path.as_ref()));
        }
        approvals.into_sections()
    }
}
