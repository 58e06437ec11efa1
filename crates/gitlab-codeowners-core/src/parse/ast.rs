//! Data structures for parsed CODEOWNERS files.
//!
//! A file is a list of sections, each holding an approval requirement,
//! default owners and the rules declared beneath its header. Rules written
//! before the first header belong to the unnamed section.

use crate::matching::Pattern;
use indexmap::IndexMap;
use indexmap::map::Entry;
use std::fmt::{self, Display};

/// Approvals required by a section that does not declare a count.
pub const DEFAULT_APPROVALS: usize = 1;

/// A single pattern-to-owners mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// The file path pattern.
    pub pattern: Pattern,
    /// Owners listed on the rule line, in order. May be empty.
    pub owners: Vec<String>,
}

impl Rule {
    /// Creates a new rule.
    pub fn new(pattern: Pattern, owners: Vec<String>) -> Self {
        Self { pattern, owners }
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pattern)?;
        for owner in &self.owners {
            write!(f, " {}", owner)?;
        }
        Ok(())
    }
}

/// A named group of rules sharing an approval count and default owners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// The section name as first written. Empty for the unnamed section.
    pub name: String,
    /// Number of approvals required. Always 0 for optional sections.
    pub required_approvals: usize,
    /// Owners used by rules that list none of their own.
    pub default_owners: Vec<String>,
    /// Rules in declaration order.
    pub rules: Vec<Rule>,
}

impl Section {
    /// Creates a section without rules.
    pub fn new(
        name: impl Into<String>,
        required_approvals: usize,
        default_owners: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            required_approvals,
            default_owners,
            rules: Vec::new(),
        }
    }

    /// Creates the implicit section that holds rules before the first header.
    pub fn unnamed() -> Self {
        Self::new("", DEFAULT_APPROVALS, Vec::new())
    }

    /// Returns true for the implicit unnamed section.
    pub fn is_unnamed(&self) -> bool {
        self.name.is_empty()
    }

    /// Returns true if approvals from this section are optional.
    pub fn is_optional(&self) -> bool {
        self.required_approvals == 0
    }

    /// Returns the key used to identify sections regardless of case.
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Returns true if the rule can be selected by a query.
    ///
    /// A rule needs owners of its own or default owners from this section.
    pub fn is_valid_rule(&self, rule: &Rule) -> bool {
        !rule.owners.is_empty() || !self.default_owners.is_empty()
    }

    /// Returns the owners that apply to a rule of this section.
    pub fn owners_for<'a>(&'a self, rule: &'a Rule) -> &'a [String] {
        if rule.owners.is_empty() {
            &self.default_owners
        } else {
            &rule.owners
        }
    }

    /// Returns true if the section can be written without a header.
    ///
    /// Only an unnamed section that keeps the default approvals and has no
    /// default owners qualifies.
    fn is_implicit(&self) -> bool {
        self.is_unnamed()
            && self.required_approvals == DEFAULT_APPROVALS
            && self.default_owners.is_empty()
    }

    fn write_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `[]` would not parse back, a blank name does
        let name = if self.is_unnamed() { " " } else { self.name.as_str() };
        if self.is_optional() {
            write!(f, "^[{}]", name)?;
        } else {
            write!(f, "[{}][{}]", name, self.required_approvals)?;
        }
        for owner in &self.default_owners {
            write!(f, " {}", owner)?;
        }
        writeln!(f)
    }
}

impl Section {
    fn write_to(&self, f: &mut fmt::Formatter<'_>, with_header: bool) -> fmt::Result {
        if with_header {
            self.write_header(f)?;
        }
        for rule in &self.rules {
            writeln!(f, "{}", rule)?;
        }
        Ok(())
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f, !self.is_implicit())
    }
}

/// A parsed CODEOWNERS file.
///
/// Sections appear in the order their names were first seen. Sections
/// without rules are dropped and sections sharing a name (ignoring case)
/// are merged into the first one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeownersFile {
    sections: Vec<Section>,
}

impl CodeownersFile {
    /// Returns all sections in order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Looks up a section by name, ignoring case.
    pub fn section(&self, name: &str) -> Option<&Section> {
        let key = name.to_lowercase();
        self.sections.iter().find(|section| section.key() == key)
    }

    /// Returns true if the file holds no rules.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Returns an iterator over every rule together with its section.
    pub fn rules(&self) -> impl Iterator<Item = (&Section, &Rule)> {
        self.sections
            .iter()
            .flat_map(|section| section.rules.iter().map(move |rule| (section, rule)))
    }
}

impl FromIterator<Section> for CodeownersFile {
    fn from_iter<T: IntoIterator<Item = Section>>(iter: T) -> Self {
        let mut merged: IndexMap<String, Section> = IndexMap::new();

        for section in iter {
            if section.rules.is_empty() {
                continue;
            }

            match merged.entry(section.key()) {
                // Only rules are taken over from a repeated section
                Entry::Occupied(mut existing) => existing.get_mut().rules.extend(section.rules),
                Entry::Vacant(slot) => {
                    slot.insert(section);
                }
            }
        }

        Self {
            sections: merged.into_values().collect(),
        }
    }
}

impl Display for CodeownersFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, section) in self.sections.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            // Headerless rules would land in the preceding section
            section.write_to(f, index > 0 || !section.is_implicit())?;
        }
        Ok(())
    }
}
