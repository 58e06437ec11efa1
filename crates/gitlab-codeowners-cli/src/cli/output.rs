//! Output formatting for the CLI.
//!
//! This module provides human-readable and JSON output formatters for
//! approval lookups.

use colored::Colorize;
use gitlab_codeowners_core::{Approval, ApprovalSet, CodeownersFile};
use indexmap::IndexMap;
use serde::Serialize;
use std::io::Write;

/// Approvals required for a set of paths, plus the paths nobody owns.
#[derive(Debug, Default, Serialize)]
pub struct LookupResults {
    /// Approvals per section, in section order.
    pub sections: IndexMap<String, Vec<Approval>>,
    /// Paths without a matching rule in any section.
    pub unowned: Vec<String>,
}

impl LookupResults {
    /// Resolves the approvals for the given paths.
    pub fn collect(file: &CodeownersFile, paths: &[String]) -> Self {
        let mut approvals = ApprovalSet::new();
        let mut unowned = Vec::new();

        for path in paths {
            let found = file.required_approvals_for_file(path);
            if found.is_empty() {
                unowned.push(path.clone());
            } else {
                approvals.extend(found);
            }
        }

        Self {
            sections: approvals.into_sections(),
            unowned,
        }
    }

    /// Returns true if some paths are not owned by any section.
    pub fn has_unowned(&self) -> bool {
        !self.unowned.is_empty()
    }

    /// Writes results in human-readable format.
    pub fn write_human<W: Write>(&self, writer: &mut W, use_colors: bool) -> std::io::Result<()> {
        let mut output = HumanOutput::new(writer, use_colors);

        for (name, approvals) in &self.sections {
            output.write_section_header(name)?;
            for approval in approvals {
                output.write_approval(approval)?;
            }
        }

        output.write_unowned(&self.unowned)?;
        output.write_summary(self.sections.len(), self.unowned.len())
    }

    /// Writes results in JSON format.
    pub fn write_json<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        writeln!(writer, "{}", json)
    }
}

/// Output formatter for human-readable console output.
pub struct HumanOutput<W: Write> {
    writer: W,
    use_colors: bool,
}

impl<W: Write> HumanOutput<W> {
    /// Creates a new human output formatter.
    pub fn new(writer: W, use_colors: bool) -> Self {
        Self { writer, use_colors }
    }

    /// Writes a header for a section.
    pub fn write_section_header(&mut self, name: &str) -> std::io::Result<()> {
        let header = if name.is_empty() {
            "==> (no section)".to_string()
        } else {
            format!("==> [{}]", name)
        };
        if self.use_colors {
            writeln!(self.writer, "\n{}", header.cyan().bold())?;
        } else {
            writeln!(self.writer, "\n{}", header)?;
        }
        Ok(())
    }

    /// Writes a single approval line.
    pub fn write_approval(&mut self, approval: &Approval) -> std::io::Result<()> {
        let requirement = match approval.required_approvals {
            0 => "(optional)".to_string(),
            1 => "(1 approval)".to_string(),
            n => format!("({} approvals)", n),
        };
        let owners = approval.owners.join(" ");

        if self.use_colors {
            let requirement = if approval.required_approvals == 0 {
                requirement.dimmed()
            } else {
                requirement.yellow()
            };
            writeln!(
                self.writer,
                "  {}  {}  {}",
                approval.pattern.bold(),
                requirement,
                owners.green()
            )?;
        } else {
            writeln!(
                self.writer,
                "  {}  {}  {}",
                approval.pattern, requirement, owners
            )?;
        }

        Ok(())
    }

    /// Writes the paths that no section owns.
    pub fn write_unowned(&mut self, paths: &[String]) -> std::io::Result<()> {
        if paths.is_empty() {
            return Ok(());
        }

        let header = "==> unowned";
        if self.use_colors {
            writeln!(self.writer, "\n{}", header.red().bold())?;
        } else {
            writeln!(self.writer, "\n{}", header)?;
        }
        for path in paths {
            writeln!(self.writer, "  {}", path)?;
        }
        Ok(())
    }

    /// Writes a summary line.
    pub fn write_summary(&mut self, sections: usize, unowned: usize) -> std::io::Result<()> {
        writeln!(self.writer)?;

        if unowned == 0 {
            let message = format!("✓ Approvals required from {} section(s)", sections);
            if self.use_colors {
                writeln!(self.writer, "{}", message.green().bold())?;
            } else {
                writeln!(self.writer, "{}", message)?;
            }
        } else {
            let message = format!(
                "✗ Approvals required from {} section(s), {} path(s) unowned",
                sections, unowned
            );
            if self.use_colors {
                writeln!(self.writer, "{}", message.red().bold())?;
            } else {
                writeln!(self.writer, "{}", message)?;
            }
        }

        Ok(())
    }

    /// Writes a startup error.
    pub fn write_error(&mut self, message: &str) -> std::io::Result<()> {
        if self.use_colors {
            writeln!(self.writer, "{} {}", "Error:".red().bold(), message)?;
        } else {
            writeln!(self.writer, "Error: {}", message)?;
        }
        Ok(())
    }
}
