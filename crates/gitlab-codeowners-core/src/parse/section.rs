//! Section header parsing.
//!
//! A header has the shape `[Name]`, optionally prefixed by `^` (optional
//! section), followed by an approval count in a second bracket pair and
//! default owners:
//!
//! ```text
//! ^[Section name][2] @owner @group/subgroup
//! ```

use super::ast::{DEFAULT_APPROVALS, Section};
use super::error::SectionHeaderError;
use super::lexer::{count_brackets, fields, header_parts, parse_header_start};
use log::trace;

/// At most this many bracket pairs may appear in a header.
const MAX_BRACKET_PAIRS: usize = 2;

/// Parses a section header line into an empty section.
///
/// Approval counts that are missing, not a number, zero or negative fall
/// back to [`DEFAULT_APPROVALS`]. Optional sections always require zero
/// approvals.
pub fn parse_section_header(line: &str) -> Result<Section, SectionHeaderError> {
    let (header, optional) =
        parse_header_start(line).map_err(|_| SectionHeaderError::NotAHeader)?;

    let (open, close) = count_brackets(header);
    if open != close {
        return Err(SectionHeaderError::UnbalancedBrackets { open, close });
    }
    if open > MAX_BRACKET_PAIRS {
        return Err(SectionHeaderError::TooManyBrackets { count: open });
    }

    let parts = header_parts(header);
    let (name, approvals, owners) = match parts.as_slice() {
        [name] => (*name, None, None),
        [name, approvals] if open == MAX_BRACKET_PAIRS => (*name, Some(*approvals), None),
        [name, owners] => (*name, None, Some(*owners)),
        [name, approvals, owners] => (*name, Some(*approvals), Some(*owners)),
        _ => return Err(SectionHeaderError::UnexpectedParts { parts: parts.len() }),
    };

    // A blank name is kept and later merged with the unnamed section
    let name = name.trim();
    let required_approvals = parse_approval_count(approvals, optional);
    let default_owners = owners
        .map(|owners| fields(owners).into_iter().map(String::from).collect())
        .unwrap_or_default();

    trace!(
        "Section header '{}': optional={}, approvals={}",
        name, optional, required_approvals
    );

    Ok(Section::new(name, required_approvals, default_owners))
}

/// Resolves the approval count of a section header.
fn parse_approval_count(count: Option<&str>, optional: bool) -> usize {
    if optional {
        return 0;
    }

    count
        .and_then(|count| count.trim().parse::<i64>().ok())
        .filter(|&approvals| approvals > 0)
        .and_then(|approvals| usize::try_from(approvals).ok())
        .unwrap_or(DEFAULT_APPROVALS)
}
