//! Line and file-level parsers for CODEOWNERS files.
//!
//! Every non-blank, non-comment line is either a section header or a rule.
//! Header-looking lines that fail to parse are kept as rules, following
//! GitLab's handling of unparsable sections.

use super::ast::{CodeownersFile, Rule, Section};
use super::error::ParseError;
use super::lexer::{fields, is_blank_line, is_header_candidate, parse_comment_line};
use super::section::parse_section_header;
use crate::matching::Pattern;
use log::{debug, trace};
use std::io::BufRead;
use std::str::FromStr;

/// Parses a rule line into a pattern and its owners.
///
/// Returns `None` for a line without any fields.
pub fn parse_rule(line: &str) -> Option<Rule> {
    let mut tokens = fields(line).into_iter();
    let pattern = tokens.next()?;
    Some(Rule::new(
        Pattern::new(pattern),
        tokens.map(String::from).collect(),
    ))
}

/// Accumulates sections while lines are fed in.
#[derive(Debug)]
struct DocumentBuilder {
    finished: Vec<Section>,
    current: Section,
}

impl DocumentBuilder {
    fn new() -> Self {
        Self {
            finished: Vec::new(),
            current: Section::unnamed(),
        }
    }

    fn push_line(&mut self, line_num: usize, raw: &str) {
        let line = raw.trim();

        if is_blank_line(line) {
            return;
        }

        if parse_comment_line(line).is_ok() {
            trace!("Line {}: comment", line_num);
            return;
        }

        if is_header_candidate(line) {
            match parse_section_header(line) {
                Ok(section) => {
                    debug!("Line {}: starting section '{}'", line_num, section.name);
                    let previous = std::mem::replace(&mut self.current, section);
                    self.finished.push(previous);
                    return;
                }
                Err(error) => {
                    debug!(
                        "Line {}: unparsable section header ({}), treating it as a rule",
                        line_num, error
                    );
                }
            }
        }

        if let Some(rule) = parse_rule(line) {
            trace!("Line {}: rule '{}'", line_num, rule.pattern);
            self.current.rules.push(rule);
        }
    }

    fn finish(mut self) -> CodeownersFile {
        self.finished.push(self.current);
        self.finished.into_iter().collect()
    }
}

/// Parses a CODEOWNERS file from a buffered reader.
///
/// Invalid UTF-8 sequences are replaced with `U+FFFD` and parsing goes on.
/// A failure of the reader aborts parsing; no partial result is returned.
pub fn parse_codeowners_reader<R: BufRead>(mut reader: R) -> Result<CodeownersFile, ParseError> {
    debug!("Parsing CODEOWNERS from reader");
    let mut builder = DocumentBuilder::new();
    let mut buf = Vec::new();
    let mut line_num = 0;

    loop {
        buf.clear();
        let read = reader.read_until(b'\n', &mut buf).inspect_err(|error| {
            debug!("Line {}: read error - {}", line_num + 1, error);
        })?;
        if read == 0 {
            break;
        }
        line_num += 1;
        builder.push_line(line_num, &String::from_utf8_lossy(&buf));
    }

    let file = builder.finish();
    debug!("Parsing complete: {} sections", file.sections().len());
    Ok(file)
}

/// Parses a CODEOWNERS file held in memory.
pub fn parse_codeowners(input: &str) -> CodeownersFile {
    debug!("Parsing CODEOWNERS file ({} bytes)", input.len());
    let mut builder = DocumentBuilder::new();

    for (line_idx, line) in input.lines().enumerate() {
        builder.push_line(line_idx + 1, line);
    }

    let file = builder.finish();
    debug!("Parsing complete: {} sections", file.sections().len());
    file
}

impl FromStr for CodeownersFile {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_codeowners(s))
    }
}
