//! Lexer and token parsers for CODEOWNERS files.
//!
//! This module contains nom-based parsers for the small pieces of syntax a
//! CODEOWNERS line is made of: comments, section header markers and
//! whitespace separated fields.

use nom::{
    IResult, Parser,
    bytes::complete::take_till1,
    character::complete::{char, multispace0, space0},
    combinator::{opt, peek, rest},
    multi::many0,
    sequence::{preceded, terminated},
};

/// Parses a complete comment line (optional whitespace + # + content).
pub fn parse_comment_line(input: &str) -> IResult<&str, &str> {
    (space0, char('#'), rest)
        .map(|(_, _, content)| content)
        .parse(input)
}

/// Checks if a line is blank (empty or only whitespace).
pub fn is_blank_line(input: &str) -> bool {
    input.trim().is_empty()
}

/// Parses the start of a section header: an optional `^` followed by `[`.
///
/// Returns whether the section is optional. The remaining input starts at
/// the opening bracket.
pub fn parse_header_start(input: &str) -> IResult<&str, bool> {
    terminated(opt(char('^')), peek(char('[')))
        .map(|marker| marker.is_some())
        .parse(input)
}

/// Returns true if the line looks like a section header.
pub fn is_header_candidate(input: &str) -> bool {
    parse_header_start(input).is_ok()
}

/// Parses whitespace separated fields.
pub fn parse_fields(input: &str) -> IResult<&str, Vec<&str>> {
    many0(preceded(
        multispace0,
        take_till1(|c: char| c.is_whitespace()),
    ))
    .parse(input)
}

/// Splits a line into its whitespace separated fields.
pub fn fields(input: &str) -> Vec<&str> {
    parse_fields(input)
        .map(|(_, fields)| fields)
        .unwrap_or_default()
}

/// Counts opening and closing square brackets.
pub fn count_brackets(input: &str) -> (usize, usize) {
    input.chars().fold((0, 0), |(open, close), c| match c {
        '[' => (open + 1, close),
        ']' => (open, close + 1),
        _ => (open, close),
    })
}

/// Splits a section header into the non-empty parts between brackets.
pub fn header_parts(input: &str) -> Vec<&str> {
    input
        .split(['[', ']'])
        .filter(|part| !part.is_empty())
        .collect()
}
