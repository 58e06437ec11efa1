//! Parser module for GitLab CODEOWNERS files.
//!
//! This module turns CODEOWNERS content into a [`CodeownersFile`]: an
//! ordered list of sections, each with its approval requirement, default
//! owners and rules.
//!
//! # Example
//!
//! ```rust
//! use gitlab_codeowners_core::parse::parse_codeowners;
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
//! for section in file.sections() {
//!     println!("{:?} requires {} approvals", section.name, section.required_approvals);
//! }
//! ```

mod ast;
mod error;
mod lexer;
mod parser;
mod section;

// Re-export public types
pub use ast::{CodeownersFile, DEFAULT_APPROVALS, Rule, Section};
pub use error::{ParseError, SectionHeaderError};
pub use parser::{parse_codeowners, parse_codeowners_reader, parse_rule};
pub use section::parse_section_header;

// Re-export lexer utilities that may be useful for custom parsing
pub use lexer::{fields, is_header_candidate};
