//! `key=value` definition file parser

use once_cell::sync::Lazy;
use regex::Regex;

/// Comments run from `#` to the end of the line
static COMMENT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"#.*").unwrap());

/// Assignment lines: the first `=` splits the key from the value
static ASSIGNMENT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^([^=\n]+)=(.*)$").unwrap());

/// A single `key=value` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAssignment {
    /// Variable name, surrounding whitespace removed
    pub key: String,
    /// Everything after the first `=`, unmodified
    pub value: String,
}

impl ParsedAssignment {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Parser for definition files
pub struct DotenvParser;

impl DotenvParser {
    /// Parse file content into assignments, in file order
    ///
    /// Lines without `=` and lines with a blank key are skipped. Values are
    /// not trimmed or unquoted; coercion trims on read.
    pub fn parse(content: &str) -> Vec<ParsedAssignment> {
        let stripped = COMMENT_PATTERN.replace_all(content, "");

        ASSIGNMENT_PATTERN
            .captures_iter(&stripped)
            .filter_map(|cap| {
                let key = cap.get(1)?.as_str().trim();
                if key.is_empty() {
                    return None;
                }
                let value = cap.get(2).map_or("", |m| m.as_str());
                Some(ParsedAssignment::new(key, value))
            })
            .collect()
    }
}
