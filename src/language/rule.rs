use std::fmt;

use regex::Regex;

use crate::error::Result;

/// How a comment rule matches a trimmed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// The line starts with a marker such as `#` or `//`.
    LinePrefix,
    /// The line contains an opening and a closing delimiter, anywhere.
    Block,
    /// The line starts with the opening delimiter and closes later on the same line.
    LeadingBlock,
}

/// A single comment matcher.
///
/// Matching is line-local: a block comment that opens on one line and closes
/// on a later one is never recognized.
#[derive(Debug, Clone)]
pub struct CommentRule {
    kind: RuleKind,
    open: &'static str,
    close: Option<&'static str>,
    pattern: Regex,
}

impl CommentRule {
    pub fn line_prefix(marker: &'static str) -> Result<Self> {
        let pattern = Regex::new(&format!(r"^\s*{}", regex::escape(marker)))?;
        Ok(Self {
            kind: RuleKind::LinePrefix,
            open: marker,
            close: None,
            pattern,
        })
    }

    pub fn block(open: &'static str, close: &'static str) -> Result<Self> {
        let pattern = Regex::new(&format!(
            r"(?s){}.*?{}",
            regex::escape(open),
            regex::escape(close)
        ))?;
        Ok(Self {
            kind: RuleKind::Block,
            open,
            close: Some(close),
            pattern,
        })
    }

    pub fn leading_block(open: &'static str, close: &'static str) -> Result<Self> {
        let pattern = Regex::new(&format!(
            r"^\s*{}.*{}",
            regex::escape(open),
            regex::escape(close)
        ))?;
        Ok(Self {
            kind: RuleKind::LeadingBlock,
            open,
            close: Some(close),
            pattern,
        })
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// Test an already trimmed line.
    pub fn is_match(&self, trimmed: &str) -> bool {
        self.pattern.is_match(trimmed)
    }
}

impl fmt::Display for CommentRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.close {
            Some(close) => write!(f, "{}...{}", self.open, close),
            None => write!(f, "{}", self.open),
        }
    }
}
