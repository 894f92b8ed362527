//! Line classification.
//!
//! A line is dropped when, once trimmed, it is blank (unless the keep-empty
//! policy is set) or matches any comment rule of its file's language.

use crate::language::CommentRule;

/// Run-wide filtering options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterPolicy {
    /// Keep lines that are empty after trimming.
    pub keep_empty: bool,
}

impl FilterPolicy {
    pub fn new(keep_empty: bool) -> Self {
        Self { keep_empty }
    }
}

/// What a single line is, regardless of policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Comment,
    Code,
}

/// Classify `line` against `rules`.
///
/// Blank detection runs first and short-circuits the rules.
pub fn classify(line: &str, rules: &[CommentRule]) -> LineKind {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        LineKind::Blank
    } else if rules.iter().any(|rule| rule.is_match(trimmed)) {
        LineKind::Comment
    } else {
        LineKind::Code
    }
}

impl LineKind {
    /// Whether a line of this kind is removed under `policy`.
    pub fn is_dropped(self, policy: FilterPolicy) -> bool {
        match self {
            LineKind::Blank => !policy.keep_empty,
            LineKind::Comment => true,
            LineKind::Code => false,
        }
    }
}

/// Returns true when `line` should be removed from the output.
///
/// # Examples
///
/// ```
/// use neatfile::filter::{FilterPolicy, is_comment_or_empty};
/// use neatfile::language::Registry;
///
/// let rules = Registry::builtin().rules_for("script.py");
/// let policy = FilterPolicy::default();
///
/// assert!(is_comment_or_empty("   # setup", rules, policy));
/// assert!(is_comment_or_empty("", rules, policy));
/// assert!(!is_comment_or_empty("", rules, FilterPolicy::new(true)));
/// assert!(!is_comment_or_empty("x = 1  # trailing", rules, policy));
/// ```
pub fn is_comment_or_empty(line: &str, rules: &[CommentRule], policy: FilterPolicy) -> bool {
    classify(line, rules).is_dropped(policy)
}
