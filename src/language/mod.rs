//! Comment syntax registry.
//!
//! Maps a file extension to the ordered comment rules of its syntax family.
//! The table is static; unknown extensions resolve to an empty rule set so
//! that only the blank-line policy applies to them.

mod registry;
mod rule;

pub use registry::{LanguageRule, Registry, Syntax, extension_of};
pub use rule::{CommentRule, RuleKind};
