use std::{collections::HashMap, path::Path, sync::LazyLock};

use super::rule::CommentRule;
use crate::error::Result;

/// Comment syntax families known to neatfile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Syntax {
    Hash,
    HashTripleQuote,
    Slash,
    Semicolon,
    DashSql,
    SlashBlock,
    Percent,
    DashHaskell,
    OCaml,
    FSharp,
}

impl Syntax {
    pub const ALL: [Syntax; 10] = [
        Syntax::Hash,
        Syntax::HashTripleQuote,
        Syntax::Slash,
        Syntax::Semicolon,
        Syntax::DashSql,
        Syntax::SlashBlock,
        Syntax::Percent,
        Syntax::DashHaskell,
        Syntax::OCaml,
        Syntax::FSharp,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Syntax::Hash => "hash",
            Syntax::HashTripleQuote => "hash+triple-quote",
            Syntax::Slash => "slash",
            Syntax::Semicolon => "semicolon",
            Syntax::DashSql => "sql",
            Syntax::SlashBlock => "c-style",
            Syntax::Percent => "percent",
            Syntax::DashHaskell => "haskell",
            Syntax::OCaml => "ocaml",
            Syntax::FSharp => "fsharp",
        }
    }

    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Syntax::Hash => &[".yaml", ".yml", ".sh", ".pl", ".ex", ".exs"],
            Syntax::HashTripleQuote => &[".py", ".rb"],
            Syntax::Slash => &[".json"],
            Syntax::Semicolon => &[
                ".ini", ".clj", ".cljs", ".cljc", ".edn", ".lisp", ".rkt", ".scm", ".ss", ".el",
            ],
            Syntax::DashSql => &[".sql"],
            Syntax::SlashBlock => &[
                ".js", ".ts", ".jsx", ".tsx", ".go", ".php", ".java", ".c", ".h", ".cpp", ".hpp",
                ".cs", ".rs", ".swift", ".kt",
            ],
            Syntax::Percent => &[".erl", ".hrl"],
            Syntax::DashHaskell => &[".hs", ".lhs"],
            Syntax::OCaml => &[".ml", ".mli"],
            Syntax::FSharp => &[".fs", ".fsi", ".fsx", ".fsproj"],
        }
    }

    /// Build the ordered rule set for this family.
    fn rules(self) -> Result<Vec<CommentRule>> {
        let rules = match self {
            Syntax::Hash => vec![CommentRule::line_prefix("#")?],
            Syntax::HashTripleQuote => vec![
                CommentRule::line_prefix("#")?,
                CommentRule::block(r#"""""#, r#"""""#)?,
            ],
            Syntax::Slash => vec![CommentRule::line_prefix("//")?],
            Syntax::Semicolon => vec![CommentRule::line_prefix(";")?],
            Syntax::DashSql => vec![
                CommentRule::line_prefix("--")?,
                CommentRule::block("/*", "*/")?,
            ],
            Syntax::SlashBlock => vec![
                CommentRule::line_prefix("//")?,
                CommentRule::block("/*", "*/")?,
            ],
            Syntax::Percent => vec![CommentRule::line_prefix("%")?],
            Syntax::DashHaskell => vec![
                CommentRule::line_prefix("--")?,
                CommentRule::block("{-", "-}")?,
            ],
            Syntax::OCaml => vec![
                CommentRule::leading_block("(*", "*)")?,
                CommentRule::line_prefix("//")?,
            ],
            Syntax::FSharp => vec![
                CommentRule::line_prefix("//")?,
                CommentRule::block("(*", "*)")?,
            ],
        };
        Ok(rules)
    }
}

/// A syntax family together with its compiled rules.
#[derive(Debug)]
pub struct LanguageRule {
    syntax: Syntax,
    rules: Vec<CommentRule>,
}

impl LanguageRule {
    pub fn syntax(&self) -> Syntax {
        self.syntax
    }

    pub fn name(&self) -> &'static str {
        self.syntax.name()
    }

    pub fn extensions(&self) -> &'static [&'static str] {
        self.syntax.extensions()
    }

    pub fn rules(&self) -> &[CommentRule] {
        &self.rules
    }
}

static BUILTIN: LazyLock<Registry> =
    LazyLock::new(|| Registry::new().expect("built-in comment patterns are valid"));

/// Immutable extension → comment rules lookup table.
#[derive(Debug)]
pub struct Registry {
    languages: Vec<LanguageRule>,
    by_extension: HashMap<&'static str, usize>,
}

impl Registry {
    /// Compile the built-in table.
    ///
    /// Most callers want [`Registry::builtin`], which compiles it once per process.
    pub fn new() -> Result<Self> {
        let mut languages = Vec::with_capacity(Syntax::ALL.len());
        let mut by_extension = HashMap::new();

        for (index, syntax) in Syntax::ALL.into_iter().enumerate() {
            languages.push(LanguageRule {
                syntax,
                rules: syntax.rules()?,
            });
            for ext in syntax.extensions() {
                by_extension.insert(*ext, index);
            }
        }

        Ok(Self {
            languages,
            by_extension,
        })
    }

    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    /// Look up a family by extension, including the leading dot (`.py`).
    ///
    /// Matching is exact and case-sensitive.
    pub fn lookup(&self, extension: &str) -> Option<&LanguageRule> {
        self.by_extension
            .get(extension)
            .map(|&index| &self.languages[index])
    }

    pub fn language_for(&self, path: impl AsRef<Path>) -> Option<&LanguageRule> {
        self.lookup(extension_of(path.as_ref()))
    }

    /// Comment rules for `path`, empty when the extension is unknown.
    pub fn rules_for(&self, path: impl AsRef<Path>) -> &[CommentRule] {
        self.language_for(path)
            .map(LanguageRule::rules)
            .unwrap_or(&[])
    }

    pub fn languages(&self) -> impl Iterator<Item = &LanguageRule> {
        self.languages.iter()
    }
}

/// Extension of the file name: from the last `.` to the end, dot included.
///
/// The dot is searched in the raw file name, so a name that is not valid
/// UTF-8 still yields its extension when the suffix itself is. Returns an
/// empty string when there is no dot or the suffix is not valid UTF-8.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use neatfile::language::extension_of;
///
/// assert_eq!(extension_of(Path::new("src/main.rs")), ".rs");
/// assert_eq!(extension_of(Path::new("archive.tar.gz")), ".gz");
/// assert_eq!(extension_of(Path::new(".bashrc")), ".bashrc");
/// assert_eq!(extension_of(Path::new("a.d/Makefile")), "");
/// ```
pub fn extension_of(path: &Path) -> &str {
    let Some(name) = path.file_name() else {
        return "";
    };
    let bytes = name.as_encoded_bytes();
    bytes
        .iter()
        .rposition(|&b| b == b'.')
        .and_then(|index| std::str::from_utf8(&bytes[index..]).ok())
        .unwrap_or("")
}
