//! The `+command` / `+main` doc tag micro-language.
//!
//! ```text
//! +command <name> - <short>
//!
//! <long...>
//! ```
//!
//! `+main - <short>` registers the action run when no sub-command is given.

use regex::Regex;
use std::sync::OnceLock;

pub const COMMAND_MARKER: &str = "+command";
pub const MAIN_MARKER: &str = "+main";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Command,
    Main,
}

/// A parsed doc tag together with the function it documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocTag {
    pub kind: TagKind,
    /// `None` for `+main`.
    pub name: Option<String>,
    pub short: String,
    pub long: String,
    /// Identifier of the documented function.
    pub function: String,
}

impl DocTag {
    /// Name the command is registered under; empty for `+main`.
    pub fn command_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

fn command_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[ \t]*(\S+)[ \t]+-[ \t]+(.+)\n((?s).*)").expect("command tag pattern is valid")
    })
}

fn main_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[ \t]+-[ \t]+(.+)\n((?s).*)").expect("main tag pattern is valid")
    })
}

/// Parse the tag in `doc` for `function`.
///
/// Returns `None` when the doc has no marker, or has one that does not fit the
/// tag pattern.
pub fn parse_tag(doc: &str, function: &str) -> Option<DocTag> {
    if let Some(pos) = doc.find(COMMAND_MARKER) {
        let rest = &doc[pos + COMMAND_MARKER.len()..];
        let caps = command_pattern().captures(rest)?;
        return Some(DocTag {
            kind: TagKind::Command,
            name: Some(caps[1].to_string()),
            short: caps[2].trim_end().to_string(),
            long: caps[3].trim().to_string(),
            function: function.to_string(),
        });
    }

    if let Some(pos) = doc.find(MAIN_MARKER) {
        let rest = &doc[pos + MAIN_MARKER.len()..];
        let caps = main_pattern().captures(rest)?;
        return Some(DocTag {
            kind: TagKind::Main,
            name: None,
            short: caps[1].trim_end().to_string(),
            long: caps[2].trim().to_string(),
            function: function.to_string(),
        });
    }

    None
}
