//! Registration code generator.
//!
//! Scans the top-level functions of a Rust source file for `+command` and
//! `+main` doc tags and writes a source file with one routine registering each
//! tagged function as a command:
//!
//! ```rust,ignore
//! /// +command up - count up!
//! ///
//! /// up [-f <from>] <count>
//! ///
//! /// Counts up to the given count.
//! fn action_up(flags: &mut subcmd::FlagSet, args: &[String]) -> subcmd::ActionResult {
//!     // ...
//! }
//! ```
//!
//! Functions whose doc carries a marker that does not fit the tag pattern are
//! skipped silently.

mod doc;
mod emit;
mod tag;

pub use doc::doc_text;
pub use emit::{render, EmitOptions};
pub use tag::{parse_tag, DocTag, TagKind, COMMAND_MARKER, MAIN_MARKER};

use crate::error::GenerateError;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Collect the doc tags of `path`, in declaration order.
///
/// `src` is parsed instead of the file contents when given; `path` is then only
/// used in diagnostics.
pub fn scan(path: &Path, src: Option<&str>) -> Result<Vec<DocTag>, GenerateError> {
    let source = match src {
        Some(src) => src.to_string(),
        None => std::fs::read_to_string(path).map_err(|source| GenerateError::Read {
            path: path.to_path_buf(),
            source,
        })?,
    };

    let file = syn::parse_file(&source).map_err(|source| GenerateError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let mut tags = Vec::new();
    for item in &file.items {
        let syn::Item::Fn(item_fn) = item else {
            continue;
        };
        let function = item_fn.sig.ident.to_string();
        let Some(doc) = doc_text(&item_fn.attrs) else {
            continue;
        };
        match parse_tag(&doc, &function) {
            Some(tag) => {
                info!(
                    function = %function,
                    command = %tag.command_name(),
                    "Found command tag"
                );
                tags.push(tag);
            }
            None => {
                if doc.contains(COMMAND_MARKER) || doc.contains(MAIN_MARKER) {
                    debug!(function = %function, "Skipping malformed command tag");
                }
            }
        }
    }
    Ok(tags)
}

/// Generate the registration source for `path` with default options.
pub fn generate<W: Write>(
    w: &mut W,
    path: impl AsRef<Path>,
    src: Option<&str>,
) -> Result<(), GenerateError> {
    generate_with(w, path, src, &EmitOptions::default())
}

/// Generate the registration source for `path`.
pub fn generate_with<W: Write>(
    w: &mut W,
    path: impl AsRef<Path>,
    src: Option<&str>,
    options: &EmitOptions,
) -> Result<(), GenerateError> {
    let path = path.as_ref();
    let tags = scan(path, src)?;
    debug!(path = %path.display(), commands = tags.len(), "Rendering registrations");
    let code = render(&tags, options);
    w.write_all(code.as_bytes())?;
    Ok(())
}
