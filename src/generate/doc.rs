//! Doc comment text extraction.
//!
//! `///` and `/** */` comments reach syn as `#[doc = "..."]` attributes. The
//! text is normalised the way rustdoc reads it: one leading space dropped per
//! line, trailing whitespace removed, leading and trailing blank lines dropped
//! and runs of blank lines collapsed into one. Non-empty text ends with `\n`.

use syn::Attribute;

/// Normalised doc text of an item, or `None` when it has no doc comment.
pub fn doc_text(attrs: &[Attribute]) -> Option<String> {
    let raw: Vec<String> = attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            syn::Meta::NameValue(meta) => match &meta.value {
                syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Str(lit_str),
                    ..
                }) => Some(lit_str.value()),
                _ => None,
            },
            _ => None,
        })
        .collect();

    if raw.is_empty() {
        return None;
    }

    let lines = raw.iter().flat_map(|chunk| chunk.split('\n')).map(|line| {
        let line = line.strip_prefix(' ').unwrap_or(line);
        line.trim_end()
    });

    let mut out: Vec<&str> = Vec::new();
    for line in lines {
        if line.is_empty() && out.last().map_or(true, |last| last.is_empty()) {
            continue;
        }
        out.push(line);
    }
    while out.last().is_some_and(|last| last.is_empty()) {
        out.pop();
    }

    if out.is_empty() {
        return None;
    }
    let mut text = out.join("\n");
    text.push('\n');
    Some(text)
}
