// email-icons - core/naming.rs
//
// Legacy export filename parsing. Exported fallback PNGs are named
// `<stem>_<type>_<timestamp>.png`; the canonical name is `<stem>.png`.
// Pure string processing, no I/O.

use crate::util::constants::{PNG_SUFFIX, TOKEN_SEPARATOR};

/// Compute the canonical name for a legacy fallback filename.
///
/// Splits the name (minus `.png`) on `_` and looks for the first token equal
/// to `type_label`. Everything before that token is the stem. Returns `None`
/// when the name is not a `.png`, has no `_`, or carries no such token.
///
/// A name that *starts* with the type token yields `".png"`: the stem is
/// empty. Callers rename to it as-is.
pub fn canonicalize(file_name: &str, type_label: &str) -> Option<String> {
    let base = file_name.strip_suffix(PNG_SUFFIX)?;
    if !file_name.contains(TOKEN_SEPARATOR) {
        return None;
    }

    let tokens: Vec<&str> = base.split(TOKEN_SEPARATOR).collect();
    let marker = tokens.iter().position(|t| *t == type_label)?;

    let separator = TOKEN_SEPARATOR.to_string();
    Some(format!("{}{}", tokens[..marker].join(separator.as_str()), PNG_SUFFIX))
}
