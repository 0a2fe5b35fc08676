//! Serializer that renders a document back into template text.
//!
//! Whitespace, comment, and function fragments render their stored raw
//! text verbatim, so an unmutated document reproduces its source byte
//! for byte. Quotes around key/value fragments are generated from the
//! `quoted` flag and are never part of the stored value.

use crate::document::Document;
use crate::fragment::Fragment;

/// Render a document to template text. Pure and total.
#[must_use]
pub fn serialize(document: &Document) -> String {
    let mut out = String::new();

    for fragment in &document.fragments {
        match fragment {
            Fragment::Whitespace(text)
            | Fragment::Comment(text)
            | Fragment::FunctionBlock { body: text, .. } => out.push_str(text),
            Fragment::KeyValue { key, value, quoted } => {
                out.push_str(key);
                out.push('=');
                if *quoted {
                    out.push('"');
                    out.push_str(value);
                    out.push('"');
                } else {
                    out.push_str(value);
                }
            }
        }
    }

    out
}
