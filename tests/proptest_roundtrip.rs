//! Property-based tests with proptest.
//!
//! Two angles on the lossless guarantee:
//!
//! 1. For ANY input string, the serialized document plus the
//!    unconsumed tail reassembles the input exactly — tokenization
//!    never drops or rewrites bytes.
//! 2. Generated documents that serialize to well-formed template text
//!    tokenize back to the same fragment sequence.

use proptest::prelude::*;
use xbps_template_rs::{Document, Fragment, serialize, tokenize};

// -- Leaf strategies --

/// Assignment key: the full identifier charset.
fn key() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_-]{1,12}"
}

/// Unquoted value: one line, must not start with a quote. Interior
/// quotes and placeholder syntax are fine.
fn unquoted_value() -> impl Strategy<Value = String> {
    "[a-z0-9$][a-z0-9 ./:_${}-]{0,20}"
}

/// Quoted value: no quote characters (the grammar has no escapes);
/// may span lines.
fn quoted_value() -> impl Strategy<Value = String> {
    "[a-z0-9 \n./:_${}-]{0,20}"
}

fn comment_text() -> impl Strategy<Value = String> {
    "#[a-z0-9 ()={}$-]{0,20}".prop_map(|s| s)
}

/// Whitespace run that starts on a fresh line, keeping the following
/// fragment anchored at a line start.
fn line_break() -> impl Strategy<Value = String> {
    "\n[ \t\n]{0,4}"
}

fn key_value() -> impl Strategy<Value = Fragment> {
    prop_oneof![
        (key(), unquoted_value()).prop_map(|(k, v)| Fragment::key_value(k, v, false)),
        (key(), quoted_value()).prop_map(|(k, v)| Fragment::key_value(k, v, true)),
    ]
}

fn comment() -> impl Strategy<Value = Fragment> {
    comment_text().prop_map(Fragment::comment)
}

/// Function block with body lines that can never look like the
/// standalone closing brace.
fn function() -> impl Strategy<Value = Fragment> {
    (
        "[a-z_][a-z0-9_]{0,10}",
        prop::collection::vec("\t[a-z0-9 \"$./(){}_-]{0,16}", 0..=4),
    )
        .prop_map(|(name, lines)| {
            let mut body = format!("{name}() {{\n");
            for line in &lines {
                body.push_str(line);
                body.push('\n');
            }
            body.push('}');
            Fragment::function(name, body)
        })
}

/// A document whose serialization is fully tokenizable: fragments
/// that consume to end of line are always followed by a whitespace
/// run starting with a newline.
fn document() -> impl Strategy<Value = Document> {
    (
        prop::option::of(line_break()),
        prop::collection::vec(
            (prop_oneof![key_value(), comment(), function()], line_break()),
            0..=8,
        ),
    )
        .prop_map(|(lead, items)| {
            let mut fragments = Vec::new();
            if let Some(lead) = lead {
                fragments.push(Fragment::whitespace(lead));
            }
            for (item, brk) in items {
                fragments.push(item);
                fragments.push(Fragment::whitespace(brk));
            }
            Document::from(fragments)
        })
}

proptest! {
    /// Tokenization never loses bytes, whatever the input.
    #[test]
    fn serialized_prefix_plus_rest_is_input(input in "[a-zA-Z0-9#=\"$(){}_ \t\n-]{0,60}") {
        let tokenized = tokenize(&input);
        let mut rebuilt = serialize(&tokenized.document);
        rebuilt.push_str(tokenized.rest);
        prop_assert_eq!(rebuilt, input);
    }

    /// Well-formed documents survive serialize -> tokenize intact.
    #[test]
    fn generated_documents_roundtrip(document in document()) {
        let text = serialize(&document);
        let tokenized = tokenize(&text);
        prop_assert_eq!(tokenized.rest, "");
        prop_assert_eq!(&tokenized.document, &document);
        prop_assert_eq!(serialize(&tokenized.document), text);
    }
}
