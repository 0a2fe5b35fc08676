//! In-memory template document and its query/mutation API.
//!
//! All lookups and mutations act on the *first* fragment matching the
//! given key or name. Templates may legitimately reassign a variable;
//! the first occurrence shadows later ones by position, and later
//! duplicates are neither consulted nor removed. This mirrors how
//! xbps-src itself reads the file top to bottom.

use std::fmt;

use crate::fragment::Fragment;
use crate::serializer::serialize;

/// An ordered sequence of fragments representing a parsed template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub fragments: Vec<Fragment>,
}

impl Document {
    /// Create an empty document.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fragments: Vec::new(),
        }
    }

    /// Return the value of the first `key=value` fragment with the
    /// given key, or `None` if no such assignment exists.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fragments.iter().find_map(|fragment| match fragment {
            Fragment::KeyValue { key: k, value, .. } if k == key => Some(value.as_str()),
            _ => None,
        })
    }

    /// Replace the value of the first `key=value` fragment with the
    /// given key. When `quoted` is `Some`, the quoting flag is
    /// overridden as well; otherwise it is preserved.
    ///
    /// Returns `false` without touching the document when the key is
    /// absent. This never creates a new fragment; use
    /// [`Document::insert_after`] for that.
    pub fn set(&mut self, key: &str, value: impl Into<String>, quoted: Option<bool>) -> bool {
        for fragment in &mut self.fragments {
            if let Fragment::KeyValue {
                key: k,
                value: v,
                quoted: q,
            } = fragment
            {
                if k == key {
                    *v = value.into();
                    if let Some(quoted) = quoted {
                        *q = quoted;
                    }
                    return true;
                }
            }
        }
        false
    }

    /// Splice `fragments` immediately after the first `key=value`
    /// fragment whose key is `anchor`, shifting later fragments down.
    ///
    /// Returns `false` and leaves the document unchanged when the
    /// anchor key is absent.
    pub fn insert_after(&mut self, fragments: Vec<Fragment>, anchor: &str) -> bool {
        let Some(idx) = self.fragments.iter().position(
            |fragment| matches!(fragment, Fragment::KeyValue { key, .. } if key == anchor),
        ) else {
            return false;
        };

        self.fragments.splice(idx + 1..idx + 1, fragments);
        true
    }

    /// Return the raw body text of the first function block with the
    /// given name, header and closing brace included.
    #[must_use]
    pub fn get_func(&self, name: &str) -> Option<&str> {
        self.fragments.iter().find_map(|fragment| match fragment {
            Fragment::FunctionBlock { name: n, body } if n == name => Some(body.as_str()),
            _ => None,
        })
    }

    /// Replace the body text of the first function block with the
    /// given name. Only the body is rewritten; the recorded name stays
    /// as it was tokenized, so the caller must supply a body whose
    /// embedded header still matches `name`.
    ///
    /// Returns `false` when no such block exists.
    pub fn set_func(&mut self, name: &str, body: impl Into<String>) -> bool {
        for fragment in &mut self.fragments {
            if let Fragment::FunctionBlock { name: n, body: b } = fragment {
                if n == name {
                    *b = body.into();
                    return true;
                }
            }
        }
        false
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize(self))
    }
}

impl From<Vec<Fragment>> for Document {
    fn from(fragments: Vec<Fragment>) -> Self {
        Self { fragments }
    }
}
