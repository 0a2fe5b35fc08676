//! Recursive placeholder expansion over key/value fragments.
//!
//! Values may reference other keys as `$name` or `${name}`; expansion
//! substitutes each reference with the expanded value of that key,
//! depth-first and left to right. A set of keys currently being
//! expanded is threaded through the recursion by value: each nested
//! expansion works on its own copy, so sibling placeholders share only
//! the ancestry above them. A reference to a key already on the chain,
//! or to a key with no assignment at all, substitutes the empty string
//! rather than failing.

use std::collections::HashSet;

use crate::document::Document;

/// Placeholder names are letters and underscore only. This is
/// narrower than the assignment key charset on purpose: it matches
/// what xbps-src templates actually dereference, and text like `$1`
/// stays literal.
const fn is_name_byte(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

impl Document {
    /// Return the value of `key` with all placeholders recursively
    /// expanded, or `None` when `key` has no assignment at all.
    #[must_use]
    pub fn get_expanded(&self, key: &str) -> Option<String> {
        let source = self.get(key)?;
        let mut visited = HashSet::new();
        visited.insert(key.to_string());
        Some(self.expand_placeholders(source, &visited))
    }

    /// Substitute every placeholder in `value`, recursing into the
    /// referenced keys. `visited` holds the keys on the current call
    /// chain; each recursion gets its own copy extended by one key.
    fn expand_placeholders(&self, value: &str, visited: &HashSet<String>) -> String {
        let bytes = value.as_bytes();
        let mut out = String::with_capacity(value.len());
        let mut pos = 0;

        while let Some(offset) = bytes[pos..].iter().position(|&byte| byte == b'$') {
            let dollar = pos + offset;
            out.push_str(&value[pos..dollar]);

            match match_placeholder(&bytes[dollar..]) {
                Some((name_range, len)) => {
                    let name = &value[dollar + name_range.0..dollar + name_range.1];
                    out.push_str(&self.expand_reference(name, visited));
                    pos = dollar + len;
                }
                None => {
                    // not a placeholder; keep the `$` literal
                    out.push('$');
                    pos = dollar + 1;
                }
            }
        }

        out.push_str(&value[pos..]);
        out
    }

    fn expand_reference(&self, name: &str, visited: &HashSet<String>) -> String {
        if visited.contains(name) {
            return String::new();
        }

        let Some(source) = self.get(name) else {
            return String::new();
        };

        let mut visited = visited.clone();
        visited.insert(name.to_owned());
        self.expand_placeholders(source, &visited)
    }
}

/// Match `$name` or `${name}` at the head of `bytes` (which starts at
/// a `$`). Returns the byte range of the name relative to the `$` and
/// the total matched length, or `None` when the text only looks like
/// a placeholder (`$1`, `${`, `${}`, a trailing `$`).
fn match_placeholder(bytes: &[u8]) -> Option<((usize, usize), usize)> {
    if bytes.get(1) == Some(&b'{') {
        let name_len = bytes[2..].iter().take_while(|&&b| is_name_byte(b)).count();
        if name_len == 0 || bytes.get(2 + name_len) != Some(&b'}') {
            return None;
        }
        return Some(((2, 2 + name_len), name_len + 3));
    }

    let name_len = bytes[1..].iter().take_while(|&&b| is_name_byte(b)).count();
    if name_len == 0 {
        return None;
    }
    Some(((1, 1 + name_len), name_len + 1))
}
