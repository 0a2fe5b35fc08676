//! Byte-cursor tokenizer for template text.
//!
//! The tokenizer repeatedly matches the head of the remaining input
//! against the four fragment grammars in a fixed priority order:
//! whitespace, comment, key/value, function block. The first grammar
//! that matches wins and its prefix is consumed into a fragment.
//! Matching is always anchored at the cursor; there is no scanning
//! ahead. When nothing matches, tokenization stops cleanly and the
//! unconsumed tail is handed back to the caller.

use crate::document::Document;
use crate::fragment::Fragment;

/// Result of tokenizing a template: the parsed document plus whatever
/// tail failed to match any fragment grammar (empty on full success).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenized<'a> {
    pub document: Document,
    pub rest: &'a str,
}

/// Error produced by [`tokenize_full`] when input is left over.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized input at byte {offset}: {snippet:?}")]
pub struct TokenizeError {
    /// Byte offset of the first unconsumed character.
    pub offset: usize,
    /// Start of the unconsumed tail, truncated for display.
    pub snippet: String,
}

/// Tokenize template text into a document.
///
/// Unrecognized trailing text is not an error: the returned
/// [`Tokenized`] carries the partial document together with the
/// unconsumed tail so the caller can decide how to react.
#[must_use]
pub fn tokenize(input: &str) -> Tokenized<'_> {
    let mut scanner = Scanner::new(input);
    let mut fragments = Vec::new();

    while !scanner.at_end() {
        let fragment = scanner
            .match_whitespace()
            .or_else(|| scanner.match_comment())
            .or_else(|| scanner.match_key_value())
            .or_else(|| scanner.match_function());

        match fragment {
            Some(fragment) => fragments.push(fragment),
            None => break,
        }
    }

    Tokenized {
        document: Document::from(fragments),
        rest: scanner.rest(),
    }
}

/// Tokenize template text, requiring the whole input to match.
///
/// # Errors
///
/// Returns [`TokenizeError`] when any tail is left unconsumed.
pub fn tokenize_full(input: &str) -> Result<Document, TokenizeError> {
    let tokenized = tokenize(input);

    if tokenized.rest.is_empty() {
        Ok(tokenized.document)
    } else {
        Err(TokenizeError {
            offset: input.len() - tokenized.rest.len(),
            snippet: snippet_of(tokenized.rest),
        })
    }
}

const SNIPPET_CHARS: usize = 40;

fn snippet_of(rest: &str) -> String {
    let line = rest.lines().next().unwrap_or(rest);
    line.chars().take(SNIPPET_CHARS).collect()
}

const fn is_key_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-'
}

struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    const fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn bytes(&self) -> &'a [u8] {
        &self.input.as_bytes()[self.pos..]
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.input.as_bytes().get(self.pos + offset).copied()
    }

    /// Consume `len` bytes and return them as a string slice. Every
    /// fragment boundary falls on an ASCII delimiter, so slicing at
    /// byte offsets cannot split a UTF-8 sequence.
    fn take(&mut self, len: usize) -> &'a str {
        let text = &self.input[self.pos..self.pos + len];
        self.pos += len;
        text
    }

    /// Longest run of whitespace characters at the cursor.
    fn match_whitespace(&mut self) -> Option<Fragment> {
        let len = self
            .bytes()
            .iter()
            .take_while(|byte| byte.is_ascii_whitespace())
            .count();

        if len == 0 {
            return None;
        }

        Some(Fragment::whitespace(self.take(len)))
    }

    /// A `#` line, consumed through end of line, newline excluded.
    fn match_comment(&mut self) -> Option<Fragment> {
        if self.peek_at(0) != Some(b'#') {
            return None;
        }

        let len = self
            .bytes()
            .iter()
            .take_while(|&&byte| byte != b'\n')
            .count();

        Some(Fragment::comment(self.take(len)))
    }

    /// `key=value` or `key="value"`. The unquoted form runs to end of
    /// line and needs at least one character; the quoted form may span
    /// newlines and has no escape handling, so an unterminated quote
    /// fails the whole match and falls through to parse-stop.
    fn match_key_value(&mut self) -> Option<Fragment> {
        let bytes = self.bytes();
        let key_len = bytes.iter().take_while(|&&byte| is_key_byte(byte)).count();

        if key_len == 0 || bytes.get(key_len) != Some(&b'=') {
            return None;
        }

        let value_start = key_len + 1;

        if bytes.get(value_start) == Some(&b'"') {
            let inner = &bytes[value_start + 1..];
            let value_len = inner.iter().position(|&byte| byte == b'"')?;
            let key = &self.input[self.pos..self.pos + key_len];
            let value_at = self.pos + value_start + 1;
            let value = &self.input[value_at..value_at + value_len];
            let fragment = Fragment::key_value(key, value, true);
            self.pos += value_start + 1 + value_len + 1;
            return Some(fragment);
        }

        if matches!(bytes.get(value_start), None | Some(&b'\n')) {
            return None;
        }

        let value_len = bytes[value_start..]
            .iter()
            .take_while(|&&byte| byte != b'\n')
            .count();

        let key = &self.input[self.pos..self.pos + key_len];
        let value = &self.input[self.pos + value_start..self.pos + value_start + value_len];
        let fragment = Fragment::key_value(key, value, false);
        self.pos += value_start + value_len;
        Some(fragment)
    }

    /// `name() {` header followed by a body consumed line by line
    /// until the first line that is exactly `}`. The stored text spans
    /// the header through that `}` inclusive. Nested braces get no
    /// special handling; the scan always stops at the first standalone
    /// closing line.
    fn match_function(&mut self) -> Option<Fragment> {
        let bytes = self.bytes();

        let name_len = bytes
            .iter()
            .take_while(|&&byte| !byte.is_ascii_whitespace() && byte != b'(')
            .count();

        if name_len == 0 {
            return None;
        }

        let mut cursor = name_len;
        cursor += count_blanks(&bytes[cursor..]);

        if bytes.get(cursor) != Some(&b'(') || bytes.get(cursor + 1) != Some(&b')') {
            return None;
        }
        cursor += 2;
        cursor += count_blanks(&bytes[cursor..]);

        if bytes.get(cursor) != Some(&b'{') || bytes.get(cursor + 1) != Some(&b'\n') {
            return None;
        }
        cursor += 2;

        // Body lines up to the standalone closing brace.
        loop {
            let line_is_close = bytes.get(cursor) == Some(&b'}')
                && matches!(bytes.get(cursor + 1), None | Some(&b'\n'));

            if line_is_close {
                cursor += 1;
                break;
            }

            let line_len = bytes[cursor..]
                .iter()
                .position(|&byte| byte == b'\n')?;
            cursor += line_len + 1;
        }

        let name = &self.input[self.pos..self.pos + name_len];
        let body = &self.input[self.pos..self.pos + cursor];
        let fragment = Fragment::function(name, body);
        self.pos += cursor;
        Some(fragment)
    }
}

/// Spaces and tabs only; a newline ends the header match.
fn count_blanks(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .take_while(|&&byte| byte == b' ' || byte == b'\t')
        .count()
}
