/// One lexical unit of a template document.
///
/// A parsed template is nothing more than an ordered sequence of
/// fragments; their order is the only record of the original file
/// layout, so it is preserved unless explicitly mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Run of blank/newline characters.
    Whitespace(String),
    /// Comment line, including the leading `#`, newline excluded.
    Comment(String),
    /// `key=value` or `key="value"` assignment.
    ///
    /// `value` never includes the surrounding quotes; `quoted` alone
    /// decides whether quotes are re-emitted on serialization.
    KeyValue {
        key: String,
        value: String,
        quoted: bool,
    },
    /// Shell-style function block.
    ///
    /// `body` is the raw text from the `name() {` header through the
    /// closing `}` inclusive. `name` is extracted once at tokenization
    /// and never rewritten, even when the body is replaced.
    FunctionBlock { name: String, body: String },
}

impl Fragment {
    /// Create a whitespace fragment.
    #[must_use]
    pub fn whitespace(text: impl Into<String>) -> Self {
        Self::Whitespace(text.into())
    }

    /// Create a comment fragment. The text should include the `#`.
    #[must_use]
    pub fn comment(text: impl Into<String>) -> Self {
        Self::Comment(text.into())
    }

    /// Create a key/value fragment.
    #[must_use]
    pub fn key_value(key: impl Into<String>, value: impl Into<String>, quoted: bool) -> Self {
        Self::KeyValue {
            key: key.into(),
            value: value.into(),
            quoted,
        }
    }

    /// Create a function-block fragment. `body` should contain the
    /// full block text, `name() {` header and closing `}` included.
    #[must_use]
    pub fn function(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self::FunctionBlock {
            name: name.into(),
            body: body.into(),
        }
    }
}
