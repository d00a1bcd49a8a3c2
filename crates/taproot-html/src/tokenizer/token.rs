use core::fmt;

/// A lexical event produced by the tokenizer.
///
/// Three kinds cover everything the analyzer needs: an opening tag, a
/// closing tag, and a run of text between tags. Attributes, comments, and
/// doctypes are not modeled; anything after a tag name up to `>` is
/// discarded during tokenization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// An opening tag such as `<div>`. The name is lower-cased so that
    /// structural comparison is case-insensitive.
    StartTag {
        /// Lower-cased tag name.
        name: String,
    },

    /// A closing tag such as `</div>`. The name is lower-cased.
    EndTag {
        /// Lower-cased tag name.
        name: String,
    },

    /// A contiguous run of characters that are not part of any tag markup.
    /// May be entirely whitespace; the selector decides what is blank.
    Text {
        /// Raw text content, un-normalized.
        data: String,
    },
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartTag { name } => write!(f, "<{name}>"),
            Self::EndTag { name } => write!(f, "</{name}>"),
            Self::Text { data } => write!(f, "Text({data:?})"),
        }
    }
}
