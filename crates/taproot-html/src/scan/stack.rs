//! The stack of open tags.
//!
//! A reduced form of the parser's "stack of open elements"
//! ([WHATWG § 13.2.4.2](https://html.spec.whatwg.org/multipage/parsing.html#the-stack-of-open-elements)):
//! no tree is built, the stack alone answers the two questions the
//! analyzer has — is the document balanced, and how deep is the current
//! insertion point.

use crate::tokenizer::TokenizeError;

/// A structural violation. Raising any of these is terminal for the scan:
/// a malformed document never yields a text answer, even if a deepest run
/// was already found.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructureError {
    /// A closing tag appeared with no tag open at all.
    #[error("closing tag </{0}> with no matching open tag")]
    UnexpectedClosingTag(String),

    /// A closing tag did not name the innermost open tag. Matching is
    /// strict LIFO; no closest-name recovery is attempted, so
    /// `<div><span></div></span>` is malformed.
    #[error("closing tag </{found}> does not match innermost open tag <{expected}>")]
    MismatchedClosingTag {
        /// The innermost open tag name at the time of the close.
        expected: String,
        /// The name the closing tag actually carried.
        found: String,
    },

    /// End-of-input was reached with this tag still open.
    #[error("tag <{0}> is never closed")]
    UnclosedTag(String),

    /// A tokenization anomaly, folded into the structural outcome rather
    /// than treated as a distinct crash condition.
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),
}

/// The ordered path of open tag names from the document root to the
/// current insertion point.
///
/// Invariant: the stack's length equals the current nesting depth. It is
/// mutated only by [`push`](Self::push) on an open tag and
/// [`close`](Self::close) on a matching close tag.
#[derive(Debug, Default)]
pub struct TagStack {
    open: Vec<String>,
}

impl TagStack {
    /// Create an empty stack (depth 0, the document root level).
    #[must_use]
    pub const fn new() -> Self {
        Self { open: Vec::new() }
    }

    /// Current nesting depth: the number of still-open ancestor tags.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Record an opening tag. Names arrive already lower-cased from the
    /// tokenizer.
    pub fn push(&mut self, name: String) {
        self.open.push(name);
    }

    /// Record a closing tag.
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::UnexpectedClosingTag`] on stack underflow
    /// and [`StructureError::MismatchedClosingTag`] when the close does not
    /// name the most recently opened unmatched tag.
    pub fn close(&mut self, name: &str) -> Result<(), StructureError> {
        match self.open.last() {
            None => Err(StructureError::UnexpectedClosingTag(name.to_string())),
            Some(top) if top.as_str() != name => Err(StructureError::MismatchedClosingTag {
                expected: top.clone(),
                found: name.to_string(),
            }),
            Some(_) => {
                let _ = self.open.pop();
                Ok(())
            }
        }
    }

    /// Check the end-of-input condition: every opened tag must have been
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::UnclosedTag`] naming the innermost open
    /// tag if the stack is not empty.
    pub fn finish(mut self) -> Result<(), StructureError> {
        match self.open.pop() {
            Some(top) => Err(StructureError::UnclosedTag(top)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_pair() {
        let mut stack = TagStack::new();
        stack.push("html".to_string());
        assert_eq!(stack.depth(), 1);
        assert!(stack.close("html").is_ok());
        assert_eq!(stack.depth(), 0);
        assert!(stack.finish().is_ok());
    }

    #[test]
    fn test_close_without_open() {
        let mut stack = TagStack::new();
        assert_eq!(
            stack.close("div"),
            Err(StructureError::UnexpectedClosingTag("div".to_string()))
        );
    }

    #[test]
    fn test_interleaved_close_is_mismatch() {
        // <div><span></div> - strict LIFO, no closest-name recovery
        let mut stack = TagStack::new();
        stack.push("div".to_string());
        stack.push("span".to_string());
        assert_eq!(
            stack.close("div"),
            Err(StructureError::MismatchedClosingTag {
                expected: "span".to_string(),
                found: "div".to_string(),
            })
        );
    }

    #[test]
    fn test_unclosed_tag_at_end() {
        let mut stack = TagStack::new();
        stack.push("body".to_string());
        stack.push("div".to_string());
        assert_eq!(
            stack.finish(),
            Err(StructureError::UnclosedTag("div".to_string()))
        );
    }
}
