//! The analyzer driver.
//!
//! Orchestrates the full pipeline: retrieve the document through the
//! [`DocumentSource`] capability, run tokenizer → stack → selector to
//! completion, and map the end state to one of the three reportable
//! outcomes. Data flows strictly forward; no stage revisits earlier input.

use core::fmt;

use taproot_common::DocumentSource;

use crate::scan::{DeepestText, StructureError, TagStack};
use crate::tokenizer::{Token, Tokenizer};

/// The terminal result of one analysis run.
///
/// Its `Display` impl is the exact one-line report the CLI prints. A
/// document with no non-blank text run is reported the same way as a
/// structurally invalid one; the two are kept distinct here so callers
/// can tell them apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The document is well-formed; this is its deepest non-blank text
    /// run, normalized to a single trimmed, single-spaced line.
    Selected(String),
    /// The document is well-formed but contains no non-blank text at all.
    NoContent,
    /// An unclosed, mismatched, or unterminated tag was detected.
    StructurallyInvalid,
    /// The document could not be retrieved; scanning never began.
    RetrievalFailed,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Selected(text) => f.write_str(text),
            Self::NoContent | Self::StructurallyInvalid => f.write_str("malformed HTML"),
            Self::RetrievalFailed => f.write_str("URL connection error"),
        }
    }
}

/// Scan a document in a single pass and select its deepest text run.
///
/// Returns `Ok(Some(text))` for a well-formed document with at least one
/// non-blank text run, `Ok(None)` for a well-formed document with none.
///
/// # Errors
///
/// Returns [`StructureError`] the instant a structural violation is
/// detected. The error is terminal: scanning stops and any candidate
/// accumulated before the violation is discarded.
pub fn scan_document(html: &str) -> Result<Option<String>, StructureError> {
    let mut stack = TagStack::new();
    let mut selector = DeepestText::new();

    for token in Tokenizer::new(html) {
        match token? {
            Token::StartTag { name } => stack.push(name),
            Token::EndTag { name } => stack.close(&name)?,
            Token::Text { data } => selector.observe(stack.depth(), &data),
        }
    }
    stack.finish()?;

    Ok(selector.into_text())
}

/// Run one full analysis: fetch, scan, and classify.
///
/// Every retrieval failure collapses to [`Outcome::RetrievalFailed`] and
/// every structural violation to [`Outcome::StructurallyInvalid`]; the
/// analyzer never aborts without producing an outcome.
#[must_use]
pub fn analyze(source: &dyn DocumentSource, url: &str) -> Outcome {
    let Ok(html) = source.fetch(url) else {
        return Outcome::RetrievalFailed;
    };

    match scan_document(&html) {
        Ok(Some(text)) => Outcome::Selected(text),
        Ok(None) => Outcome::NoContent,
        Err(_) => Outcome::StructurallyInvalid,
    }
}
