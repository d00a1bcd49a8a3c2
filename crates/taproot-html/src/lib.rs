//! HTML scanning engine for the taproot analyzer.
//!
//! # Scope
//!
//! This crate implements:
//! - **HTML Tokenizer** - a single-pass, no-lookahead lexer producing
//!   start-tag, end-tag, and text tokens
//! - **Tag-balance Validator** - an open-tag stack enforcing strict
//!   last-opened-first-closed nesting
//! - **Deepest-text Selector** - the running best non-blank text run,
//!   deepest-wins with last-wins on depth ties
//! - **Analyzer Driver** - fetch, scan, and map the end state to one of
//!   the three reportable outcomes
//!
//! # Not Implemented
//!
//! Full HTML5 parsing is deliberately out of scope: no comments, no CDATA,
//! no script/style raw-text modes, no entity decoding, no attribute model.
//! The engine only recognizes tag names, tracks nesting, and extracts text.

/// Analyzer driver: fetch, scan, and report.
pub mod analyzer;
/// Tag-balance validation and deepest-text selection.
pub mod scan;
/// HTML tokenizer for converting input into tokens.
pub mod tokenizer;

pub use analyzer::{Outcome, analyze, scan_document};
pub use scan::{DeepestText, StructureError, TagStack};
pub use tokenizer::{Token, TokenizeError, Tokenizer};
