//! Structural validation and text selection.
//!
//! The scan layer sits between the tokenizer and the driver: the
//! [`TagStack`] consumes tag tokens and enforces strict
//! last-opened-first-closed nesting, and the [`DeepestText`] selector
//! observes each non-blank text run together with its depth and keeps the
//! running best candidate.

/// Deepest-text candidate selection.
pub mod selector;
/// Open-tag stack and balance validation.
pub mod stack;

pub use selector::DeepestText;
pub use stack::{StructureError, TagStack};
