//! HTML tokenizer module.
//!
//! A deliberately small subset of the WHATWG tokenization state machine
//! ([§ 13.2.5](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)):
//! five states, no attribute model, no character references. Enough to
//! recognize tag names and text runs in a single forward pass.

/// Token types produced by the tokenizer.
pub mod token;
/// Tokenizer state machine implementation.
pub mod tokenizer;

pub use token::Token;
pub use tokenizer::{TokenizeError, Tokenizer, TokenizerState};
