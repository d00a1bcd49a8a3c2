//! The tokenizer state machine.
//!
//! Modeled on the WHATWG tokenizer's structure (one handler per state,
//! "switch to" / "reconsume in" transitions) but reduced to the five
//! states the analyzer needs. The tokenizer is a lazy iterator: each call
//! to `next()` consumes input until one token is complete, so a document
//! is scanned in a single forward pass with no lookahead beyond the
//! current character and no backtracking.

use std::mem;
use std::str::Chars;

use strum_macros::Display;

use super::token::Token;

/// Tokenizer states.
///
/// The subset of [WHATWG § 13.2.5](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
/// needed when attributes, comments, and character references are not
/// modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TokenizerState {
    /// Accumulating text; `<` leaves this state.
    Data,
    /// Just consumed `<`; decides between start tag and end tag.
    TagOpen,
    /// Just consumed `</`; the next characters are an end tag name.
    EndTagOpen,
    /// Reading a tag name up to whitespace, `/`, or `>`.
    TagName,
    /// Discarding everything up to `>` (attributes are not modeled).
    AfterTagName,
}

/// A tokenization failure.
///
/// The only anomaly this tokenizer can hit: a tag that opens with `<` but
/// never sees its `>` before end-of-input. The validator folds it into the
/// malformed outcome rather than treating it as a crash condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TokenizeError {
    /// A `<` with no matching `>` before end-of-input.
    #[error("unterminated tag at end of input")]
    UnterminatedTag,
}

/// Single-pass HTML tokenizer.
///
/// Iterates over [`Token`]s lazily; yielding `Err` ends the stream.
///
/// ```
/// use taproot_html::{Token, Tokenizer};
///
/// let tokens: Vec<_> = Tokenizer::new("<p>hi</p>").collect();
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[1], Ok(Token::Text { data: "hi".to_string() }));
/// ```
pub struct Tokenizer<'a> {
    state: TokenizerState,
    chars: Chars<'a>,
    current_input_character: Option<char>,
    // When true, the next iteration of the main loop will not consume a new
    // character. "Reconsume in the X state" sets this flag.
    reconsume: bool,
    // Token under construction.
    end_tag: bool,
    name: String,
    text: String,
    // Set at end-of-input (or on error); the iterator is fused after that.
    finished: bool,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer over the given input. The initial state is the
    /// data state.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Tokenizer {
            state: TokenizerState::Data,
            chars: input.chars(),
            current_input_character: None,
            reconsume: false,
            end_tag: false,
            name: String::new(),
            text: String::new(),
            finished: false,
        }
    }

    /// "Switch to the X state." The next character is consumed on the next
    /// iteration of the main loop.
    const fn switch_to(&mut self, new_state: TokenizerState) {
        self.state = new_state;
    }

    /// "Reconsume in the X state." The current character is processed again
    /// in the new state.
    const fn reconsume_in(&mut self, new_state: TokenizerState) {
        self.reconsume = true;
        self.state = new_state;
    }

    /// End the stream with an unterminated-tag error.
    fn fail_unterminated(&mut self) -> Option<Result<Token, TokenizeError>> {
        self.finished = true;
        Some(Err(TokenizeError::UnterminatedTag))
    }

    /// Finish the current tag token and return to the data state.
    fn emit_tag(&mut self) -> Token {
        self.switch_to(TokenizerState::Data);
        let name = mem::take(&mut self.name);
        if mem::take(&mut self.end_tag) {
            Token::EndTag { name }
        } else {
            Token::StartTag { name }
        }
    }

    /// Data state: accumulate text until `<` or end-of-input.
    fn handle_data_state(&mut self) -> Option<Result<Token, TokenizeError>> {
        match self.current_input_character {
            Some('<') => {
                self.switch_to(TokenizerState::TagOpen);
                if self.text.is_empty() {
                    None
                } else {
                    Some(Ok(Token::Text {
                        data: mem::take(&mut self.text),
                    }))
                }
            }
            Some(c) => {
                self.text.push(c);
                None
            }
            None => {
                self.finished = true;
                if self.text.is_empty() {
                    None
                } else {
                    Some(Ok(Token::Text {
                        data: mem::take(&mut self.text),
                    }))
                }
            }
        }
    }

    /// Tag open state: `/` means an end tag, anything else begins a start
    /// tag name.
    fn handle_tag_open_state(&mut self) -> Option<Result<Token, TokenizeError>> {
        match self.current_input_character {
            Some('/') => {
                self.switch_to(TokenizerState::EndTagOpen);
                None
            }
            Some(_) => {
                self.reconsume_in(TokenizerState::TagName);
                None
            }
            None => self.fail_unterminated(),
        }
    }

    /// End tag open state: mark the pending token as an end tag and read
    /// its name.
    fn handle_end_tag_open_state(&mut self) -> Option<Result<Token, TokenizeError>> {
        match self.current_input_character {
            Some(_) => {
                self.end_tag = true;
                self.reconsume_in(TokenizerState::TagName);
                None
            }
            None => self.fail_unterminated(),
        }
    }

    /// Tag name state: the name runs to the first whitespace, `/`, or `>`.
    /// Uppercase is folded to lowercase so structural comparison is
    /// case-insensitive.
    fn handle_tag_name_state(&mut self) -> Option<Result<Token, TokenizeError>> {
        match self.current_input_character {
            Some('>') => Some(Ok(self.emit_tag())),
            Some(c) if c == '/' || c.is_whitespace() => {
                self.switch_to(TokenizerState::AfterTagName);
                None
            }
            Some(c) => {
                self.name.push(c.to_ascii_lowercase());
                None
            }
            None => self.fail_unterminated(),
        }
    }

    /// After tag name state: attribute and slash content is discarded up
    /// to `>`.
    fn handle_after_tag_name_state(&mut self) -> Option<Result<Token, TokenizeError>> {
        match self.current_input_character {
            Some('>') => Some(Ok(self.emit_tag())),
            Some(_) => None,
            None => self.fail_unterminated(),
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, TokenizeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        loop {
            if self.reconsume {
                self.reconsume = false;
            } else {
                self.current_input_character = self.chars.next();
            }

            let emitted = match self.state {
                TokenizerState::Data => self.handle_data_state(),
                TokenizerState::TagOpen => self.handle_tag_open_state(),
                TokenizerState::EndTagOpen => self.handle_end_tag_open_state(),
                TokenizerState::TagName => self.handle_tag_name_state(),
                TokenizerState::AfterTagName => self.handle_after_tag_name_state(),
            };

            if let Some(item) = emitted {
                return Some(item);
            }
            if self.finished {
                return None;
            }
        }
    }
}
