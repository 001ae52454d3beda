//! Pattern model: declarative tokens, compilation, textual parsing, and
//! shifted variants.

mod compile;
mod parse;
mod shift;
mod token;

use std::fmt;

pub use compile::compile_patterns;
pub use parse::parse_pattern;
pub use shift::{SHIFT_COUNT, ShiftedPattern, expand_all, expand_shifts};
pub use token::{RawToken, Token, describe_raw};

/// An ordered sequence of compiled tokens.
///
/// Every `Fixed`/`OneOf` byte value is in range by construction;
/// `Pattern::compile` additionally guarantees wildcard bounds are
/// ordered. Patterns built directly from tokens skip that check and
/// simply never match if a wildcard range is inverted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    tokens: Vec<Token>,
}

impl Pattern {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for token in &self.tokens {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{token}")?;
            first = false;
        }
        Ok(())
    }
}
