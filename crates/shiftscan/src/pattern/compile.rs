//! Raw token compilation and validation.
//!
//! Compilation is total per token: hex text that fails to parse as a byte
//! survives as an invalid candidate so the whole pattern can be named in a
//! diagnostic. Validation then rejects the entire pattern if any candidate
//! is invalid; partial patterns are never scanned.

use tracing::warn;

use crate::error::{Error, Result};
use crate::pattern::Pattern;
use crate::pattern::token::{RawToken, Token, describe_raw};

/// A token after hex conversion but before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Candidate {
    Fixed(Option<u8>),
    Wildcard { min: usize, max: usize },
    OneOf(Vec<Option<u8>>),
}

impl Candidate {
    /// Validate and convert into a strict token. `None` marks the
    /// candidate invalid: a malformed or out-of-range byte value, or an
    /// inverted wildcard range.
    pub(crate) fn finish(self) -> Option<Token> {
        match self {
            Candidate::Fixed(value) => value.map(Token::Fixed),
            Candidate::Wildcard { min, max } if min <= max => {
                Some(Token::Wildcard { min, max })
            }
            Candidate::Wildcard { .. } => None,
            Candidate::OneOf(values) => values
                .into_iter()
                .collect::<Option<Vec<u8>>>()
                .map(Token::OneOf),
        }
    }
}

pub(crate) fn compile_token(raw: &RawToken) -> Candidate {
    match raw {
        RawToken::Fixed(text) => Candidate::Fixed(parse_hex_byte(text)),
        RawToken::Wildcard { min, max } => Candidate::Wildcard {
            min: *min,
            max: *max,
        },
        RawToken::OneOf(values) => {
            Candidate::OneOf(values.iter().map(|v| parse_hex_byte(v)).collect())
        }
    }
}

/// Parse two-digit hex text into a byte. Malformed text and values that
/// do not fit a byte both come back as `None`.
fn parse_hex_byte(text: &str) -> Option<u8> {
    u8::from_str_radix(text, 16).ok()
}

impl Pattern {
    /// Compile a raw token sequence. The whole pattern is rejected if any
    /// token fails validation.
    pub fn compile(raw: &[RawToken]) -> Result<Self> {
        let tokens: Option<Vec<Token>> = raw
            .iter()
            .map(compile_token)
            .map(Candidate::finish)
            .collect();

        match tokens {
            Some(tokens) => Ok(Pattern::new(tokens)),
            None => Err(Error::InvalidPattern(describe_raw(raw))),
        }
    }
}

/// Compile a batch of pattern declarations, dropping invalid ones with a
/// diagnostic. Fails only when nothing survives.
pub fn compile_patterns(declarations: &[Vec<RawToken>]) -> Result<Vec<Pattern>> {
    let mut patterns = Vec::with_capacity(declarations.len());
    for declaration in declarations {
        match Pattern::compile(declaration) {
            Ok(pattern) => patterns.push(pattern),
            Err(e) => warn!("{e}; pattern removed"),
        }
    }

    if patterns.is_empty() {
        return Err(Error::NoValidPatterns);
    }
    Ok(patterns)
}
