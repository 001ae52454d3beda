//! The two token families: raw textual tokens as written in pattern
//! declarations, and compiled tokens with strict byte values.

use std::fmt;

/// One element of a pattern declaration, before hex conversion.
///
/// `Wildcard` has no separate raw form since its bounds are numeric
/// already; it passes through compilation unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawToken {
    /// A single byte given as hex text, e.g. `"FC"`.
    Fixed(String),
    /// A run of `min..=max` bytes of any value.
    Wildcard { min: usize, max: usize },
    /// A run of candidate bytes given as hex text; the run length equals
    /// the number of candidates, and each byte may be any of them.
    OneOf(Vec<String>),
}

impl RawToken {
    pub fn fixed(value: impl Into<String>) -> Self {
        RawToken::Fixed(value.into())
    }

    /// A wildcard run spanning `min` to `max` bytes.
    pub fn skip(min: usize, max: usize) -> Self {
        RawToken::Wildcard { min, max }
    }

    pub fn one_of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RawToken::OneOf(values.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for RawToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawToken::Fixed(text) => write!(f, "0x{text}"),
            RawToken::Wildcard { min, max } => write!(f, "[{min}-{max}]"),
            RawToken::OneOf(values) => write!(f, "[{}]", join_prefixed(values.iter())),
        }
    }
}

/// A compiled token. Every byte value is in range by construction;
/// wildcard bounds are validated when the owning pattern is compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Matches exactly one buffer byte equal to the value.
    Fixed(u8),
    /// Matches a run of `min..=max` bytes of any value.
    Wildcard { min: usize, max: usize },
    /// Matches a run of `values.len()` bytes, each drawn from `values`
    /// in any order.
    OneOf(Vec<u8>),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Fixed(value) => write!(f, "0x{value:02X}"),
            Token::Wildcard { min, max } => write!(f, "[{min}-{max}]"),
            Token::OneOf(values) => write!(
                f,
                "[{}]",
                join_prefixed(values.iter().map(|v| format!("{v:02X}"))),
            ),
        }
    }
}

/// Render a raw token sequence for diagnostics, tokens separated by a
/// single space. Shows malformed hex text verbatim.
pub fn describe_raw(tokens: &[RawToken]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn join_prefixed<I, S>(values: I) -> String
where
    I: Iterator<Item = S>,
    S: fmt::Display,
{
    values
        .map(|v| format!("0x{v}"))
        .collect::<Vec<_>>()
        .join(",")
}
