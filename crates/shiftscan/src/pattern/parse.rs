//! Textual pattern syntax.
//!
//! Whitespace-separated tokens:
//!
//! - `FC`: one fixed byte
//! - `??`: one byte of any value
//! - `[1-4]`: a run of 1 to 4 bytes of any value
//! - `(2F|AD|40|C8)`: a run of four bytes, each drawn from the listed set
//!
//! The parser only recognizes token shapes; byte values and wildcard
//! bounds are still checked by pattern compilation, so `[4-1]` parses
//! here and is rejected there.

use crate::error::{Error, Result};
use crate::pattern::token::RawToken;

pub fn parse_pattern(text: &str) -> Result<Vec<RawToken>> {
    let tokens: Vec<RawToken> = text
        .split_whitespace()
        .map(parse_token)
        .collect::<Result<_>>()?;

    if tokens.is_empty() {
        return Err(Error::Syntax {
            token: text.to_string(),
            reason: "pattern is empty".to_string(),
        });
    }
    Ok(tokens)
}

fn parse_token(part: &str) -> Result<RawToken> {
    if part == "??" {
        return Ok(RawToken::skip(1, 1));
    }

    if let Some(range) = part.strip_prefix('[').and_then(|p| p.strip_suffix(']')) {
        let (min, max) = range.split_once('-').ok_or_else(|| Error::Syntax {
            token: part.to_string(),
            reason: "expected `[min-max]`".to_string(),
        })?;
        let parse_bound = |bound: &str| {
            bound.parse::<usize>().map_err(|e| Error::Syntax {
                token: part.to_string(),
                reason: format!("bad run length '{bound}': {e}"),
            })
        };
        return Ok(RawToken::skip(parse_bound(min)?, parse_bound(max)?));
    }

    if let Some(list) = part.strip_prefix('(').and_then(|p| p.strip_suffix(')')) {
        return Ok(RawToken::one_of(list.split('|')));
    }

    Ok(RawToken::fixed(part))
}
