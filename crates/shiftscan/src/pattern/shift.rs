//! Shifted pattern generation.
//!
//! A shift adds a constant (mod 256) to every concrete byte value in a
//! pattern, modeling the add-based obfuscation scheme found in the target
//! ROM. Wildcards are untouched since they already match any byte.

use crate::pattern::{Pattern, Token};

/// Number of distinct additive byte shifts.
pub const SHIFT_COUNT: usize = 256;

/// A pattern variant derived by adding `shift_by` to every concrete byte
/// value of a base pattern. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftedPattern {
    pub shift_by: u8,
    pub pattern: Pattern,
}

impl Pattern {
    /// Derive the variant of this pattern shifted by `shift_by`.
    pub fn shifted(&self, shift_by: u8) -> ShiftedPattern {
        let tokens = self
            .tokens()
            .iter()
            .map(|token| match token {
                Token::Fixed(value) => Token::Fixed(value.wrapping_add(shift_by)),
                Token::Wildcard { min, max } => Token::Wildcard {
                    min: *min,
                    max: *max,
                },
                Token::OneOf(values) => {
                    Token::OneOf(values.iter().map(|v| v.wrapping_add(shift_by)).collect())
                }
            })
            .collect();

        ShiftedPattern {
            shift_by,
            pattern: Pattern::new(tokens),
        }
    }
}

/// All 256 shifted variants of a pattern, shift 0 (identity) first.
pub fn expand_shifts(pattern: &Pattern) -> Vec<ShiftedPattern> {
    (0..=u8::MAX).map(|shift| pattern.shifted(shift)).collect()
}

/// Expand every pattern into its 256 variants, keeping input order.
pub fn expand_all(patterns: &[Pattern]) -> Vec<ShiftedPattern> {
    patterns.iter().flat_map(|p| expand_shifts(p)).collect()
}
