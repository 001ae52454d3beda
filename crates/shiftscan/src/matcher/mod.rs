//! Anchored byte matching.
//!
//! Compiles down to walking the token sequence over a buffer window,
//! consuming bytes left to right. A match must start at window position 0;
//! wildcard runs are resolved greedily and shrunk until the remainder of
//! the pattern fits. Windows shorter than the pattern requires simply fail
//! to match.

use crate::pattern::{Pattern, Token};

/// Display class of a captured group: `Exact` for Fixed/OneOf tokens,
/// `Run` for wildcard runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum GroupKind {
    Exact,
    Run,
}

/// The byte span consumed by one token, tagged with the token's position
/// in the pattern for later decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedGroup {
    pub index: usize,
    pub kind: GroupKind,
    pub bytes: Vec<u8>,
}

impl Pattern {
    /// Upper bound on the bytes this pattern can consume; sizes the
    /// buffer window handed to the matcher.
    pub fn max_len(&self) -> usize {
        self.tokens()
            .iter()
            .map(|token| match token {
                Token::Fixed(_) => 1,
                Token::Wildcard { max, .. } => *max,
                Token::OneOf(values) => values.len(),
            })
            .sum()
    }

    /// Match this pattern against the start of `window`. Returns the
    /// captured groups in token order on success, `None` otherwise.
    /// A zero-token pattern matches trivially with no groups.
    pub fn match_anchored(&self, window: &[u8]) -> Option<Vec<CapturedGroup>> {
        let mut groups = Vec::with_capacity(self.tokens().len());
        match_from(window, 0, self.tokens(), 0, &mut groups).then_some(groups)
    }
}

fn match_from(
    window: &[u8],
    at: usize,
    tokens: &[Token],
    index: usize,
    groups: &mut Vec<CapturedGroup>,
) -> bool {
    let Some(token) = tokens.get(index) else {
        return true;
    };

    match token {
        Token::Fixed(value) => {
            if window.get(at) != Some(value) {
                return false;
            }
            groups.push(CapturedGroup {
                index,
                kind: GroupKind::Exact,
                bytes: vec![*value],
            });
            if match_from(window, at + 1, tokens, index + 1, groups) {
                return true;
            }
            groups.pop();
            false
        }
        Token::Wildcard { min, max } => {
            let longest = (*max).min(window.len().saturating_sub(at));
            let mut take = longest;
            // Greedy first, shrinking until the rest of the pattern fits.
            while take >= *min {
                groups.push(CapturedGroup {
                    index,
                    kind: GroupKind::Run,
                    bytes: window[at..at + take].to_vec(),
                });
                if match_from(window, at + take, tokens, index + 1, groups) {
                    return true;
                }
                groups.pop();
                if take == 0 {
                    break;
                }
                take -= 1;
            }
            false
        }
        Token::OneOf(values) => {
            let Some(run) = window.get(at..at + values.len()) else {
                return false;
            };
            if !run.iter().all(|byte| values.contains(byte)) {
                return false;
            }
            groups.push(CapturedGroup {
                index,
                kind: GroupKind::Exact,
                bytes: run.to_vec(),
            });
            if match_from(window, at + values.len(), tokens, index + 1, groups) {
                return true;
            }
            groups.pop();
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(tokens: Vec<Token>) -> Pattern {
        Pattern::new(tokens)
    }

    #[test]
    fn test_max_len_sums_token_bounds() {
        let p = pattern(vec![
            Token::Fixed(0xFC),
            Token::Wildcard { min: 1, max: 4 },
            Token::OneOf(vec![0x2F, 0xAD, 0x40]),
        ]);
        assert_eq!(p.max_len(), 8);
    }

    #[test]
    fn test_max_len_is_shift_invariant() {
        let p = pattern(vec![
            Token::Fixed(0x10),
            Token::Wildcard { min: 0, max: 3 },
            Token::OneOf(vec![0xFE, 0xFF]),
        ]);
        for shift in 0..=u8::MAX {
            assert_eq!(p.shifted(shift).pattern.max_len(), p.max_len());
        }
    }

    #[test]
    fn test_fixed_match_is_anchored() {
        let p = pattern(vec![Token::Fixed(0xAA)]);
        assert!(p.match_anchored(&[0xAA, 0x00]).is_some());
        // Would match at offset 1, but anchoring means no match.
        assert!(p.match_anchored(&[0x00, 0xAA]).is_none());
    }

    #[test]
    fn test_fixed_groups_are_tagged_exact() {
        let p = pattern(vec![Token::Fixed(0x2F)]);
        let groups = p.match_anchored(&[0x2F]).unwrap();
        assert_eq!(
            groups,
            vec![CapturedGroup {
                index: 0,
                kind: GroupKind::Exact,
                bytes: vec![0x2F],
            }]
        );
    }

    #[test]
    fn test_wildcard_backtracks_from_greedy() {
        // Greedy would swallow both 0x88s; the trailing Fixed forces the
        // run back down to a single byte.
        let p = pattern(vec![
            Token::Fixed(0xFC),
            Token::Wildcard { min: 1, max: 4 },
            Token::Fixed(0x88),
        ]);
        let groups = p.match_anchored(&[0xFC, 0x88, 0x88]).unwrap();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[1].kind, GroupKind::Run);
        assert_eq!(groups[1].bytes, vec![0x88]);
        assert_eq!(groups[2].bytes, vec![0x88]);
    }

    #[test]
    fn test_wildcard_may_capture_empty_run() {
        let p = pattern(vec![Token::Wildcard { min: 0, max: 2 }, Token::Fixed(0x10)]);
        let groups = p.match_anchored(&[0x10]).unwrap();
        assert_eq!(groups[0].bytes, Vec::<u8>::new());
        assert_eq!(groups[1].bytes, vec![0x10]);
    }

    #[test]
    fn test_wildcard_shorter_than_min_fails() {
        let p = pattern(vec![Token::Wildcard { min: 3, max: 5 }]);
        assert!(p.match_anchored(&[0x00, 0x00]).is_none());
    }

    #[test]
    fn test_one_of_accepts_any_order_of_candidates() {
        let p = pattern(vec![Token::OneOf(vec![0x2F, 0xAD, 0x40, 0xC8])]);
        assert!(p.match_anchored(&[0xAD, 0x40, 0x2F, 0xC8]).is_some());
    }

    #[test]
    fn test_one_of_rejects_outside_candidate_set() {
        let p = pattern(vec![Token::OneOf(vec![0x2F, 0xAD, 0x40, 0xC8])]);
        assert!(p.match_anchored(&[0xAD, 0x40, 0x2F, 0x01]).is_none());
    }

    #[test]
    fn test_short_window_is_a_plain_non_match() {
        let p = pattern(vec![Token::OneOf(vec![0x2F, 0xAD, 0x40, 0xC8])]);
        assert!(p.match_anchored(&[0x2F, 0xAD, 0x40]).is_none());

        let p = pattern(vec![Token::Fixed(0x01), Token::Fixed(0x02)]);
        assert!(p.match_anchored(&[0x01]).is_none());
    }

    #[test]
    fn test_empty_pattern_matches_with_no_groups() {
        let p = pattern(Vec::new());
        assert_eq!(p.match_anchored(&[]), Some(Vec::new()));
        assert_eq!(p.match_anchored(&[0x55]), Some(Vec::new()));
    }

    #[test]
    fn test_group_kind_display() {
        assert_eq!(GroupKind::Exact.to_string(), "exact");
        assert_eq!(GroupKind::Run.to_string(), "run");
    }
}
