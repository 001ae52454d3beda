//! Linear scan driver.
//!
//! Drives the matcher across every offset of the requested range and every
//! shifted pattern variant. A plain anchored pass per offset, no indexing
//! or precomputation beyond the shift expansion; the buffer is at most
//! 1MiB and the pattern set small.

use std::time::Duration;

use crate::matcher::CapturedGroup;
use crate::pattern::ShiftedPattern;
use crate::timing::Timing;

/// Half-open offset window `[from, to)` into the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanRange {
    pub from: usize,
    pub to: usize,
}

impl ScanRange {
    pub fn full(len: usize) -> Self {
        Self { from: 0, to: len }
    }
}

/// One successful match. Borrows the window of buffer bytes that
/// satisfied the pattern; the buffer itself stays with the caller.
#[derive(Debug, Clone)]
pub struct ScanMatch<'a> {
    pub pattern: &'a ShiftedPattern,
    pub position: usize,
    pub window: &'a [u8],
    pub groups: Vec<CapturedGroup>,
}

/// Progress snapshot handed to the observer on a throttled cadence.
#[derive(Debug, Clone, Copy)]
pub struct ScanProgress {
    /// Offset currently being scanned.
    pub current: usize,
    /// One past the last offset of the scan range.
    pub total: usize,
    pub elapsed: Duration,
    pub remaining: Option<Duration>,
    /// Matches collected so far.
    pub matches: usize,
}

/// Receives throttled progress updates during a scan. Must not affect
/// scan results.
pub trait ScanObserver {
    fn on_progress(&mut self, progress: &ScanProgress);
}

/// Observer that ignores all updates.
pub struct SilentObserver;

impl ScanObserver for SilentObserver {
    fn on_progress(&mut self, _progress: &ScanProgress) {}
}

#[derive(Debug)]
pub struct ScanOutcome<'a> {
    pub matches: Vec<ScanMatch<'a>>,
    pub elapsed: Duration,
}

pub struct Scanner<'a> {
    buffer: &'a [u8],
    patterns: &'a [ShiftedPattern],
    throttle: Duration,
}

impl<'a> Scanner<'a> {
    pub fn new(buffer: &'a [u8], patterns: &'a [ShiftedPattern]) -> Self {
        Self {
            buffer,
            patterns,
            throttle: Duration::from_millis(1000),
        }
    }

    /// Minimum wall-clock time between observer updates.
    pub fn with_throttle(mut self, throttle: Duration) -> Self {
        self.throttle = throttle;
        self
    }

    /// Scan `range`, reporting offsets in increasing order and patterns
    /// in input order within an offset. Results are appended as found,
    /// never deduplicated.
    pub fn run(&self, range: ScanRange, observer: &mut dyn ScanObserver) -> ScanOutcome<'a> {
        let from = range.from.min(self.buffer.len());
        let to = range.to.min(self.buffer.len());
        let total = to.saturating_sub(from);

        let mut timing = Timing::new(self.throttle);
        let mut matches: Vec<ScanMatch<'a>> = Vec::new();

        for position in from..to {
            if let Some(snapshot) = timing.tick(position - from, total) {
                observer.on_progress(&ScanProgress {
                    current: position,
                    total: to,
                    elapsed: snapshot.elapsed,
                    remaining: snapshot.remaining,
                    matches: matches.len(),
                });
            }

            for shifted in self.patterns {
                let end = (position + shifted.pattern.max_len()).min(self.buffer.len());
                let window = &self.buffer[position..end];
                if let Some(groups) = shifted.pattern.match_anchored(window) {
                    matches.push(ScanMatch {
                        pattern: shifted,
                        position,
                        window,
                        groups,
                    });
                }
            }
        }

        ScanOutcome {
            matches,
            elapsed: timing.elapsed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{Pattern, Token, expand_shifts};

    struct Recording {
        updates: Vec<ScanProgress>,
    }

    impl ScanObserver for Recording {
        fn on_progress(&mut self, progress: &ScanProgress) {
            self.updates.push(*progress);
        }
    }

    fn shift_zero(pattern: Pattern) -> Vec<ShiftedPattern> {
        vec![pattern.shifted(0)]
    }

    #[test]
    fn test_single_zero_byte_matches_every_offset_of_zero_buffer() {
        let buffer = [0u8; 8];
        let patterns = shift_zero(Pattern::new(vec![Token::Fixed(0x00)]));

        let outcome = Scanner::new(&buffer, &patterns)
            .run(ScanRange::full(buffer.len()), &mut SilentObserver);

        assert_eq!(outcome.matches.len(), 8);
        let positions: Vec<usize> = outcome.matches.iter().map(|m| m.position).collect();
        assert_eq!(positions, (0..8).collect::<Vec<_>>());
        assert!(outcome.matches.iter().all(|m| m.pattern.shift_by == 0));
    }

    #[test]
    fn test_shift_expansion_finds_obfuscated_byte() {
        // 0x29 is 0x2A shifted by 255; 0xFC is 0x2A shifted by 210. Every
        // offset matches under exactly one shift.
        let buffer = [0x29u8, 0xFC];
        let pattern = Pattern::new(vec![Token::Fixed(0x2A)]);
        let variants = expand_shifts(&pattern);

        let outcome = Scanner::new(&buffer, &variants)
            .run(ScanRange::full(buffer.len()), &mut SilentObserver);

        assert_eq!(outcome.matches.len(), 2);
        let at_zero = outcome
            .matches
            .iter()
            .find(|m| m.position == 0)
            .expect("match at offset 0");
        assert_eq!(at_zero.pattern.shift_by, 255);
        assert_eq!(at_zero.pattern.pattern.tokens(), &[Token::Fixed(0x29)]);
        assert_eq!(at_zero.window, &[0x29]);
    }

    #[test]
    fn test_results_keep_offset_then_input_order() {
        let buffer = [0x01u8, 0x02];
        let patterns: Vec<ShiftedPattern> = vec![
            Pattern::new(vec![Token::Fixed(0x01)]).shifted(0),
            Pattern::new(vec![Token::Wildcard { min: 1, max: 1 }]).shifted(0),
        ];

        let outcome = Scanner::new(&buffer, &patterns)
            .run(ScanRange::full(buffer.len()), &mut SilentObserver);

        let described: Vec<(usize, String)> = outcome
            .matches
            .iter()
            .map(|m| (m.position, m.pattern.pattern.to_string()))
            .collect();
        assert_eq!(
            described,
            vec![
                (0, "0x01".to_string()),
                (0, "[1-1]".to_string()),
                (1, "[1-1]".to_string()),
            ]
        );
    }

    #[test]
    fn test_range_restricts_scanned_offsets() {
        let buffer = [0xAAu8; 8];
        let patterns = shift_zero(Pattern::new(vec![Token::Fixed(0xAA)]));

        let outcome = Scanner::new(&buffer, &patterns)
            .run(ScanRange { from: 4, to: 6 }, &mut SilentObserver);

        let positions: Vec<usize> = outcome.matches.iter().map(|m| m.position).collect();
        assert_eq!(positions, vec![4, 5]);
    }

    #[test]
    fn test_range_is_clipped_to_buffer() {
        let buffer = [0xAAu8; 4];
        let patterns = shift_zero(Pattern::new(vec![Token::Fixed(0xAA)]));

        let outcome = Scanner::new(&buffer, &patterns)
            .run(ScanRange { from: 2, to: 100 }, &mut SilentObserver);

        assert_eq!(outcome.matches.len(), 2);
    }

    #[test]
    fn test_window_is_clipped_at_buffer_end() {
        // Near the end the window is shorter than max_len; the pattern
        // still matches where it fits and plainly fails where it cannot.
        let buffer = [0x10u8, 0x10, 0x10];
        let patterns = shift_zero(Pattern::new(vec![Token::Fixed(0x10), Token::Fixed(0x10)]));

        let outcome = Scanner::new(&buffer, &patterns)
            .run(ScanRange::full(buffer.len()), &mut SilentObserver);

        let positions: Vec<usize> = outcome.matches.iter().map(|m| m.position).collect();
        assert_eq!(positions, vec![0, 1]);
    }

    #[test]
    fn test_observer_sees_monotonic_progress() {
        let buffer = [0u8; 16];
        let patterns = shift_zero(Pattern::new(vec![Token::Fixed(0x00)]));
        let mut observer = Recording {
            updates: Vec::new(),
        };

        Scanner::new(&buffer, &patterns)
            .with_throttle(Duration::ZERO)
            .run(ScanRange::full(buffer.len()), &mut observer);

        assert_eq!(observer.updates.len(), 16);
        assert!(
            observer
                .updates
                .windows(2)
                .all(|w| w[0].current < w[1].current)
        );
        assert!(observer.updates.iter().all(|p| p.total == 16));
        // The match counter trails the current offset: every earlier
        // offset matched.
        assert_eq!(observer.updates[15].matches, 15);
    }
}
