//! # shiftscan
//!
//! Scans a 1MiB cartridge ROM image for small byte patterns under every
//! additive byte shift (0-255, mod 256), reporting each match position
//! and the shift that produced it.
//!
//! This crate provides:
//! - The declarative pattern model (fixed bytes, wildcard runs, one-of
//!   candidate runs) with two-phase compilation and validation
//! - 256-way shifted variant generation
//! - An anchored byte matcher with per-token captured spans
//! - A linear scanner with throttled progress reporting
//! - A decoder that turns matches into operator-facing reports
//!
//! The driver binary lives in the `shiftscan-cli` crate.

pub mod error;
pub mod matcher;
pub mod pattern;
pub mod report;
pub mod rom;
pub mod scanner;
pub mod timing;

pub use error::{Error, Result};
pub use matcher::{CapturedGroup, GroupKind};
pub use pattern::{
    Pattern, RawToken, SHIFT_COUNT, ShiftedPattern, Token, compile_patterns, describe_raw,
    expand_all, expand_shifts, parse_pattern,
};
pub use report::{DecodedGroup, DecodedMatch, decode, render};
pub use rom::{ROM_SIZE, RomImage};
pub use scanner::{
    ScanMatch, ScanObserver, ScanOutcome, ScanProgress, ScanRange, Scanner, SilentObserver,
};
pub use timing::{Timing, TimingSnapshot, format_hms};
