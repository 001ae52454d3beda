//! Human-readable match reports.
//!
//! Decoding turns a match's captured byte spans back into hex groups
//! ordered for display; rendering styles exact groups cyan and wildcard
//! runs yellow, and ties everything to the pattern description, the
//! absolute offset, and the shift that produced the match.

use owo_colors::OwoColorize;

use crate::matcher::GroupKind;
use crate::scanner::ScanMatch;

/// Two-digit uppercase hex, e.g. `2F`.
pub fn hex_byte(value: u8) -> String {
    format!("{value:02X}")
}

/// Zero-padded 8-digit address, e.g. `0x0009A606`.
pub fn hex_address(value: usize) -> String {
    format!("0x{value:08X}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedGroup {
    pub index: usize,
    pub kind: GroupKind,
    /// Hex-formatted bytes of the captured span, e.g. `["2F", "AD"]`.
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedMatch {
    pub description: String,
    pub groups: Vec<DecodedGroup>,
    pub position: usize,
    pub shift_by: u8,
}

/// Decode a match into display-ready hex groups, ordered by comparing
/// their rendered value sequences. The relative order of equal groups is
/// unspecified.
pub fn decode(found: &ScanMatch<'_>) -> DecodedMatch {
    let mut groups: Vec<DecodedGroup> = found
        .groups
        .iter()
        .map(|group| DecodedGroup {
            index: group.index,
            kind: group.kind,
            values: group.bytes.iter().copied().map(hex_byte).collect(),
        })
        .collect();
    groups.sort_by(|a, b| a.values.cmp(&b.values));

    DecodedMatch {
        description: found.pattern.pattern.to_string(),
        groups,
        position: found.position,
        shift_by: found.pattern.shift_by,
    }
}

/// Render one decoded match as the operator-facing report block.
pub fn render(decoded: &DecodedMatch) -> String {
    let groups = decoded
        .groups
        .iter()
        .map(|group| {
            let joined = group
                .values
                .iter()
                .map(|value| format!("0x{value}"))
                .collect::<Vec<_>>()
                .join(", ");
            match group.kind {
                GroupKind::Exact => joined.cyan().to_string(),
                GroupKind::Run => joined.yellow().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{} resulted in:\n  {}\n  found at {} (shifted by {})",
        decoded.description,
        groups,
        hex_address(decoded.position),
        decoded.shift_by,
    )
}
