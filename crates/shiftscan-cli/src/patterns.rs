//! Built-in search patterns.
//!
//! Known points of interest in the supported ROM, declared the same way
//! callers would write them by hand. Obfuscated regions are stored with
//! an unknown shift, which is exactly what the 256-way expansion is for.

use shiftscan::RawToken;

pub struct BuiltinPattern {
    pub name: &'static str,
    pub tokens: Vec<RawToken>,
}

pub fn builtin_patterns() -> Vec<BuiltinPattern> {
    vec![
        BuiltinPattern {
            name: "boot-sequence",
            tokens: vec![
                RawToken::fixed("29"),
                RawToken::fixed("FC"),
                RawToken::fixed("CA"),
                RawToken::fixed("88"),
                RawToken::fixed("E2"),
                RawToken::fixed("60"),
                RawToken::fixed("17"),
                RawToken::fixed("01"),
            ],
        },
        // Same region, tolerating 1-4 unknown bytes between the anchors.
        BuiltinPattern {
            name: "boot-sequence-sparse",
            tokens: vec![
                RawToken::fixed("FC"),
                RawToken::skip(1, 4),
                RawToken::fixed("88"),
                RawToken::skip(1, 4),
                RawToken::fixed("60"),
                RawToken::skip(1, 4),
                RawToken::fixed("01"),
            ],
        },
        BuiltinPattern {
            name: "menu-chalkboards",
            tokens: vec![
                RawToken::fixed("43"),
                RawToken::fixed("70"),
                RawToken::fixed("71"),
                RawToken::fixed("43"),
                RawToken::fixed("44"),
                RawToken::fixed("45"),
                RawToken::fixed("46"),
                RawToken::fixed("43"),
            ],
        },
        BuiltinPattern {
            name: "marquee-printer",
            tokens: vec![RawToken::one_of(["2F", "AD", "40", "C8"])],
        },
    ]
}
