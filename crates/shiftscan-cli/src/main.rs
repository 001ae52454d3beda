use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use shiftscan::{
    RawToken, RomImage, ScanRange, Scanner, compile_patterns, decode, describe_raw, expand_all,
    format_hms, parse_pattern, render,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod patterns;
mod progress;

#[derive(Parser)]
#[command(name = "shiftscan")]
#[command(about = "Scan a cartridge ROM for byte patterns under every additive byte shift")]
struct Args {
    /// ROM image to scan (1MiB cartridge dump)
    #[arg(required_unless_present = "list")]
    rom: Option<PathBuf>,

    /// Pattern to search for, e.g. "FC [1-4] 88 (2F|AD)" (repeatable)
    #[arg(short, long = "pattern")]
    patterns: Vec<String>,

    /// Built-in pattern to search for by name (repeatable)
    #[arg(short, long)]
    builtin: Vec<String>,

    /// List built-in patterns and exit
    #[arg(long)]
    list: bool,

    /// First offset to scan (hex with 0x prefix, or decimal)
    #[arg(long)]
    from: Option<String>,

    /// One past the last offset to scan; defaults to the buffer end
    #[arg(long)]
    to: Option<String>,

    /// Minimum milliseconds between progress updates
    #[arg(long, default_value_t = 1000)]
    interval: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("shiftscan=info".parse()?))
        .init();

    let args = Args::parse();

    if args.list {
        for builtin in patterns::builtin_patterns() {
            println!("{:<24} {}", builtin.name, describe_raw(&builtin.tokens));
        }
        return Ok(());
    }

    let rom_path = args.rom.as_ref().context("a ROM image path is required")?;
    let rom = RomImage::load(rom_path)
        .with_context(|| format!("failed to load ROM image {rom_path:?}"))?;
    info!("Loaded ROM image from {:?}", rom_path);

    let declarations = collect_declarations(&args)?;
    let compiled = compile_patterns(&declarations)?;
    let shifted = expand_all(&compiled);

    let from = args
        .from
        .as_deref()
        .map(parse_offset)
        .transpose()?
        .unwrap_or(0);
    let to = args
        .to
        .as_deref()
        .map(parse_offset)
        .transpose()?
        .unwrap_or(rom.bytes().len());
    if from > to {
        bail!("scan range is inverted: --from {from:#x} is past --to {to:#x}");
    }

    println!(
        "--------- Searching with {} shifted variants ---------",
        shifted.len()
    );

    let outcome = Scanner::new(rom.bytes(), &shifted)
        .with_throttle(Duration::from_millis(args.interval))
        .run(ScanRange { from, to }, &mut progress::ConsoleProgress);

    println!();
    println!(
        "--------- Found {} pattern(s) ---------",
        outcome.matches.len()
    );
    for found in &outcome.matches {
        println!("{}", render(&decode(found)));
    }
    println!("Finished after {}", format_hms(outcome.elapsed));

    Ok(())
}

/// Assemble raw pattern declarations from the command line. Unknown
/// built-in names are hard errors; malformed textual patterns are dropped
/// with a diagnostic like any other invalid pattern. With no selection at
/// all, the whole built-in set is scanned.
fn collect_declarations(args: &Args) -> Result<Vec<Vec<RawToken>>> {
    if args.patterns.is_empty() && args.builtin.is_empty() {
        return Ok(patterns::builtin_patterns()
            .into_iter()
            .map(|b| b.tokens)
            .collect());
    }

    let mut declarations = Vec::new();
    for name in &args.builtin {
        let Some(builtin) = patterns::builtin_patterns()
            .into_iter()
            .find(|b| b.name == *name)
        else {
            bail!("unknown built-in pattern '{name}', try --list");
        };
        declarations.push(builtin.tokens);
    }

    for text in &args.patterns {
        match parse_pattern(text) {
            Ok(tokens) => declarations.push(tokens),
            Err(e) => warn!("{e}; pattern removed"),
        }
    }

    Ok(declarations)
}

/// Parse an offset given as `0x`-prefixed hex or plain decimal.
fn parse_offset(text: &str) -> Result<usize> {
    let trimmed = text.trim();
    let parsed = match trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        Some(hex) => usize::from_str_radix(hex, 16),
        None => trimmed.parse(),
    };
    parsed.with_context(|| format!("invalid offset '{text}'"))
}
