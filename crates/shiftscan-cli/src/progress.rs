//! Console progress line.

use std::io::{self, Write};

use shiftscan::report::hex_address;
use shiftscan::timing::format_hms;
use shiftscan::{ScanObserver, ScanProgress};

/// Rewrites a single status line in place while the scan runs.
pub struct ConsoleProgress;

impl ScanObserver for ConsoleProgress {
    fn on_progress(&mut self, progress: &ScanProgress) {
        let percent = if progress.total == 0 {
            100.0
        } else {
            progress.current as f64 * 100.0 / progress.total as f64
        };
        let remaining = progress
            .remaining
            .map(format_hms)
            .unwrap_or_else(|| "-".to_string());

        print!(
            "  searching index {}/{} ({:.2}%) | elapsed: {} remaining: {} | found: {}\r",
            hex_address(progress.current),
            hex_address(progress.total),
            percent,
            format_hms(progress.elapsed),
            remaining,
            progress.matches,
        );
        let _ = io::stdout().flush();
    }
}
