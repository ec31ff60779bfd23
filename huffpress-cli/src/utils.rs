//! Utility functions for the CLI.

use dialoguer::Confirm;
use huffpress::{CodeTable, FrequencyMap, Symbol};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Create a progress bar with standard styling.
pub fn create_progress_bar(len: u64, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("progress bar template is valid")
            .progress_chars("█▓▒░ "),
    );
    pb
}

/// Ask before replacing an existing file.
pub fn confirm_overwrite(path: &Path) -> Result<bool, dialoguer::Error> {
    Confirm::new()
        .with_prompt(format!("Overwrite {}?", path.display()))
        .default(false)
        .interact()
}

/// Space saved by the payload relative to 16-bit fixed-width coding.
pub fn savings_percent(source_bits: u64, payload_bits: u64) -> f64 {
    if source_bits == 0 {
        return 0.0;
    }
    (1.0 - payload_bits as f64 / source_bits as f64) * 100.0
}

/// Render a symbol for table output.
/// Printable symbols are quoted; control characters and surrogate
/// halves fall back to U+XXXX notation.
pub fn display_symbol(symbol: Symbol) -> String {
    match char::from_u32(u32::from(symbol)) {
        Some(c) if !c.is_control() => format!("'{}'", c),
        _ => format!("U+{:04X}", symbol),
    }
}

/// Print the frequency table with per-symbol shares.
pub fn print_frequency_table(freqs: &FrequencyMap) {
    println!("{:>8} {:>7}  Symbol", "Count", "Share");
    println!("{}", "-".repeat(30));

    let total = freqs.total();
    for (symbol, count) in freqs.iter() {
        let share = if total > 0 {
            format!("{:.1}%", count as f64 / total as f64 * 100.0)
        } else {
            "-".to_string()
        };

        println!("{:>8} {:>7}  {}", count, share, display_symbol(symbol));
    }

    println!("{}", "-".repeat(30));
    println!("{:>8} {:>7}  {} symbols", total, "", freqs.len());
}

/// Print the code table with per-symbol payload contributions.
pub fn print_code_table(table: &CodeTable, freqs: &FrequencyMap) {
    println!("{:>8} {:>6} {:>12}  Symbol", "Count", "Bits", "Code");
    println!("{}", "-".repeat(40));

    let mut payload_bits = 0u64;
    for (symbol, code) in table.iter() {
        let count = freqs.count(symbol);
        payload_bits += count * code.len() as u64;

        println!(
            "{:>8} {:>6} {:>12}  {}",
            count,
            code.len(),
            code,
            display_symbol(symbol)
        );
    }

    println!("{}", "-".repeat(40));
    println!(
        "{:>8} {:>6}  {} codes in the table",
        freqs.total(),
        payload_bits,
        table.len()
    );
}
