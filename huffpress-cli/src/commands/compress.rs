//! Compress command implementation.

use crate::utils::{
    confirm_overwrite, create_progress_bar, print_code_table, print_frequency_table,
    savings_percent,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// JSON serializable compression statistics.
#[derive(Debug, Serialize, Deserialize)]
struct CompressStatsJson {
    input: String,
    output: String,
    source_units: u64,
    distinct_symbols: usize,
    source_bits: u64,
    payload_bits: u64,
    frame_bytes: usize,
    savings_percent: f64,
}

/// Options for compressing a text file.
pub struct CompressOptions {
    pub output: Option<PathBuf>,
    pub json: bool,
    pub verbose: bool,
    pub force: bool,
    pub quiet: bool,
}

pub fn cmd_compress(
    input: &Path,
    options: &CompressOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(input)?;
    let output = options
        .output
        .clone()
        .unwrap_or_else(|| default_frame_path(input));

    if output.exists() && !options.force && !confirm_overwrite(&output)? {
        println!("Aborted");
        return Ok(());
    }

    let pb = create_progress_bar(1, !options.quiet);
    pb.set_message("Compressing");

    let encoded = huffpress::compress(&text)?;
    let frame = encoded.to_frame();
    std::fs::write(&output, &frame)?;

    pb.inc(1);
    pb.finish_with_message("Done");

    let source_bits = encoded.source_units() * 16;
    let payload_bits = encoded.payload().len() as u64;
    let savings = savings_percent(source_bits, payload_bits);

    if options.json {
        let stats = CompressStatsJson {
            input: input.display().to_string(),
            output: output.display().to_string(),
            source_units: encoded.source_units(),
            distinct_symbols: encoded.code_table().len(),
            source_bits,
            payload_bits,
            frame_bytes: frame.len(),
            savings_percent: savings,
        };
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    if options.quiet {
        return Ok(());
    }

    println!("Compressed {} to {}", input.display(), output.display());
    println!(
        "  Source: {} units ({} bits fixed-width)",
        encoded.source_units(),
        source_bits
    );
    println!("  Payload: {} bits", payload_bits);
    println!("  Frame: {} bytes", frame.len());
    println!("  Savings: {:.1}%", savings);

    if options.verbose {
        println!();
        print_frequency_table(encoded.frequencies());
        println!();
        print_code_table(encoded.code_table(), encoded.frequencies());
    }

    Ok(())
}

/// Default output path: the input path with `.huff` appended.
fn default_frame_path(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_os_string();
    name.push(".huff");
    PathBuf::from(name)
}
