//! Info command implementation.

use huffpress::HuffmanTree;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// JSON serializable frame metadata.
#[derive(Debug, Serialize, Deserialize)]
struct FrameInfoJson {
    file: String,
    frame_bytes: u64,
    distinct_symbols: usize,
    payload_bits: usize,
    min_code_bits: usize,
    max_code_bits: usize,
    mean_code_bits: f64,
    decoded_chars: usize,
}

pub fn cmd_info(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let frame_text = std::fs::read_to_string(input)?;
    let metadata = std::fs::metadata(input)?;

    let (table, payload) = huffpress::frame::parse(&frame_text)?;
    let min_code = table.iter().map(|(_, code)| code.len()).min().unwrap_or(0);
    let max_code = table.iter().map(|(_, code)| code.len()).max().unwrap_or(0);
    let mean_code = if table.is_empty() {
        0.0
    } else {
        let total: usize = table.iter().map(|(_, code)| code.len()).sum();
        total as f64 / table.len() as f64
    };

    // The decoded length requires an actual decode pass.
    let tree = HuffmanTree::from_code_table(&table)?;
    let text = huffpress::decode(&payload, &tree);
    let decoded_chars = text.chars().count();

    if json {
        let info = FrameInfoJson {
            file: input.display().to_string(),
            frame_bytes: metadata.len(),
            distinct_symbols: table.len(),
            payload_bits: payload.len(),
            min_code_bits: min_code,
            max_code_bits: max_code,
            mean_code_bits: mean_code,
            decoded_chars,
        };
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("Frame Information");
    println!("=================");
    println!("File: {}", input.display());
    println!("Size: {} bytes", metadata.len());
    println!("Symbols: {}", table.len());
    println!("Payload bits: {}", payload.len());
    println!(
        "Code lengths: {} to {} bits (mean {:.1})",
        min_code, max_code, mean_code
    );
    println!("Decoded characters: {}", decoded_chars);

    Ok(())
}
