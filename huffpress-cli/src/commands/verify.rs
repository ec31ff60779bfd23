//! Verify command implementation.

use std::path::Path;

pub fn cmd_verify(input: &Path, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(input)?;

    println!("Verifying {}", input.display());

    let encoded = huffpress::compress(&text)?;
    let frame = encoded.to_frame();
    let restored = huffpress::decompress(&frame)?;

    if verbose {
        println!("  Units: {}", encoded.source_units());
        println!("  Symbols: {}", encoded.code_table().len());
        println!("  Payload bits: {}", encoded.payload().len());
        println!("  Frame bytes: {}", frame.len());
    }

    if restored != text {
        let mismatch = text
            .encode_utf16()
            .zip(restored.encode_utf16())
            .position(|(a, b)| a != b);

        println!();
        println!("Verification FAILED");
        println!("  Original: {} units", text.encode_utf16().count());
        println!("  Restored: {} units", restored.encode_utf16().count());
        if let Some(index) = mismatch {
            println!("  First difference at unit {}", index);
        }
        std::process::exit(2);
    }

    println!();
    println!("Round-trip OK");
    Ok(())
}
