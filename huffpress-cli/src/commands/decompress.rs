//! Decompress command implementation.

use crate::utils::{confirm_overwrite, create_progress_bar};
use std::path::{Path, PathBuf};

/// Options for decompressing a frame file.
pub struct DecompressOptions {
    pub output: Option<PathBuf>,
    pub force: bool,
    pub quiet: bool,
}

pub fn cmd_decompress(
    input: &Path,
    options: &DecompressOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let frame = std::fs::read_to_string(input)?;
    let output = options
        .output
        .clone()
        .unwrap_or_else(|| default_text_path(input));

    if output.exists() && !options.force && !confirm_overwrite(&output)? {
        println!("Aborted");
        return Ok(());
    }

    let pb = create_progress_bar(1, !options.quiet);
    pb.set_message("Decompressing");

    let text = huffpress::decompress(&frame)?;
    std::fs::write(&output, &text)?;

    pb.inc(1);
    pb.finish_with_message("Done");

    if !options.quiet {
        println!("Decompressed {} to {}", input.display(), output.display());
        println!("  Recovered: {} bytes", text.len());
    }

    Ok(())
}

/// Default output path: strip a `.huff` extension, otherwise append `.out`.
fn default_text_path(input: &Path) -> PathBuf {
    if input.extension().is_some_and(|ext| ext == "huff") {
        input.with_extension("")
    } else {
        let mut name = input.as_os_str().to_os_string();
        name.push(".out");
        PathBuf::from(name)
    }
}
