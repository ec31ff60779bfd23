//! Huffpress CLI - Huffman text compression
//!
//! A Pure Rust Huffman coder for text, persisted as a readable frame: code table, sentinel, payload.

mod commands;
mod utils;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use commands::{
    CompressOptions, DecompressOptions, cmd_compress, cmd_decompress, cmd_info, cmd_verify,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "huffpress")]
#[command(
    author,
    version,
    about = "Huffman text compression with readable frames"
)]
#[command(long_about = "
Huffpress compresses text with Huffman coding over UTF-16 code units
and stores the result as a readable frame: one <symbol>:<code> line per
table entry, a ==== sentinel, then the '0'/'1' payload.

Examples:
  huffpress compress notes.txt
  huffpress compress notes.txt -o notes.huff --verbose
  huffpress compress notes.txt --json
  huffpress decompress notes.huff
  huffpress decompress notes.huff -o restored.txt
  huffpress info notes.huff
  huffpress info notes.huff --json
  huffpress verify notes.txt
  huffpress completions bash
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a text file into a frame
    #[command(alias = "c")]
    Compress {
        /// Text file to compress
        input: PathBuf,

        /// Output frame file (defaults to <INPUT>.huff)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print statistics as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,

        /// Show frequency and code tables
        #[arg(short, long)]
        verbose: bool,

        /// Overwrite the output file without asking
        #[arg(short, long)]
        force: bool,

        /// Suppress the progress bar and summary
        #[arg(short, long)]
        quiet: bool,
    },

    /// Decompress a frame file back to text
    #[command(alias = "d")]
    Decompress {
        /// Frame file to decompress
        input: PathBuf,

        /// Output text file (defaults to <INPUT> minus .huff)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite the output file without asking
        #[arg(short, long)]
        force: bool,

        /// Suppress the progress bar and summary
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show information about a frame file
    #[command(alias = "i")]
    Info {
        /// Frame file to inspect
        input: PathBuf,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Check that a text file survives a compression round trip
    #[command(alias = "t")]
    Verify {
        /// Text file to verify
        input: PathBuf,

        /// Show round-trip statistics
        #[arg(short, long)]
        verbose: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            json,
            verbose,
            force,
            quiet,
        } => cmd_compress(
            &input,
            &CompressOptions {
                output,
                json,
                verbose,
                force,
                quiet,
            },
        ),
        Commands::Decompress {
            input,
            output,
            force,
            quiet,
        } => cmd_decompress(
            &input,
            &DecompressOptions {
                output,
                force,
                quiet,
            },
        ),
        Commands::Info { input, json } => cmd_info(&input, json),
        Commands::Verify { input, verbose } => cmd_verify(&input, verbose),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
