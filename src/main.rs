use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};
use huffpack::io_utils::{
    compressed_path, extension_error, extracted_path, huff_cli_error, read_input, write_output,
};
use huffpack::{compress_with_report, decompress, Config};
use tracing_subscriber::EnvFilter;

/// Huffman compress a file into a .huff container or extract one.
#[derive(Parser)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand)]
enum Mode {
    /// Compress a file, writing <input>.huff by default
    #[command(name = "c", alias = "compress")]
    Compress {
        input: PathBuf,
        /// Output path
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Reject bytes above 0x7F
        #[arg(long)]
        ascii_only: bool,
        /// Print the compression report as JSON on stdout
        #[arg(long)]
        json: bool,
    },
    /// Extract a .huff file, writing it without the suffix by default
    #[command(name = "e", alias = "extract")]
    Extract {
        input: PathBuf,
        /// Output path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.mode {
        Mode::Compress {
            input,
            output,
            ascii_only,
            json,
        } => {
            let start_time = Instant::now();
            let config = if ascii_only {
                Config::ascii()
            } else {
                Config::default()
            };
            let data = read_input(&input)?;
            let (packed, report) = compress_with_report(&data, &config)
                .map_err(|e| huff_cli_error("compression failed", e))?;
            let output = output.unwrap_or_else(|| compressed_path(&input));
            tracing::info!(path = %output.display(), bytes = packed.len(), "writing container");
            write_output(&output, &packed)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                eprintln!(
                    "Compressed {} -> {} bytes ({:.2}%) in {:.2?}",
                    report.input_bytes,
                    report.output_bytes,
                    report.ratio(),
                    start_time.elapsed()
                );
            }
        }
        Mode::Extract { input, output } => {
            let default_output = extracted_path(&input).ok_or_else(|| extension_error(&input))?;
            let data = read_input(&input)?;
            let restored =
                decompress(&data).map_err(|e| huff_cli_error("decompression failed", e))?;
            let output = output.unwrap_or(default_output);
            tracing::info!(path = %output.display(), bytes = restored.len(), "writing extracted file");
            write_output(&output, &restored)?;
        }
    }
    Ok(())
}
