//! Print the header of a .huff container: every (symbol, code) entry in file
//! order followed by both counts. The payload is not decoded.

use std::path::PathBuf;

use clap::Parser;
use huffpack::io_utils::{huff_cli_error, read_input};
use huffpack::parse_header;

#[derive(Parser)]
struct Args {
    /// Container to inspect
    input: PathBuf,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let bytes = read_input(&args.input)?;
    let header = parse_header(&bytes).map_err(|e| huff_cli_error("reading header", e))?;

    for (symbol, code) in header.table.entries() {
        let shown = if symbol.is_ascii_graphic() {
            format!("'{}'", *symbol as char)
        } else {
            format!("{symbol:#04x}")
        };
        println!("{shown:>6}  {code}");
    }
    println!("unique symbols: {}", header.unique_count);
    println!("total symbols:  {}", header.total_count);
    println!(
        "payload bytes:  {}",
        bytes.len() - header.payload_offset
    );
    Ok(())
}
