//! File helpers and error formatting shared by the binaries.
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::HuffError;

/// Suffix appended to compressed files.
pub const EXTENSION: &str = "huff";

#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Format a user friendly I/O error message with suggestions.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        NotFound => "Check that the file exists and the path is correct.",
        PermissionDenied => "Check permissions or run as a different user.",
        UnexpectedEof => "File appears truncated or corrupted.",
        WriteZero => "Disk may be full. Free up space and try again.",
        Other if err.raw_os_error() == Some(28) => "Disk may be full. Free up space and try again.",
        _ => "Check permissions or free up disk space.",
    };
    format!(
        "Error {} '{}': {}. {}",
        operation,
        path.display(),
        err,
        suggestion
    )
}

/// Convert an I/O error into a CLI error with context.
pub fn io_cli_error(operation: &str, path: &Path, err: io::Error) -> CliError {
    CliError {
        msg: format_io_error(operation, path, &err),
        source: Some(Box::new(err)),
    }
}

/// Invalid file extension error.
pub fn extension_error(path: &Path) -> CliError {
    CliError {
        msg: format!(
            "Invalid file extension for '{}'. Expected .{EXTENSION}. Check the input file.",
            path.display()
        ),
        source: None,
    }
}

/// Convert a codec error into a CLI error with a hint.
pub fn huff_cli_error(context: &str, err: HuffError) -> CliError {
    CliError {
        msg: format!("{}: {}", context, cli_hint(&err)),
        source: Some(Box::new(err)),
    }
}

/// Return an actionable hint for an error variant.
pub fn cli_hint(err: &HuffError) -> String {
    use crate::HuffError::*;
    match err {
        EmptyInput => "input is empty. There is nothing to compress.".to_string(),
        UnsupportedSymbol { symbol, offset } => format!(
            "byte {symbol:#04x} at offset {offset} is outside the accepted alphabet. \
             Drop --ascii-only to accept any byte."
        ),
        CorruptContainer(msg) => format!("{msg}. Verify the file is intact."),
        InputTooLarge(len) => format!("{len} bytes is more than a container can describe."),
        Io(io) => format!("{io}"),
    }
}

/// `name.txt` -> `name.txt.huff`.
pub fn compressed_path(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_os_string();
    name.push(".");
    name.push(EXTENSION);
    PathBuf::from(name)
}

/// `name.txt.huff` -> `name.txt`; `None` unless the extension is `.huff`
/// (case-insensitive) and something precedes it.
pub fn extracted_path(input: &Path) -> Option<PathBuf> {
    let ext = input.extension()?.to_str()?;
    if !ext.eq_ignore_ascii_case(EXTENSION) {
        return None;
    }
    let stem = input.file_stem()?;
    Some(input.with_file_name(stem))
}

pub fn read_input(path: &Path) -> Result<Vec<u8>, CliError> {
    fs::read(path).map_err(|e| io_cli_error("reading input file", path, e))
}

/// Write `bytes` to `path` through a temporary file in the same directory.
/// The target only appears once the data is fully written.
pub fn write_output(path: &Path, bytes: &[u8]) -> Result<(), CliError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .map_err(|e| io_cli_error("creating temporary file in", dir, e))?;
    tmp.write_all(bytes)
        .and_then(|_| tmp.flush())
        .map_err(|e| io_cli_error("writing output file", path, e))?;
    tmp.persist(path)
        .map_err(|e| io_cli_error("writing output file", path, e.error))?;
    Ok(())
}
