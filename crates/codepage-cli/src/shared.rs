use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use codepage::{BundledSource, CodePageError, DirectorySource, Registry};
use tracing::Level;

/// Install a stderr log subscriber: debug level when verbose, warnings
/// otherwise.
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_writer(io::stderr)
        .with_max_level(level)
        .finish();
    // Ignore failure: a subscriber is already installed.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Build a registry over `tables`, or over the bundled tables if `None`.
///
/// Returns `Err(1)` with a message printed to stderr if `tables` is not a
/// directory.
pub fn open_registry(tables: Option<&Path>) -> Result<Registry, i32> {
    match tables {
        Some(dir) if !dir.is_dir() => {
            eprintln!("Error: table directory not found: {}", dir.display());
            Err(1)
        }
        Some(dir) => Ok(Registry::new(DirectorySource::new(dir))),
        None => Ok(Registry::new(BundledSource::new())),
    }
}

/// Read all input bytes from `file`, or from stdin if `None`.
pub fn read_input(file: Option<&Path>) -> Result<Vec<u8>, i32> {
    match file {
        Some(path) => fs::read(path).map_err(|e| {
            eprintln!("Error: cannot read {}: {e}", path.display());
            1
        }),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf).map_err(|e| {
                eprintln!("Error: cannot read stdin: {e}");
                1
            })?;
            Ok(buf)
        }
    }
}

/// Write raw bytes to stdout.
pub fn write_output(bytes: &[u8]) -> Result<(), i32> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(bytes)
        .and_then(|()| stdout.flush())
        .map_err(|e| {
            eprintln!("Error: cannot write output: {e}");
            1
        })
}

/// Print a library error to stderr and map it to exit code 1.
pub fn report(err: CodePageError) -> i32 {
    eprintln!("Error: {err}");
    1
}
