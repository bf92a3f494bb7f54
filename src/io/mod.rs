use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub mod csv;
pub mod json;

pub use csv::{write_sweep, write_sweep_file};
pub use json::{write_report, write_report_file, ExportError};

/// Create a buffered writer for the target path, handling stdout (`-`) by
/// convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}
