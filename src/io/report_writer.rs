//! Report file output
//!
//! Creates the parent directory of a report if needed, then hands a buffered
//! writer to the caller's render function. The file handle is scoped to this
//! call and closed on every exit path; on success the buffer is flushed
//! explicitly so that write failures surface as errors.

use crate::types::ReportError;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write one report file through `render`
///
/// # Errors
///
/// Returns [`ReportError::Io`] if the directory cannot be created, the file
/// cannot be created, or rendering or flushing fails.
pub fn write_report_file<F>(path: &Path, render: F) -> Result<(), ReportError>
where
    F: FnOnce(&mut dyn Write) -> Result<(), String>,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ReportError::io(parent, e))?;
    }

    let file = File::create(path).map_err(|e| ReportError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    render(&mut writer).map_err(|e| ReportError::io(path, e))?;
    writer.flush().map_err(|e| ReportError::io(path, e))?;

    Ok(())
}
