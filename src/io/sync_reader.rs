//! Synchronous delimited reader with iterator interface
//!
//! Provides a streaming iterator over the non-blank lines of a `;`-delimited
//! text file. Field validation is left to the caller; this module only splits
//! lines and keeps track of where each one came from.
//!
//! # Design
//!
//! Each line is trimmed; lines that are empty afterwards are skipped silently.
//! The rest are split on `;` with every field trimmed. The input format has
//! no quoting, so a `"` is ordinary text. Line numbers are counted over the
//! physical file, blank lines included.
//!
//! ```no_run
//! use sales_consolidator::io::sync_reader::SyncReader;
//! use std::path::Path;
//!
//! let reader = SyncReader::new(Path::new("datos/productos.csv")).unwrap();
//! for line in reader {
//!     let line = line.unwrap();
//!     println!("{}: {:?}", line.number, line.fields);
//! }
//! ```
//!
//! # Error Handling
//!
//! - Opening failures are returned from `new()` (`FileNotFound` or `Io`)
//! - Read failures and invalid UTF-8 are yielded as `Err(ReportError::Io)`

use crate::types::ReportError;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

/// Field delimiter shared by every input file
pub const DELIMITER: char = ';';

/// One non-blank input line split into trimmed fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimitedLine {
    /// 1-based line number in the source file
    pub number: u64,
    pub fields: Vec<String>,
}

impl DelimitedLine {
    /// Split a raw line on the delimiter, trimming every field
    pub fn parse(number: u64, raw: &str) -> Self {
        DelimitedLine {
            number,
            fields: raw
                .trim()
                .split(DELIMITER)
                .map(|field| field.trim().to_string())
                .collect(),
        }
    }

    /// Field at `index`, if the line has that many fields
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Synchronous delimited reader
///
/// Reads one line at a time; memory use does not grow with the file size.
#[derive(Debug)]
pub struct SyncReader {
    lines: Lines<BufReader<File>>,
    line_num: u64,
    path: PathBuf,
}

impl SyncReader {
    /// Open `path` for streaming iteration
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::FileNotFound`] when the file does not exist and
    /// [`ReportError::Io`] for any other opening failure.
    pub fn new(path: &Path) -> Result<Self, ReportError> {
        let file = File::open(path).map_err(|e| ReportError::from_io(path, e))?;

        Ok(Self {
            lines: BufReader::with_capacity(8 * 1024, file).lines(),
            line_num: 0,
            path: path.to_path_buf(),
        })
    }
}

impl Iterator for SyncReader {
    type Item = Result<DelimitedLine, ReportError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let raw = match self.lines.next()? {
                Ok(raw) => raw,
                Err(e) => return Some(Err(ReportError::io(&self.path, e))),
            };
            self.line_num += 1;

            if raw.trim().is_empty() {
                continue;
            }

            return Some(Ok(DelimitedLine::parse(self.line_num, &raw)));
        }
    }
}
