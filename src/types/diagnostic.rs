//! Recoverable validation findings
//!
//! A [`Diagnostic`] describes one rejected record, line, or file. Whether it
//! stops the run is decided by the diagnostics policy, not by the code that
//! found the problem.

use std::fmt;

/// Category of a validation finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// Master line with too few fields, an unparsable number, or an empty name
    MalformedRecord,
    /// Master line repeating an id or document already loaded
    DuplicateIdentity,
    /// No `ventas_*.csv` file in the data directory
    NoSalesFiles,
    /// Sales file without any non-blank line
    EmptySalesFile,
    /// Sales header with too few fields or an unparsable document number
    MalformedSalesHeader,
    /// Sales header naming a document absent from the sellers master
    UnknownSeller,
    /// Sale line with too few fields, a bad id or quantity, or an overflow
    InvalidSaleLine,
    /// Sale line naming a product absent from the products master
    UnknownProduct,
}

/// A single validation finding
///
/// `line` is the 1-based line number within `source`; zero means the finding
/// applies to the whole source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub source: String,
    pub line: u64,
    pub message: String,
}

impl Diagnostic {
    pub fn new(
        kind: DiagnosticKind,
        source: impl Into<String>,
        line: u64,
        message: impl Into<String>,
    ) -> Self {
        Diagnostic {
            kind,
            source: source.into(),
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line == 0 {
            write!(f, "{}: {}", self.source, self.message)
        } else {
            write!(f, "{}:{}: {}", self.source, self.line, self.message)
        }
    }
}
