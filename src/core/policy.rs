//! Diagnostics policy
//!
//! Every validation finding from the loader and the correlator goes through
//! [`Diagnostics::warn`]. The finding is always logged; the configured
//! [`ErrorPolicy`] then decides whether the run continues or aborts.
//! Call sites propagate the decision with `?`.
//!
//! Findings are logged under the [`DIAGNOSTICS_TARGET`] log target, which the
//! binary keeps enabled at `warn` whatever `RUST_LOG` says. Only counts are
//! retained, plus the most recent finding, so a long lenient run does not
//! hold every rejected record in memory.

use crate::types::{Diagnostic, DiagnosticKind, ReportError};
use log::warn;
use std::collections::HashMap;

/// Log target for validation findings
pub const DIAGNOSTICS_TARGET: &str = "diagnostics";

/// How validation findings are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Any finding aborts the run
    #[default]
    Strict,
    /// Findings are advisory; the offending record is skipped
    Lenient,
}

impl ErrorPolicy {
    pub fn from_strict(strict_mode: bool) -> Self {
        if strict_mode {
            ErrorPolicy::Strict
        } else {
            ErrorPolicy::Lenient
        }
    }
}

/// Collects findings for one run and applies the error policy
#[derive(Debug, Default)]
pub struct Diagnostics {
    policy: ErrorPolicy,
    counts: HashMap<DiagnosticKind, usize>,
    last: Option<Diagnostic>,
}

impl Diagnostics {
    pub fn new(policy: ErrorPolicy) -> Self {
        Diagnostics {
            policy,
            ..Default::default()
        }
    }

    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    /// Log a finding and decide whether processing continues
    ///
    /// # Returns
    ///
    /// * `Ok(())` in lenient mode; the caller skips the offending record
    /// * `Err(ReportError::StrictModeAbort)` in strict mode
    pub fn warn(&mut self, diagnostic: Diagnostic) -> Result<(), ReportError> {
        warn!(target: DIAGNOSTICS_TARGET, "{}", diagnostic);

        match self.policy {
            ErrorPolicy::Strict => Err(ReportError::StrictModeAbort(diagnostic)),
            ErrorPolicy::Lenient => {
                self.record(diagnostic);
                Ok(())
            }
        }
    }

    /// Log and record a finding that never aborts, whatever the policy
    pub fn note(&mut self, diagnostic: Diagnostic) {
        warn!(target: DIAGNOSTICS_TARGET, "{}", diagnostic);
        self.record(diagnostic);
    }

    fn record(&mut self, diagnostic: Diagnostic) {
        *self.counts.entry(diagnostic.kind).or_insert(0) += 1;
        self.last = Some(diagnostic);
    }

    /// Most recent finding that did not abort the run
    pub fn last(&self) -> Option<&Diagnostic> {
        self.last.as_ref()
    }

    pub fn count(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn count_of(&self, kind: DiagnosticKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }
}
