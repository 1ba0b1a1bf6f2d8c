//! Report collection for quality-control runs.
//!
//! A [`Report`] is an append-only record of check outcomes at three
//! severities. Entry order reflects check-invocation and target-iteration
//! order and is part of the observable contract: entries are never
//! reordered or deduplicated, and re-running a check appends again.

use serde::Serialize;

/// Severity of a report entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Check outcome, including domain-validation failures.
    Info,
    /// Recoverable per-target problem, e.g. a configured variable
    /// missing from the dataset.
    Warning,
    /// The check could not run at all, e.g. no dataset loaded.
    Error,
}

/// The check kinds known to the engine, in `run_all_checks` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    /// Presence of configured dimensions, variables, and attributes.
    Existence,
    /// Inclusive min/max bounds on variable values.
    Boundary,
    /// Fraction of fill-value or NaN elements.
    Emptiness,
    /// Element count vs. the product of declared dimension sizes.
    DataPointsAmount,
    /// First differences against an acceptable threshold.
    ConsecutiveDifference,
    /// Run lengths of exactly-equal consecutive values.
    MaxConsecutiveSameValues,
    /// First differences, gated by a per-variable `perform_check` flag.
    ChangeRate,
}

impl CheckKind {
    /// All check kinds in the fixed `run_all_checks` order.
    pub const ALL: [Self; 7] = [
        Self::Existence,
        Self::Boundary,
        Self::Emptiness,
        Self::DataPointsAmount,
        Self::ConsecutiveDifference,
        Self::MaxConsecutiveSameValues,
        Self::ChangeRate,
    ];

    /// Check name as it appears in "no nc file loaded" error entries.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Existence => "existence check",
            Self::Boundary => "boundary check",
            Self::Emptiness => "emptiness check",
            Self::DataPointsAmount => "data points amount check",
            Self::ConsecutiveDifference => "consecutive difference check",
            Self::MaxConsecutiveSameValues => "max_number_of_consecutive_same_values",
            Self::ChangeRate => "values change rate check",
        }
    }
}

/// A single report entry.
///
/// The `message` string is the backward-compatible contract consumed by
/// legacy log readers; `check` and `target` expose the same information
/// as structured fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    /// Human-readable message.
    pub message: String,
    /// The check kind that produced this entry.
    pub check: CheckKind,
    /// The configured target name, if the entry concerns one.
    pub target: Option<String>,
}

/// Append-only, insertion-order-preserving record of check outcomes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    info: Vec<ReportEntry>,
    warnings: Vec<ReportEntry>,
    errors: Vec<ReportEntry>,
}

impl Report {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an info entry.
    pub fn add_info(
        &mut self,
        check: CheckKind,
        target: Option<&str>,
        message: impl Into<String>,
    ) {
        self.info.push(ReportEntry {
            message: message.into(),
            check,
            target: target.map(String::from),
        });
    }

    /// Append a warning entry.
    pub fn add_warning(
        &mut self,
        check: CheckKind,
        target: Option<&str>,
        message: impl Into<String>,
    ) {
        self.warnings.push(ReportEntry {
            message: message.into(),
            check,
            target: target.map(String::from),
        });
    }

    /// Append an error entry.
    pub fn add_error(
        &mut self,
        check: CheckKind,
        target: Option<&str>,
        message: impl Into<String>,
    ) {
        self.errors.push(ReportEntry {
            message: message.into(),
            check,
            target: target.map(String::from),
        });
    }

    /// Info entries, in insertion order.
    pub fn info(&self) -> &[ReportEntry] {
        &self.info
    }

    /// Warning entries, in insertion order.
    pub fn warnings(&self) -> &[ReportEntry] {
        &self.warnings
    }

    /// Error entries, in insertion order.
    pub fn errors(&self) -> &[ReportEntry] {
        &self.errors
    }

    /// Info messages as plain strings, in insertion order.
    pub fn info_messages(&self) -> Vec<&str> {
        self.info.iter().map(|e| e.message.as_str()).collect()
    }

    /// Warning messages as plain strings, in insertion order.
    pub fn warning_messages(&self) -> Vec<&str> {
        self.warnings.iter().map(|e| e.message.as_str()).collect()
    }

    /// Error messages as plain strings, in insertion order.
    pub fn error_messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_str()).collect()
    }

    /// True if any error entries were recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// True if any warning entries were recorded.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// True if no entries were recorded at any severity.
    pub fn is_empty(&self) -> bool {
        self.info.is_empty() && self.warnings.is_empty() && self.errors.is_empty()
    }

    /// Total number of entries across all severities.
    pub fn len(&self) -> usize {
        self.info.len() + self.warnings.len() + self.errors.len()
    }

    /// Entries at the given severity, in insertion order.
    pub fn entries(&self, severity: Severity) -> &[ReportEntry] {
        match severity {
            Severity::Info => &self.info,
            Severity::Warning => &self.warnings,
            Severity::Error => &self.errors,
        }
    }
}
