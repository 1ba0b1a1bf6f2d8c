//! Quality-control façade.
//!
//! [`QualityControl`] owns the currently loaded dataset, the attached rule
//! configuration, and the accumulating report. One method per check kind
//! plus [`run_all_checks`](QualityControl::run_all_checks); each method is
//! idempotent with respect to the dataset and configuration but not the
//! report - repeated invocation appends again.
//!
//! # Example
//!
//! ```
//! use ncqc::{ChecksConfig, Dataset, QualityControl, Variable};
//!
//! let mut qc = QualityControl::new();
//! qc.set_dataset(
//!     Dataset::new()
//!         .with_dimension("time", 3)
//!         .with_variable("t", Variable::vector("time", vec![1.0, 2.0])),
//! );
//! qc.attach_checks(
//!     ChecksConfig::from_json_str(
//!         r#"{"variables": {"t": {"data_points_amount_check": {}}}}"#,
//!     )
//!     .unwrap(),
//! );
//! qc.run_all_checks();
//! assert_eq!(
//!     qc.report().info_messages(),
//!     ["data points amount check for variable 't': fail"],
//! );
//! ```

use std::path::Path;

use crate::{
    checks,
    config::ChecksConfig,
    dataset::Dataset,
    error::Result,
    report::{CheckKind, Report},
};

/// Orchestrates check evaluation over a loaded dataset.
#[derive(Debug, Default)]
pub struct QualityControl {
    dataset: Option<Dataset>,
    config: ChecksConfig,
    report: Report,
}

impl QualityControl {
    /// Creates a façade with no dataset, an empty configuration, and an
    /// empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a dataset from a JSON file, replacing any previous dataset.
    ///
    /// Load failures surface to the caller; they are never recorded in
    /// the report.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_dataset(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.dataset = Some(Dataset::from_path(path)?);
        Ok(())
    }

    /// Stores an already constructed dataset, replacing any previous one.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.dataset = Some(dataset);
    }

    /// Attaches a rule configuration verbatim, replacing any previous one.
    pub fn attach_checks(&mut self, config: ChecksConfig) {
        self.config = config;
    }

    /// Loads and attaches a rule configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn attach_checks_from_path(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.config = ChecksConfig::from_path(path)?;
        Ok(())
    }

    /// The currently loaded dataset, if any.
    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    /// The attached rule configuration.
    pub fn config(&self) -> &ChecksConfig {
        &self.config
    }

    /// The accumulated report.
    pub fn report(&self) -> &Report {
        &self.report
    }

    /// Consumes the façade, yielding the accumulated report.
    pub fn into_report(self) -> Report {
        self.report
    }

    /// Checks that configured dimensions, variables, and global attributes
    /// exist in the dataset.
    pub fn existence_check(&mut self) {
        checks::existence::run(self.dataset.as_ref(), &self.config, &mut self.report);
    }

    /// Checks configured variables against inclusive min/max bounds.
    pub fn boundary_check(&mut self) {
        checks::boundary::run(self.dataset.as_ref(), &self.config, &mut self.report);
    }

    /// Reports the fill-value/NaN fraction of configured variables and
    /// global attributes.
    pub fn emptiness_check(&mut self) {
        checks::emptiness::run(self.dataset.as_ref(), &self.config, &mut self.report);
    }

    /// Compares variable element counts to their declared dimension sizes.
    pub fn data_points_amount_check(&mut self) {
        checks::data_points::run(self.dataset.as_ref(), &self.config, &mut self.report);
    }

    /// Checks first differences of configured variables against a
    /// threshold.
    pub fn consecutive_difference_check(&mut self) {
        checks::difference::run(self.dataset.as_ref(), &self.config, &mut self.report);
    }

    /// Checks run lengths of exactly-equal consecutive values.
    pub fn max_number_of_consecutive_same_values(&mut self) {
        checks::consecutive::run(self.dataset.as_ref(), &self.config, &mut self.report);
    }

    /// Checks first differences, honouring each variable's
    /// `perform_check` gate.
    pub fn values_change_rate_check(&mut self) {
        checks::change_rate::run(self.dataset.as_ref(), &self.config, &mut self.report);
    }

    /// Runs one check kind by tag.
    pub fn run_check(&mut self, kind: CheckKind) {
        match kind {
            CheckKind::Existence => self.existence_check(),
            CheckKind::Boundary => self.boundary_check(),
            CheckKind::Emptiness => self.emptiness_check(),
            CheckKind::DataPointsAmount => self.data_points_amount_check(),
            CheckKind::ConsecutiveDifference => self.consecutive_difference_check(),
            CheckKind::MaxConsecutiveSameValues => self.max_number_of_consecutive_same_values(),
            CheckKind::ChangeRate => self.values_change_rate_check(),
        }
    }

    /// Runs every check kind that at least one target configures, in the
    /// fixed order existence, boundary, emptiness, data-points-amount,
    /// consecutive-difference, max-consecutive-same-values, change-rate.
    ///
    /// Unconfigured kinds are skipped entirely, so they contribute
    /// neither entries nor "no nc file loaded" errors. Outcomes of one
    /// kind never prevent subsequent kinds from running.
    pub fn run_all_checks(&mut self) {
        for kind in CheckKind::ALL {
            if self.config.configures(kind) {
                self.run_check(kind);
            }
        }
    }
}
