//! Rule configuration for quality-control checks.
//!
//! A [`ChecksConfig`] is a nested specification keyed by scope
//! (`dimensions` / `variables` / `global attributes` / `file size`), then
//! by target name, then by check identifier. It deserializes from the same
//! JSON structure callers have always written: unknown check identifiers
//! and extra parameter fields are ignored, never rejected, and absence of
//! a target or identifier simply means "not configured".
//!
//! Parameters are typed per check kind, so shapes are validated once at
//! attach time instead of being interpreted ad hoc inside each evaluator.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    report::CheckKind,
};

/// Parameters for the existence check. Presence of the key is the
/// configuration; there are no parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistenceParams {}

/// Parameters for the boundary check: inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundaryParams {
    /// Inclusive lower bound.
    pub min: f64,
    /// Inclusive upper bound.
    pub max: f64,
}

/// Parameters for the emptiness check. Presence of the key is the
/// configuration; the variable's own fill value and NaN define "empty".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptinessParams {}

/// Parameters for the data-points-amount check. The expected count is
/// derived from the dataset's declared dimension sizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPointsParams {}

/// Parameters for the consecutive-difference check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifferenceParams {
    /// Maximum acceptable absolute difference between adjacent values.
    pub acceptable_difference: f64,
}

/// Parameters for the max-consecutive-same-values check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaxConsecutiveParams {
    /// Longest allowed run of exactly-equal consecutive values.
    pub maximum: usize,
}

/// Parameters for the values-change-rate check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChangeRateParams {
    /// When false the variable is silently skipped - no report entry of
    /// any severity.
    pub perform_check: bool,
    /// Maximum acceptable absolute difference between adjacent values.
    pub acceptable_difference: f64,
}

/// The checks configured for one target name.
///
/// Each field mirrors one check identifier from the configuration file;
/// `None` means "not configured". Unknown identifiers deserialize to
/// nothing and are never matched by any evaluator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckSet {
    /// `existence_check`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub existence_check: Option<ExistenceParams>,
    /// `boundary_check: {min, max}`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boundary_check: Option<BoundaryParams>,
    /// `emptiness_check`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emptiness_check: Option<EmptinessParams>,
    /// `data_points_amount_check`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_points_amount_check: Option<DataPointsParams>,
    /// `consecutive_difference_check: {acceptable_difference}`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consecutive_difference_check: Option<DifferenceParams>,
    /// `max_number_of_consecutive_same_values: {maximum}`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_number_of_consecutive_same_values: Option<MaxConsecutiveParams>,
    /// `do_values_change_at_acceptable_rate_check: {perform_check,
    /// acceptable_difference}`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub do_values_change_at_acceptable_rate_check: Option<ChangeRateParams>,
}

impl CheckSet {
    /// True if this target configures the given check kind.
    pub fn configures(&self, kind: CheckKind) -> bool {
        match kind {
            CheckKind::Existence => self.existence_check.is_some(),
            CheckKind::Boundary => self.boundary_check.is_some(),
            CheckKind::Emptiness => self.emptiness_check.is_some(),
            CheckKind::DataPointsAmount => self.data_points_amount_check.is_some(),
            CheckKind::ConsecutiveDifference => self.consecutive_difference_check.is_some(),
            CheckKind::MaxConsecutiveSameValues => {
                self.max_number_of_consecutive_same_values.is_some()
            }
            CheckKind::ChangeRate => self.do_values_change_at_acceptable_rate_check.is_some(),
        }
    }
}

/// Quality-control rule configuration.
///
/// The four scopes map target names to their configured checks, in
/// declaration order; that order drives report ordering. The `file size`
/// scope is retained for structural compatibility but no check kind
/// consumes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChecksConfig {
    /// Checks on dimensions.
    #[serde(default)]
    pub dimensions: IndexMap<String, CheckSet>,
    /// Checks on variables.
    #[serde(default)]
    pub variables: IndexMap<String, CheckSet>,
    /// Checks on global attributes.
    #[serde(default, rename = "global attributes", alias = "global_attributes")]
    pub global_attributes: IndexMap<String, CheckSet>,
    /// Checks on file size (parsed, not evaluated).
    #[serde(default, rename = "file size", alias = "file_size")]
    pub file_size: IndexMap<String, CheckSet>,
}

impl ChecksConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(e, path))?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid JSON.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// True if no scope configures any target.
    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
            && self.variables.is_empty()
            && self.global_attributes.is_empty()
            && self.file_size.is_empty()
    }

    /// True if any target in any scope configures the given check kind.
    pub fn configures(&self, kind: CheckKind) -> bool {
        self.dimensions
            .values()
            .chain(self.variables.values())
            .chain(self.global_attributes.values())
            .chain(self.file_size.values())
            .any(|set| set.configures(kind))
    }
}
