//! Consecutive-difference check: first differences against a threshold.
//!
//! Detects unphysical jumps in monotone or near-continuous measurements.
//! The array is flattened in declared order, missing entries are removed,
//! and the check fails if any absolute difference between adjacent
//! surviving elements exceeds `acceptable_difference`.

use crate::{
    config::ChecksConfig,
    dataset::Dataset,
    report::{CheckKind, Report},
};

use super::{differences_within, present_values, require_dataset, resolve_variable, status};

pub(crate) fn run(dataset: Option<&Dataset>, config: &ChecksConfig, report: &mut Report) {
    let Some(dataset) = require_dataset(dataset, CheckKind::ConsecutiveDifference, report) else {
        return;
    };

    for (name, set) in &config.variables {
        let Some(params) = &set.consecutive_difference_check else {
            continue;
        };
        let Some(variable) =
            resolve_variable(dataset, name, CheckKind::ConsecutiveDifference, report)
        else {
            continue;
        };

        let values = present_values(variable);
        let within = differences_within(&values, params.acceptable_difference);
        report.add_info(
            CheckKind::ConsecutiveDifference,
            Some(name),
            format!(
                "consecutive difference check for variable '{name}': {}",
                status(within)
            ),
        );
    }
}
