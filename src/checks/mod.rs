//! Check evaluators.
//!
//! One module per check kind. Evaluators are independent and composable:
//! each consumes the dataset model plus the rule configuration and appends
//! zero or more entries to the shared report; no evaluator depends on
//! another's output.
//!
//! Shared failure policy:
//! - no dataset loaded: exactly one error entry, the evaluator stops
//! - configured target missing from the dataset: exactly one warning
//!   entry, that target is skipped, iteration continues
//! - a failed numeric condition is an info entry with "fail" status,
//!   never an error

pub mod boundary;
pub mod change_rate;
pub mod consecutive;
pub mod data_points;
pub mod difference;
pub mod emptiness;
pub mod existence;

use crate::{
    dataset::{Dataset, Variable},
    report::{CheckKind, Report},
};

/// Uniform "no dataset" guard: appends the single error entry and yields
/// `None` when no dataset has been loaded.
pub(crate) fn require_dataset<'a>(
    dataset: Option<&'a Dataset>,
    kind: CheckKind,
    report: &mut Report,
) -> Option<&'a Dataset> {
    match dataset {
        Some(dataset) => Some(dataset),
        None => {
            report.add_error(kind, None, format!("{} error: no nc file loaded", kind.name()));
            None
        }
    }
}

/// Uniform target resolution: warns and yields `None` when the configured
/// variable is absent from the dataset.
pub(crate) fn resolve_variable<'a>(
    dataset: &'a Dataset,
    name: &str,
    kind: CheckKind,
    report: &mut Report,
) -> Option<&'a Variable> {
    match dataset.variables.get(name) {
        Some(variable) => Some(variable),
        None => {
            report.add_warning(kind, Some(name), format!("variable '{name}' not in nc file"));
            None
        }
    }
}

/// The variable's values with missing entries (fill value or NaN) removed,
/// in flattened order.
pub(crate) fn present_values(variable: &Variable) -> Vec<f64> {
    variable
        .values()
        .iter()
        .copied()
        .filter(|&v| !variable.is_missing(v))
        .collect()
}

/// True if every first difference of `values` stays within
/// `acceptable_difference` in magnitude. Fewer than two values trivially
/// pass.
pub(crate) fn differences_within(values: &[f64], acceptable_difference: f64) -> bool {
    values
        .windows(2)
        .all(|pair| (pair[1] - pair[0]).abs() <= acceptable_difference)
}

/// Longest run of exactly-equal consecutive values, `(length, value)`.
/// The first run wins ties. NaN never equals NaN, so NaN stretches count
/// as runs of length one. Returns `None` for an empty slice.
pub(crate) fn longest_run(values: &[f64]) -> Option<(usize, f64)> {
    let (&first, rest) = values.split_first()?;
    let mut best = (1usize, first);
    let mut current_value = first;
    let mut current_len = 1usize;
    for &value in rest {
        if value == current_value {
            current_len += 1;
        } else {
            current_value = value;
            current_len = 1;
        }
        if current_len > best.0 {
            best = (current_len, current_value);
        }
    }
    Some(best)
}

/// Pass/fail wording shared by the summary entries.
pub(crate) fn status(passed: bool) -> &'static str {
    if passed {
        "success"
    } else {
        "fail"
    }
}
