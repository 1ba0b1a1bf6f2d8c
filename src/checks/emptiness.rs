//! Emptiness check: fraction of fill-value or NaN elements.
//!
//! A variable is "full" when no element is missing and "empty" when every
//! element is; anything in between reports the percentage. Scalar
//! variables are one-element arrays. Global-attribute targets are empty
//! when they hold an empty string (or NaN for numeric attributes).

use crate::{
    config::ChecksConfig,
    dataset::Dataset,
    report::{CheckKind, Report},
};

use super::{require_dataset, resolve_variable};

pub(crate) fn run(dataset: Option<&Dataset>, config: &ChecksConfig, report: &mut Report) {
    let Some(dataset) = require_dataset(dataset, CheckKind::Emptiness, report) else {
        return;
    };

    for (name, set) in &config.variables {
        if set.emptiness_check.is_none() {
            continue;
        }
        let Some(variable) = resolve_variable(dataset, name, CheckKind::Emptiness, report) else {
            continue;
        };

        let classification = classify(variable.missing_count(), variable.len());
        report.add_info(
            CheckKind::Emptiness,
            Some(name),
            format!("emptiness check for variable '{name}': {classification}"),
        );
    }

    for (name, set) in &config.global_attributes {
        if set.emptiness_check.is_none() {
            continue;
        }
        let Some(value) = dataset.global_attributes.get(name) else {
            report.add_warning(
                CheckKind::Emptiness,
                Some(name),
                format!("attribute '{name}' not in nc file"),
            );
            continue;
        };

        let classification = if value.is_empty() { "empty" } else { "full" };
        report.add_info(
            CheckKind::Emptiness,
            Some(name),
            format!("emptiness check for attribute '{name}': {classification}"),
        );
    }
}

/// Category or percentage for a missing count over a total.
fn classify(missing: usize, total: usize) -> String {
    if total == 0 || missing == total {
        "empty".to_string()
    } else if missing == 0 {
        "full".to_string()
    } else {
        format!("{:.2}% empty", 100.0 * missing as f64 / total as f64)
    }
}
