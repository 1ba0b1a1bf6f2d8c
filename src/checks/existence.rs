//! Existence check.
//!
//! Pass is silent: presence of a configured dimension, variable, or global
//! attribute produces no entry. Only configured targets missing from the
//! dataset are reported, as the shared "not in nc file" warning. This is
//! the same resolution every other check applies to its own targets, made
//! independently invokable.

use crate::{
    config::ChecksConfig,
    dataset::Dataset,
    report::{CheckKind, Report},
};

use super::require_dataset;

pub(crate) fn run(dataset: Option<&Dataset>, config: &ChecksConfig, report: &mut Report) {
    let Some(dataset) = require_dataset(dataset, CheckKind::Existence, report) else {
        return;
    };

    for (name, set) in &config.dimensions {
        if set.existence_check.is_some() && !dataset.dimensions.contains_key(name) {
            report.add_warning(
                CheckKind::Existence,
                Some(name),
                format!("dimension '{name}' not in nc file"),
            );
        }
    }

    for (name, set) in &config.variables {
        if set.existence_check.is_some() && !dataset.variables.contains_key(name) {
            report.add_warning(
                CheckKind::Existence,
                Some(name),
                format!("variable '{name}' not in nc file"),
            );
        }
    }

    for (name, set) in &config.global_attributes {
        if set.existence_check.is_some() && !dataset.global_attributes.contains_key(name) {
            report.add_warning(
                CheckKind::Existence,
                Some(name),
                format!("attribute '{name}' not in nc file"),
            );
        }
    }
}
