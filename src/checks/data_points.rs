//! Data-points-amount check: element count vs. declared dimension sizes.
//!
//! The expected count is the product of the sizes of the variable's
//! declared dimensions, resolved against the dataset's dimension table.
//! A mismatch typically means a dimension was resized without rewriting
//! the variable, or the variable was only partially written. Scalar
//! variables declare no dimensions and expect exactly one element.

use crate::{
    config::ChecksConfig,
    dataset::Dataset,
    report::{CheckKind, Report},
};

use super::{require_dataset, resolve_variable, status};

pub(crate) fn run(dataset: Option<&Dataset>, config: &ChecksConfig, report: &mut Report) {
    let Some(dataset) = require_dataset(dataset, CheckKind::DataPointsAmount, report) else {
        return;
    };

    'targets: for (name, set) in &config.variables {
        if set.data_points_amount_check.is_none() {
            continue;
        }
        let Some(variable) = resolve_variable(dataset, name, CheckKind::DataPointsAmount, report)
        else {
            continue;
        };

        let mut expected = 1usize;
        for dim in &variable.dimensions {
            match dataset.dimensions.get(dim) {
                Some(size) => expected *= size,
                None => {
                    report.add_warning(
                        CheckKind::DataPointsAmount,
                        Some(name),
                        format!("dimension '{dim}' not in nc file"),
                    );
                    continue 'targets;
                }
            }
        }

        report.add_info(
            CheckKind::DataPointsAmount,
            Some(name),
            format!(
                "data points amount check for variable '{name}': {}",
                status(variable.len() == expected)
            ),
        );
    }
}
