//! Values-change-rate check: gated first-difference test.
//!
//! Same arithmetic as the consecutive-difference check, but each variable
//! carries a `perform_check` flag. A variable configured with
//! `perform_check: false` is silently skipped - no info, warning, or
//! error - which is distinct from the "not in nc file" warning for
//! missing variables.

use crate::{
    config::ChecksConfig,
    dataset::Dataset,
    report::{CheckKind, Report},
};

use super::{differences_within, present_values, require_dataset, resolve_variable, status};

pub(crate) fn run(dataset: Option<&Dataset>, config: &ChecksConfig, report: &mut Report) {
    let Some(dataset) = require_dataset(dataset, CheckKind::ChangeRate, report) else {
        return;
    };

    for (name, set) in &config.variables {
        let Some(params) = &set.do_values_change_at_acceptable_rate_check else {
            continue;
        };
        if !params.perform_check {
            continue;
        }
        let Some(variable) = resolve_variable(dataset, name, CheckKind::ChangeRate, report) else {
            continue;
        };

        let values = present_values(variable);
        let within = differences_within(&values, params.acceptable_difference);
        report.add_info(
            CheckKind::ChangeRate,
            Some(name),
            format!(
                "value change rate check for variable '{name}': {}",
                status(within)
            ),
        );
    }
}
