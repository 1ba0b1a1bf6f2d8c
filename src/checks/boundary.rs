//! Boundary check: inclusive min/max bounds on variable values.
//!
//! The variable's array is flattened in row-major order, missing entries
//! (fill value or NaN) are excluded, and every remaining element must
//! satisfy `min <= x <= max`. A single out-of-bound element anywhere
//! fails the whole variable.

use crate::{
    config::ChecksConfig,
    dataset::Dataset,
    report::{CheckKind, Report},
};

use super::{require_dataset, resolve_variable, status};

pub(crate) fn run(dataset: Option<&Dataset>, config: &ChecksConfig, report: &mut Report) {
    let Some(dataset) = require_dataset(dataset, CheckKind::Boundary, report) else {
        return;
    };

    for (name, set) in &config.variables {
        let Some(params) = &set.boundary_check else {
            continue;
        };
        let Some(variable) = resolve_variable(dataset, name, CheckKind::Boundary, report) else {
            continue;
        };

        let within_bounds = variable
            .values()
            .iter()
            .copied()
            .filter(|&v| !variable.is_missing(v))
            .all(|v| params.min <= v && v <= params.max);

        report.add_info(
            CheckKind::Boundary,
            Some(name),
            format!(
                "boundary check for variable '{name}': {}",
                status(within_bounds)
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Variable;

    fn config(min: f64, max: f64) -> ChecksConfig {
        ChecksConfig::from_json_str(&format!(
            r#"{{"variables": {{"kinetic_energy": {{"boundary_check": {{"min": {min}, "max": {max}}}}}}}}}"#,
        ))
        .unwrap()
    }

    #[test]
    fn test_no_dataset() {
        let mut report = Report::new();
        run(None, &config(0.0, 1.8), &mut report);
        assert_eq!(
            report.error_messages(),
            ["boundary check error: no nc file loaded"]
        );
        assert!(report.info().is_empty());
        assert!(report.warnings().is_empty());
    }

    #[test]
    fn test_all_within_bounds() {
        let dataset = Dataset::new().with_variable(
            "kinetic_energy",
            Variable::vector("time", vec![0.0, 0.9, 1.8]).with_fill_value(-1.0),
        );
        let mut report = Report::new();
        run(Some(&dataset), &config(0.0, 1.8), &mut report);
        assert_eq!(
            report.info_messages(),
            ["boundary check for variable 'kinetic_energy': success"]
        );
    }

    #[test]
    fn test_single_out_of_range_element_fails() {
        let mut values = vec![0.5; 99];
        values.push(1.91);
        let dataset = Dataset::new().with_variable(
            "kinetic_energy",
            Variable::vector("time", values).with_fill_value(-1.0),
        );
        let mut report = Report::new();
        run(Some(&dataset), &config(0.0, 1.8), &mut report);
        assert_eq!(
            report.info_messages(),
            ["boundary check for variable 'kinetic_energy': fail"]
        );
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let dataset = Dataset::new()
            .with_variable("kinetic_energy", Variable::vector("time", vec![0.0, 1.8]));
        let mut report = Report::new();
        run(Some(&dataset), &config(0.0, 1.8), &mut report);
        assert_eq!(
            report.info_messages(),
            ["boundary check for variable 'kinetic_energy': success"]
        );
    }

    #[test]
    fn test_fill_values_are_excluded() {
        // -1.0 lies outside [0, 1.8] but is the fill value, so it never
        // participates in the bound test.
        let dataset = Dataset::new().with_variable(
            "kinetic_energy",
            Variable::vector("time", vec![-1.0, 0.5, -1.0]).with_fill_value(-1.0),
        );
        let mut report = Report::new();
        run(Some(&dataset), &config(0.0, 1.8), &mut report);
        assert_eq!(
            report.info_messages(),
            ["boundary check for variable 'kinetic_energy': success"]
        );
    }

    #[test]
    fn test_multi_dimensional_flattening() {
        let grid = Variable::new(
            vec!["row".into(), "col".into()],
            vec![2, 2],
            vec![0.1, 0.2, 5.0, 0.3],
        )
        .unwrap();
        let dataset = Dataset::new().with_variable("kinetic_energy", grid);
        let mut report = Report::new();
        run(Some(&dataset), &config(0.0, 1.8), &mut report);
        assert_eq!(
            report.info_messages(),
            ["boundary check for variable 'kinetic_energy': fail"]
        );
    }

    #[test]
    fn test_missing_variable_warns() {
        let dataset = Dataset::new();
        let mut report = Report::new();
        run(Some(&dataset), &config(0.0, 1.8), &mut report);
        assert_eq!(
            report.warning_messages(),
            ["variable 'kinetic_energy' not in nc file"]
        );
        assert!(report.info().is_empty());
        assert!(report.errors().is_empty());
    }
}
