//! Max-consecutive-same-values check: run-length analysis.
//!
//! Scans the flattened array for runs of exactly-equal consecutive values
//! (no tolerance). When the longest run exceeds the configured maximum, a
//! diagnostic entry naming the run length and value precedes the summary;
//! within bounds, only the summary is emitted. When several runs tie for
//! longest, the first one is reported.

use crate::{
    config::ChecksConfig,
    dataset::Dataset,
    report::{CheckKind, Report},
};

use super::{longest_run, require_dataset, resolve_variable, status};

pub(crate) fn run(dataset: Option<&Dataset>, config: &ChecksConfig, report: &mut Report) {
    let Some(dataset) = require_dataset(dataset, CheckKind::MaxConsecutiveSameValues, report)
    else {
        return;
    };

    for (name, set) in &config.variables {
        let Some(params) = &set.max_number_of_consecutive_same_values else {
            continue;
        };
        let Some(variable) =
            resolve_variable(dataset, name, CheckKind::MaxConsecutiveSameValues, report)
        else {
            continue;
        };

        let mut passed = true;
        if let Some((run_length, value)) = longest_run(variable.values()) {
            if run_length > params.maximum {
                passed = false;
                report.add_info(
                    CheckKind::MaxConsecutiveSameValues,
                    Some(name),
                    format!("{name} has {run_length} consecutive same values {value:?}"),
                );
            }
        }

        report.add_info(
            CheckKind::MaxConsecutiveSameValues,
            Some(name),
            format!(
                "max_number_of_consecutive_same_values check for variable '{name}': {}",
                status(passed)
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Variable;

    fn config(name: &str, maximum: usize) -> ChecksConfig {
        ChecksConfig::from_json_str(&format!(
            r#"{{"variables": {{"{name}": {{"max_number_of_consecutive_same_values": {{"maximum": {maximum}}}}}}}}}"#,
        ))
        .unwrap()
    }

    fn alternating(len: usize) -> Vec<f64> {
        (0..len).map(|i| f64::from(u8::try_from(i % 2).unwrap())).collect()
    }

    #[test]
    fn test_no_dataset() {
        let mut report = Report::new();
        run(None, &config("test_pass", 50), &mut report);
        assert_eq!(
            report.error_messages(),
            ["max_number_of_consecutive_same_values error: no nc file loaded"]
        );
        assert!(report.info().is_empty());
        assert!(report.warnings().is_empty());
    }

    #[test]
    fn test_alternating_values_succeed_without_diagnostic() {
        let dataset = Dataset::new()
            .with_variable("test_pass", Variable::vector("time", alternating(100)));
        let mut report = Report::new();
        run(Some(&dataset), &config("test_pass", 50), &mut report);
        assert_eq!(
            report.info_messages(),
            ["max_number_of_consecutive_same_values check for variable 'test_pass': success"]
        );
    }

    #[test]
    fn test_constant_variable_fails_with_diagnostic() {
        let dataset = Dataset::new()
            .with_variable("test_fail", Variable::vector("time", vec![1.0; 100]));
        let mut report = Report::new();
        run(Some(&dataset), &config("test_fail", 50), &mut report);
        assert_eq!(
            report.info_messages(),
            [
                "test_fail has 100 consecutive same values 1.0",
                "max_number_of_consecutive_same_values check for variable 'test_fail': fail",
            ]
        );
        assert!(report.errors().is_empty());
        assert!(report.warnings().is_empty());
    }

    #[test]
    fn test_first_longest_run_is_reported() {
        let mut values = vec![7.5; 4];
        values.extend([1.0, 2.0]);
        values.extend(vec![9.0; 4]);
        let dataset = Dataset::new().with_variable("v", Variable::vector("time", values));
        let mut report = Report::new();
        run(Some(&dataset), &config("v", 3), &mut report);
        assert_eq!(
            report.info_messages(),
            [
                "v has 4 consecutive same values 7.5",
                "max_number_of_consecutive_same_values check for variable 'v': fail",
            ]
        );
    }

    #[test]
    fn test_run_at_exactly_maximum_passes() {
        let dataset =
            Dataset::new().with_variable("v", Variable::vector("time", vec![3.0; 50]));
        let mut report = Report::new();
        run(Some(&dataset), &config("v", 50), &mut report);
        assert_eq!(
            report.info_messages(),
            ["max_number_of_consecutive_same_values check for variable 'v': success"]
        );
    }

    #[test]
    fn test_missing_variable_warns() {
        let dataset = Dataset::new()
            .with_variable("test_pass", Variable::vector("time", alternating(100)));
        let mut report = Report::new();
        run(Some(&dataset), &config("test_not_in_nc", 50), &mut report);
        assert_eq!(
            report.warning_messages(),
            ["variable 'test_not_in_nc' not in nc file"]
        );
        assert!(report.errors().is_empty());
    }
}
