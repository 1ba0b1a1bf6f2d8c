//! ncqc - Quality Control for Gridded Scientific Datasets
//!
//! Validates netCDF-style datasets (dimensions, variables with fill values
//! and attributes, global attributes) against a user-supplied set of
//! quality-control rules, producing an ordered pass/fail/warning report.
//!
//! # Design Principles
//!
//! 1. **Checks never abort the run** - a missing variable is a warning, a
//!    failed bound is a reported result, only dataset loading returns `Err`
//! 2. **Pure Rust** - datasets are plain in-memory arrays, no FFI
//! 3. **Order is a contract** - report entries appear in configuration
//!    declaration order and are never deduplicated or reordered
//!
//! # Quick Start
//!
//! ```
//! use ncqc::{ChecksConfig, Dataset, QualityControl, Variable};
//!
//! let dataset = Dataset::new()
//!     .with_dimension("time", 3)
//!     .with_variable("temperature", Variable::vector("time", vec![21.0, 21.5, 22.0]));
//!
//! let config: ChecksConfig = serde_json::from_str(
//!     r#"{"variables": {"temperature": {"boundary_check": {"min": -40.0, "max": 60.0}}}}"#,
//! ).unwrap();
//!
//! let mut qc = QualityControl::new();
//! qc.set_dataset(dataset);
//! qc.attach_checks(config);
//! qc.boundary_check();
//!
//! assert_eq!(
//!     qc.report().info_messages(),
//!     ["boundary check for variable 'temperature': success"],
//! );
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
// Allow common test patterns
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::cast_precision_loss,
        clippy::unreadable_literal
    )
)]
// Allow some pedantic lints for cleaner code
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::map_unwrap_or)]

pub mod checks;
/// CLI module for command-line interface
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod qc;
pub mod report;

// Re-exports for convenience
pub use config::{
    BoundaryParams, ChangeRateParams, CheckSet, ChecksConfig, DataPointsParams, DifferenceParams,
    EmptinessParams, ExistenceParams, MaxConsecutiveParams,
};
pub use dataset::{AttrValue, Dataset, Variable};
pub use error::{Error, Result};
pub use qc::QualityControl;
pub use report::{CheckKind, Report, ReportEntry, Severity};
