//! ncqc CLI - quality control for gridded scientific datasets.

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![allow(clippy::uninlined_format_args)]

use std::process::ExitCode;

fn main() -> ExitCode {
    ncqc::cli::run()
}
