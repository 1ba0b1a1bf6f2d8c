//! ncqc CLI - quality control for gridded scientific datasets.
//!
//! Command-line interface over the [`QualityControl`] façade.

use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};

use crate::{dataset::Dataset, error::Result, qc::QualityControl, report::Report};

/// ncqc - rule-driven quality control for gridded scientific datasets
#[derive(Parser)]
#[command(name = "ncqc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all configured checks and print the report
    Report {
        /// Path to the dataset file
        data: PathBuf,
        /// Path to the checks configuration file
        #[arg(short, long)]
        checks: PathBuf,
        /// Emit the report as JSON with structured fields
        #[arg(long)]
        json: bool,
    },
    /// Display dataset dimensions, variables, and global attributes
    Info {
        /// Path to the dataset file
        data: PathBuf,
    },
}

/// Parses arguments and runs the selected command.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    match execute(cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn execute(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Report { data, checks, json } => {
            let mut qc = QualityControl::new();
            qc.attach_checks_from_path(&checks)?;
            qc.load_dataset(&data)?;
            qc.run_all_checks();
            let report = qc.into_report();
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
            Ok(if report.has_errors() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
        Commands::Info { data } => {
            let dataset = Dataset::from_path(&data)?;
            print_info(&dataset);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn print_report(report: &Report) {
    println!("Errors ({}):", report.errors().len());
    for entry in report.errors() {
        println!("  {}", entry.message);
    }
    println!("Warnings ({}):", report.warnings().len());
    for entry in report.warnings() {
        println!("  {}", entry.message);
    }
    println!("Info ({}):", report.info().len());
    for entry in report.info() {
        println!("  {}", entry.message);
    }
}

fn print_info(dataset: &Dataset) {
    println!("Dimensions ({}):", dataset.dimensions.len());
    for (name, size) in &dataset.dimensions {
        println!("  {name} = {size}");
    }
    println!("Variables ({}):", dataset.variables.len());
    for (name, variable) in &dataset.variables {
        let dims = variable.dimensions.join(", ");
        match variable.fill_value {
            Some(fill) => println!(
                "  {name}({dims}) shape {:?}, fill value {fill}",
                variable.shape()
            ),
            None => println!("  {name}({dims}) shape {:?}", variable.shape()),
        }
    }
    println!("Global attributes ({}):", dataset.global_attributes.len());
    for (name, value) in &dataset.global_attributes {
        println!("  {name} = {value}");
    }
}
