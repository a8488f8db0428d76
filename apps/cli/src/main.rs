// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! surfvol - batch surface reconstruction and volume integration.
//!
//! Usage:
//!   surfvol <INPUT_DIR> [--output DIR] [--log-dir DIR] [--json]
//!
//! Exit status is 0 once the batch has run, whatever happened to individual
//! files; 2 for usage errors and 1 when the run cannot start.

use std::process::ExitCode;

use anyhow::Context;
use surfvol_processing::{BatchConfig, BatchReport, BatchRunner};
use tracing_subscriber::EnvFilter;

mod args;

use args::{parse_args, Command, RunArgs, USAGE};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    // LOG_FORMAT=json for machine-readable logs
    if std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json")) {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run(args: RunArgs) -> anyhow::Result<BatchReport> {
    let mut config = BatchConfig::from_env(&args.input_dir);
    if let Some(dir) = args.output_dir {
        config = config.with_output_dir(dir);
    }
    if let Some(dir) = args.log_dir {
        config = config.with_log_dir(dir);
    }

    let report = BatchRunner::new(config)
        .run()
        .with_context(|| format!("cannot process {}", args.input_dir.display()))?;

    if args.json {
        println!("{}", report.to_json().context("cannot serialize report")?);
    } else {
        print_summary(&report);
    }

    Ok(report)
}

fn print_summary(report: &BatchReport) {
    println!("=== Batch complete ===");
    println!("  Processed: {}", report.processed());
    println!("  Failed:    {}", report.failed());
    for failure in &report.failures {
        println!("    {}: {}", failure.file_name, failure.error);
    }
    for name in &report.replaced_meshes {
        println!("    {}: mesh overwritten by a later file", name);
    }
    println!("  Log:       {}", report.log_path.display());
    println!("  Time:      {} ms", report.elapsed_ms);
}

fn main() -> ExitCode {
    let command = match parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!();
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };

    let args = match command {
        Command::Help => {
            println!("{}", USAGE);
            return ExitCode::SUCCESS;
        }
        Command::Run(args) => args,
    };

    init_logging();

    match run(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %format!("{:#}", e), "Batch could not run");
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
