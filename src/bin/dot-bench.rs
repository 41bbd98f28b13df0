//! Command-line front end for the dot product benchmark.
//!
//! Usage:
//!   dot-bench                    # Reference run (1024 elements, 1M trials)
//!   dot-bench --length 1027 -t   # Custom length, table output
//!   dot-bench --list             # List kernels
//!   dot-bench --help             # Show help

use simd_dot_bench::config::Command;
use simd_dot_bench::math::dot_product::verify_all;
use simd_dot_bench::{run_benchmark_with, tui, Result};
use std::env;
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<()> {
    match Command::parse(env::args().skip(1))? {
        Command::Help => tui::print_help(),
        Command::List => tui::print_variants(),
        Command::Run { config, table } => {
            verify_all()?;

            if table {
                tui::print_header();
                tui::print_config_box(&config);
            }

            let report = run_benchmark_with(&config)?;

            if table {
                tui::print_results_table(&report);
                println!("Note: Speedup is relative to the first kernel (usually 'scalar').");
            } else {
                println!("{}", report);
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Run with --help for usage.");
            ExitCode::FAILURE
        }
    }
}
