//! Benchmark driver: build inputs once, time every kernel over them.

use crate::config::BenchConfig;
use crate::error::Result;
use crate::math::dot_product::bench::time_kernel;
use crate::report::Report;
use crate::utils::cpu_affinity::CpuPinGuard;
use crate::utils::ramp::generate_ramp;
use crate::utils::timer::Stopwatch;
use tracing::{info_span, warn};

/// Run every kernel on ramps of `vector_length` elements, `trials` times each.
///
/// Uses the default ramps (starting at 0 and 100) and CPU pinning.
pub fn run_benchmark(vector_length: usize, trials: usize) -> Result<Report> {
    run_benchmark_with(&BenchConfig::new(vector_length, trials))
}

/// Run the kernels selected by `config`.
///
/// Both input vectors are generated once and shared by every kernel; they
/// are dropped when this function returns, on success or unwind.
pub fn run_benchmark_with(config: &BenchConfig) -> Result<Report> {
    config.validate()?;
    let kernels = config.selected_variants()?;

    let _span = info_span!(
        "benchmark",
        length = config.vector_length,
        trials = config.trials
    )
    .entered();

    let a = generate_ramp(config.a_start, config.vector_length);
    let b = generate_ramp(config.b_start, config.vector_length);

    let _pin = config.pin_cpu.then(CpuPinGuard::new);

    let mut stopwatch = Stopwatch::start();
    let results = kernels
        .iter()
        .map(|kernel| {
            time_kernel(
                kernel,
                &a,
                &b,
                config.trials,
                config.warmup_trials,
                &mut stopwatch,
            )
        })
        .collect();

    let report = Report::new(config.vector_length, config.trials, results);
    if let Some(baseline) = report.baseline() {
        for result in report.mismatches() {
            warn!(
                kernel = result.label,
                expected = baseline.last_result,
                actual = result.last_result,
                "kernel disagrees with baseline"
            );
        }
    }

    Ok(report)
}
