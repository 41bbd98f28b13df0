//! Timed batches for dot product kernels.

use super::code::KernelVariant;
use crate::report::BenchmarkResult;
use crate::utils::timer::{time_batch, Stopwatch};
use std::hint::black_box;
use tracing::{debug, info, info_span};

/// Run one kernel `trials` times inside a single timing window.
///
/// `warmup_trials` untimed calls happen first. The stopwatch is reset right
/// before the batch, so no other kernel's work overlaps this window.
pub fn time_kernel(
    kernel: &KernelVariant,
    a: &[i16],
    b: &[i16],
    trials: usize,
    warmup_trials: usize,
    stopwatch: &mut Stopwatch,
) -> BenchmarkResult {
    let _span = info_span!("kernel", kernel = kernel.name).entered();
    let func = kernel.function;

    for _ in 0..warmup_trials {
        black_box(func(black_box(a), black_box(b)));
    }

    debug!(trials, warmup_trials, len = a.len(), "starting batch");
    let (last_result, elapsed_ms) =
        time_batch(stopwatch, trials, || func(black_box(a), black_box(b)));
    info!(last_result, elapsed_ms, "batch complete");

    BenchmarkResult {
        label: kernel.name,
        description: kernel.description,
        last_result,
        elapsed_ms,
    }
}
