//! Utility modules for benchmarking and execution.

pub mod cpu_affinity;
pub mod ramp;
pub mod runner;
pub mod timer;

// Re-export commonly used items
pub use cpu_affinity::CpuPinGuard;
pub use ramp::{generate_ramp, ramp_fits};
pub use runner::{run_benchmark, run_benchmark_with};
pub use timer::{time_batch, Stopwatch};
