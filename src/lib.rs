//! # SIMD Dot Bench
//!
//! Compares a scalar i16 dot product against SIMD kernels with 1, 2 and 4
//! accumulators, timing each over many back-to-back trials.

pub mod config;
pub mod error;
pub mod math;
pub mod report;
pub mod tui;
pub mod utils;

pub use error::{BenchError, Result};
pub use report::{BenchmarkResult, Report};

/// Re-export run_benchmark from utils::runner
pub use utils::runner::{run_benchmark, run_benchmark_with};

/// Re-export commonly used items
pub mod prelude {
    pub use crate::config::BenchConfig;
    pub use crate::math::dot_product::{self, available_variants, KernelVariant};
    pub use crate::report::{BenchmarkResult, Report};
    pub use crate::utils::runner::{run_benchmark, run_benchmark_with};
}
