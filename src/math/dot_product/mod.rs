//! # Dot Product Algorithm
//!
//! The dot product of two i16 vectors, accumulated in 32 bits:
//!
//! `dot(a, b) = Σ(a[i] * b[i])`
//!
//! ## Variants
//!
//! - **scalar**: one multiply-accumulate per element (reference)
//! - **simd-x1**: 4 lanes, one accumulator register
//! - **simd-x2**: 8 elements per iteration over two independent accumulators
//! - **simd-x4**: 16 elements per iteration over four independent accumulators
//!
//! More accumulators expose more instruction-level parallelism, at the cost
//! of a larger tail that has to be summed by scalar code. The benchmark
//! exists to measure that trade-off.

pub mod bench;
pub mod code;
pub mod test;

pub use code::*;
pub use test::{verify_all, verify_inputs};
