//! Unrolled SIMD dot product with a scalar tail.
//!
//! The main loop consumes `LANES * ACCUMULATORS` elements per iteration, each
//! group of `LANES` feeding its own widening multiply-accumulate register so
//! that consecutive steps carry no data dependency. Registers are combined
//! with vector additions and reduced horizontally by the backend. Whatever
//! is left after the last full block is folded in one element at a time.

use super::scalar::multiply_accumulate;

#[cfg(target_arch = "aarch64")]
use super::aarch64_neon as backend;
#[cfg(not(any(target_arch = "aarch64", target_arch = "x86_64")))]
use super::portable as backend;
#[cfg(target_arch = "x86_64")]
use super::x86_64_sse2 as backend;

/// Number of i16 elements multiplied per SIMD step (one 4 x i32 accumulator).
pub const LANES: usize = 4;

/// Compute the dot product with `ACCUMULATORS` independent SIMD registers.
///
/// # Panics
/// Panics if the vectors have different lengths, or if `ACCUMULATORS` is zero.
pub fn dot_product_unrolled<const ACCUMULATORS: usize>(a: &[i16], b: &[i16]) -> i32 {
    assert_eq!(a.len(), b.len(), "Vectors must have the same length");
    assert!(ACCUMULATORS > 0, "At least one accumulator is required");

    let block = LANES * ACCUMULATORS;
    let blocks = a.len() / block;
    let tail_start = blocks * block;

    let partial = backend::block_sum::<ACCUMULATORS>(a, b, blocks);

    // Tail: the last len % block elements
    multiply_accumulate(partial, &a[tail_start..], &b[tail_start..])
}

/// One 4-lane accumulator, 4 elements per iteration.
pub fn dot_product_simd_x1(a: &[i16], b: &[i16]) -> i32 {
    dot_product_unrolled::<1>(a, b)
}

/// Two 4-lane accumulators, 8 elements per iteration.
pub fn dot_product_simd_x2(a: &[i16], b: &[i16]) -> i32 {
    dot_product_unrolled::<2>(a, b)
}

/// Four 4-lane accumulators, 16 elements per iteration.
pub fn dot_product_simd_x4(a: &[i16], b: &[i16]) -> i32 {
    dot_product_unrolled::<4>(a, b)
}
