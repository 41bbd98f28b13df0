//! Scalar (reference) implementation of the dot product.
//!
//! Serves as the baseline for correctness and performance comparison, and
//! provides the multiply-accumulate loop the SIMD kernels use for their tail.

/// Compute the dot product of two vectors, one element per iteration.
///
/// Accumulation wraps on 32-bit overflow, matching the SIMD kernels lane for lane.
///
/// # Panics
/// Panics if the vectors have different lengths.
///
/// # Example
/// ```
/// use simd_dot_bench::math::dot_product::dot_product_scalar;
///
/// let a = [1, 2, 3];
/// let b = [4, 5, 6];
/// assert_eq!(dot_product_scalar(&a, &b), 32);
/// ```
pub fn dot_product_scalar(a: &[i16], b: &[i16]) -> i32 {
    assert_eq!(a.len(), b.len(), "Vectors must have the same length");

    multiply_accumulate(0, a, b)
}

/// Add `Σ a[i] * b[i]` to `acc`, visiting elements in index order.
#[inline(always)]
pub(super) fn multiply_accumulate(acc: i32, a: &[i16], b: &[i16]) -> i32 {
    a.iter()
        .zip(b)
        .fold(acc, |sum, (&x, &y)| {
            sum.wrapping_add(i32::from(x) * i32::from(y))
        })
}
