//! Portable main loop for targets without a dedicated SIMD backend.
//!
//! Emulates the 4 x i32 accumulator registers with plain arrays so the
//! accumulator structure (and the resulting instruction-level parallelism)
//! stays the same as on the SIMD backends. Horizontal reduction is manual
//! partial-sum extraction over the lane array.

use super::LANES;

#[cfg_attr(any(target_arch = "aarch64", target_arch = "x86_64"), allow(dead_code))]
pub const BACKEND: &str = "portable";

/// Sum of products over the first `blocks * ACCUMULATORS * LANES` elements.
///
/// # Panics
/// Panics if either slice is shorter than the region covered by `blocks`.
pub(super) fn block_sum<const ACCUMULATORS: usize>(a: &[i16], b: &[i16], blocks: usize) -> i32 {
    let mut sums = [[0i32; LANES]; ACCUMULATORS];

    for block in 0..blocks {
        let base = block * ACCUMULATORS * LANES;
        for (k, sum) in sums.iter_mut().enumerate() {
            let offset = base + k * LANES;
            let va = &a[offset..offset + LANES];
            let vb = &b[offset..offset + LANES];
            for lane in 0..LANES {
                let product = i32::from(va[lane]) * i32::from(vb[lane]);
                sum[lane] = sum[lane].wrapping_add(product);
            }
        }
    }

    let mut combined = sums[0];
    for sum in &sums[1..] {
        for lane in 0..LANES {
            combined[lane] = combined[lane].wrapping_add(sum[lane]);
        }
    }

    combined
        .iter()
        .fold(0i32, |total, &lane| total.wrapping_add(lane))
}
