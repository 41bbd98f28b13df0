//! aarch64 NEON main loop.
//!
//! NEON is part of the aarch64 baseline, so no runtime detection is needed.
//! Each step loads 4 x i16 from both inputs and widens the products into a
//! 4 x i32 accumulator with `vmlal_s16`. Accumulators are combined with
//! `vaddq_s32` and reduced with the dedicated horizontal add `vaddvq_s32`.

use std::arch::aarch64::*;

use super::LANES;

pub const BACKEND: &str = "aarch64-neon";

/// Sum of products over the first `blocks * ACCUMULATORS * LANES` elements.
///
/// # Panics
/// Panics if either slice is shorter than the region covered by `blocks`.
pub(super) fn block_sum<const ACCUMULATORS: usize>(a: &[i16], b: &[i16], blocks: usize) -> i32 {
    let covered = blocks * ACCUMULATORS * LANES;
    assert!(a.len() >= covered && b.len() >= covered);

    // SAFETY: NEON is always present on aarch64 and both slices hold at least
    // `covered` elements, which is every address the loop reads.
    unsafe { block_sum_neon::<ACCUMULATORS>(a.as_ptr(), b.as_ptr(), blocks) }
}

#[target_feature(enable = "neon")]
unsafe fn block_sum_neon<const ACCUMULATORS: usize>(
    a: *const i16,
    b: *const i16,
    blocks: usize,
) -> i32 {
    let mut sums: [int32x4_t; ACCUMULATORS] = [vdupq_n_s32(0); ACCUMULATORS];

    for block in 0..blocks {
        let base = block * ACCUMULATORS * LANES;
        for (k, sum) in sums.iter_mut().enumerate() {
            let offset = base + k * LANES;
            let va = vld1_s16(a.add(offset));
            let vb = vld1_s16(b.add(offset));
            *sum = vmlal_s16(*sum, va, vb);
        }
    }

    let mut combined = sums[0];
    for sum in &sums[1..] {
        combined = vaddq_s32(combined, *sum);
    }

    vaddvq_s32(combined)
}
