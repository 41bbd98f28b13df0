//! x86_64 SSE2 main loop.
//!
//! SSE2 is available on all x86_64 CPUs. It has no widening 16-bit
//! multiply-accumulate, so each step rebuilds one: `_mm_mullo_epi16` and
//! `_mm_mulhi_epi16` give the low and high halves of the four 32-bit
//! products, `_mm_unpacklo_epi16` interleaves them into 4 x i32 lanes, and
//! `_mm_add_epi32` accumulates.
//!
//! Horizontal reduction is done by manual partial-sum extraction: the
//! combined register is stored to a `[i32; 4]` and its lanes are added.

use std::arch::x86_64::*;

use super::LANES;

pub const BACKEND: &str = "x86_64-sse2";

/// Sum of products over the first `blocks * ACCUMULATORS * LANES` elements.
///
/// # Panics
/// Panics if either slice is shorter than the region covered by `blocks`.
pub(super) fn block_sum<const ACCUMULATORS: usize>(a: &[i16], b: &[i16], blocks: usize) -> i32 {
    let covered = blocks * ACCUMULATORS * LANES;
    assert!(a.len() >= covered && b.len() >= covered);

    // SAFETY: SSE2 is part of the x86_64 baseline and both slices hold at
    // least `covered` elements, which is every address the loop reads.
    unsafe { block_sum_sse2::<ACCUMULATORS>(a.as_ptr(), b.as_ptr(), blocks) }
}

#[target_feature(enable = "sse2")]
unsafe fn block_sum_sse2<const ACCUMULATORS: usize>(
    a: *const i16,
    b: *const i16,
    blocks: usize,
) -> i32 {
    let mut sums: [__m128i; ACCUMULATORS] = [_mm_setzero_si128(); ACCUMULATORS];

    for block in 0..blocks {
        let base = block * ACCUMULATORS * LANES;
        for (k, sum) in sums.iter_mut().enumerate() {
            let offset = base + k * LANES;
            // 64-bit unaligned load: exactly LANES i16 values, upper half zeroed
            let va = _mm_loadl_epi64(a.add(offset) as *const __m128i);
            let vb = _mm_loadl_epi64(b.add(offset) as *const __m128i);

            let lo = _mm_mullo_epi16(va, vb);
            let hi = _mm_mulhi_epi16(va, vb);
            let products = _mm_unpacklo_epi16(lo, hi);

            *sum = _mm_add_epi32(*sum, products);
        }
    }

    let mut combined = sums[0];
    for sum in &sums[1..] {
        combined = _mm_add_epi32(combined, *sum);
    }

    let mut partial_sums = [0i32; LANES];
    _mm_storeu_si128(partial_sums.as_mut_ptr() as *mut __m128i, combined);

    partial_sums
        .iter()
        .fold(0i32, |total, &lane| total.wrapping_add(lane))
}
