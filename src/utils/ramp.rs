//! Deterministic input vectors.

/// Generate `len` consecutive values starting at `start`: `ramp[i] = start + i`.
///
/// Elements are computed with 16-bit wrapping arithmetic; use [`ramp_fits`]
/// to check a ramp stays in range before relying on its values.
///
/// # Example
/// ```
/// use simd_dot_bench::utils::ramp::generate_ramp;
///
/// assert_eq!(generate_ramp(100, 4), vec![100, 101, 102, 103]);
/// ```
pub fn generate_ramp(start: i16, len: usize) -> Vec<i16> {
    (0..len).map(|i| start.wrapping_add(i as i16)).collect()
}

/// Whether every element of `generate_ramp(start, len)` fits in i16 without wrapping.
pub fn ramp_fits(start: i16, len: usize) -> bool {
    let Some(last_offset) = len.checked_sub(1) else {
        return true;
    };
    let headroom = (i32::from(i16::MAX) - i32::from(start)) as usize;
    last_offset <= headroom
}
