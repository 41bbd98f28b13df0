//! Dot product kernels.
//!
//! One scalar baseline plus a single unrolled SIMD kernel instantiated with
//! 1, 2 and 4 independent accumulators. The SIMD main loop is provided by a
//! per-architecture backend; the scalar tail is shared.

mod scalar;
mod unrolled;

#[cfg(target_arch = "aarch64")]
mod aarch64_neon;
#[cfg(any(test, not(any(target_arch = "aarch64", target_arch = "x86_64"))))]
mod portable;
#[cfg(target_arch = "x86_64")]
mod x86_64_sse2;

pub use scalar::dot_product_scalar;
pub use unrolled::{
    dot_product_simd_x1, dot_product_simd_x2, dot_product_simd_x4, dot_product_unrolled, LANES,
};

#[cfg(target_arch = "aarch64")]
pub use aarch64_neon::BACKEND as SIMD_BACKEND;
#[cfg(not(any(target_arch = "aarch64", target_arch = "x86_64")))]
pub use portable::BACKEND as SIMD_BACKEND;
#[cfg(target_arch = "x86_64")]
pub use x86_64_sse2::BACKEND as SIMD_BACKEND;

/// Type alias for dot product function signature
pub type DotProductFn = fn(&[i16], &[i16]) -> i32;

/// How a kernel walks its input: `lanes` elements per SIMD step, spread over
/// `accumulators` independent registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KernelShape {
    pub lanes: usize,
    pub accumulators: usize,
}

impl KernelShape {
    /// One element per step, one accumulator.
    pub const SCALAR: Self = Self {
        lanes: 1,
        accumulators: 1,
    };

    pub const fn simd(accumulators: usize) -> Self {
        Self {
            lanes: LANES,
            accumulators,
        }
    }

    /// Elements consumed by one main-loop iteration.
    pub const fn block_width(self) -> usize {
        self.lanes * self.accumulators
    }

    /// Number of leading elements handled by the main loop.
    pub const fn main_loop_len(self, len: usize) -> usize {
        len / self.block_width() * self.block_width()
    }

    /// Number of trailing elements left for the scalar tail.
    pub const fn tail_len(self, len: usize) -> usize {
        len % self.block_width()
    }
}

/// A dot product kernel and its metadata.
#[derive(Clone, Copy, Debug)]
pub struct KernelVariant {
    /// Unique identifier (e.g. "scalar", "simd-x2")
    pub name: &'static str,
    /// Human-readable description, also used as the report banner
    pub description: &'static str,
    pub shape: KernelShape,
    pub function: DotProductFn,
}

/// All kernels, in evaluation order: scalar first, then ascending unroll factor.
pub fn available_variants() -> Vec<KernelVariant> {
    vec![
        KernelVariant {
            name: "scalar",
            description: "No SIMD",
            shape: KernelShape::SCALAR,
            function: dot_product_scalar,
        },
        KernelVariant {
            name: "simd-x1",
            description: "SIMD, no unrolling",
            shape: KernelShape::simd(1),
            function: dot_product_simd_x1,
        },
        KernelVariant {
            name: "simd-x2",
            description: "SIMD 2x unrolling",
            shape: KernelShape::simd(2),
            function: dot_product_simd_x2,
        },
        KernelVariant {
            name: "simd-x4",
            description: "SIMD 4x unrolling",
            shape: KernelShape::simd(4),
            function: dot_product_simd_x4,
        },
    ]
}

/// Find a kernel by name.
pub fn find_variant(name: &str) -> Option<KernelVariant> {
    available_variants().into_iter().find(|v| v.name == name)
}
