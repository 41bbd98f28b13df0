//! Thread pinning for stable timings.
//!
//! Pinning keeps the benchmarking thread on one core for the whole run so a
//! migration cannot land in the middle of a timed batch. Implemented with
//! `libc::sched_setaffinity` on Linux; other platforms get a no-op guard.

#[cfg(target_os = "linux")]
mod platform {
    /// Affinity mask of the calling thread.
    pub fn current_affinity() -> Option<libc::cpu_set_t> {
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            if libc::sched_getaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &mut set) == 0 {
                Some(set)
            } else {
                None
            }
        }
    }

    pub fn current_cpu() -> Option<usize> {
        let cpu = unsafe { libc::sched_getcpu() };
        usize::try_from(cpu).ok()
    }

    pub fn pin_to(core_id: usize) -> bool {
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core_id, &mut set);
            libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0
        }
    }

    pub fn restore(set: &libc::cpu_set_t) -> bool {
        unsafe { libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), set) == 0 }
    }

    pub type SavedAffinity = libc::cpu_set_t;
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub type SavedAffinity = ();

    pub fn current_affinity() -> Option<SavedAffinity> {
        None
    }
    pub fn current_cpu() -> Option<usize> {
        None
    }
    pub fn pin_to(_core_id: usize) -> bool {
        false
    }
    pub fn restore(_set: &SavedAffinity) -> bool {
        true
    }
}

/// RAII guard for CPU pinning: pins on creation, restores the previous
/// affinity mask on drop (including during unwinding).
///
/// # Example
/// ```
/// use simd_dot_bench::utils::CpuPinGuard;
///
/// {
///     let _pin = CpuPinGuard::new();
///     // ... timed work ...
/// } // original affinity restored here
/// ```
pub struct CpuPinGuard {
    pinned_core: Option<usize>,
    saved: Option<platform::SavedAffinity>,
}

impl CpuPinGuard {
    /// Pin the current thread to the core it is running on.
    pub fn new() -> Self {
        let saved = platform::current_affinity();
        let pinned_core = match (&saved, platform::current_cpu()) {
            (Some(_), Some(core)) if platform::pin_to(core) => Some(core),
            _ => None,
        };

        if pinned_core.is_none() {
            tracing::debug!("cpu pinning unavailable, timings may include migrations");
        }

        Self { pinned_core, saved }
    }

    /// Core the thread is pinned to, if pinning succeeded.
    pub fn core_id(&self) -> Option<usize> {
        self.pinned_core
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned_core.is_some()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if self.pinned_core.is_none() {
            return;
        }
        if let Some(saved) = &self.saved {
            if !platform::restore(saved) {
                tracing::warn!("failed to restore cpu affinity");
            }
        }
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}
