//! Pinning the measuring thread to one core.
//!
//! Only Linux gets real affinity control (through `libc`). Elsewhere the
//! guard is a no-op that reports itself as unpinned.

#[cfg(target_os = "linux")]
mod platform {
    /// Saved affinity mask of the calling thread
    pub type Saved = libc::cpu_set_t;

    pub fn current_cpu() -> Option<usize> {
        // SAFETY: sched_getcpu takes no arguments and only reads scheduler state.
        let cpu = unsafe { libc::sched_getcpu() };
        usize::try_from(cpu).ok()
    }

    pub fn save() -> Option<Saved> {
        // SAFETY: `set` is a properly sized, zero-initialized cpu_set_t.
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            (libc::sched_getaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &mut set) == 0)
                .then_some(set)
        }
    }

    pub fn pin(core_id: usize) -> bool {
        // CPU_SET indexes a fixed-size mask and panics past CPU_SETSIZE.
        if core_id >= libc::CPU_SETSIZE as usize {
            return false;
        }
        // SAFETY: CPU_ZERO/CPU_SET only write into the local set.
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core_id, &mut set);
            libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0
        }
    }

    pub fn restore(saved: &Saved) -> bool {
        // SAFETY: `saved` came from sched_getaffinity on this thread.
        unsafe { libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), saved) == 0 }
    }
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub type Saved = ();

    pub fn current_cpu() -> Option<usize> {
        None
    }
    pub fn save() -> Option<Saved> {
        None
    }
    pub fn pin(_core_id: usize) -> bool {
        false
    }
    pub fn restore(_saved: &Saved) -> bool {
        true
    }
}

/// RAII guard: pins the thread to the core it is running on, restores the
/// original affinity on drop.
///
/// ```ignore
/// {
///     let _pin = CpuPinGuard::pin_current();
///     // ... measurements ...
/// } // original affinity restored here
/// ```
pub struct CpuPinGuard {
    pinned_core: Option<usize>,
    saved: Option<platform::Saved>,
}

impl CpuPinGuard {
    /// Pin to the current core. Failure leaves the thread unpinned.
    pub fn pin_current() -> Self {
        let Some(saved) = platform::save() else {
            return Self::unpinned();
        };
        match platform::current_cpu() {
            Some(core) if platform::pin(core) => Self {
                pinned_core: Some(core),
                saved: Some(saved),
            },
            _ => Self::unpinned(),
        }
    }

    /// A guard that holds no pin.
    pub fn unpinned() -> Self {
        Self {
            pinned_core: None,
            saved: None,
        }
    }

    pub fn core_id(&self) -> Option<usize> {
        self.pinned_core
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned_core.is_some()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            if !platform::restore(&saved) {
                tracing::warn!("failed to restore original CPU affinity");
            }
        }
    }
}
