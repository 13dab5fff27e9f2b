//! Haptic/notification side effects
//!
//! The simulation requests exactly two effects: a short pulse on every
//! successful snap and an error buzz on the loss transition. Winning is
//! deliberately silent.

/// Fire-and-forget effect sink, shared between the session and input threads
pub trait Haptics: Send + Sync {
    /// Short pulse on a successful re-anchor
    fn snap(&self);
    /// Error buzz on the loss transition
    fn error(&self);
}

/// Discards every effect. Useful for tests and headless runs.
#[derive(Debug, Default)]
pub struct NullHaptics;

impl Haptics for NullHaptics {
    fn snap(&self) {}
    fn error(&self) {}
}

/// Logs effects at debug level instead of vibrating anything
#[derive(Debug, Default)]
pub struct LogHaptics;

impl Haptics for LogHaptics {
    fn snap(&self) {
        log::debug!("haptic: snap pulse");
    }

    fn error(&self) {
        log::debug!("haptic: error buzz");
    }
}

#[cfg(test)]
pub mod test_support {
    use super::Haptics;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts effect invocations for assertions
    #[derive(Debug, Default)]
    pub struct CountingHaptics {
        pub snaps: AtomicUsize,
        pub errors: AtomicUsize,
    }

    impl Haptics for CountingHaptics {
        fn snap(&self) {
            self.snaps.fetch_add(1, Ordering::SeqCst);
        }

        fn error(&self) {
            self.errors.fetch_add(1, Ordering::SeqCst);
        }
    }
}
