//! Pointer input latch
//!
//! The input thread and the render thread share exactly one word: the most
//! recent pointer x, stored as `f32` bits. Samples overwrite each other; the
//! loop takes whatever is newest at the start of a frame. Relaxed ordering is
//! enough since nothing else is published through it.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

/// Bit pattern meaning "no sample since the last take" (a quiet NaN)
const EMPTY: u32 = 0x7fc0_0001;

/// Latest-value slot for pointer x samples. Clones share the slot.
#[derive(Debug, Clone)]
pub struct PointerLatch {
    slot: Arc<AtomicU32>,
}

impl Default for PointerLatch {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerLatch {
    pub fn new() -> Self {
        Self {
            slot: Arc::new(AtomicU32::new(EMPTY)),
        }
    }

    /// Record a pointer move. NaN samples are dropped.
    pub fn store(&self, x: f32) {
        if x.is_nan() {
            return;
        }
        self.slot.store(x.to_bits(), Ordering::Relaxed);
    }

    /// Take the newest sample, leaving the slot empty
    pub fn take(&self) -> Option<f32> {
        let bits = self.slot.swap(EMPTY, Ordering::Relaxed);
        (bits != EMPTY).then(|| f32::from_bits(bits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_empty_by_default() {
        let latch = PointerLatch::new();
        assert_eq!(latch.take(), None);
    }

    #[test]
    fn test_latest_sample_wins() {
        let latch = PointerLatch::new();
        latch.store(10.0);
        latch.store(20.0);
        latch.store(-5.5);
        assert_eq!(latch.take(), Some(-5.5));
        assert_eq!(latch.take(), None);
    }

    #[test]
    fn test_nan_ignored() {
        let latch = PointerLatch::new();
        latch.store(3.0);
        latch.store(f32::NAN);
        assert_eq!(latch.take(), Some(3.0));
    }

    #[test]
    fn test_clones_share_slot() {
        let latch = PointerLatch::new();
        let writer = latch.clone();
        thread::spawn(move || writer.store(640.0))
            .join()
            .unwrap();
        assert_eq!(latch.take(), Some(640.0));
    }
}
