//! Slide index with wraparound normalization.

use std::num::NonZeroUsize;

/// Current slide position within a fixed, non-empty slide count.
///
/// The position can only change through [`SlideIndex::set`], which always
/// normalizes, so `current < count` holds at every observable point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideIndex {
    current: usize,
    count: NonZeroUsize,
}

impl SlideIndex {
    /// Start at the first slide.
    pub fn new(count: NonZeroUsize) -> Self {
        Self { current: 0, count }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn count(&self) -> usize {
        self.count.get()
    }

    /// Map any integer onto `[0, count)` using the Euclidean remainder,
    /// so `-1` wraps to the last slide rather than staying negative.
    pub fn normalize(&self, target: isize) -> usize {
        let count = self.count.get() as isize;
        target.rem_euclid(count) as usize
    }

    /// Normalize `target`, store it, and return the stored value.
    pub fn set(&mut self, target: isize) -> usize {
        self.current = self.normalize(target);
        self.current
    }

    /// Signed position offset from the current slide, ready for `set`.
    pub fn offset(&self, delta: isize) -> isize {
        self.current as isize + delta
    }
}
