//! Batch coordination
//!
//! Splits `length` items into contiguous, inclusive index ranges of at most
//! `batch_size` items. The ranges are emitted in ascending order and cover
//! `[0, length - 1]` exactly once.

use std::fmt;
use std::ops::RangeInclusive;

/// An inclusive index range `[start, end]` into the candidate sequence
///
/// `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Batch {
    start: usize,
    end: usize,
}

impl Batch {
    /// Batch covering `[start, end]`
    ///
    /// # Panics
    /// Panics if `start > end`.
    pub fn new(start: usize, end: usize) -> Self {
        assert!(start <= end, "batch start {start} is past its end {end}");
        Self { start, end }
    }

    /// First index, inclusive
    pub fn start(&self) -> usize {
        self.start
    }

    /// Last index, inclusive
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of items in the batch
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// A batch always holds at least one item
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Index range for slicing
    pub fn range(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}

impl fmt::Display for Batch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Yields the batches for one run.
///
/// Prefer iterating; `next_batch` on an exhausted coordinator returns a
/// degenerate `[0, 0]` batch instead of failing.
#[derive(Debug, Clone)]
pub struct BatchCoordinator {
    length: usize,
    batch_size: usize,
    start: usize,
    end: usize,
}

impl BatchCoordinator {
    /// Create a coordinator over `length` items
    pub fn new(length: usize, batch_size: usize) -> Self {
        let end = if length == 0 || batch_size == 0 {
            0
        } else {
            (batch_size - 1).min(length - 1)
        };

        Self {
            length,
            batch_size,
            start: 0,
            end,
        }
    }

    /// Whether an unconsumed batch remains
    pub fn has_next(&self) -> bool {
        self.batch_size > 0 && self.start < self.length
    }

    /// Return the next batch and advance.
    ///
    /// Must only be called while `has_next()` is true.
    pub fn next_batch(&mut self) -> Batch {
        if !self.has_next() {
            return Batch { start: 0, end: 0 };
        }

        let batch = Batch {
            start: self.start,
            end: self.end,
        };
        self.start = self.end + 1;
        self.end = self
            .end
            .saturating_add(self.batch_size)
            .min(self.length - 1);
        batch
    }

    /// Number of batches still to be emitted
    pub fn remaining(&self) -> usize {
        if !self.has_next() {
            return 0;
        }
        (self.length - self.start).div_ceil(self.batch_size)
    }
}

impl Iterator for BatchCoordinator {
    type Item = Batch;

    fn next(&mut self) -> Option<Batch> {
        if self.has_next() {
            Some(self.next_batch())
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BatchCoordinator {}
