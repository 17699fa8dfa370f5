//! Fixed-capacity sample history for a single channel.

use std::collections::VecDeque;

/// Bounded FIFO of voltage samples, oldest first.
///
/// Capacity is fixed at construction. Pushing beyond capacity evicts the
/// single oldest sample, so the buffer always holds the most recent
/// `capacity` values in acquisition order.
pub struct SampleBuffer {
    samples: VecDeque<f64>,
    capacity: usize,
}

impl SampleBuffer {
    /// Create an empty buffer holding at most `capacity` samples.
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample, evicting the oldest one if the buffer is full.
    ///
    /// Any `f64` is accepted, including NaN and infinities; the renderer
    /// treats non-finite values as gaps rather than data points.
    pub fn push(&mut self, value: f64) {
        self.samples.push_back(value);
        if self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    /// Remove all samples. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Iterate over the retained samples, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }

    /// The most recently pushed sample, if any.
    pub fn latest(&self) -> Option<f64> {
        self.samples.back().copied()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The fixed capacity this buffer was created with.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
