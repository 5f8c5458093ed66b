use std::collections::VecDeque;

/// Bounded FIFO of past live cell ratios.
///
/// Always holds exactly `capacity` samples, most recent last. Each push evicts the
/// oldest sample, which is the delayed density used for the next death probability.
#[derive(Debug, Clone)]
pub struct DensityHistory {
    capacity: usize,
    samples: VecDeque<f32>,
}

impl DensityHistory {
    /// Creates a history of `capacity` zero samples. `capacity` must be positive.
    pub fn new(capacity: usize) -> Self {
        Self::filled(capacity, 0.0)
    }

    /// Creates a history where every sample is `value`.
    pub fn filled(capacity: usize, value: f32) -> Self {
        Self {
            capacity,
            samples: std::iter::repeat(value).take(capacity).collect(),
        }
    }

    /// Appends `density` and returns the evicted oldest sample.
    pub fn push(&mut self, density: f32) -> f32 {
        self.samples.push_back(density);
        // Length was capacity before the push, so the front always exists.
        self.samples.pop_front().unwrap_or(density)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn newest(&self) -> f32 {
        self.samples.back().copied().unwrap_or(0.0)
    }

    /// The sample the next push will evict.
    pub fn oldest(&self) -> f32 {
        self.samples.front().copied().unwrap_or(0.0)
    }

    /// Samples from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.samples.iter().copied()
    }
}
