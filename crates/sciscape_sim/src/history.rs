use std::collections::VecDeque;

use sciscape_core::{DataPoint, HISTORY_CAPACITY, SimulationState};

/// Bounded time series of samples for the graphs.
/// Separate from the state's trail and capped independently; oldest samples
/// fall off first.
#[derive(Debug, Clone)]
pub struct History {
    samples: VecDeque<DataPoint>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }
}

impl History {
    /// A zero capacity is bumped to 1
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, sample: DataPoint) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn record(&mut self, state: &SimulationState) {
        self.push(state.sample());
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn latest(&self) -> Option<&DataPoint> {
        self.samples.back()
    }

    /// Oldest to newest
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &DataPoint> + ExactSizeIterator {
        self.samples.iter()
    }

    /// The most recent `n` samples, oldest first
    pub fn window(&self, n: usize) -> impl Iterator<Item = &DataPoint> {
        self.samples.iter().skip(self.samples.len().saturating_sub(n))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use sciscape_core::Vec2;

    proptest! {
        /// Length is min(pushes, capacity) and the newest sample is kept.
        #[test]
        fn prop_bounded_fifo(capacity in 1usize..64, pushes in 0usize..200) {
            let mut history = History::with_capacity(capacity);
            for i in 0..pushes {
                history.push(DataPoint {
                    time: i as f64,
                    position: Vec2::ZERO,
                    velocity: Vec2::ZERO,
                });
            }
            prop_assert_eq!(history.len(), pushes.min(capacity));
            if pushes > 0 {
                prop_assert_eq!(history.latest().map(|p| p.time), Some((pushes - 1) as f64));
            }
        }
    }
}
