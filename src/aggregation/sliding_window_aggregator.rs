use crate::aggregation::statistics::{mean, median};
use crate::aggregation::{AggregatorError, WindowStatistics};

/// Circular buffer of the most recent `capacity` values with running
/// mean/median reporting.
///
/// Every slot starts at `0.0` and takes part in the statistics until it is
/// overwritten, so the first `capacity - 1` reports are computed over a
/// zero-padded window. Values are written to slot
/// `observation_count % capacity`; the slot order is never rearranged.
#[derive(Debug, Clone)]
pub struct SlidingWindowAggregator {
    window: Vec<f64>,
    observation_count: u64,
}

impl SlidingWindowAggregator {
    pub const DEFAULT_SLOT_VALUE: f64 = 0.0;

    pub fn new(window_width: usize) -> Result<Self, AggregatorError> {
        if window_width == 0 {
            return Err(AggregatorError::InvalidConfiguration(
                "window width must be > 0".into(),
            ));
        }
        Ok(Self {
            window: vec![Self::DEFAULT_SLOT_VALUE; window_width],
            observation_count: 0,
        })
    }

    /// Writes `value` into the next circular slot and returns the statistics
    /// of the full buffer afterwards.
    ///
    /// `value` is expected to be finite; callers validate input.
    pub fn ingest(&mut self, value: f64) -> WindowStatistics {
        let slot = (self.observation_count % self.window.len() as u64) as usize;
        self.window[slot] = value;
        self.observation_count += 1;
        self.statistics()
    }

    /// Mean and median of the current buffer, padding included.
    pub fn statistics(&self) -> WindowStatistics {
        WindowStatistics::new(mean(&self.window), median(&self.window))
    }

    pub fn capacity(&self) -> usize {
        self.window.len()
    }

    pub fn observation_count(&self) -> u64 {
        self.observation_count
    }

    /// Slots in physical order (slot `i` holds the latest value whose
    /// observation index is congruent to `i` modulo the capacity).
    pub fn window(&self) -> &[f64] {
        &self.window
    }

    /// Whether every slot has been written at least once.
    pub fn is_warmed_up(&self) -> bool {
        self.observation_count >= self.window.len() as u64
    }
}
