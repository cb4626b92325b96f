use std::fmt::{Display, Formatter, Result};

/// Mean and median of a window at one point in the stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowStatistics {
    pub mean: f64,
    pub median: f64,
}

impl WindowStatistics {
    #[inline]
    pub fn new(mean: f64, median: f64) -> Self {
        Self { mean, median }
    }
}

impl Display for WindowStatistics {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "mean={:.6}, median={:.6}", self.mean, self.median)
    }
}
