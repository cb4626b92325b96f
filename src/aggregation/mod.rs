//! Fixed-width sliding window statistics.
//!
//! [`SlidingWindowAggregator`] keeps the most recent `N` values in a circular
//! buffer and reports the mean and median of the whole buffer after every
//! ingested value.

mod error;
mod sliding_window_aggregator;
mod statistics;
mod window_statistics;

pub use error::AggregatorError;
pub use sliding_window_aggregator::SlidingWindowAggregator;
pub use statistics::{mean, median};
pub use window_statistics::WindowStatistics;
