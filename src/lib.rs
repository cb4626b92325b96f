//! Running mean and median of one numeric CSV column over a fixed-size
//! sliding window.
//!
//! ```no_run
//! use slidestat::filter_file;
//!
//! let summary = filter_file("readings.csv", 5, 2, "output.csv")?;
//! println!("{summary}");
//! # Ok::<(), slidestat::FilterError>(())
//! ```

pub mod aggregation;
pub mod core;
pub mod error;
pub mod output;
pub mod streams;
pub mod tasks;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use aggregation::{SlidingWindowAggregator, WindowStatistics};
pub use error::FilterError;
pub use output::OUTPUT_FILE_NAME;
pub use tasks::{RunSummary, filter_file};
