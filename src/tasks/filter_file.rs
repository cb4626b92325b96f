use crate::aggregation::SlidingWindowAggregator;
use crate::error::FilterError;
use crate::output::FilteredOutput;
use crate::streams::{CsvColumnStream, Stream};
use crate::tasks::{RunSummary, WindowedFilter};
use log::info;
use std::path::Path;

/// Filters column `column` (1-based) of `input` through a window of
/// `window_width` values, writing the result to `output_path`.
///
/// The window width, the input file and its header are validated before
/// `output_path` is created, so a failure there leaves no output behind.
pub fn filter_file<P, Q>(
    input: P,
    window_width: usize,
    column: usize,
    output_path: Q,
) -> Result<RunSummary, FilterError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let aggregator = SlidingWindowAggregator::new(window_width)?;
    let stream = CsvColumnStream::open(input.as_ref(), column)?;

    let output_path = output_path.as_ref();
    let output = FilteredOutput::create(output_path, stream.column_name())
        .map_err(|e| FilterError::file_access(output_path, e))?;

    info!(
        "filtering column {} ({:?}) of {} with a window of {}",
        column,
        stream.column_name(),
        input.as_ref().display(),
        window_width
    );

    let mut filter = WindowedFilter::new(Box::new(stream), aggregator, output);
    let summary = filter.run()?;
    filter.into_writer()?;
    Ok(summary)
}
