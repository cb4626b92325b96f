use crate::aggregation::SlidingWindowAggregator;
use crate::error::FilterError;
use crate::output::FilteredOutput;
use crate::streams::{Stream, StreamError};
use crate::tasks::RunSummary;
use log::{debug, error, info, warn};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::Instant;

/// Pulls every observation from a stream through a sliding window and writes
/// `raw,mean,median` rows.
///
/// Lines that fail to parse are logged and skipped without touching the
/// window; an I/O failure of the stream or the output ends the run.
pub struct WindowedFilter<W: Write = BufWriter<File>> {
    stream: Box<dyn Stream>,
    aggregator: SlidingWindowAggregator,
    output: FilteredOutput<W>,

    progress_frequency: Option<u64>,

    written: u64,
    skipped: u64,
    start_time: Instant,
}

impl<W: Write> WindowedFilter<W> {
    pub fn new(
        stream: Box<dyn Stream>,
        aggregator: SlidingWindowAggregator,
        output: FilteredOutput<W>,
    ) -> Self {
        Self {
            stream,
            aggregator,
            output,
            progress_frequency: None,
            written: 0,
            skipped: 0,
            start_time: Instant::now(),
        }
    }

    /// Logs a progress line every `frequency` written rows.
    pub fn with_progress_frequency(mut self, frequency: u64) -> Result<Self, FilterError> {
        if frequency == 0 {
            return Err(FilterError::InvalidParameter(
                "progress frequency must be > 0".into(),
            ));
        }
        self.progress_frequency = Some(frequency);
        Ok(self)
    }

    pub fn run(&mut self) -> Result<RunSummary, FilterError> {
        self.start_time = Instant::now();

        while self.stream.has_more_observations() {
            let Some(item) = self.stream.next_observation() else {
                break;
            };

            match item {
                Ok(observation) => {
                    let stats = self.aggregator.ingest(observation.value);
                    self.output.write_row(observation.value, stats)?;
                    self.written += 1;
                    debug!("line {}: raw={} {}", observation.line, observation.value, stats);

                    if let Some(n) = self.progress_frequency {
                        if self.written % n == 0 {
                            info!("{}", self.summary());
                        }
                    }
                }
                Err(StreamError::Parse(e)) => {
                    warn!("skipping {e}");
                    self.skipped += 1;
                }
                Err(StreamError::Io(e)) => {
                    if let Err(flush_err) = self.output.flush() {
                        error!("flushing output after read failure: {flush_err}");
                    }
                    return Err(FilterError::Io(e));
                }
            }
        }

        self.output.flush()?;
        Ok(self.summary())
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            rows_written: self.written,
            rows_skipped: self.skipped,
            seconds: self.start_time.elapsed().as_secs_f64(),
        }
    }

    pub fn aggregator(&self) -> &SlidingWindowAggregator {
        &self.aggregator
    }

    /// Consumes the filter, returning the flushed output writer.
    pub fn into_writer(self) -> Result<W, FilterError> {
        Ok(self.output.finish()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::VecStream;
    use std::io::{Error, ErrorKind};

    struct FlushFails(Vec<u8>);

    impl Write for FlushFails {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(Error::new(ErrorKind::Other, "disk full"))
        }
    }

    fn filter(stream: VecStream, width: usize) -> WindowedFilter<Vec<u8>> {
        let output = FilteredOutput::from_writer(Vec::new(), stream.column_name()).unwrap();
        let aggregator = SlidingWindowAggregator::new(width).unwrap();
        WindowedFilter::new(Box::new(stream), aggregator, output)
    }

    fn text(f: WindowedFilter<Vec<u8>>) -> String {
        String::from_utf8(f.into_writer().unwrap()).unwrap()
    }

    #[test]
    fn writes_one_row_per_value() {
        let mut f = filter(VecStream::new(vec![10.0, 20.0, 30.0, 40.0]), 2);
        let summary = f.run().unwrap();

        assert_eq!(summary.rows_written, 4);
        assert_eq!(summary.rows_skipped, 0);
        assert!(summary.seconds >= 0.0);

        let exp = "\
value Raw, value Mean, value Median
10.0,5.0,10.0
20.0,15.0,20.0
30.0,25.0,30.0
40.0,35.0,40.0
";
        assert_eq!(text(f), exp);
    }

    #[test]
    fn skipped_lines_leave_the_window_untouched() {
        let stream = VecStream::with_gaps(vec![Some(1.0), None, Some(3.0), None]);
        let mut f = filter(stream, 3);
        let summary = f.run().unwrap();

        assert_eq!(summary.rows_written, 2);
        assert_eq!(summary.rows_skipped, 2);
        assert_eq!(f.aggregator().observation_count(), 2);
        assert_eq!(f.aggregator().window(), &[1.0, 3.0, 0.0]);

        let exp = "\
value Raw, value Mean, value Median
1.0,0.3333333333333333,0.0
3.0,1.3333333333333333,1.0
";
        assert_eq!(text(f), exp);
    }

    #[test]
    fn io_failure_aborts_after_flushing_earlier_rows() {
        let stream = VecStream::new(vec![2.0, 4.0, 6.0]).failing_at(1);
        let mut f = filter(stream, 1);
        let err = f.run().unwrap_err();
        assert!(matches!(err, FilterError::Io(_)));
        assert_eq!(f.summary().rows_written, 1);
        assert_eq!(text(f), "value Raw, value Mean, value Median\n2.0,2.0,2.0\n");
    }

    #[test]
    fn read_failure_wins_over_failed_flush() {
        let stream = VecStream::new(vec![2.0, 4.0]).failing_at(1);
        let output = FilteredOutput::from_writer(FlushFails(Vec::new()), "value").unwrap();
        let aggregator = SlidingWindowAggregator::new(1).unwrap();
        let mut f = WindowedFilter::new(Box::new(stream), aggregator, output);

        match f.run().unwrap_err() {
            FilterError::Io(e) => assert_eq!(e.kind(), ErrorKind::UnexpectedEof),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn empty_stream_writes_header_only() {
        let mut f = filter(VecStream::new(vec![]), 3);
        let summary = f.run().unwrap();
        assert_eq!(summary.rows_written, 0);
        assert_eq!(text(f), "value Raw, value Mean, value Median\n");
    }

    #[test]
    fn progress_frequency_guard() {
        let f = filter(VecStream::new(vec![1.0]), 1);
        let err = f.with_progress_frequency(0).err().unwrap();
        assert!(matches!(err, FilterError::InvalidParameter(_)));

        let mut f = filter(VecStream::new(vec![1.0, 2.0, 3.0]), 1)
            .with_progress_frequency(2)
            .unwrap();
        assert_eq!(f.run().unwrap().rows_written, 3);
    }
}
