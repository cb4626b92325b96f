use crate::aggregation::WindowStatistics;
use std::fs::File;
use std::io::{BufWriter, Error, Write};
use std::path::Path;

/// File the command line tool writes into, relative to the working directory.
pub const OUTPUT_FILE_NAME: &str = "output.csv";

/// Comma-separated sink for `raw,mean,median` rows.
pub struct FilteredOutput<W: Write = BufWriter<File>> {
    writer: W,
}

impl FilteredOutput {
    /// Creates (or truncates) `path` and writes the header row.
    pub fn create<P: AsRef<Path>>(path: P, column_name: &str) -> Result<Self, Error> {
        let file = File::create(path.as_ref())?;
        FilteredOutput::from_writer(BufWriter::new(file), column_name)
    }
}

impl<W: Write> FilteredOutput<W> {
    pub fn from_writer(mut writer: W, column_name: &str) -> Result<Self, Error> {
        writeln!(
            writer,
            "{c} Raw, {c} Mean, {c} Median",
            c = column_name
        )?;
        Ok(Self { writer })
    }

    /// Numbers use the shortest representation that reads back to the same
    /// `f64`, always with a decimal point or exponent (`10.0`, `0.1`, `1e16`).
    pub fn write_row(&mut self, raw: f64, stats: WindowStatistics) -> Result<(), Error> {
        writeln!(self.writer, "{:?},{:?},{:?}", raw, stats.mean, stats.median)
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.writer.flush()
    }

    /// Flushes buffered rows and hands back the writer.
    pub fn finish(mut self) -> Result<W, Error> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}
