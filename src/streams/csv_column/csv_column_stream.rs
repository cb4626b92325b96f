use crate::core::{ColumnHeader, Observation};
use crate::error::FilterError;
use crate::streams::{ParseError, Stream, StreamError};
use crate::utils::file_parsing::{field_at, split_csv_preserving_quotes, trim_line_ending};
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads one column of a comma-separated file, line by line.
///
/// The first line is the header. Every following line yields either an
/// [`Observation`] or a recoverable [`ParseError`].
#[derive(Debug)]
pub struct CsvColumnStream {
    reader: BufReader<File>,
    header: ColumnHeader,
    field_index: usize,
    column: usize,
    line_number: u64,
    exhausted: bool,
    buf: String,
}

impl CsvColumnStream {
    /// Opens `path` and reads its header. `column` is 1-based.
    ///
    /// Fails when the file cannot be opened or read, has no header line, or
    /// the header has fewer than `column` fields.
    pub fn open<P: AsRef<Path>>(path: P, column: usize) -> Result<Self, FilterError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| FilterError::file_access(path, e))?;
        let mut reader = BufReader::new(file);

        let mut buf = String::new();
        let read = reader
            .read_line(&mut buf)
            .map_err(|e| FilterError::file_access(path, e))?;
        if read == 0 {
            return Err(FilterError::MissingHeader { path: path.into() });
        }

        let header = ColumnHeader::parse(trim_line_ending(&buf));
        let field_index =
            header
                .index_of_column(column)
                .ok_or(FilterError::ColumnOutOfRange {
                    column,
                    available: header.number_of_fields(),
                })?;

        debug!(
            "opened {} with {} field(s), reading column {} ({:?})",
            path.display(),
            header.number_of_fields(),
            column,
            header.field_at_index(field_index).unwrap_or_default()
        );

        Ok(Self {
            reader,
            header,
            field_index,
            column,
            line_number: 1,
            exhausted: false,
            buf,
        })
    }

    fn parse_line(&self, line: &str) -> Result<Observation, ParseError> {
        let Some(raw) = field_at(line, self.field_index) else {
            return Err(ParseError::MissingField {
                line: self.line_number,
                column: self.column,
                found: split_csv_preserving_quotes(line).len(),
            });
        };
        let value = parse_value(self.line_number, raw)?;
        Ok(Observation::new(self.line_number, value))
    }
}

fn parse_value(line: u64, raw: &str) -> Result<f64, ParseError> {
    let raw = raw.trim();
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        Ok(_) => Err(ParseError::NonFinite {
            line,
            value: raw.to_string(),
        }),
        Err(_) => Err(ParseError::NotNumeric {
            line,
            field: raw.to_string(),
        }),
    }
}

impl Stream for CsvColumnStream {
    fn header(&self) -> &ColumnHeader {
        &self.header
    }

    fn field_index(&self) -> usize {
        self.field_index
    }

    fn has_more_observations(&self) -> bool {
        !self.exhausted
    }

    fn next_observation(&mut self) -> Option<Result<Observation, StreamError>> {
        if self.exhausted {
            return None;
        }

        let mut buf = std::mem::take(&mut self.buf);
        buf.clear();
        let item = match self.reader.read_line(&mut buf) {
            Ok(0) => {
                self.exhausted = true;
                None
            }
            Ok(_) => {
                self.line_number += 1;
                Some(
                    self.parse_line(trim_line_ending(&buf))
                        .map_err(StreamError::from),
                )
            }
            Err(e) => {
                self.exhausted = true;
                Some(Err(StreamError::Io(e)))
            }
        };
        self.buf = buf;
        item
    }
}
