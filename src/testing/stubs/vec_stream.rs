use crate::core::{ColumnHeader, Observation};
use crate::streams::{ParseError, Stream, StreamError};
use std::io::{Error, ErrorKind};

/// In-memory stream over a single column named `value`.
///
/// `None` items stand for lines whose field is not numeric. Line numbers
/// count from 2, as if a header occupied line 1.
pub struct VecStream {
    header: ColumnHeader,
    items: Vec<Option<f64>>,
    idx: usize,
    fail_at: Option<usize>,
}

impl VecStream {
    pub fn new(values: Vec<f64>) -> Self {
        Self::with_gaps(values.into_iter().map(Some).collect())
    }

    pub fn with_gaps(items: Vec<Option<f64>>) -> Self {
        Self {
            header: ColumnHeader::new(vec!["value".into()]),
            items,
            idx: 0,
            fail_at: None,
        }
    }

    /// Makes the item at `index` an I/O failure that ends the stream.
    pub fn failing_at(mut self, index: usize) -> Self {
        self.fail_at = Some(index);
        self
    }
}

impl Stream for VecStream {
    fn header(&self) -> &ColumnHeader {
        &self.header
    }

    fn field_index(&self) -> usize {
        0
    }

    fn has_more_observations(&self) -> bool {
        self.idx < self.items.len()
    }

    fn next_observation(&mut self) -> Option<Result<Observation, StreamError>> {
        if !self.has_more_observations() {
            return None;
        }

        let i = self.idx;
        let line = i as u64 + 2;
        if self.fail_at == Some(i) {
            self.idx = self.items.len();
            return Some(Err(StreamError::Io(Error::new(
                ErrorKind::UnexpectedEof,
                "stub failure",
            ))));
        }

        self.idx += 1;
        Some(match self.items[i] {
            Some(v) => Ok(Observation::new(line, v)),
            None => Err(ParseError::NotNumeric {
                line,
                field: "n/a".into(),
            }
            .into()),
        })
    }
}
