use crate::core::{ColumnHeader, Observation};
use crate::streams::StreamError;

/// Pull-based interface for sources that produce [`Observation`]s of a single
/// numeric column.
pub trait Stream {
    /// Returns the header of the underlying source.
    ///
    /// The header is read once when the stream is created and stays the same
    /// for the lifetime of the stream.
    fn header(&self) -> &ColumnHeader;

    /// Zero-based field index of the column this stream reads.
    fn field_index(&self) -> usize;

    /// Name of the column this stream reads, as given by the header.
    fn column_name(&self) -> &str {
        self.header().field_at_index(self.field_index()).unwrap_or("")
    }

    /// Indicates whether the stream *may* produce more observations.
    ///
    /// If it returns `false`, a subsequent call to
    /// [`next_observation`](Stream::next_observation) must return `None`.
    fn has_more_observations(&self) -> bool;

    /// Produces the next item, or `None` once the source is exhausted.
    ///
    /// A line whose field cannot be parsed yields
    /// `Some(Err(StreamError::Parse(..)))`; the caller may keep pulling and
    /// the stream resumes with the following line. `StreamError::Io` means the
    /// source failed and the stream should be abandoned.
    fn next_observation(&mut self) -> Option<Result<Observation, StreamError>>;
}
