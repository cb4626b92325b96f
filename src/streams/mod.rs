mod csv_column;
mod error;
mod stream;

pub use csv_column::CsvColumnStream;
pub use error::{ParseError, StreamError};
pub use stream::Stream;
