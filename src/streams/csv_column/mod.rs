mod csv_column_stream;

pub use csv_column_stream::CsvColumnStream;
