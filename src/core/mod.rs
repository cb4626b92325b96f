mod column_header;
mod observation;

pub use column_header::ColumnHeader;
pub use observation::Observation;
