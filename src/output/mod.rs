mod filtered_output;

pub use filtered_output::{FilteredOutput, OUTPUT_FILE_NAME};
