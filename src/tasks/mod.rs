mod filter_file;
mod run_summary;
mod windowed_filter;

pub use filter_file::filter_file;
pub use run_summary::RunSummary;
pub use windowed_filter::WindowedFilter;
