use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RunSummary {
    pub rows_written: u64,
    pub rows_skipped: u64,
    pub seconds: f64,
}

impl Display for RunSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "written={}, skipped={}, t={:.3}s",
            self.rows_written, self.rows_skipped, self.seconds
        )
    }
}
