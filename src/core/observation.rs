/// A single numeric value read from the selected column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// 1-based physical line of the source the value came from.
    pub line: u64,
    pub value: f64,
}

impl Observation {
    #[inline]
    pub fn new(line: u64, value: f64) -> Self {
        Self { line, value }
    }
}
