/// Arithmetic mean of every slot, by direct summation.
///
/// Returns `NaN` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let total: f64 = values.iter().sum();
    total / values.len() as f64
}

/// Element at index `len / 2` of the values sorted ascending.
///
/// The position is always `len / 2` with integer division, so even-length
/// input yields the second of the two middle elements: sorted `[0, 10]`
/// gives `10`, not `0`. The two middle values are never averaged. A scratch copy is sorted so the caller's slot order stays
/// intact.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted[sorted.len() / 2]
}
