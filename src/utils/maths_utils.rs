use argminmax::ArgMinMax;

/// Rounds to `decimals` places, ties to even (so 2.5 -> 2, 0.125 -> 0.12).
/// The upstream reports round this way, so the dashboard matches them cent for cent.
#[inline]
pub fn round_to(val: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (val * factor).round_ties_even() / factor
}

/// Largest value in the slice, or None when empty.
#[inline]
pub(crate) fn get_max(vec: &[f64]) -> Option<f64> {
    if vec.is_empty() {
        return None;
    }
    let max_index: usize = vec.argmax();
    Some(vec[max_index])
}
