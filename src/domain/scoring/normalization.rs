//! Per-column min–max normalization with worst-case imputation.

/// Normalizes one column of raw values onto [0, 1], 0 being best.
///
/// Missing and non-finite values are imputed to the column maximum, so a
/// site without data never looks better than any observed site.
///
/// # Edge Cases
/// - Every value missing: all zeros
/// - Constant column (max == min): all zeros
pub fn normalize_column(values: &[Option<f64>]) -> Vec<f64> {
    let observed = || values.iter().flatten().copied().filter(|v| v.is_finite());

    let (Some(min), Some(max)) = (
        observed().min_by(|a, b| a.total_cmp(b)),
        observed().max_by(|a, b| a.total_cmp(b)),
    ) else {
        return vec![0.0; values.len()];
    };

    let range = max - min;
    if range <= 0.0 || !range.is_finite() {
        return vec![0.0; values.len()];
    }

    values
        .iter()
        .map(|v| {
            let v = v.filter(|v| v.is_finite()).unwrap_or(max);
            (v - min) / range
        })
        .collect()
}
