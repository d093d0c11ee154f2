/// Amounts travel as JSON numbers; keep them on whole cents so repeated
/// arithmetic does not drift.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Every amount and resulting balance must be a finite number before it is
/// written, otherwise it serializes as `null`.
pub fn all_finite(amounts: &[f64]) -> bool {
    amounts.iter().all(|amount| amount.is_finite())
}
