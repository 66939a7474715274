// src/scoring/round.rs

/// Rounds to two decimal places.
///
/// Scales by 100, rounds to the nearest integer with ties going away from zero
/// (`f64::round`), then scales back. Every derived field goes through this one
/// function so stored values never depend on where they were computed.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Rounds to one decimal place, same tie rule as [`round2`].
/// Used for dashboard averages only.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
