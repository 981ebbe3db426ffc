/// Round to the nearest integer, halves toward positive infinity.
/// `-2.5` rounds to `-2`, matching the dashboard's display rounding.
pub fn round_half_up(value: f64) -> f64 {
    let f = value.floor();
    if value - f >= 0.5 {
        f + 1.0
    } else {
        f
    }
}

/// Clamp an additive score into 0..=100
pub fn clamp_score(score: i32) -> u8 {
    score.clamp(0, 100) as u8
}

/// Resolve an optional reading, substituting `default` when it is missing
/// or not finite.
pub fn reading_or(value: Option<f64>, default: f64, field: &str) -> f64 {
    match value {
        Some(v) if v.is_finite() => v,
        Some(v) => {
            tracing::warn!("Non-finite {} reading ({}), using default {}", field, v, default);
            default
        }
        None => default,
    }
}

/// Like `reading_or` but keeps absence: non-finite values become `None`.
pub fn finite_reading(value: Option<f64>, field: &str) -> Option<f64> {
    match value {
        Some(v) if !v.is_finite() => {
            tracing::warn!("Ignoring non-finite {} reading ({})", field, v);
            None
        }
        other => other,
    }
}

/// Fill percentage of a value on a 0..`max` scale, clamped to 0..=100
pub fn gauge_percent(value: f64, max: f64) -> f64 {
    if max <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}
