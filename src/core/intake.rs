// ── Intake Calculator ────────────────────────────────────────────────────────

/// Daily water target in milliliters: 30 ml per kilogram of body weight.
/// Weight is validated before it reaches this point, so there is no error
/// path.
pub fn daily_target_ml(weight_kg: f64) -> f64 {
    weight_kg * 30.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_target_for_70_kg() {
        assert_eq!(daily_target_ml(70.0), 2100.0);
    }

    #[test]
    fn test_daily_target_scales_with_fractional_weight() {
        assert_eq!(daily_target_ml(82.5), 2475.0);
    }
}
