//! Trend classification — the sign of the 24-hour delta, nothing more.

use store::Trend;

/// Map a signed 24-hour change onto a three-state trend.
///
/// Pure and total.  Comparison is exact: upstream readings are rounded
/// to whole (or half) centimeters, so no epsilon band is applied.
pub fn classify(change_24h: f64) -> Trend {
    if change_24h > 0.0 {
        Trend::Rising
    } else if change_24h < 0.0 {
        Trend::Falling
    } else {
        Trend::Stable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_change_is_rising() {
        assert_eq!(classify(3.0), Trend::Rising);
        assert_eq!(classify(f64::MAX), Trend::Rising);
        assert_eq!(classify(f64::MIN_POSITIVE), Trend::Rising);
    }

    #[test]
    fn negative_change_is_falling() {
        assert_eq!(classify(-0.5), Trend::Falling);
        assert_eq!(classify(f64::MIN), Trend::Falling);
        assert_eq!(classify(-f64::MIN_POSITIVE), Trend::Falling);
    }

    #[test]
    fn exact_zero_is_stable() {
        assert_eq!(classify(0.0), Trend::Stable);
        assert_eq!(classify(-0.0), Trend::Stable);
    }
}
