//! Aggregate statistics over past game results.

use tracing::instrument;

/// Arithmetic mean of the click counts, `0.0` for an empty slice.
#[instrument]
pub fn mean(clicks: &[i64]) -> f64 {
    if clicks.is_empty() {
        0.0
    } else {
        clicks.iter().sum::<i64>() as f64 / clicks.len() as f64
    }
}

/// Mean rounded to two decimal places, the display precision.
#[instrument]
pub fn mean_rounded(clicks: &[i64]) -> f64 {
    (mean(clicks) * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_mean_simple() {
        assert_eq!(mean(&[10, 20, 30]), 20.0);
    }

    #[test]
    fn test_mean_single() {
        assert_eq!(mean(&[1]), 1.0);
    }

    #[test]
    fn test_mean_rounded_two_decimals() {
        // 10/3 = 3.333... rounds to 3.33
        assert_eq!(mean_rounded(&[3, 3, 4]), 3.33);
        assert_eq!(mean_rounded(&[1, 2]), 1.5);
    }

    #[test]
    fn test_mean_does_not_mutate_input() {
        let clicks = vec![5, 7, 9];
        let before = clicks.clone();
        let _ = mean(&clicks);
        assert_eq!(clicks, before);
    }
}
