//! Exponential moving average, `alpha = 2 / (span + 1)`.
//!
//! Seeded with the first observation and advanced in one forward pass:
//! `EMA[i] = alpha * x[i] + (1 - alpha) * EMA[i-1]`. Positions before the
//! first observed value are `Undefined`; a missing value in the middle of the
//! series repeats the previous EMA and leaves the state untouched.

use crate::models::IndicatorValue;

pub fn smoothing_factor(span: usize) -> f64 {
    2.0 / (span as f64 + 1.0)
}

pub fn ema(values: &[Option<f64>], span: usize) -> Vec<IndicatorValue> {
    let alpha = smoothing_factor(span);
    let mut state: Option<f64> = None;

    values
        .iter()
        .map(|x| {
            state = match (state, x.filter(|v| v.is_finite())) {
                (None, Some(x)) => Some(x),
                (Some(prev), Some(x)) => Some(alpha * x + (1.0 - alpha) * prev),
                (prev, None) => prev,
            };
            IndicatorValue::from_option(state)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_with_first_value() {
        let result = ema(&[Some(10.0), Some(20.0)], 3);
        assert_eq!(result[0], IndicatorValue::Defined(10.0));
        // alpha = 0.5
        assert_eq!(result[1], IndicatorValue::Defined(15.0));
    }

    #[test]
    fn test_recurrence() {
        let values = [Some(1.0), Some(2.0), Some(3.0), Some(4.0)];
        let result = ema(&values, 12);
        let alpha = 2.0 / 13.0;
        let mut expected = 1.0;
        for (i, v) in values.iter().enumerate().skip(1) {
            expected = alpha * v.unwrap() + (1.0 - alpha) * expected;
            assert!((result[i].value().unwrap() - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_leading_gap_then_carry_forward() {
        let result = ema(&[None, Some(4.0), None, Some(8.0)], 1);
        assert!(result[0].is_undefined());
        assert_eq!(result[1], IndicatorValue::Defined(4.0));
        assert_eq!(result[2], IndicatorValue::Defined(4.0));
        // span 1 -> alpha 1, tracks input exactly
        assert_eq!(result[3], IndicatorValue::Defined(8.0));
    }

    #[test]
    fn test_empty() {
        assert!(ema(&[], 9).is_empty());
    }
}
