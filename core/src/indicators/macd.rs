//! MACD line and its signal line.

use super::ema::ema;
use crate::models::IndicatorValue;

#[derive(Debug, Clone, PartialEq)]
pub struct MacdOutput {
    pub ema_fast: Vec<IndicatorValue>,
    pub ema_slow: Vec<IndicatorValue>,
    pub macd: Vec<IndicatorValue>,
    pub signal: Vec<IndicatorValue>,
}

/// `MACD = EMA(fast) - EMA(slow)`, `signal = EMA(MACD, signal_span)`.
///
/// Both price EMAs are seeded from the first price, so `MACD[0]` is exactly 0
/// and the signal line is seeded from it.
pub fn macd(prices: &[Option<f64>], fast: usize, slow: usize, signal_span: usize) -> MacdOutput {
    let ema_fast = ema(prices, fast);
    let ema_slow = ema(prices, slow);

    let macd: Vec<IndicatorValue> = ema_fast
        .iter()
        .zip(&ema_slow)
        .map(|(f, s)| match (f.value(), s.value()) {
            (Some(f), Some(s)) => IndicatorValue::from_f64(f - s),
            _ => IndicatorValue::Undefined,
        })
        .collect();

    let macd_values: Vec<Option<f64>> = macd.iter().map(IndicatorValue::value).collect();
    let signal = ema(&macd_values, signal_span);

    MacdOutput {
        ema_fast,
        ema_slow,
        macd,
        signal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_constant_series_has_zero_macd() {
        let prices = vec![Some(42.0); 40];
        let out = macd(&prices, 12, 26, 9);
        for i in 0..prices.len() {
            assert!((out.ema_fast[i].value().unwrap() - 42.0).abs() < EPSILON);
            assert!((out.ema_slow[i].value().unwrap() - 42.0).abs() < EPSILON);
            assert!(out.macd[i].value().unwrap().abs() < EPSILON);
            assert!(out.signal[i].value().unwrap().abs() < EPSILON);
        }
    }

    #[test]
    fn test_first_macd_is_exactly_zero() {
        let prices: Vec<Option<f64>> = (0..30).map(|i| Some(100.0 + i as f64)).collect();
        let out = macd(&prices, 12, 26, 9);
        assert_eq!(out.macd[0], IndicatorValue::Defined(0.0));
        assert_eq!(out.signal[0], IndicatorValue::Defined(0.0));
    }

    #[test]
    fn test_rising_series_has_positive_macd() {
        let prices: Vec<Option<f64>> = (0..60).map(|i| Some(100.0 + i as f64)).collect();
        let out = macd(&prices, 12, 26, 9);
        for i in 1..prices.len() {
            let m = out.macd[i].value().unwrap();
            let s = out.signal[i].value().unwrap();
            assert!(m > 0.0);
            // the signal lags the MACD line on a steady rise
            assert!(m > s);
        }
    }

    #[test]
    fn test_signal_follows_recurrence() {
        let prices: Vec<Option<f64>> = [10.0, 11.0, 10.5, 12.0, 12.5].iter().map(|p| Some(*p)).collect();
        let out = macd(&prices, 2, 4, 3);
        let alpha = 0.5;
        let mut expected = out.macd[0].value().unwrap();
        for i in 1..prices.len() {
            expected = alpha * out.macd[i].value().unwrap() + (1.0 - alpha) * expected;
            assert!((out.signal[i].value().unwrap() - expected).abs() < 1e-12);
        }
    }
}
