//! Daily and cumulative returns.
//!
//! `R[i] = (P[i] - P[i-1]) / P[i-1]` and `C[i] = prod(1 + R[j], j <= i) - 1`
//! over the defined returns. Position 0 has no return and is `Undefined` in
//! both columns. A missing price or a zero previous price makes that day's
//! return `Undefined`; the cumulative column is `Undefined` on those days and
//! keeps compounding the defined returns afterwards. A fall to a zero price is
//! a defined return of -1, so the cumulative column stays at -1 from there on.

use crate::models::IndicatorValue;

pub fn daily_returns(prices: &[Option<f64>]) -> Vec<IndicatorValue> {
    let mut out = Vec::with_capacity(prices.len());
    if prices.is_empty() {
        return out;
    }

    out.push(IndicatorValue::Undefined);
    for pair in prices.windows(2) {
        let value = match (pair[0], pair[1]) {
            (Some(prev), Some(curr)) if prev != 0.0 => IndicatorValue::from_f64((curr - prev) / prev),
            _ => IndicatorValue::Undefined,
        };
        out.push(value);
    }
    out
}

pub fn cumulative_returns(daily: &[IndicatorValue]) -> Vec<IndicatorValue> {
    let mut growth = 1.0;
    daily
        .iter()
        .map(|r| match r.value() {
            Some(r) => {
                growth *= 1.0 + r;
                IndicatorValue::from_f64(growth - 1.0)
            }
            None => IndicatorValue::Undefined,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_first_return_is_undefined() {
        let r = daily_returns(&[Some(100.0), Some(101.0)]);
        assert!(r[0].is_undefined());
        assert!((r[1].value().unwrap() - 0.01).abs() < EPSILON);
    }

    #[test]
    fn test_zero_previous_price_is_undefined() {
        let r = daily_returns(&[Some(0.0), Some(5.0), Some(10.0)]);
        assert!(r[1].is_undefined());
        assert_eq!(r[2], IndicatorValue::Defined(1.0));
    }

    #[test]
    fn test_missing_price_undefines_both_adjacent_returns() {
        let r = daily_returns(&[Some(10.0), None, Some(12.0), Some(15.0)]);
        assert!(r[1].is_undefined());
        assert!(r[2].is_undefined());
        assert_eq!(r[3], IndicatorValue::Defined(0.25));
    }

    #[test]
    fn test_empty_and_single_point() {
        assert!(daily_returns(&[]).is_empty());
        assert_eq!(daily_returns(&[Some(3.0)]), vec![IndicatorValue::Undefined]);
        assert!(cumulative_returns(&[]).is_empty());
    }

    #[test]
    fn test_cumulative_reconstructs_price() {
        let prices: Vec<Option<f64>> = [50.0, 55.0, 52.5, 60.0, 61.2].iter().map(|p| Some(*p)).collect();
        let c = cumulative_returns(&daily_returns(&prices));
        assert!(c[0].is_undefined());
        for i in 1..prices.len() {
            let rebuilt = 50.0 * (1.0 + c[i].value().unwrap());
            assert!((rebuilt - prices[i].unwrap()).abs() < EPSILON);
        }
    }

    #[test]
    fn test_cumulative_skips_undefined_returns() {
        let daily = vec![
            IndicatorValue::Undefined,
            IndicatorValue::Defined(0.1),
            IndicatorValue::Undefined,
            IndicatorValue::Defined(0.1),
        ];
        let c = cumulative_returns(&daily);
        assert!(c[2].is_undefined());
        assert!((c[3].value().unwrap() - 0.21).abs() < EPSILON);
    }
}
