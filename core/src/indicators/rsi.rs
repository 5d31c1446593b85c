//! Relative Strength Index over simple moving averages of gains and losses.
//!
//! ```text
//! gain[i] = max(P[i] - P[i-1], 0)     loss[i] = max(P[i-1] - P[i], 0)
//! avg_gain, avg_loss = SMA(window) of gain, loss
//! RSI = 100 - 100 / (1 + avg_gain / avg_loss)
//! ```
//!
//! Boundaries:
//! - `avg_loss == 0 && avg_gain > 0`: saturated at 100
//! - `avg_loss == 0 && avg_gain == 0`: undefined (flat window)
//! - `avg_gain == 0 && avg_loss > 0`: exactly 0

use super::window::RollingMean;
use crate::models::IndicatorValue;

pub const RSI_UPPER_BOUND: f64 = 100.0;

pub fn rsi(prices: &[Option<f64>], window: usize) -> Vec<IndicatorValue> {
    let mut out = Vec::with_capacity(prices.len());
    if prices.is_empty() {
        return out;
    }

    let mut gains = RollingMean::new(window);
    let mut losses = RollingMean::new(window);

    out.push(IndicatorValue::Undefined);
    for pair in prices.windows(2) {
        let delta = match (pair[0], pair[1]) {
            (Some(prev), Some(curr)) => Some(curr - prev),
            _ => None,
        };
        let avg_gain = gains.push(delta.map(|d| d.max(0.0)));
        let avg_loss = losses.push(delta.map(|d| (-d).max(0.0)));

        let value = match (avg_gain, avg_loss) {
            (Some(g), Some(l)) => rsi_value(g, l),
            _ => IndicatorValue::Undefined,
        };
        out.push(value);
    }
    out
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> IndicatorValue {
    if avg_loss == 0.0 {
        if avg_gain > 0.0 {
            IndicatorValue::Saturated(RSI_UPPER_BOUND)
        } else {
            IndicatorValue::Undefined
        }
    } else if avg_gain == 0.0 {
        IndicatorValue::Defined(0.0)
    } else {
        let rs = avg_gain / avg_loss;
        IndicatorValue::from_f64(RSI_UPPER_BOUND - RSI_UPPER_BOUND / (1.0 + rs))
    }
}
