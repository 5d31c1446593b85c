//! Simple moving average of the adjusted close.

use super::window::RollingMean;
use crate::models::IndicatorValue;

/// Arithmetic mean of the trailing `window` prices.
///
/// The first `window - 1` positions are `Undefined`, as is any position whose
/// window contains a missing price.
pub fn moving_average(prices: &[Option<f64>], window: usize) -> Vec<IndicatorValue> {
    let mut acc = RollingMean::new(window);
    prices
        .iter()
        .map(|p| IndicatorValue::from_option(acc.push(*p)))
        .collect()
}
