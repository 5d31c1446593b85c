//! Indicator engine: turns a [`PriceSeries`] into an [`IndicatorTable`].
//!
//! Every function here is pure. Numeric edge cases are resolved into
//! [`IndicatorValue`] tags inside the columns and never returned as errors.

pub mod ema;
pub mod macd;
pub mod returns;
pub mod rsi;
pub mod sma;
pub mod window;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{Column, IndicatorTable, IndicatorValue, PriceSeries, Shortfall};
use crate::utils::{Logger, Timer};

/// Window and span parameters for the derived columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    pub ma_window: usize,
    pub rsi_window: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            ma_window: 50,
            rsi_window: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
        }
    }
}

impl IndicatorConfig {
    pub fn validate(&self) -> Result<()> {
        let windows = [
            ("ma_window", self.ma_window),
            ("rsi_window", self.rsi_window),
            ("macd_fast", self.macd_fast),
            ("macd_slow", self.macd_slow),
            ("macd_signal", self.macd_signal),
        ];
        if let Some((name, _)) = windows.iter().find(|(_, w)| *w == 0) {
            return Err(Error::InvalidConfig(format!("{} must be at least 1", name)));
        }
        if self.macd_fast >= self.macd_slow {
            return Err(Error::InvalidConfig(format!(
                "macd_fast ({}) must be shorter than macd_slow ({})",
                self.macd_fast, self.macd_slow
            )));
        }
        Ok(())
    }

    /// Number of observations a column needs before it can hold a defined value.
    pub fn required_history(&self, column: Column) -> usize {
        match column {
            Column::AdjClose => 1,
            Column::MovingAverage => self.ma_window,
            // one extra point because gains and losses start at the second price
            Column::Rsi => self.rsi_window + 1,
            Column::DailyReturn
            | Column::CumulativeReturn
            | Column::EmaFast
            | Column::EmaSlow
            | Column::Macd
            | Column::SignalLine => MIN_HISTORY,
        }
    }
}

/// Below this many points no derived column is computed at all.
pub const MIN_HISTORY: usize = 2;

/// Compute every derived column for `series`.
///
/// An empty series yields an empty table whose columns all have length 0.
/// A series with fewer than [`MIN_HISTORY`] points yields fully undefined
/// derived columns, EMA-based ones included.
pub fn compute(series: &PriceSeries, config: &IndicatorConfig) -> Result<IndicatorTable> {
    config.validate()?;

    let logger = Logger::new("INDICATORS");
    let timer = Timer::start("indicator computation");

    let prices = series.adj_closes();
    let mut table = IndicatorTable::from_series(series, *config);

    if prices.len() < MIN_HISTORY {
        for column in Column::ALL.iter().filter(|c| **c != Column::AdjClose) {
            table.insert_column(*column, vec![IndicatorValue::Undefined; prices.len()])?;
        }
    } else {
        let daily = returns::daily_returns(&prices);
        let cumulative = returns::cumulative_returns(&daily);
        let ma = sma::moving_average(&prices, config.ma_window);
        let rsi = rsi::rsi(&prices, config.rsi_window);
        let macd = macd::macd(&prices, config.macd_fast, config.macd_slow, config.macd_signal);

        table.insert_column(Column::DailyReturn, daily)?;
        table.insert_column(Column::CumulativeReturn, cumulative)?;
        table.insert_column(Column::MovingAverage, ma)?;
        table.insert_column(Column::Rsi, rsi)?;
        table.insert_column(Column::EmaFast, macd.ema_fast)?;
        table.insert_column(Column::EmaSlow, macd.ema_slow)?;
        table.insert_column(Column::Macd, macd.macd)?;
        table.insert_column(Column::SignalLine, macd.signal)?;
    }

    for column in Column::ALL {
        let required = config.required_history(column);
        if prices.len() < required {
            logger.warn(&format!(
                "{} needs {} points but {} has {}; column is entirely undefined",
                column,
                required,
                series.symbol(),
                prices.len()
            ));
            table.record_shortfall(Shortfall {
                column,
                required,
                available: prices.len(),
            });
        }
    }

    logger.debug(&format!(
        "{}: {} points, {} missing prices, {} short columns",
        series.symbol(),
        series.len(),
        series.missing_prices(),
        table.shortfalls().len()
    ));
    timer.log_elapsed();

    Ok(table)
}
