use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::indicators::IndicatorConfig;
use crate::models::{IndicatorValue, PriceSeries};

/// Named columns of an [`IndicatorTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Column {
    #[serde(rename = "Adj Close")]
    AdjClose,
    #[serde(rename = "Daily_Return")]
    DailyReturn,
    #[serde(rename = "Cumulative_Return")]
    CumulativeReturn,
    #[serde(rename = "MA")]
    MovingAverage,
    #[serde(rename = "RSI")]
    Rsi,
    #[serde(rename = "EMA_Fast")]
    EmaFast,
    #[serde(rename = "EMA_Slow")]
    EmaSlow,
    #[serde(rename = "MACD")]
    Macd,
    #[serde(rename = "Signal_Line")]
    SignalLine,
}

impl Column {
    pub const ALL: [Column; 9] = [
        Column::AdjClose,
        Column::DailyReturn,
        Column::CumulativeReturn,
        Column::MovingAverage,
        Column::Rsi,
        Column::EmaFast,
        Column::EmaSlow,
        Column::Macd,
        Column::SignalLine,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Column::AdjClose => "Adj Close",
            Column::DailyReturn => "Daily_Return",
            Column::CumulativeReturn => "Cumulative_Return",
            Column::MovingAverage => "MA",
            Column::Rsi => "RSI",
            Column::EmaFast => "EMA_Fast",
            Column::EmaSlow => "EMA_Slow",
            Column::Macd => "MACD",
            Column::SignalLine => "Signal_Line",
        }
    }

    /// Header used when the table is exported, with window sizes spelled out.
    pub fn header(&self, config: &IndicatorConfig) -> String {
        match self {
            Column::MovingAverage => format!("{}_MA", config.ma_window),
            Column::EmaFast => format!("EMA{}", config.macd_fast),
            Column::EmaSlow => format!("EMA{}", config.macd_slow),
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A column that could not produce any defined value because the series is
/// shorter than the history it needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shortfall {
    pub column: Column,
    pub required: usize,
    pub available: usize,
}

/// A price series augmented with derived columns aligned 1:1 by date.
///
/// Tables are built once per analysis and are read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorTable {
    symbol: String,
    dates: Vec<NaiveDate>,
    config: IndicatorConfig,
    columns: BTreeMap<Column, Vec<IndicatorValue>>,
    shortfalls: Vec<Shortfall>,
}

impl IndicatorTable {
    /// Table holding only the adjusted close column.
    pub fn from_series(series: &PriceSeries, config: IndicatorConfig) -> Self {
        let prices = series
            .adj_closes()
            .into_iter()
            .map(IndicatorValue::from_option)
            .collect();

        let mut columns = BTreeMap::new();
        columns.insert(Column::AdjClose, prices);

        Self {
            symbol: series.symbol().to_string(),
            dates: series.dates(),
            config,
            columns,
            shortfalls: Vec::new(),
        }
    }

    /// Attach a derived column; its length must equal the number of dates.
    pub fn insert_column(&mut self, column: Column, values: Vec<IndicatorValue>) -> Result<()> {
        if values.len() != self.dates.len() {
            return Err(Error::LengthMismatch {
                column,
                expected: self.dates.len(),
                actual: values.len(),
            });
        }
        self.columns.insert(column, values);
        Ok(())
    }

    pub(crate) fn record_shortfall(&mut self, shortfall: Shortfall) {
        self.shortfalls.push(shortfall);
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn get(&self, column: Column) -> Option<&[IndicatorValue]> {
        self.columns.get(&column).map(Vec::as_slice)
    }

    /// Column lookup that reports which layout needed the missing column.
    pub fn require(&self, column: Column, layout: &'static str) -> Result<&[IndicatorValue]> {
        self.get(column).ok_or(Error::MissingColumn { layout, column })
    }

    pub fn columns(&self) -> impl Iterator<Item = (Column, &[IndicatorValue])> {
        self.columns.iter().map(|(c, v)| (*c, v.as_slice()))
    }

    pub fn shortfalls(&self) -> &[Shortfall] {
        &self.shortfalls
    }

    /// Value of a column at a position, `Undefined` when either is absent.
    pub fn value_at(&self, column: Column, index: usize) -> IndicatorValue {
        self.get(column)
            .and_then(|values| values.get(index).copied())
            .unwrap_or(IndicatorValue::Undefined)
    }

    /// Most recent defined value of a column together with its date.
    pub fn latest(&self, column: Column) -> Option<(NaiveDate, f64)> {
        let values = self.get(column)?;
        values
            .iter()
            .zip(&self.dates)
            .rev()
            .find_map(|(v, d)| v.value().map(|v| (*d, v)))
    }

    /// True when every derived column is entirely undefined.
    pub fn all_derived_undefined(&self) -> bool {
        self.columns
            .iter()
            .filter(|(c, _)| **c != Column::AdjClose)
            .all(|(_, values)| values.iter().all(IndicatorValue::is_undefined))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(prices: &[f64]) -> PriceSeries {
        PriceSeries::from_prices("TEST", NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), prices)
    }

    #[test]
    fn test_insert_column_rejects_misaligned_values() {
        let mut table = IndicatorTable::from_series(&series(&[1.0, 2.0]), IndicatorConfig::default());
        let err = table
            .insert_column(Column::Rsi, vec![IndicatorValue::Undefined])
            .unwrap_err();
        assert_eq!(
            err,
            Error::LengthMismatch { column: Column::Rsi, expected: 2, actual: 1 }
        );
    }

    #[test]
    fn test_require_reports_missing_column() {
        let table = IndicatorTable::from_series(&series(&[1.0]), IndicatorConfig::default());
        assert!(table.require(Column::AdjClose, "default").is_ok());
        assert_eq!(
            table.require(Column::Macd, "technical").unwrap_err(),
            Error::MissingColumn { layout: "technical", column: Column::Macd }
        );
    }

    #[test]
    fn test_latest_skips_trailing_undefined() {
        let mut table = IndicatorTable::from_series(&series(&[1.0, 2.0, 3.0]), IndicatorConfig::default());
        table
            .insert_column(
                Column::Rsi,
                vec![IndicatorValue::Undefined, IndicatorValue::Defined(40.0), IndicatorValue::Undefined],
            )
            .unwrap();
        let (date, value) = table.latest(Column::Rsi).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(value, 40.0);
    }

    #[test]
    fn test_header_spells_out_windows() {
        let config = IndicatorConfig::default();
        assert_eq!(Column::MovingAverage.header(&config), "50_MA");
        assert_eq!(Column::EmaFast.header(&config), "EMA12");
        assert_eq!(Column::SignalLine.header(&config), "Signal_Line");
    }
}
