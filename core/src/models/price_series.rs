use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One trading day as delivered by a price provider.
///
/// Every price is optional because upstream data is sometimes incomplete; the
/// engine only reads `adj_close`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub adj_close: Option<f64>,
    pub volume: Option<u64>,
}

impl PricePoint {
    /// Point carrying only an adjusted close, mostly for tests and fixtures.
    pub fn adjusted(date: NaiveDate, adj_close: f64) -> Self {
        Self {
            date,
            open: None,
            high: None,
            low: None,
            close: None,
            adj_close: Some(adj_close),
            volume: None,
        }
    }

    /// Adjusted close if it is present and finite.
    pub fn price(&self) -> Option<f64> {
        self.adj_close.filter(|p| p.is_finite())
    }
}

/// Daily observations for a single instrument, strictly ordered by date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    symbol: String,
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build a series, rejecting duplicate or out-of-order dates.
    pub fn new(symbol: impl Into<String>, points: Vec<PricePoint>) -> Result<Self> {
        for pair in points.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(Error::UnorderedDates {
                    previous: pair[0].date,
                    next: pair[1].date,
                });
            }
        }
        Ok(Self {
            symbol: symbol.into(),
            points,
        })
    }

    /// Sort rows by date and keep the last row for any repeated date.
    ///
    /// Providers occasionally repeat the final session when a request spans
    /// an in-progress day.
    pub fn from_unsorted(symbol: impl Into<String>, mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|p| p.date);
        let mut deduped: Vec<PricePoint> = Vec::with_capacity(points.len());
        for point in points {
            match deduped.last_mut() {
                Some(last) if last.date == point.date => *last = point,
                _ => deduped.push(point),
            }
        }
        Self {
            symbol: symbol.into(),
            points: deduped,
        }
    }

    /// Series from bare adjusted closes on consecutive calendar days.
    pub fn from_prices(symbol: impl Into<String>, start: NaiveDate, prices: &[f64]) -> Self {
        let points = prices
            .iter()
            .zip(start.iter_days())
            .map(|(&p, date)| PricePoint::adjusted(date, p))
            .collect();
        Self {
            symbol: symbol.into(),
            points,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    pub fn adj_closes(&self) -> Vec<Option<f64>> {
        self.points.iter().map(PricePoint::price).collect()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }

    /// Number of positions whose adjusted close is missing.
    pub fn missing_prices(&self) -> usize {
        self.points.iter().filter(|p| p.price().is_none()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_rejects_out_of_order_dates() {
        let points = vec![PricePoint::adjusted(day(2), 10.0), PricePoint::adjusted(day(1), 11.0)];
        let err = PriceSeries::new("AAPL", points).unwrap_err();
        assert_eq!(err, Error::UnorderedDates { previous: day(2), next: day(1) });
    }

    #[test]
    fn test_rejects_duplicate_dates() {
        let points = vec![PricePoint::adjusted(day(2), 10.0), PricePoint::adjusted(day(2), 11.0)];
        assert!(PriceSeries::new("AAPL", points).is_err());
    }

    #[test]
    fn test_from_unsorted_sorts_and_keeps_last_duplicate() {
        let points = vec![
            PricePoint::adjusted(day(3), 12.0),
            PricePoint::adjusted(day(1), 10.0),
            PricePoint::adjusted(day(3), 13.0),
        ];
        let series = PriceSeries::from_unsorted("AAPL", points);
        assert_eq!(series.dates(), vec![day(1), day(3)]);
        assert_eq!(series.adj_closes(), vec![Some(10.0), Some(13.0)]);
        assert_eq!(series.first_date(), Some(day(1)));
        assert_eq!(series.last_date(), Some(day(3)));
        assert_eq!(PriceSeries::from_unsorted("AAPL", Vec::new()).first_date(), None);
    }

    #[test]
    fn test_non_finite_price_counts_as_missing() {
        let mut point = PricePoint::adjusted(day(1), f64::NAN);
        assert_eq!(point.price(), None);
        point.adj_close = None;
        let series = PriceSeries::new("X", vec![point, PricePoint::adjusted(day(2), 1.0)]).unwrap();
        assert_eq!(series.missing_prices(), 1);
    }
}
