//! # stockscope-core - Technical indicators for daily price series
//!
//! A small, pure library featuring:
//! - Daily and cumulative returns
//! - Simple moving average and RSI over O(n) sliding windows
//! - EMA-based MACD with a signal line
//! - Chart layout policy for the computed columns
//!
//! No network, filesystem or UI code lives here.
//!
//! ## Quick Start
//!
//! ```rust
//! use stockscope_core::prelude::*;
//! use chrono::NaiveDate;
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let prices: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
//! let series = PriceSeries::from_prices("ACME", start, &prices);
//!
//! let table = compute(&series, &IndicatorConfig::default()).unwrap();
//! assert_eq!(table.value_at(Column::MovingAverage, 59).value(), Some(134.5));
//!
//! let layout = build_layout(&table, PanelSelection::technical(true)).unwrap();
//! assert_eq!(layout.panels.len(), 3);
//! ```

pub mod error;
pub mod indicators;
pub mod layout;
pub mod models;
pub mod utils;

pub use error::{Error, Result};

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! ```rust
    //! use stockscope_core::prelude::*;
    //! ```

    pub use crate::error::{Error, Result};
    pub use crate::indicators::{compute, IndicatorConfig};
    pub use crate::layout::{build_layout, ChartDocument, ChartLayout, LayoutKind, PanelSelection};
    pub use crate::models::{Column, IndicatorTable, IndicatorValue, PricePoint, PriceSeries, Shortfall};
}

pub use utils::{Logger, Timer};
