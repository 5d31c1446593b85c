//! Presentation adapter: which panels to draw for a computed table.
//!
//! This module holds layout policy only. It never computes numbers; it checks
//! that the table carries every column a layout needs and describes the
//! panels. [`ChartDocument`] joins a layout with the table's values so a
//! renderer needs nothing else.

pub mod document;

pub use document::*;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Column, IndicatorTable};

pub const RSI_OVERBOUGHT: f64 = 70.0;
pub const RSI_OVERSOLD: f64 = 30.0;

/// Independent display flags for the technical panels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSelection {
    pub rsi: bool,
    pub macd: bool,
}

impl PanelSelection {
    /// Map the form's single "include technical panels" toggle onto both flags.
    pub fn technical(include: bool) -> Self {
        Self {
            rsi: include,
            macd: include,
        }
    }

    pub fn is_technical(&self) -> bool {
        self.rsi || self.macd
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    Default,
    Technical,
}

impl LayoutKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutKind::Default => "default",
            LayoutKind::Technical => "technical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    Solid,
    Dashed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSpec {
    pub column: Column,
    pub label: String,
    pub style: LineStyle,
    pub color: Option<&'static str>,
}

impl SeriesSpec {
    fn solid(column: Column, label: impl Into<String>, color: Option<&'static str>) -> Self {
        Self {
            column,
            label: label.into(),
            style: LineStyle::Solid,
            color,
        }
    }

    fn dashed(column: Column, label: impl Into<String>, color: &'static str) -> Self {
        Self {
            column,
            label: label.into(),
            style: LineStyle::Dashed,
            color: Some(color),
        }
    }
}

/// Horizontal reference line drawn across a panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdLine {
    pub value: f64,
    pub label: String,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub title: String,
    pub series: Vec<SeriesSpec>,
    pub thresholds: Vec<ThresholdLine>,
}

impl Panel {
    fn new(title: impl Into<String>, series: Vec<SeriesSpec>) -> Self {
        Self {
            title: title.into(),
            series,
            thresholds: Vec::new(),
        }
    }

    pub fn columns(&self) -> impl Iterator<Item = Column> + '_ {
        self.series.iter().map(|s| s.column)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLayout {
    pub kind: LayoutKind,
    pub title: String,
    pub panels: Vec<Panel>,
}

/// Pick the panels for `table`.
///
/// Without technical flags: price with moving-average overlay, then
/// cumulative returns. With either flag: the selected RSI and MACD panels,
/// then the price panel. Fails with `MissingColumn` when the table lacks a
/// column one of the chosen panels plots.
pub fn build_layout(table: &IndicatorTable, selection: PanelSelection) -> Result<ChartLayout> {
    let window = table.config().ma_window;

    let (kind, panels) = if selection.is_technical() {
        let mut panels = Vec::new();
        if selection.rsi {
            let mut panel = Panel::new(
                "Relative Strength Index (RSI)",
                vec![SeriesSpec::solid(Column::Rsi, "RSI", Some("blue"))],
            );
            panel.thresholds = vec![
                ThresholdLine {
                    value: RSI_OVERBOUGHT,
                    label: format!("Overbought ({})", RSI_OVERBOUGHT),
                    color: "red",
                },
                ThresholdLine {
                    value: RSI_OVERSOLD,
                    label: format!("Oversold ({})", RSI_OVERSOLD),
                    color: "green",
                },
            ];
            panels.push(panel);
        }
        if selection.macd {
            panels.push(Panel::new(
                "Moving Average Convergence Divergence (MACD)",
                vec![
                    SeriesSpec::solid(Column::Macd, "MACD", Some("purple")),
                    SeriesSpec::dashed(Column::SignalLine, "Signal Line", "orange"),
                ],
            ));
        }
        panels.push(Panel::new(
            "Stock Prices",
            vec![SeriesSpec::solid(Column::AdjClose, "Adjusted Close Price", None)],
        ));
        (LayoutKind::Technical, panels)
    } else {
        let panels = vec![
            Panel::new(
                format!("Stock Prices and {}-Day Moving Average", window),
                vec![
                    SeriesSpec::solid(Column::AdjClose, "Adjusted Close Price", None),
                    SeriesSpec::dashed(
                        Column::MovingAverage,
                        format!("{}-Day Moving Average", window),
                        "orange",
                    ),
                ],
            ),
            Panel::new(
                "Cumulative Returns",
                vec![SeriesSpec::solid(
                    Column::CumulativeReturn,
                    "Cumulative Returns",
                    Some("green"),
                )],
            ),
        ];
        (LayoutKind::Default, panels)
    };

    for panel in &panels {
        for column in panel.columns() {
            table.require(column, kind.as_str())?;
        }
    }

    Ok(ChartLayout {
        kind,
        title: table.symbol().to_string(),
        panels,
    })
}
