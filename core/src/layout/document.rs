use chrono::NaiveDate;
use serde::Serialize;

use super::{ChartLayout, LayoutKind, LineStyle, ThresholdLine};
use crate::error::Result;
use crate::models::{Column, IndicatorTable, IndicatorValue};

/// A layout joined with the values it plots, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDocument {
    pub symbol: String,
    pub kind: LayoutKind,
    pub dates: Vec<NaiveDate>,
    pub panels: Vec<PanelData>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelData {
    pub title: String,
    pub series: Vec<SeriesData>,
    pub thresholds: Vec<ThresholdLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesData {
    pub column: Column,
    pub label: String,
    pub style: LineStyle,
    pub color: Option<&'static str>,
    /// Aligned with `ChartDocument::dates`; `null` where undefined.
    pub values: Vec<IndicatorValue>,
}

impl SeriesData {
    pub fn defined(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().filter_map(IndicatorValue::value)
    }

    pub fn latest(&self) -> Option<f64> {
        self.values.iter().rev().find_map(IndicatorValue::value)
    }

    pub fn min(&self) -> Option<f64> {
        self.defined().reduce(f64::min)
    }

    pub fn max(&self) -> Option<f64> {
        self.defined().reduce(f64::max)
    }
}

impl ChartDocument {
    pub fn materialize(layout: &ChartLayout, table: &IndicatorTable) -> Result<Self> {
        let layout_name = layout.kind.as_str();
        let mut panels = Vec::with_capacity(layout.panels.len());

        for panel in &layout.panels {
            let mut series = Vec::with_capacity(panel.series.len());
            for spec in &panel.series {
                let values = table.require(spec.column, layout_name)?;
                series.push(SeriesData {
                    column: spec.column,
                    label: spec.label.clone(),
                    style: spec.style,
                    color: spec.color,
                    values: values.to_vec(),
                });
            }
            panels.push(PanelData {
                title: panel.title.clone(),
                series,
                thresholds: panel.thresholds.clone(),
            });
        }

        Ok(Self {
            symbol: layout.title.clone(),
            kind: layout.kind,
            dates: table.dates().to_vec(),
            panels,
        })
    }

    pub fn series(&self, column: Column) -> Option<&SeriesData> {
        self.panels
            .iter()
            .flat_map(|p| p.series.iter())
            .find(|s| s.column == column)
    }
}
