use serde::{Serialize, Serializer};

/// A single cell of a derived column.
///
/// `Undefined` marks warm-up positions and positions where the arithmetic has
/// no meaningful answer. `Saturated` marks a value pinned to the bound of its
/// range because the formula divided by zero (RSI with no losses).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IndicatorValue {
    Defined(f64),
    Undefined,
    Saturated(f64),
}

impl IndicatorValue {
    /// Wrap a computed number, turning NaN and infinities into `Undefined`.
    pub fn from_f64(value: f64) -> Self {
        if value.is_finite() {
            IndicatorValue::Defined(value)
        } else {
            IndicatorValue::Undefined
        }
    }

    pub fn from_option(value: Option<f64>) -> Self {
        value.map_or(IndicatorValue::Undefined, IndicatorValue::from_f64)
    }

    /// The plottable number: the value itself, or the bound for saturated cells.
    pub fn value(&self) -> Option<f64> {
        match *self {
            IndicatorValue::Defined(v) | IndicatorValue::Saturated(v) => Some(v),
            IndicatorValue::Undefined => None,
        }
    }

    pub fn is_defined(&self) -> bool {
        !matches!(self, IndicatorValue::Undefined)
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, IndicatorValue::Undefined)
    }

    pub fn is_saturated(&self) -> bool {
        matches!(self, IndicatorValue::Saturated(_))
    }
}

impl Serialize for IndicatorValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.value() {
            Some(v) => serializer.serialize_some(&v),
            None => serializer.serialize_none(),
        }
    }
}
