//! Sliding-window mean with O(1) add/evict.
//!
//! The accumulator keeps a running sum of the values currently in the window
//! plus two counters: how many members are missing and how many are non-zero.
//! A window containing a missing member has no mean. When the non-zero count
//! drops to zero the sum is reset to exactly `0.0`, so a window of zeros never
//! reports a residue left over from earlier additions and subtractions.

use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct RollingMean {
    window: usize,
    buffer: VecDeque<Option<f64>>,
    sum: f64,
    missing: usize,
    nonzero: usize,
}

impl RollingMean {
    /// `window` must be at least 1; callers validate it through `IndicatorConfig`.
    pub fn new(window: usize) -> Self {
        Self {
            window,
            buffer: VecDeque::with_capacity(window),
            sum: 0.0,
            missing: 0,
            nonzero: 0,
        }
    }

    /// Slide the window forward by one value and return the new mean, if any.
    pub fn push(&mut self, value: Option<f64>) -> Option<f64> {
        if self.buffer.len() == self.window {
            self.evict();
        }

        match value.filter(|v| v.is_finite()) {
            Some(v) => {
                self.sum += v;
                if v != 0.0 {
                    self.nonzero += 1;
                }
                self.buffer.push_back(Some(v));
            }
            None => {
                self.missing += 1;
                self.buffer.push_back(None);
            }
        }

        if self.nonzero == 0 {
            self.sum = 0.0;
        }

        self.mean()
    }

    /// Mean of a full window with no missing members.
    pub fn mean(&self) -> Option<f64> {
        if self.is_full() && self.missing == 0 {
            Some(self.sum / self.window as f64)
        } else {
            None
        }
    }

    pub fn is_full(&self) -> bool {
        self.buffer.len() == self.window
    }

    fn evict(&mut self) {
        match self.buffer.pop_front() {
            Some(Some(v)) => {
                self.sum -= v;
                if v != 0.0 {
                    self.nonzero -= 1;
                }
            }
            Some(None) => self.missing -= 1,
            None => {}
        }
    }
}
