//! Star rating control used on the detail screen.

use crate::models::sample::MAX_RATING;

/// Interactive 1..=max star selector. Zero means "not rated".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingControl {
    value: u8,
    max: u8,
    read_only: bool,
}

impl Default for RatingControl {
    fn default() -> Self {
        Self::new(MAX_RATING as u8)
    }
}

impl RatingControl {
    pub fn new(max: u8) -> Self {
        Self {
            value: 0,
            max: max.max(1),
            read_only: false,
        }
    }

    /// A control that only displays `value`, rounded to whole stars
    pub fn display(value: f32, max: u8) -> Self {
        let max = max.max(1);
        let rounded = value.round().clamp(0.0, max as f32) as u8;
        Self {
            value: rounded,
            max,
            read_only: true,
        }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Selects `value` stars. Selecting the current value again clears the rating.
    /// Returns the new value when it changed.
    pub fn select(&mut self, value: u8) -> Option<u8> {
        if self.read_only || value == 0 || value > self.max {
            return None;
        }
        self.value = if self.value == value { 0 } else { value };
        Some(self.value)
    }

    pub fn increment(&mut self) -> Option<u8> {
        if self.read_only || self.value >= self.max {
            return None;
        }
        self.value += 1;
        Some(self.value)
    }

    pub fn decrement(&mut self) -> Option<u8> {
        if self.read_only || self.value == 0 {
            return None;
        }
        self.value -= 1;
        Some(self.value)
    }

    /// One flag per star, true when filled
    pub fn stars(&self) -> Vec<bool> {
        (1..=self.max).map(|i| i <= self.value).collect()
    }
}
