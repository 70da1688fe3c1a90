// src/models/mod.rs
use serde::{Deserialize, Serialize};

use crate::indicators::{FIB_RATIOS, LEVEL_COUNT};

/// High, low and close of a single trading session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionPrices {
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl SessionPrices {
    pub fn new(high: f64, low: f64, close: f64) -> Self {
        Self { high, low, close }
    }

    /// High minus low. Negative when the inputs are inverted.
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }

    pub fn is_inverted(&self) -> bool {
        self.high < self.low
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PivotLevels {
    pub pivot_point: f64,
    pub support_levels: [f64; LEVEL_COUNT],
    pub resistance_levels: [f64; LEVEL_COUNT],
}

/// One rung of the ladder: the ratio with its support and resistance prices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelRow {
    pub ratio: f64,
    pub support: f64,
    pub resistance: f64,
}

impl PivotLevels {
    // Rows follow FIB_RATIOS order
    pub fn levels(&self) -> impl Iterator<Item = LevelRow> + '_ {
        FIB_RATIOS
            .iter()
            .zip(self.support_levels.iter().zip(self.resistance_levels.iter()))
            .map(|(&ratio, (&support, &resistance))| LevelRow {
                ratio,
                support,
                resistance,
            })
    }
}
