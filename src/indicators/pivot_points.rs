// src/indicators/pivot_points.rs
use crate::models::{PivotLevels, SessionPrices};

pub const LEVEL_COUNT: usize = 5;

/// Fibonacci scaling factors, nearest level first.
pub const FIB_RATIOS: [f64; LEVEL_COUNT] = [0.382, 0.618, 1.000, 1.382, 1.618];

/// Fibonacci pivot calculator. Stateless; every ladder uses `FIB_RATIOS`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FibonacciPivots;

impl FibonacciPivots {
    pub fn new() -> Self {
        Self
    }

    /// Derive the pivot and the support/resistance ladders for one session.
    ///
    /// No validation happens here: a negative range (high below low) yields
    /// support levels above resistance levels, and non-finite inputs flow
    /// through to the output.
    pub fn calculate(&self, prices: &SessionPrices) -> PivotLevels {
        let pivot_point = prices.typical_price();
        let range = prices.range();

        let support_levels = FIB_RATIOS.map(|ratio| pivot_point - range * ratio);
        let resistance_levels = FIB_RATIOS.map(|ratio| pivot_point + range * ratio);

        PivotLevels {
            pivot_point,
            support_levels,
            resistance_levels,
        }
    }
}

/// Shorthand for `FibonacciPivots.calculate(..)` on raw prices.
pub fn compute(high: f64, low: f64, close: f64) -> PivotLevels {
    FibonacciPivots.calculate(&SessionPrices::new(high, low, close))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratios_are_ascending() {
        assert!(FIB_RATIOS.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(FIB_RATIOS[2], 1.0);
    }

    #[test]
    fn compute_matches_calculator() {
        let calc = FibonacciPivots::new();
        let prices = SessionPrices::new(42.5, 40.25, 41.0);
        assert_eq!(compute(42.5, 40.25, 41.0), calc.calculate(&prices));
    }

    #[test]
    fn nan_input_propagates() {
        let levels = compute(f64::NAN, 1.0, 1.0);
        assert!(levels.pivot_point.is_nan());
        assert!(levels.support_levels.iter().all(|v| v.is_nan()));
        assert!(levels.resistance_levels.iter().all(|v| v.is_nan()));
    }
}
