pub mod pivot_points;

pub use pivot_points::{compute, FibonacciPivots, FIB_RATIOS, LEVEL_COUNT};
