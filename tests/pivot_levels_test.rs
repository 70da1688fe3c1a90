// tests/pivot_levels_test.rs
use fib_pivots::indicators::{compute, FibonacciPivots, FIB_RATIOS};
use fib_pivots::models::SessionPrices;

const EPS: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {} but got {}",
        expected,
        actual
    );
}

#[test]
fn test_typical_session() {
    let levels = compute(110.0, 100.0, 105.0);

    assert_eq!(levels.pivot_point, 105.0);

    let expected_support = [101.18, 98.82, 95.0, 91.18, 88.82];
    let expected_resistance = [108.82, 111.18, 115.0, 118.82, 121.18];
    for i in 0..5 {
        assert_close(levels.support_levels[i], expected_support[i]);
        assert_close(levels.resistance_levels[i], expected_resistance[i]);
    }
}

#[test]
fn test_flat_session_collapses_to_pivot() {
    let levels = compute(50.0, 50.0, 50.0);
    assert_eq!(levels.pivot_point, 50.0);
    assert!(levels.support_levels.iter().all(|&v| v == 50.0));
    assert!(levels.resistance_levels.iter().all(|&v| v == 50.0));

    let zero = compute(0.0, 0.0, 0.0);
    assert_eq!(zero.pivot_point, 0.0);
    assert!(zero.support_levels.iter().chain(zero.resistance_levels.iter()).all(|&v| v == 0.0));
}

#[test]
fn test_zero_range_with_offset_close() {
    // Range is zero even though close differs, so every level sits on the pivot
    let levels = compute(20.0, 20.0, 26.0);
    assert_eq!(levels.pivot_point, 22.0);
    for i in 0..5 {
        assert_eq!(levels.support_levels[i], levels.pivot_point);
        assert_eq!(levels.resistance_levels[i], levels.pivot_point);
    }
}

#[test]
fn test_repeat_calls_are_bit_identical() {
    let inputs = [
        (110.0, 100.0, 105.0),
        (0.1, 0.07, 0.09),
        (65_432.1, 61_000.9, 63_210.0),
        (-3.0, -7.5, -4.2),
    ];
    for (high, low, close) in inputs {
        let first = compute(high, low, close);
        let second = compute(high, low, close);
        assert_eq!(first.pivot_point.to_bits(), second.pivot_point.to_bits());
        for i in 0..5 {
            assert_eq!(first.support_levels[i].to_bits(), second.support_levels[i].to_bits());
            assert_eq!(first.resistance_levels[i].to_bits(), second.resistance_levels[i].to_bits());
        }
    }
}

#[test]
fn test_levels_mirror_around_pivot() {
    let inputs = [(110.0, 100.0, 105.0), (1.2345, 1.2011, 1.2200), (95.0, 105.0, 99.0)];
    for (high, low, close) in inputs {
        let levels = compute(high, low, close);
        for i in 0..5 {
            let up = levels.resistance_levels[i] - levels.pivot_point;
            let down = levels.support_levels[i] - levels.pivot_point;
            assert_close(up, -down);
        }
    }
}

#[test]
fn test_unit_ratio_is_full_range() {
    let (high, low, close) = (87.25, 80.5, 84.0);
    let levels = compute(high, low, close);
    assert_eq!(FIB_RATIOS[2], 1.0);
    assert_eq!(levels.support_levels[2], levels.pivot_point - (high - low));
    assert_eq!(levels.resistance_levels[2], levels.pivot_point + (high - low));
}

#[test]
fn test_levels_follow_ratio_order() {
    let levels = compute(110.0, 100.0, 105.0);
    assert_eq!(levels.support_levels.len(), 5);
    assert_eq!(levels.resistance_levels.len(), 5);

    // Positive range: supports fall and resistances rise as the ratio grows
    assert!(levels.support_levels.windows(2).all(|w| w[0] > w[1]));
    assert!(levels.resistance_levels.windows(2).all(|w| w[0] < w[1]));

    let rows: Vec<_> = levels.levels().collect();
    assert_eq!(rows.len(), 5);
    for (row, &ratio) in rows.iter().zip(FIB_RATIOS.iter()) {
        assert_eq!(row.ratio, ratio);
        assert_close(row.resistance - row.support, 2.0 * 10.0 * ratio);
    }
}

#[test]
fn test_inverted_range_is_not_corrected() {
    let prices = SessionPrices::new(100.0, 110.0, 105.0);
    assert!(prices.is_inverted());
    assert_eq!(prices.range(), -10.0);

    let levels = FibonacciPivots::new().calculate(&prices);
    assert_eq!(levels.pivot_point, 105.0);
    for i in 0..5 {
        assert!(levels.support_levels[i] > levels.resistance_levels[i]);
    }
    assert_close(levels.support_levels[0], 108.82);
    assert_close(levels.resistance_levels[0], 101.18);
}

#[test]
fn test_calculator_matches_shorthand() {
    let calc = FibonacciPivots::new();
    let prices = SessionPrices::new(2050.0, 1987.5, 2011.25);
    assert_eq!(calc.calculate(&prices), compute(2050.0, 1987.5, 2011.25));
}

#[test]
fn test_infinite_input_propagates() {
    let levels = compute(f64::INFINITY, 1.0, 1.0);
    assert!(levels.pivot_point.is_infinite());
    // inf - inf * ratio is NaN; nothing is clamped
    assert!(levels.support_levels.iter().all(|v| !v.is_finite()));
}
