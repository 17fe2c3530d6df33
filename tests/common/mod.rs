#![allow(dead_code)]

pub fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.12} got {actual:.12} (diff {diff:e}, tol {rel_tol})"
    );
}

pub fn assert_finite_positive(label: &str, value: f64) {
    assert!(
        value.is_finite() && value > 0.0,
        "{label} should be finite and positive, got {value}"
    );
}
