//! Common test utilities
#![allow(dead_code)]

use echelon::matrix::Matrix;

/// Square system with a unique solution `x = (-2, -1, 4)`, one redundant equation
pub fn unique_4x3() -> Matrix<f64> {
    matrix(&[
        &[5.0, -3.0, 2.0, 1.0],
        &[-1.0, 3.0, 0.0, -1.0],
        &[3.0, 2.0, 2.0, 0.0],
        &[2.0, 0.0, 3.0, 8.0],
    ])
}

/// Unique system that needs a swap in column 1
pub fn unique_with_swap() -> Matrix<f64> {
    matrix(&[
        &[2.0, 1.0, -3.0, -5.0],
        &[1.0, 0.5, 2.0, 4.5],
        &[7.0, -2.0, 3.0, 37.0],
    ])
}

/// Inconsistent system
pub fn no_solution() -> Matrix<f64> {
    matrix(&[
        &[2.0, -3.0, -1.0, 3.0],
        &[0.0, 4.0, -3.0, -1.0],
        &[-3.0, 1.0, 2.0, -1.0],
        &[1.0, -4.0, -5.0, -1.0],
    ])
}

/// Underdetermined system
pub fn infinite() -> Matrix<f64> {
    matrix(&[
        &[1.0, 1.0, -1.0, 1.0],
        &[3.0, -1.0, 5.0, 3.0],
        &[7.0, 2.0, 3.0, 7.0],
    ])
}

/// Build an f64 matrix from row literals
pub fn matrix(rows: &[&[f64]]) -> Matrix<f64> {
    Matrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
}

/// Assert every coefficient below the main diagonal is exactly zero
pub fn assert_upper_triangular(m: &Matrix<f64>, msg: &str) {
    for r in 0..m.rows() {
        for c in 0..r.min(m.unknowns()) {
            assert!(
                m[(r, c)] == 0.0,
                "{}: entry ({}, {}) is {}, expected 0",
                msg,
                r,
                c,
                m[(r, c)]
            );
        }
    }
}

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Back-substitute an upper-triangular square block, for checking results only
///
/// Rows past the last unknown are ignored.
pub fn back_substitute(m: &Matrix<f64>) -> Vec<f64> {
    let n = m.unknowns();
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let mut acc = m.rhs(i);
        for j in (i + 1)..n {
            acc -= m[(i, j)] * x[j];
        }
        x[i] = acc / m[(i, i)];
    }
    x
}
