//! Integration tests for solve
//!
//! Tests verify:
//! - Classification of unique, inconsistent and underdetermined systems
//! - Terminal markers close the trace, and only for non-unique systems
//! - Swap selection: only on an exact zero pivot, always the first candidate
//! - Combination steps annotate every row
//! - Echelon form is a fixed point of solve

use echelon::prelude::*;

mod common;

use common::{
    assert_allclose_f64, assert_upper_triangular, back_substitute, infinite, matrix, no_solution,
    unique_4x3, unique_with_swap,
};

// ============================================================================
// Classification
// ============================================================================

#[test]
fn test_unique_is_upper_triangular() {
    let solution = solve(unique_4x3());

    assert_eq!(solution.classification, Classification::Unique);
    assert_eq!(solution.trace.marker(), None);
    assert_eq!(solution.trace.final_marker_text(), None);
    assert_upper_triangular(&solution.matrix, "unique_4x3");

    let x = back_substitute(&solution.matrix);
    assert_allclose_f64(&x, &[-2.0, -1.0, 4.0], 1e-12, 1e-12, "unique_4x3 solution");
}

#[test]
fn test_unique_with_swap_is_upper_triangular() {
    let solution = solve(unique_with_swap());

    assert_eq!(solution.classification, Classification::Unique);
    assert_upper_triangular(&solution.matrix, "unique_with_swap");

    // 2x + y - 3z = -5, x + y/2 + 2z = 4.5, 7x - 2y + 3z = 37
    let x = back_substitute(&solution.matrix);
    assert_allclose_f64(&x, &[3.0, -5.0, 2.0], 1e-12, 1e-12, "unique_with_swap solution");
}

#[test]
fn test_no_solution_marker() {
    let solution = solve(no_solution());

    assert_eq!(solution.classification, Classification::NoSolution);
    assert_eq!(solution.trace.final_marker_text(), Some("No solution"));
    assert_eq!(solution.matrix.row(3), &[0.0, 0.0, 0.0, 1496.0]);
}

#[test]
fn test_infinite_marker() {
    let solution = solve(infinite());

    assert_eq!(solution.classification, Classification::Infinite);
    assert_eq!(solution.trace.final_marker_text(), Some("Infinite solutions"));
    assert!(solution.matrix.is_zero_row(2));
}

#[test]
fn test_marker_is_last_entry() {
    let solution = solve(no_solution());
    let last = solution.trace.entries().last().unwrap();
    assert!(matches!(last, echelon::trace::TraceEntry::Marker(Marker::NoSolution)));
    assert_eq!(solution.trace.entries().count(), solution.trace.len() + 1);
}

#[test]
fn test_consistent_redundant_rows_stay_unique() {
    // Second row is twice the first, third pins the other unknown
    let solution = solve(matrix(&[&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0], &[0.0, 1.0, 1.0]]));
    assert_eq!(solution.classification, Classification::Unique);
}

#[test]
fn test_solve_rows_validates_shape() {
    let err = solve_rows(vec![vec![1.0, 2.0, 3.0], vec![1.0]]).unwrap_err();
    assert!(matches!(err, Error::RaggedRow { row: 2, .. }));

    let solution = solve_rows(vec![vec![2.0, 4.0]]).unwrap();
    assert_eq!(solution.classification, Classification::Unique);
    assert!(solution.trace.is_empty());
}

// ============================================================================
// Swaps
// ============================================================================

#[test]
fn test_swap_only_on_exact_zero_pivot() {
    let solution = solve(unique_with_swap());
    let swaps: Vec<_> = solution
        .trace
        .steps()
        .iter()
        .filter(|s| s.description().starts_with("Swap"))
        .map(|s| s.description())
        .collect();
    assert_eq!(swaps, vec!["Swap R2 with R3."]);

    for m in [unique_4x3(), no_solution(), infinite()] {
        let solution = solve(m);
        assert!(
            solution
                .trace
                .steps()
                .iter()
                .all(|s| !s.description().starts_with("Swap"))
        );
    }
}

#[test]
fn test_swap_partner_is_lowest_candidate() {
    let solution = solve(matrix(&[
        &[0.0, 1.0, 1.0],
        &[0.0, 2.0, 2.0],
        &[3.0, 1.0, 1.0],
        &[4.0, 1.0, 1.0],
    ]));
    let first = &solution.trace.steps()[0];
    assert_eq!(first.description(), "Swap R1 with R3.");
    assert!(first.annotations().is_empty());
    assert_eq!(first.snapshot().row(0), &[3.0, 1.0, 1.0]);
    assert_eq!(first.snapshot().row(2), &[0.0, 1.0, 1.0]);
}

// ============================================================================
// Annotations
// ============================================================================

#[test]
fn test_combination_annotates_every_row() {
    for m in [unique_4x3(), unique_with_swap(), no_solution(), infinite()] {
        let rows = m.rows();
        let solution = solve(m);
        for step in solution.trace.steps() {
            if step.description().starts_with("Use") {
                assert_eq!(step.annotations().len(), rows);
            }
        }
    }
}

#[test]
fn test_skipped_row_is_blank() {
    let solution = solve(no_solution());
    let first = &solution.trace.steps()[0];

    assert_eq!(first.description(), "Use R1 to eliminate column.");
    // R2 already has a zero in column 0
    assert_eq!(first.annotations(), &["", "", "2R3 + 3R1", "2R4 - R1"]);
}

#[test]
fn test_annotation_sign_and_omission() {
    let solution = solve(infinite());
    let steps = solution.trace.steps();

    // Pivot 1 is omitted, sources 3 and 7 are kept
    assert_eq!(steps[0].annotations(), &["", "R2 - 3R1", "R3 - 7R1"]);
    // Negative source flips the sign, negative pivot is printed
    assert_eq!(steps[1].annotations(), &["", "", "-4R3 + 5R2"]);
}

// ============================================================================
// Fixed point
// ============================================================================

#[test]
fn test_echelon_form_is_fixed_point() {
    for m in [unique_4x3(), unique_with_swap()] {
        let first = solve(m);
        assert_eq!(first.classification, Classification::Unique);

        let second = solve(first.matrix.clone());
        assert!(second.trace.is_empty());
        assert_eq!(second.classification, Classification::Unique);
        assert_eq!(second.matrix, first.matrix);
    }
}

#[test]
fn test_f32_system_matches_f64() {
    let narrow = Matrix::from_rows(vec![
        vec![5.0f32, -3.0, 2.0, 1.0],
        vec![-1.0, 3.0, 0.0, -1.0],
        vec![3.0, 2.0, 2.0, 0.0],
        vec![2.0, 0.0, 3.0, 8.0],
    ])
    .unwrap();

    let narrow_solution = solve(narrow);
    let wide_solution = solve(unique_4x3());

    assert_eq!(narrow_solution.classification, wide_solution.classification);
    let widened: Vec<f64> = narrow_solution.matrix.as_slice().iter().map(|&v| v as f64).collect();
    assert_eq!(widened, wide_solution.matrix.as_slice());
    for (a, b) in narrow_solution.trace.steps().iter().zip(wide_solution.trace.steps()) {
        assert_eq!(a.annotations(), b.annotations());
    }
}

// ============================================================================
// Entry growth
// ============================================================================

#[test]
fn test_diagonally_dominant_6x7_solves() {
    // Pivots reach ~3.7e33 by the last column, well past i64
    let rows: Vec<Vec<f64>> = (0..6)
        .map(|i| {
            (0..7)
                .map(|j| if i == j { 25.0 } else { ((i * 7 + j * 3) % 5) as f64 - 2.0 })
                .collect()
        })
        .collect();
    let solution = solve_rows(rows).unwrap();

    assert_eq!(solution.classification, Classification::Unique);
    assert_eq!(solution.trace.final_marker_text(), None);
    assert_upper_triangular(&solution.matrix, "dominant 6x7");
    assert!(solution.matrix.as_slice().iter().all(|v| v.is_finite()));
}

#[test]
fn test_nan_input_classifies_as_infinite() {
    let solution = solve(parse_system("NaN,NaN,NaN").unwrap());
    assert_eq!(solution.classification, Classification::Infinite);
    assert_eq!(solution.trace.final_marker_text(), Some("Infinite solutions"));
}
