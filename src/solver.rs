//! Single entry point: eliminate, classify, return the trace

use crate::algorithm::{Classification, classify, eliminate};
use crate::dtype::Element;
use crate::error::Result;
use crate::matrix::Matrix;
use crate::trace::{StepRecorder, StepTrace};

/// Outcome of [`solve`]
///
/// Solvability is carried as data. For [`Classification::Unique`] the trace
/// has no terminal marker; otherwise the marker is its final entry.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "T: crate::dtype::Element + serde::Serialize",
        deserialize = "T: crate::dtype::Element + serde::Deserialize<'de>"
    ))
)]
pub struct Solution<T> {
    /// The matrix in echelon form
    pub matrix: Matrix<T>,
    /// Every swap and column pass, in order, plus the terminal marker
    pub trace: StepTrace<T>,
    /// Solvability read off the final matrix
    pub classification: Classification,
}

/// Reduce `matrix` to echelon form, recording each step, and classify it
///
/// # Example
///
/// ```
/// use echelon::prelude::*;
///
/// let m = Matrix::from_rows(vec![
///     vec![1.0, 1.0, -1.0, 1.0],
///     vec![3.0, -1.0, 5.0, 3.0],
///     vec![7.0, 2.0, 3.0, 7.0],
/// ])?;
/// let solution = solve(m);
///
/// assert_eq!(solution.classification, Classification::Infinite);
/// assert_eq!(solution.trace.final_marker_text(), Some("Infinite solutions"));
/// # Ok::<(), echelon::error::Error>(())
/// ```
pub fn solve<T: Element>(mut matrix: Matrix<T>) -> Solution<T> {
    let span = tracing::debug_span!("solve", rows = matrix.rows(), cols = matrix.cols());
    let _guard = span.enter();

    let mut recorder = StepRecorder::new();
    eliminate(&mut matrix, &mut recorder);

    let classification = classify(&matrix);
    let trace = recorder.finish(classification.marker());
    tracing::debug!(%classification, steps = trace.len(), "solved");

    Solution {
        matrix,
        trace,
        classification,
    }
}

/// Validate `rows` as a [`Matrix`] and [`solve`] it
pub fn solve_rows<T: Element>(rows: Vec<Vec<T>>) -> Result<Solution<T>> {
    Matrix::from_rows(rows).map(solve)
}
