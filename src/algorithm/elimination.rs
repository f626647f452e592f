//! Fraction-free forward elimination

use crate::dtype::Element;
use crate::matrix::Matrix;
use crate::trace::{Step, StepRecorder, TraceSink};

/// A structural change applied to the matrix during elimination
///
/// The engine hands `Combine` and `Skip` to [`TraceSink::column_eliminated`]
/// as a batch per column. Swaps are reported one at a time through
/// [`TraceSink::swapped`] with plain row indices; `Swap` exists so that the
/// trace model (and sinks that keep a flat operation log) can name all three
/// kinds of change with one type.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operation<T> {
    /// Rows `i` and `j` exchanged
    Swap {
        /// Pivot row
        i: usize,
        /// Row brought up into the pivot position
        j: usize,
    },
    /// `R[target] = R[target] * target_factor - R[source] * source_factor`
    Combine {
        /// Row being replaced
        target: usize,
        /// Pivot row
        source: usize,
        /// Pivot value at the time of the combination
        target_factor: T,
        /// Entry of `target` in the pivot column
        source_factor: T,
    },
    /// Row considered but left unchanged, its pivot-column entry is already zero
    Skip {
        /// Row left unchanged
        row: usize,
    },
}

/// Reduce `matrix` to echelon form in place, reporting every operation to `sink`
///
/// Columns `0..unknowns` are processed in ascending order. A zero pivot is
/// replaced by swapping in the first lower row with a nonzero entry in that
/// column; if there is none, the column is left as is. Columns past the last
/// row have no pivot and are skipped.
pub fn eliminate<T: Element, S: TraceSink<T>>(matrix: &mut Matrix<T>, sink: &mut S) {
    let rows = matrix.rows();
    // A pivot column needs a pivot row
    let pivots = matrix.unknowns().min(rows);

    for c in 0..pivots {
        if matrix.get(c, c).is_zero() {
            match find_swap_row(matrix, c) {
                Some(k) => {
                    matrix.swap_rows(c, k);
                    tracing::debug!(pivot = c + 1, with = k + 1, "swapped zero pivot");
                    sink.swapped(c, k, matrix);
                }
                None => {
                    tracing::debug!(pivot = c + 1, "zero pivot with no candidate, column left");
                }
            }
        }

        if !needs_elimination(matrix, c) {
            tracing::trace!(pivot = c + 1, "column already clear");
            continue;
        }

        let mut ops = Vec::with_capacity(rows - c - 1);
        for r in (c + 1)..rows {
            let target = matrix.get(c, c);
            let source = matrix.get(r, c);
            if source.is_zero() {
                ops.push(Operation::Skip { row: r });
                continue;
            }

            matrix.combine_rows(r, c, target, source);
            ops.push(Operation::Combine {
                target: r,
                source: c,
                target_factor: target,
                source_factor: source,
            });
        }

        tracing::debug!(
            pivot = c + 1,
            combined = ops.iter().filter(|op| matches!(op, Operation::Combine { .. })).count(),
            skipped = ops.iter().filter(|op| matches!(op, Operation::Skip { .. })).count(),
            "eliminated column"
        );
        sink.column_eliminated(c, &ops, matrix);
    }
}

/// Reduce `matrix` to echelon form in place and return the recorded steps
pub fn eliminate_with_steps<T: Element>(matrix: &mut Matrix<T>) -> Vec<Step<T>> {
    let mut recorder = StepRecorder::new();
    eliminate(matrix, &mut recorder);
    recorder.into_steps()
}

/// First row strictly below `c` with a nonzero entry in column `c`
fn find_swap_row<T: Element>(matrix: &Matrix<T>, c: usize) -> Option<usize> {
    ((c + 1)..matrix.rows()).find(|&r| !matrix.get(r, c).is_zero())
}

/// Whether any row strictly below `c` has a nonzero entry in column `c`
fn needs_elimination<T: Element>(matrix: &Matrix<T>, c: usize) -> bool {
    find_swap_row(matrix, c).is_some()
}
