//! Solvability classification of an eliminated system

use crate::dtype::Element;
use crate::matrix::Matrix;
use crate::trace::Marker;
use std::fmt;

/// Solvability of a linear system, read off its echelon form
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Classification {
    /// Exactly one solution
    Unique,
    /// Inconsistent: some row reads `0 = b` with `b != 0`
    NoSolution,
    /// Consistent but underdetermined
    Infinite,
}

impl Classification {
    /// Terminal trace marker for this outcome; `None` for [`Classification::Unique`]
    pub fn marker(self) -> Option<Marker> {
        match self {
            Classification::Unique => None,
            Classification::NoSolution => Some(Marker::NoSolution),
            Classification::Infinite => Some(Marker::Infinite),
        }
    }

    /// Whether the system has exactly one solution
    pub fn is_unique(self) -> bool {
        self == Classification::Unique
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Unique => f.write_str("Unique solution"),
            Classification::NoSolution => f.write_str(Marker::NoSolution.text()),
            Classification::Infinite => f.write_str(Marker::Infinite.text()),
        }
    }
}

/// Classify a matrix that has been through [`eliminate`](super::eliminate)
///
/// Checks run in order and the first hit wins:
///
/// 1. A row with all-zero coefficients and a nonzero right-hand side means
///    [`Classification::NoSolution`].
/// 2. Fewer rows with a nonzero, non-NaN entry than unknowns means
///    [`Classification::Infinite`].
/// 3. Otherwise [`Classification::Unique`].
///
/// The checks only look at row shapes. A column left un-eliminated after a
/// failed pivot search is not inspected further, so an inconsistent system whose
/// rows all stay nonzero can still classify as unique.
pub fn classify<T: Element>(matrix: &Matrix<T>) -> Classification {
    let inconsistent = (0..matrix.rows()).find(|&r| {
        !matrix.rhs(r).is_zero() && matrix.coefficients(r).iter().all(|v| v.is_zero())
    });
    if let Some(r) = inconsistent {
        tracing::debug!(row = r + 1, "inconsistent row");
        return Classification::NoSolution;
    }

    // NaN carries no information, so it does not make a row independent
    let nonzero_rows = (0..matrix.rows())
        .filter(|&r| matrix.row(r).iter().any(|v| !v.is_zero() && !v.is_nan()))
        .count();
    if nonzero_rows < matrix.unknowns() {
        tracing::debug!(nonzero_rows, unknowns = matrix.unknowns(), "underdetermined");
        return Classification::Infinite;
    }

    Classification::Unique
}
