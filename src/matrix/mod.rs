//! Augmented matrix type
//!
//! A [`Matrix`] is the `[A | b]` form of a linear system: `rows` equations
//! over `cols - 1` unknowns, with the right-hand side in the last column.

use crate::dtype::Element;
use crate::error::{Error, Result};
use std::fmt;
use std::ops::Index;

/// Dense row-major augmented matrix
///
/// Construction validates the shape once: at least one row, at least two
/// columns, and every row the same length. With the `serde` feature a matrix
/// is (de)serialized as its list of rows, and deserialization goes through
/// the same checks. After that the matrix is only
/// reshaped by row swaps and row combinations, which preserve the shape.
///
/// # Example
///
/// ```
/// use echelon::matrix::Matrix;
///
/// let m = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])?;
/// assert_eq!(m.unknowns(), 2);
/// assert_eq!(m[(1, 2)], 6.0);
/// # Ok::<(), echelon::error::Error>(())
/// ```
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "Vec<Vec<T>>",
        into = "Vec<Vec<T>>",
        bound(
            serialize = "T: Element + serde::Serialize",
            deserialize = "T: Element + serde::Deserialize<'de>"
        )
    )
)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Element> Matrix<T> {
    /// Build a matrix from a sequence of rows
    ///
    /// Returns an error if there are no rows, fewer than two columns, or if
    /// any row's length differs from the first row's.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(Error::EmptyMatrix);
        };
        let cols = first.len();
        if cols < 2 {
            return Err(Error::TooFewColumns { cols });
        }

        let n_rows = rows.len();
        let mut data = Vec::with_capacity(n_rows * cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(Error::ragged(i, cols, row.len()));
            }
            data.extend(row);
        }

        Ok(Self {
            data,
            rows: n_rows,
            cols,
        })
    }

    /// Build a matrix from row-major data and a column count
    pub fn from_slice(data: &[T], cols: usize) -> Result<Self> {
        if cols < 2 {
            return Err(Error::TooFewColumns { cols });
        }
        if data.is_empty() {
            return Err(Error::EmptyMatrix);
        }
        if data.len() % cols != 0 {
            let full_rows = data.len() / cols;
            return Err(Error::ragged(full_rows, cols, data.len() % cols));
        }

        Ok(Self {
            data: data.to_vec(),
            rows: data.len() / cols,
            cols,
        })
    }

    /// Number of rows (equations)
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, including the right-hand side
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of unknowns (`cols - 1`)
    #[inline]
    pub fn unknowns(&self) -> usize {
        self.cols - 1
    }

    /// Entry at row `r`, column `c`
    #[inline]
    pub fn get(&self, r: usize, c: usize) -> T {
        self.data[r * self.cols + c]
    }

    /// Row `r` as a slice
    #[inline]
    pub fn row(&self, r: usize) -> &[T] {
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    /// Iterate over rows
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks_exact(self.cols)
    }

    /// Coefficient part of row `r` (everything but the right-hand side)
    #[inline]
    pub fn coefficients(&self, r: usize) -> &[T] {
        &self.row(r)[..self.cols - 1]
    }

    /// Right-hand side of row `r`
    #[inline]
    pub fn rhs(&self, r: usize) -> T {
        self.get(r, self.cols - 1)
    }

    /// Whether every entry of row `r`, right-hand side included, is zero
    pub fn is_zero_row(&self, r: usize) -> bool {
        self.row(r).iter().all(|v| v.is_zero())
    }

    /// Exchange rows `i` and `j` in place
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        for c in 0..self.cols {
            self.data.swap(i * self.cols + c, j * self.cols + c);
        }
    }

    /// Replace row `target` with `row[target] * target_factor - row[source] * source_factor`
    pub fn combine_rows(&mut self, target: usize, source: usize, target_factor: T, source_factor: T) {
        let n = self.cols;
        for c in 0..n {
            let t = self.data[target * n + c];
            let s = self.data[source * n + c];
            self.data[target * n + c] = t * target_factor - s * source_factor;
        }
    }

    /// Row-major view of all entries
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the matrix, returning its rows
    pub fn into_rows(self) -> Vec<Vec<T>> {
        self.data
            .chunks_exact(self.cols)
            .map(<[T]>::to_vec)
            .collect()
    }
}

impl<T: Element> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (r, c): (usize, usize)) -> &T {
        &self.data[r * self.cols + c]
    }
}

impl<T: fmt::Debug> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("shape", &[self.rows, self.cols])
            .field("rows", &self.data.chunks_exact(self.cols).collect::<Vec<_>>())
            .finish()
    }
}

impl<T: Element> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let (lhs, rhs) = row.split_at(self.cols - 1);
            for (j, v) in lhs.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", v.canonical())?;
            }
            write!(f, " | {}", rhs[0].canonical())?;
        }
        Ok(())
    }
}

impl<T: Element> From<Matrix<T>> for Vec<Vec<T>> {
    fn from(matrix: Matrix<T>) -> Self {
        matrix.into_rows()
    }
}

impl<T: Element> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = Error;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}
