//! # echelon
//!
//! **Fraction-free forward elimination with a replayable step trace.**
//!
//! echelon reduces an augmented matrix `[A | b]` to row-echelon form, records
//! every row swap and row combination it performs, and classifies the
//! system as having a unique solution, no solution, or infinitely many.
//!
//! ## What it does
//!
//! - **Forward elimination only**: no back-substitution, no pivot
//!   normalisation, rows above the pivot are never touched
//! - **Fraction-free**: rows are combined as `R[r]*pivot - R[c]*entry`, so
//!   integer-valued input stays integer-valued (within float precision)
//! - **Exact zero tests**: a pivot is swapped out only when it is exactly zero
//! - **Step trace**: each operation is kept with per-row annotations such
//!   as `5R3 - 3R1` and a matrix snapshot, ready for a presenter
//!
//! ## Quick Start
//!
//! ```rust
//! use echelon::prelude::*;
//!
//! let m = Matrix::from_rows(vec![
//!     vec![5.0, -3.0, 2.0, 1.0],
//!     vec![-1.0, 3.0, 0.0, -1.0],
//!     vec![3.0, 2.0, 2.0, 0.0],
//!     vec![2.0, 0.0, 3.0, 8.0],
//! ])?;
//!
//! let solution = solve(m);
//! assert_eq!(solution.classification, Classification::Unique);
//! assert_eq!(solution.trace.steps()[0].annotations()[2], "5R3 - 3R1");
//! # Ok::<(), echelon::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for matrices, traces and outcomes

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithm;
pub mod dtype;
pub mod error;
pub mod matrix;
pub mod parse;
pub mod present;
pub mod solver;
pub mod trace;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithm::{Classification, Operation};
    pub use crate::dtype::Element;
    pub use crate::error::{Error, Result};
    pub use crate::matrix::Matrix;
    pub use crate::parse::parse_system;
    pub use crate::solver::{Solution, solve, solve_rows};
    pub use crate::trace::{Marker, Step, StepTrace};
}

pub use solver::{Solution, solve};
