//! Forward elimination and solvability classification
//!
//! # Algorithm
//!
//! For each pivot column `c` in `0..unknowns`:
//!
//! ```text
//! if A[c][c] == 0:
//!     k = first row below c with A[k][c] != 0
//!     swap(c, k)                      -> "Swap R{c+1} with R{k+1}."
//! if every A[r][c] == 0 for r > c:
//!     continue
//! for r in c+1..rows:
//!     R[r] = R[r] * A[c][c] - R[c] * A[r][c]
//!                                     -> "Use R{c+1} to eliminate column."
//! ```
//!
//! Zero tests are exact. There is no division, no pivot normalisation and no
//! upward pass: the result is an echelon form with unscaled leading entries.
//!
//! Classification then inspects the final matrix only; see [`classify`].

mod classify;
mod elimination;

pub use classify::{Classification, classify};
pub use elimination::{Operation, eliminate, eliminate_with_steps};
