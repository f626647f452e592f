//! Comma-delimited text input
//!
//! One equation per line, coefficients then the right-hand side, separated
//! by commas:
//!
//! ```text
//! 5,-3,2,1
//! -1,3,0,-1
//! 3,2,2,0
//! ```
//!
//! Blank lines are ignored. Whitespace around each number is ignored.

use crate::error::{Error, Result};
use crate::matrix::Matrix;
use std::str::FromStr;

/// Parse a comma-delimited system into an augmented matrix
///
/// Line numbers in errors count non-empty lines only, so they match the
/// equation's row number (`R{line}`) in the trace.
pub fn parse_system(input: &str) -> Result<Matrix<f64>> {
    let rows = input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(i, line)| parse_row(i + 1, line))
        .collect::<Result<Vec<_>>>()?;

    Matrix::from_rows(rows)
}

fn parse_row(line: usize, text: &str) -> Result<Vec<f64>> {
    text.split(',')
        .enumerate()
        .map(|(j, token)| {
            let token = token.trim();
            token.parse::<f64>().map_err(|_| Error::Parse {
                line,
                column: j + 1,
                token: token.to_string(),
            })
        })
        .collect()
}

impl FromStr for Matrix<f64> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_system(s)
    }
}
