//! Fixed-width plain text

use super::{MAX_PRECISION, PresentOptions, Presenter};
use crate::dtype::Element;
use crate::trace::{Marker, Step};

/// Right-aligned text table per step
///
/// ```text
/// Use R1 to eliminate column.
///              5  -3  2   1
///  5R2 + R1    0  12  2  -4
/// 5R3 - 3R1    0  19  4  -3
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PlainPresenter {
    precision: u32,
    column_gap: usize,
}

impl PlainPresenter {
    /// Create a presenter keeping `precision` decimals and `column_gap` spaces between columns
    ///
    /// `precision` is clamped to [`MAX_PRECISION`].
    pub fn new(precision: u32, column_gap: usize) -> Self {
        Self {
            precision: precision.min(MAX_PRECISION),
            column_gap,
        }
    }

    /// Create a presenter from the plain-mode fields of `options`
    pub fn from_options(options: &PresentOptions) -> Self {
        Self::new(options.precision, options.column_gap)
    }

    /// Truncate toward negative infinity at `precision` decimals
    fn format_cell(&self, value: f64) -> String {
        let scale = 10f64.powi(self.precision as i32);
        let truncated = (value * scale).floor() / scale;
        if truncated == 0.0 {
            "0".to_string()
        } else {
            truncated.to_string()
        }
    }
}

impl Default for PlainPresenter {
    fn default() -> Self {
        Self::from_options(&PresentOptions::default())
    }
}

impl Presenter for PlainPresenter {
    fn render_step<T: Element>(&self, step: &Step<T>) -> String {
        let gap = " ".repeat(self.column_gap);
        let snapshot = step.snapshot();

        let table: Vec<Vec<String>> = snapshot
            .iter_rows()
            .enumerate()
            .map(|(r, row)| {
                let mut cells = Vec::with_capacity(row.len() + 1);
                if let Some(note) = step.annotations().get(r) {
                    if note.is_empty() {
                        cells.push(String::new());
                    } else {
                        cells.push(format!("{note}{gap}"));
                    }
                }
                cells.extend(row.iter().map(|v| self.format_cell(v.to_f64())));
                cells
            })
            .collect();

        let n_cols = table.first().map_or(0, Vec::len);
        let widths: Vec<usize> = (0..n_cols)
            .map(|j| table.iter().map(|row| row[j].chars().count()).max().unwrap_or(0))
            .collect();

        let mut out = String::new();
        out.push_str(step.description());
        out.push('\n');
        for row in &table {
            let line = row
                .iter()
                .zip(&widths)
                .map(|(cell, &w)| format!("{cell:>w$}"))
                .collect::<Vec<_>>()
                .join(&gap);
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    fn render_marker(&self, marker: Marker) -> String {
        marker.text().to_string()
    }
}
