//! Rendering a step trace for people
//!
//! Presentation sits outside elimination: the solver never looks at the
//! mode, and the mode is always passed in explicitly.
//!
//! | Mode | Output |
//! |------|--------|
//! | [`PresentMode::Plain`] | Fixed-width text, entries truncated to `precision` decimals |
//! | [`PresentMode::Latex`] | LaTeX source, to be typeset by the host |
//! | [`PresentMode::Source`] | The same LaTeX source, to be shown literally |

mod latex;
mod plain;

pub use latex::LatexPresenter;
pub use plain::PlainPresenter;

use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::solver::Solution;
use crate::trace::{Marker, Step, StepTrace, TraceEntry};
use std::fmt;
use std::str::FromStr;

/// Output mode for [`render`]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PresentMode {
    /// Fixed-width plain text
    Plain,
    /// LaTeX meant to be typeset
    #[default]
    Latex,
    /// LaTeX meant to be displayed as source code
    Source,
}

impl PresentMode {
    /// Whether the host is expected to typeset the output
    pub fn is_typeset(self) -> bool {
        self == PresentMode::Latex
    }

    /// Short lowercase name
    pub fn name(self) -> &'static str {
        match self {
            PresentMode::Plain => "plain",
            PresentMode::Latex => "latex",
            PresentMode::Source => "source",
        }
    }
}

impl fmt::Display for PresentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PresentMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "text" => Ok(PresentMode::Plain),
            "latex" | "tex" => Ok(PresentMode::Latex),
            "source" | "code" => Ok(PresentMode::Source),
            other => Err(Error::invalid_argument(
                "mode",
                format!("unknown presentation mode '{other}', expected plain, latex or code"),
            )),
        }
    }
}

/// Largest plain-mode precision; `f64` carries no more decimal digits
pub const MAX_PRECISION: u32 = 15;

/// Presentation settings
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PresentOptions {
    /// Output mode
    pub mode: PresentMode,
    /// Decimals kept (by truncation) in plain mode, at most [`MAX_PRECISION`]
    pub precision: u32,
    /// Spaces between plain-mode columns
    pub column_gap: usize,
}

impl PresentOptions {
    /// Options for `mode` with default precision and spacing
    pub fn new(mode: PresentMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Set the number of decimals kept in plain mode, clamped to [`MAX_PRECISION`]
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision.min(MAX_PRECISION);
        self
    }

    /// Set the spacing between plain-mode columns
    pub fn with_column_gap(mut self, column_gap: usize) -> Self {
        self.column_gap = column_gap;
        self
    }
}

impl Default for PresentOptions {
    fn default() -> Self {
        Self {
            mode: PresentMode::default(),
            precision: 3,
            column_gap: 2,
        }
    }
}

/// Renders trace entries in one output format
///
/// Entries are rendered independently and joined with newlines, the marker
/// (if any) last.
pub trait Presenter {
    /// Render one elimination step
    fn render_step<T: Element>(&self, step: &Step<T>) -> String;

    /// Render the terminal marker
    fn render_marker(&self, marker: Marker) -> String;

    /// Render a whole trace in order
    fn render_trace<T: Element>(&self, trace: &StepTrace<T>) -> String {
        trace
            .entries()
            .map(|entry| match entry {
                TraceEntry::Step(step) => self.render_step(step),
                TraceEntry::Marker(marker) => self.render_marker(marker),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Render a solution's trace according to `options`
///
/// ```
/// use echelon::prelude::*;
/// use echelon::present::{PresentMode, PresentOptions, render};
///
/// let solution = solve_rows(vec![vec![0.0, 0.0, 1.0]])?;
/// let text = render(&solution, &PresentOptions::new(PresentMode::Plain));
/// assert_eq!(text, "No solution");
/// # Ok::<(), echelon::error::Error>(())
/// ```
pub fn render<T: Element>(solution: &Solution<T>, options: &PresentOptions) -> String {
    match options.mode {
        PresentMode::Plain => PlainPresenter::from_options(options).render_trace(&solution.trace),
        PresentMode::Latex | PresentMode::Source => LatexPresenter.render_trace(&solution.trace),
    }
}
