//! Step trace model
//!
//! Elimination records what it did as an ordered list of [`Step`]s, each
//! carrying a description, one annotation per row, and a snapshot of the
//! matrix right after the step. A [`StepTrace`] may end with a terminal
//! [`Marker`] when the system has no unique solution.
//!
//! The core only appends to a trace. Reading it back is the presenter's job.

mod recorder;

pub use recorder::{StepRecorder, TraceSink, annotate};

use crate::matrix::Matrix;
use std::fmt;

/// One recorded operation, frozen at the moment it was applied
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "T: crate::dtype::Element + serde::Serialize",
        deserialize = "T: crate::dtype::Element + serde::Deserialize<'de>"
    ))
)]
pub struct Step<T> {
    description: String,
    annotations: Vec<String>,
    snapshot: Matrix<T>,
}

impl<T> Step<T> {
    /// Create a step
    ///
    /// `annotations` is either empty or holds one entry per snapshot row.
    pub fn new(description: impl Into<String>, annotations: Vec<String>, snapshot: Matrix<T>) -> Self {
        Self {
            description: description.into(),
            annotations,
            snapshot,
        }
    }

    /// Human-readable description, e.g. `Swap R1 with R3.`
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Per-row annotations; empty for swaps, blank entries for untouched rows
    pub fn annotations(&self) -> &[String] {
        &self.annotations
    }

    /// Whether this step carries per-row annotations
    pub fn has_annotations(&self) -> bool {
        !self.annotations.is_empty()
    }

    /// Matrix state immediately after this step
    pub fn snapshot(&self) -> &Matrix<T> {
        &self.snapshot
    }
}

/// Terminal marker appended when elimination ends without a unique solution
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Marker {
    /// Some row reads `0 = b` with `b != 0`
    NoSolution,
    /// Fewer nonzero rows than unknowns
    Infinite,
}

impl Marker {
    /// Literal marker text
    pub fn text(self) -> &'static str {
        match self {
            Marker::NoSolution => "No solution",
            Marker::Infinite => "Infinite solutions",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Entry of a [`StepTrace`] in presentation order
#[derive(Copy, Clone, Debug)]
pub enum TraceEntry<'a, T> {
    /// An elimination step
    Step(&'a Step<T>),
    /// The terminal marker, always last
    Marker(Marker),
}

/// Ordered, append-only record of one elimination run
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "T: crate::dtype::Element + serde::Serialize",
        deserialize = "T: crate::dtype::Element + serde::Deserialize<'de>"
    ))
)]
pub struct StepTrace<T> {
    steps: Vec<Step<T>>,
    marker: Option<Marker>,
}

impl<T> StepTrace<T> {
    /// Seal a list of steps with an optional terminal marker
    pub fn new(steps: Vec<Step<T>>, marker: Option<Marker>) -> Self {
        Self { steps, marker }
    }

    /// Recorded steps in order
    pub fn steps(&self) -> &[Step<T>] {
        &self.steps
    }

    /// Terminal marker, if the system has no unique solution
    pub fn marker(&self) -> Option<Marker> {
        self.marker
    }

    /// Text of the terminal marker, if any
    pub fn final_marker_text(&self) -> Option<&'static str> {
        self.marker.map(Marker::text)
    }

    /// Number of recorded steps, not counting the marker
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether no step was recorded
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Steps followed by the marker, in presentation order
    pub fn entries(&self) -> impl Iterator<Item = TraceEntry<'_, T>> {
        self.steps
            .iter()
            .map(TraceEntry::Step)
            .chain(self.marker.map(TraceEntry::Marker))
    }
}

impl<T> Default for StepTrace<T> {
    fn default() -> Self {
        Self::new(Vec::new(), None)
    }
}
