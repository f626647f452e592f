//! Turning elimination operations into [`Step`]s

use super::{Marker, Step, StepTrace};
use crate::algorithm::Operation;
use crate::dtype::Element;
use crate::matrix::Matrix;

/// Receiver for the operations elimination performs
///
/// The engine calls into a sink right after each mutation, passing the
/// matrix in its post-mutation state. `()` is a sink that records nothing.
pub trait TraceSink<T: Element> {
    /// Rows `pivot` and `with` were exchanged, i.e. `Operation::Swap { i: pivot, j: with }`
    fn swapped(&mut self, pivot: usize, with: usize, matrix: &Matrix<T>);

    /// Every row below `pivot` was combined with it or skipped
    ///
    /// `ops` holds one entry per row in `pivot + 1..rows`, in row order.
    fn column_eliminated(&mut self, pivot: usize, ops: &[Operation<T>], matrix: &Matrix<T>);
}

impl<T: Element> TraceSink<T> for () {
    #[inline]
    fn swapped(&mut self, _pivot: usize, _with: usize, _matrix: &Matrix<T>) {}

    #[inline]
    fn column_eliminated(&mut self, _pivot: usize, _ops: &[Operation<T>], _matrix: &Matrix<T>) {}
}

/// Sink that snapshots every operation into a [`Step`]
#[derive(Debug)]
pub struct StepRecorder<T> {
    steps: Vec<Step<T>>,
}

impl<T: Element> StepRecorder<T> {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Steps recorded so far
    pub fn steps(&self) -> &[Step<T>] {
        &self.steps
    }

    /// Consume the recorder, returning the recorded steps
    pub fn into_steps(self) -> Vec<Step<T>> {
        self.steps
    }

    /// Seal the recorded steps into a trace, appending `marker` last
    pub fn finish(self, marker: Option<Marker>) -> StepTrace<T> {
        StepTrace::new(self.steps, marker)
    }
}

impl<T: Element> Default for StepRecorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> TraceSink<T> for StepRecorder<T> {
    fn swapped(&mut self, pivot: usize, with: usize, matrix: &Matrix<T>) {
        self.steps.push(Step::new(
            format!("Swap R{} with R{}.", pivot + 1, with + 1),
            Vec::new(),
            matrix.clone(),
        ));
    }

    fn column_eliminated(&mut self, pivot: usize, ops: &[Operation<T>], matrix: &Matrix<T>) {
        // Rows up to and including the pivot row are untouched
        let mut annotations = vec![String::new(); pivot + 1];
        annotations.extend(ops.iter().map(annotate));
        debug_assert_eq!(annotations.len(), matrix.rows());

        self.steps.push(Step::new(
            format!("Use R{} to eliminate column.", pivot + 1),
            annotations,
            matrix.clone(),
        ));
    }
}

/// Annotation text for a single operation
///
/// A combination reads `{t}R{target} {sign} {s}R{source}` with 1-based row
/// numbers. `t` is the target factor and is omitted when it is exactly one;
/// `s` is the magnitude of the source factor and is omitted when that is
/// exactly one. The sign is `-` for a non-negative source factor, `+`
/// otherwise. Skips and swaps annotate as blank.
///
/// ```
/// use echelon::algorithm::Operation;
/// use echelon::trace::annotate;
///
/// let op = Operation::Combine { target: 1, source: 0, target_factor: 5.0, source_factor: -1.0 };
/// assert_eq!(annotate(&op), "5R2 + R1");
/// ```
pub fn annotate<T: Element>(op: &Operation<T>) -> String {
    match *op {
        Operation::Combine {
            target,
            source,
            target_factor,
            source_factor,
        } => {
            let t = if target_factor == T::one() {
                String::new()
            } else {
                target_factor.canonical().to_string()
            };
            let sign = if source_factor >= T::zero() { '-' } else { '+' };
            let magnitude = source_factor.abs_val();
            let s = if magnitude == T::one() {
                String::new()
            } else {
                magnitude.to_string()
            };
            format!("{t}R{} {sign} {s}R{}", target + 1, source + 1)
        }
        Operation::Skip { .. } | Operation::Swap { .. } => String::new(),
    }
}
