//! LaTeX source

use super::Presenter;
use crate::dtype::Element;
use crate::trace::{Marker, Step};

/// LaTeX `bmatrix` per step, with annotations in a right-aligned `matrix*`
///
/// `matrix*` comes from `mathtools`; KaTeX supports it natively.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LatexPresenter;

impl Presenter for LatexPresenter {
    fn render_step<T: Element>(&self, step: &Step<T>) -> String {
        let body = step
            .snapshot()
            .iter_rows()
            .map(|row| {
                row.iter()
                    .map(|v| v.canonical().to_string())
                    .collect::<Vec<_>>()
                    .join(" & ")
            })
            .collect::<Vec<_>>()
            .join("\\\\\n");

        let mut out = format!("\\text{{{}}}\n\\\\[0.05in]\n", step.description());
        if step.has_annotations() {
            out.push_str("\\begin{equation*}\n\\begin{matrix*}[r]\n");
            out.push_str(&step.annotations().join("\\\\\n"));
            out.push_str("\n\\end{matrix*}\n\\quad\n");
        }
        out.push_str("\\begin{bmatrix}\n");
        out.push_str(&body);
        out.push_str("\n\\end{bmatrix}\n");
        if step.has_annotations() {
            out.push_str("\\end{equation*}\n");
        }
        out.push_str("\\\\[.1in]\n");
        out
    }

    fn render_marker(&self, marker: Marker) -> String {
        format!("\\text{{{}}}", marker.text())
    }
}
