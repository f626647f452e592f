//! Scalar element types for augmented matrices
//!
//! Entries are IEEE floats (`f32`, `f64`). Fraction-free elimination grows
//! entries quickly; floats absorb that growth (up to `inf`) where fixed-width
//! integers would overflow, so integer element types are not offered.

mod element;

pub use element::Element;
