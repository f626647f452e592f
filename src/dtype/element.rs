//! Element trait for matrix entries

use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Sub};

/// Trait for types that can be entries of an augmented matrix
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - Basic trait requirements
/// - `Add + Sub + Mul` - The only arithmetic fraction-free elimination needs
/// - `PartialOrd` - Sign tests when rendering annotations
/// - `Display` - Coefficients are printed verbatim in annotations
///
/// `Div` is deliberately absent: no step ever divides.
pub trait Element:
    Copy
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + PartialOrd
    + Debug
    + Display
{
    /// Zero value
    fn zero() -> Self;

    /// One value
    fn one() -> Self;

    /// Absolute value
    fn abs_val(self) -> Self;

    /// Convert to f64 for presentation
    fn to_f64(self) -> f64;

    /// Whether the value is NaN
    fn is_nan(self) -> bool;

    /// Exact comparison against zero
    ///
    /// No tolerance is applied. For floats, `-0.0` is zero and `NaN` is not.
    #[inline]
    fn is_zero(self) -> bool {
        self == Self::zero()
    }

    /// Collapse negative zero into positive zero so it prints as `0`
    #[inline]
    fn canonical(self) -> Self {
        if self.is_zero() { Self::zero() } else { self }
    }
}

macro_rules! impl_float_element {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                #[inline]
                fn zero() -> Self {
                    0.0
                }

                #[inline]
                fn one() -> Self {
                    1.0
                }

                #[inline]
                fn abs_val(self) -> Self {
                    self.abs()
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn is_nan(self) -> bool {
                    <$t>::is_nan(self)
                }
            }
        )*
    };
}

impl_float_element!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_zero_is_zero() {
        assert!((-0.0f64).is_zero());
        assert_eq!(format!("{}", (-0.0f64).canonical()), "0");
    }

    #[test]
    fn test_nan_is_not_zero() {
        assert!(!f64::NAN.is_zero());
    }

    #[test]
    fn test_abs_and_widening() {
        assert_eq!((-7.5f32).abs_val(), 7.5);
        assert_eq!(Element::to_f64(-3.0f32), -3.0);
        assert!(Element::is_nan(f32::NAN));
    }

    #[test]
    fn test_float_display_drops_trailing_zero() {
        assert_eq!(format!("{}", 5.0f64), "5");
        assert_eq!(format!("{}", 0.5f32), "0.5");
    }
}
