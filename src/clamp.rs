//! Clamping a value into any kind of range.
//!
//! ```
//! use sovran_typedict::Clamp;
//!
//! assert_eq!(42.clamped(0..=100), 42);
//! assert_eq!(i32::MIN.clamped(0..), 0);
//! assert_eq!(i32::MAX.clamped(..100), 99);
//! assert_eq!(1.5f64.clamped(..=1.0), 1.0);
//! assert_eq!(7.bounded(10, 0), 7);
//! ```

use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

/// A range a value of type `T` can be clamped into.
pub trait ClampRange<T> {
    /// Returns `value` if the range contains it, otherwise the nearest bound.
    fn clamp_value(&self, value: T) -> T;
}

/// Adds `clamped` and `bounded` to every ordered type.
pub trait Clamp: PartialOrd + Sized {
    /// Returns `self` if `limits` contains it, otherwise the bound it
    /// falls outside of.
    ///
    /// Unordered values (such as NaN) are never contained, so they collapse to
    /// the lower bound when there is one.
    ///
    /// # Panics
    ///
    /// Panics for empty ranges: reversed inclusive ranges such as `10..=9`
    /// (or ones with a NaN bound), and empty half-open integer ranges such as
    /// `5..5` or `..0u8`.
    fn clamped<R: ClampRange<Self>>(self, limits: R) -> Self {
        limits.clamp_value(self)
    }

    /// Clamps `self` between two bounds given in either order.
    fn bounded(self, lower: Self, upper: Self) -> Self
    where
        Self: Clone,
    {
        if lower < upper {
            self.clamped(lower..=upper)
        } else {
            self.clamped(upper..=lower)
        }
    }
}

impl<T: PartialOrd> Clamp for T {}

impl<T: PartialOrd + Clone> ClampRange<T> for RangeFrom<T> {
    fn clamp_value(&self, value: T) -> T {
        if self.contains(&value) {
            value
        } else {
            self.start.clone()
        }
    }
}

impl<T: PartialOrd + Clone> ClampRange<T> for RangeToInclusive<T> {
    fn clamp_value(&self, value: T) -> T {
        if self.contains(&value) {
            value
        } else {
            self.end.clone()
        }
    }
}

impl<T: PartialOrd + Clone> ClampRange<T> for RangeInclusive<T> {
    #[track_caller]
    fn clamp_value(&self, value: T) -> T {
        if self.is_empty() {
            panic!("cannot clamp into an empty range");
        }
        let value = (self.start().clone()..).clamp_value(value);
        (..=self.end().clone()).clamp_value(value)
    }
}

impl<T> ClampRange<T> for RangeFull {
    fn clamp_value(&self, value: T) -> T {
        value
    }
}

/// Integers whose exclusive upper bound can be turned into an inclusive one.
pub trait Predecessor: Sized {
    /// The value one below `self`, or `None` at the type's minimum.
    fn predecessor(&self) -> Option<Self>;
}

macro_rules! impl_predecessor {
    ($($int:ty),* $(,)?) => {
        $(
            impl Predecessor for $int {
                fn predecessor(&self) -> Option<Self> {
                    self.checked_sub(1)
                }
            }
        )*
    };
}

impl_predecessor!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T: PartialOrd + Clone + Predecessor> ClampRange<T> for RangeTo<T> {
    #[track_caller]
    fn clamp_value(&self, value: T) -> T {
        if self.contains(&value) {
            return value;
        }
        match self.end.predecessor() {
            Some(last) => last,
            None => panic!("cannot clamp into an empty range"),
        }
    }
}

impl<T: PartialOrd + Clone + Predecessor> ClampRange<T> for Range<T> {
    #[track_caller]
    fn clamp_value(&self, value: T) -> T {
        if self.is_empty() {
            panic!("cannot clamp into an empty range");
        }
        let value = (self.start.clone()..).clamp_value(value);
        (..self.end.clone()).clamp_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_range() {
        assert_eq!(42.clamped(0..=100), 42);
        assert_eq!(i64::MIN.clamped(0..=100), 0);
        assert_eq!(i64::MAX.clamped(0..=100), 100);
        assert_eq!("m".clamped("a"..="k"), "k");
    }

    #[test]
    fn test_partial_ranges() {
        assert_eq!(42.clamped(0..), 42);
        assert_eq!(i32::MIN.clamped(0..), 0);
        assert_eq!(i32::MAX.clamped(0..), i32::MAX);

        assert_eq!(42.clamped(..=100), 42);
        assert_eq!(i32::MIN.clamped(..=100), i32::MIN);
        assert_eq!(i32::MAX.clamped(..=100), 100);

        assert_eq!(42.clamped(..), 42);
    }

    #[test]
    fn test_half_open_ranges() {
        assert_eq!(42.clamped(..100), 42);
        assert_eq!(i32::MIN.clamped(..100), i32::MIN);
        assert_eq!(i32::MAX.clamped(..100), 99);

        assert_eq!(42.clamped(0..100), 42);
        assert_eq!(i32::MIN.clamped(0..100), 0);
        assert_eq!(i32::MAX.clamped(0..100), 99);
        assert_eq!(300u16.clamped(10..256), 255);
    }

    #[test]
    #[should_panic(expected = "cannot clamp into an empty range")]
    fn test_empty_upper_range_panics() {
        42.clamped(..i32::MIN);
    }

    #[test]
    #[should_panic(expected = "cannot clamp into an empty range")]
    fn test_empty_range_panics() {
        42.clamped(0..0);
    }

    #[test]
    #[should_panic(expected = "cannot clamp into an empty range")]
    fn test_reversed_inclusive_range_panics() {
        5.clamped(10..=9);
    }

    #[test]
    #[should_panic(expected = "cannot clamp into an empty range")]
    fn test_nan_bound_panics() {
        0.5f64.clamped(f64::NAN..=1.0);
    }

    #[test]
    fn test_single_value_inclusive_range() {
        assert_eq!(5.clamped(10..=10), 10);
        assert_eq!(15.clamped(10..=10), 10);
    }

    #[test]
    fn test_nan_collapses_to_lower_bound() {
        assert_eq!(f64::NAN.clamped(0.0..=1.0), 0.0);
        assert_eq!(f64::NAN.clamped(2.0..), 2.0);
    }

    #[test]
    fn test_bounded_accepts_either_order() {
        assert_eq!(5.bounded(0, 10), 5);
        assert_eq!(15.bounded(10, 0), 10);
        assert_eq!((-3).bounded(10, 0), 0);
        assert_eq!(4.bounded(4, 4), 4);
    }
}
