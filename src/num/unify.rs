// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Numeric Type Unification
//!
//! When two values of different primitive numeric types meet (for example
//! an `i32` endpoint and an `f64` endpoint), both must be widened to a
//! single common representation before they can be compared or stored
//! together. The [`UnifyWith`] trait encodes which pairs of types unify and
//! to what result; pairs that do not appear in the table have no common
//! representation and do not implement the trait, so the mismatch is a
//! compile-time constraint violation.
//!
//! ## Promotion rules
//!
//! The table is symmetric; each row lists the common representation for a
//! pair of distinct types (same-type pairs unify to themselves):
//!
//! | Pair                                              | Unifies to |
//! |---------------------------------------------------|------------|
//! | signed with wider signed (`i8..i64`)              | the wider  |
//! | unsigned with wider unsigned (`u8..u64`)          | the wider  |
//! | unsigned with strictly wider signed               | the signed |
//! | `f32` with `f64`                                  | `f64`      |
//! | `i8`, `i16`, `u8`, `u16` with `f32`               | `f32`      |
//! | any other integer with `f32` or `f64`             | `f64`      |
//!
//! Same-width cross-sign pairs (`u64` with `i64`, `u32` with `i32`, ...)
//! have no primitive wide enough for both and are absent from the table.
//!
//! ## Exactness
//!
//! Every conversion is checked by round-tripping through the common type:
//! a value the common representation cannot hold exactly (for example
//! `i64::MAX` widened to `f64`) fails with [`TypeUnificationError`] instead
//! of being silently rounded. NaN endpoints cannot pass the round-trip
//! check and are rejected as well.

use num_traits::NumCast;

/// Details about a failed numeric unification attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeUnificationError {
    /// The name of the type the offending value had (e.g. "i64").
    pub value_type: &'static str,
    /// The name of the common representation it could not be widened to.
    pub target_type: &'static str,
}

impl std::fmt::Display for TypeUnificationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cannot represent a {} value exactly as {}",
            self.value_type, self.target_type
        )
    }
}

impl std::error::Error for TypeUnificationError {}

/// Unification of `Self` with `Rhs` into a common representation.
///
/// The two conversion methods are deliberately separate so that a caller
/// holding only one side (say, the endpoints of a single interval) can
/// still widen it to the common type.
///
/// # Examples
///
/// ```rust
/// # use gamut::num::unify::UnifyWith;
///
/// let (a, b) = 1i32.unify(2.5f64).unwrap();
/// assert_eq!((a, b), (1.0f64, 2.5f64));
/// ```
pub trait UnifyWith<Rhs>: Sized {
    /// The common representation both operand types widen to.
    type Out;

    /// Widens `self` to the common representation.
    fn into_unified(self) -> Result<Self::Out, TypeUnificationError>;

    /// Widens a right-hand-side value to the common representation.
    fn rhs_into_unified(rhs: Rhs) -> Result<Self::Out, TypeUnificationError>;

    /// Widens both operands to the common representation.
    fn unify(self, rhs: Rhs) -> Result<(Self::Out, Self::Out), TypeUnificationError> {
        Ok((self.into_unified()?, Self::rhs_into_unified(rhs)?))
    }
}

// Same-type pairs unify to themselves with no conversion.
impl<T> UnifyWith<T> for T {
    type Out = T;

    #[inline]
    fn into_unified(self) -> Result<T, TypeUnificationError> {
        Ok(self)
    }

    #[inline]
    fn rhs_into_unified(rhs: T) -> Result<T, TypeUnificationError> {
        Ok(rhs)
    }
}

/// Converts `value` to `O`, verifying the result round-trips exactly.
fn checked_cast<A, O>(
    value: A,
    value_type: &'static str,
    target_type: &'static str,
) -> Result<O, TypeUnificationError>
where
    A: Copy + PartialEq + NumCast,
    O: Copy + NumCast,
{
    let widened = <O as NumCast>::from(value);
    let back = widened.and_then(|w| <A as NumCast>::from(w));
    match (widened, back) {
        (Some(w), Some(b)) if b == value => Ok(w),
        _ => Err(TypeUnificationError {
            value_type,
            target_type,
        }),
    }
}

macro_rules! unify_rule {
    ($a:ty, $b:ty => $out:ty) => {
        impl UnifyWith<$b> for $a {
            type Out = $out;

            #[inline]
            fn into_unified(self) -> Result<$out, TypeUnificationError> {
                checked_cast::<$a, $out>(self, stringify!($a), stringify!($out))
            }

            #[inline]
            fn rhs_into_unified(rhs: $b) -> Result<$out, TypeUnificationError> {
                checked_cast::<$b, $out>(rhs, stringify!($b), stringify!($out))
            }
        }

        impl UnifyWith<$a> for $b {
            type Out = $out;

            #[inline]
            fn into_unified(self) -> Result<$out, TypeUnificationError> {
                checked_cast::<$b, $out>(self, stringify!($b), stringify!($out))
            }

            #[inline]
            fn rhs_into_unified(rhs: $a) -> Result<$out, TypeUnificationError> {
                checked_cast::<$a, $out>(rhs, stringify!($a), stringify!($out))
            }
        }
    };
}

// Signed widening.
unify_rule!(i8, i16 => i16);
unify_rule!(i8, i32 => i32);
unify_rule!(i8, i64 => i64);
unify_rule!(i16, i32 => i32);
unify_rule!(i16, i64 => i64);
unify_rule!(i32, i64 => i64);

// Unsigned widening.
unify_rule!(u8, u16 => u16);
unify_rule!(u8, u32 => u32);
unify_rule!(u8, u64 => u64);
unify_rule!(u16, u32 => u32);
unify_rule!(u16, u64 => u64);
unify_rule!(u32, u64 => u64);

// Unsigned into strictly wider signed.
unify_rule!(u8, i16 => i16);
unify_rule!(u8, i32 => i32);
unify_rule!(u8, i64 => i64);
unify_rule!(u16, i32 => i32);
unify_rule!(u16, i64 => i64);
unify_rule!(u32, i64 => i64);

// Floats.
unify_rule!(f32, f64 => f64);

// Integers with floats. 8- and 16-bit integers fit exactly in f32;
// everything wider goes to f64.
unify_rule!(i8, f32 => f32);
unify_rule!(i16, f32 => f32);
unify_rule!(u8, f32 => f32);
unify_rule!(u16, f32 => f32);
unify_rule!(i32, f32 => f64);
unify_rule!(i64, f32 => f64);
unify_rule!(u32, f32 => f64);
unify_rule!(u64, f32 => f64);
unify_rule!(i8, f64 => f64);
unify_rule!(i16, f64 => f64);
unify_rule!(i32, f64 => f64);
unify_rule!(i64, f64 => f64);
unify_rule!(u8, f64 => f64);
unify_rule!(u16, f64 => f64);
unify_rule!(u32, f64 => f64);
unify_rule!(u64, f64 => f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_type_identity() {
        let (a, b) = 3i32.unify(7i32).unwrap();
        assert_eq!((a, b), (3, 7));
    }

    #[test]
    fn test_signed_widening() {
        let (a, b) = 5i8.unify(-1000i64).unwrap();
        assert_eq!((a, b), (5i64, -1000i64));
    }

    #[test]
    fn test_unsigned_into_wider_signed() {
        let (a, b) = u32::MAX.unify(-1i64).unwrap();
        assert_eq!((a, b), (4_294_967_295i64, -1i64));
    }

    #[test]
    fn test_int_float_promotion() {
        let (a, b) = 1i32.unify(2.5f64).unwrap();
        assert_eq!((a, b), (1.0f64, 2.5f64));

        // Narrow integers stay in f32.
        let (a, b) = 100i16.unify(0.5f32).unwrap();
        assert_eq!((a, b), (100.0f32, 0.5f32));

        // 32-bit integers with f32 widen to f64, keeping exactness.
        let (a, b) = i32::MAX.unify(0.5f32).unwrap();
        assert_eq!((a, b), (2_147_483_647.0f64, 0.5f64));
    }

    #[test]
    fn test_float_widening() {
        let (a, b) = 1.5f32.unify(2.25f64).unwrap();
        assert_eq!((a, b), (1.5f64, 2.25f64));
    }

    #[test]
    fn test_reversed_operand_order() {
        let (a, b) = 2.5f64.unify(1i32).unwrap();
        assert_eq!((a, b), (2.5f64, 1.0f64));
    }

    #[test]
    fn test_inexact_widening_fails() {
        // i64::MAX is not representable in f64.
        let err = i64::MAX.unify(0.5f64).unwrap_err();
        assert_eq!(err.value_type, "i64");
        assert_eq!(err.target_type, "f64");

        // Values near u64::MAX round up past the type's range.
        assert!(u64::MAX.unify(0.5f32).is_err());

        // Small values of the same pairs are fine.
        assert_eq!(1024i64.unify(0.5f64).unwrap(), (1024.0, 0.5));
    }

    #[test]
    fn test_nan_fails_round_trip() {
        assert!(f32::NAN.unify(1.0f64).is_err());
    }

    #[test]
    fn test_infinities_round_trip() {
        let (a, b) = f32::NEG_INFINITY.unify(1.0f64).unwrap();
        assert_eq!(a, f64::NEG_INFINITY);
        assert_eq!(b, 1.0);
    }

    #[test]
    fn test_error_display() {
        let err = TypeUnificationError {
            value_type: "i64",
            target_type: "f64",
        };
        assert_eq!(
            err.to_string(),
            "Cannot represent a i64 value exactly as f64"
        );
    }
}
