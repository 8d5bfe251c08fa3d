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

use crate::num::unify::{TypeUnificationError, UnifyWith};
use num_traits::{One, Zero};
use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, Mul, RangeInclusive, Sub},
};

/// A closed interval `[left, right]` over an ordered scalar domain, with an
/// explicit empty interval.
///
/// Construction is canonicalizing: out-of-order endpoints are swapped, so a
/// non-empty interval always satisfies `left <= right`. The empty interval
/// carries no endpoints at all; reading an endpoint of the empty interval
/// is an error rather than a sentinel value.
///
/// Intersection and union-hull are total operations on this type (the
/// empty interval is the result of a disjoint intersection) and are also
/// available through the `*` and `+` operators. Note that these operators
/// are set operations, not interval arithmetic.
///
/// The derived comparison traits implement the natural total order: the
/// empty interval sorts before every non-empty interval, and non-empty
/// intervals compare lexicographically on `(left, right)`.
///
/// # Examples
///
/// ```rust
/// # use gamut::math::interval::ClosedInterval;
///
/// let a = ClosedInterval::new(1, 6);
/// let b = ClosedInterval::new(8, 3);
///
/// assert_eq!(a * b, ClosedInterval::new(3, 6));
/// assert_eq!(a + b, ClosedInterval::new(1, 8));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClosedInterval<T> {
    bounds: Option<(T, T)>,
}

/// Error returned when reading an endpoint of the empty interval.
///
/// The empty interval has no endpoints; callers are expected to check
/// [`ClosedInterval::is_empty`] first or handle this error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyIntervalError;

impl fmt::Display for EmptyIntervalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "The empty interval has no endpoints")
    }
}

impl std::error::Error for EmptyIntervalError {}

impl<T> ClosedInterval<T> {
    /// Creates the closed interval with endpoints `a` and `b`.
    ///
    /// The endpoints may be given in either order; they are stored sorted,
    /// so `new(a, b) == new(b, a)` always holds. The result is never empty:
    /// `new(a, a)` is the degenerate single-point interval `[a, a]`.
    ///
    /// # Panics
    ///
    /// Panics if the endpoints are not comparable (e.g. NaN).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gamut::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(9, 1);
    /// assert_eq!(iv.left(), Ok(1));
    /// assert_eq!(iv.right(), Ok(9));
    /// ```
    #[inline]
    pub fn new(a: T, b: T) -> Self
    where
        T: PartialOrd,
    {
        let ord = a
            .partial_cmp(&b)
            .expect("ClosedInterval::new: non-comparable endpoints (NaN?)");
        let (left, right) = match ord {
            Ordering::Greater => (b, a),
            _ => (a, b),
        };
        Self {
            bounds: Some((left, right)),
        }
    }

    /// Creates the degenerate single-point interval `[value, value]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gamut::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::point(3);
    /// assert!(iv.contains(3));
    /// assert_eq!(iv.length(), 0);
    /// ```
    #[inline]
    pub fn point(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            bounds: Some((value.clone(), value)),
        }
    }

    /// Creates the unit interval `[0, 1]` of the domain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gamut::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::<f64>::unit();
    /// assert_eq!(iv.left(), Ok(0.0));
    /// assert_eq!(iv.right(), Ok(1.0));
    /// ```
    #[inline]
    pub fn unit() -> Self
    where
        T: Zero + One + PartialOrd,
    {
        Self::new(T::zero(), T::one())
    }

    /// Creates the empty interval of the domain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gamut::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::<i64>::empty();
    /// assert!(iv.is_empty());
    /// assert!(!iv.contains(0));
    /// ```
    #[inline]
    pub const fn empty() -> Self {
        Self { bounds: None }
    }

    /// Creates an interval from endpoints of two different numeric types,
    /// widening both to their common representation first.
    ///
    /// The promotion rules are the explicit table in [`crate::num::unify`].
    /// Type pairs outside the table do not compile; a value the common
    /// representation cannot hold exactly fails at runtime.
    ///
    /// # Errors
    ///
    /// Returns [`TypeUnificationError`] if either endpoint cannot be
    /// represented exactly in the unified type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gamut::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::try_new_unified(1i32, 2.5f64).unwrap();
    /// assert_eq!(iv, ClosedInterval::new(1.0, 2.5));
    ///
    /// assert!(ClosedInterval::try_new_unified(i64::MAX, 0.5f64).is_err());
    /// ```
    #[inline]
    pub fn try_new_unified<A, B>(a: A, b: B) -> Result<Self, TypeUnificationError>
    where
        A: UnifyWith<B, Out = T>,
        T: PartialOrd,
    {
        let (a, b) = a.unify(b)?;
        Ok(Self::new(a, b))
    }

    /// Returns the left (smallest) endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyIntervalError`] for the empty interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gamut::math::interval::ClosedInterval;
    ///
    /// assert_eq!(ClosedInterval::new(3, 5).left(), Ok(3));
    /// assert!(ClosedInterval::<i32>::empty().left().is_err());
    /// ```
    #[inline]
    pub fn left(&self) -> Result<T, EmptyIntervalError>
    where
        T: Copy,
    {
        match self.bounds {
            Some((left, _)) => Ok(left),
            None => Err(EmptyIntervalError),
        }
    }

    /// Returns the right (largest) endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyIntervalError`] for the empty interval.
    #[inline]
    pub fn right(&self) -> Result<T, EmptyIntervalError>
    where
        T: Copy,
    {
        match self.bounds {
            Some((_, right)) => Ok(right),
            None => Err(EmptyIntervalError),
        }
    }

    /// Returns `true` if this is the empty interval.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }

    /// Returns the length of the interval, `right - left`.
    ///
    /// The empty interval has length zero. This is deliberately not an
    /// error, unlike endpoint access: the measure of no set is the
    /// domain's additive identity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gamut::math::interval::ClosedInterval;
    ///
    /// assert_eq!(ClosedInterval::new(1, 5).length(), 4);
    /// assert_eq!(ClosedInterval::<i32>::empty().length(), 0);
    /// ```
    #[inline]
    pub fn length(&self) -> T
    where
        T: Copy + Sub<Output = T> + Zero,
    {
        match self.bounds {
            Some((left, right)) => right - left,
            None => T::zero(),
        }
    }

    /// Returns `true` if `value` lies within the interval, endpoints
    /// included.
    ///
    /// The empty interval contains nothing; this is a well-defined `false`,
    /// not an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gamut::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(1, 5);
    /// assert!(iv.contains(1));
    /// assert!(iv.contains(5));
    /// assert!(!iv.contains(6));
    /// ```
    #[inline]
    pub fn contains(&self, value: T) -> bool
    where
        T: PartialOrd,
    {
        match &self.bounds {
            Some((left, right)) => *left <= value && value <= *right,
            None => false,
        }
    }

    /// Returns `true` if `other` is a subset of this interval.
    ///
    /// The empty interval is a subset of every interval and contains only
    /// the empty interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gamut::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0, 10);
    /// assert!(a.contains_interval(&ClosedInterval::new(2, 8)));
    /// assert!(a.contains_interval(&ClosedInterval::empty()));
    /// assert!(!a.contains_interval(&ClosedInterval::new(5, 11)));
    /// ```
    #[inline]
    pub fn contains_interval(&self, other: &Self) -> bool
    where
        T: PartialOrd,
    {
        match (&self.bounds, &other.bounds) {
            (_, None) => true,
            (None, Some(_)) => false,
            (Some((al, ar)), Some((bl, br))) => al <= bl && br <= ar,
        }
    }

    /// Returns `true` if the intervals share at least one point.
    ///
    /// Closed intervals that merely touch at an endpoint do intersect.
    /// The empty interval intersects nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gamut::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(1, 5);
    /// assert!(a.intersects(&ClosedInterval::new(5, 9)));
    /// assert!(!a.intersects(&ClosedInterval::new(6, 9)));
    /// ```
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool
    where
        T: PartialOrd,
    {
        match (&self.bounds, &other.bounds) {
            (Some((al, ar)), Some((bl, br))) => al <= br && bl <= ar,
            _ => false,
        }
    }

    /// Returns `true` if this interval lies entirely to the left of
    /// `other`. Strict: touching endpoints do not count.
    ///
    /// This is a partial order. Overlapping intervals are neither left nor
    /// right of each other, and the empty interval is unordered against
    /// everything.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gamut::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(1, 5);
    /// assert!(a.strictly_precedes(&ClosedInterval::new(7, 9)));
    /// assert!(!a.strictly_precedes(&ClosedInterval::new(5, 9)));
    /// assert!(!a.strictly_precedes(&ClosedInterval::new(3, 8)));
    /// ```
    #[inline]
    pub fn strictly_precedes(&self, other: &Self) -> bool
    where
        T: PartialOrd,
    {
        match (&self.bounds, &other.bounds) {
            (Some((_, ar)), Some((bl, _))) => ar < bl,
            _ => false,
        }
    }

    /// Returns `true` if this interval lies entirely to the right of
    /// `other`; the mirror of [`ClosedInterval::strictly_precedes`].
    #[inline]
    pub fn strictly_succeeds(&self, other: &Self) -> bool
    where
        T: PartialOrd,
    {
        other.strictly_precedes(self)
    }

    /// Returns the intersection of the two intervals.
    ///
    /// The result is empty when either operand is empty or the operands
    /// are disjoint. The operation is commutative, associative, and
    /// idempotent; the empty interval is absorbing. Also available as the
    /// `*` operator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gamut::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(1, 6);
    /// let b = ClosedInterval::new(8, 3);
    /// assert_eq!(a.intersection(b), ClosedInterval::new(3, 6));
    ///
    /// let c = ClosedInterval::new(7, 9);
    /// assert!(a.intersection(c).is_empty());
    /// ```
    #[inline]
    pub fn intersection(self, other: Self) -> Self
    where
        T: PartialOrd,
    {
        match (self.bounds, other.bounds) {
            (Some((al, ar)), Some((bl, br))) => {
                let left = if al >= bl { al } else { bl };
                let right = if ar <= br { ar } else { br };
                if left <= right {
                    Self {
                        bounds: Some((left, right)),
                    }
                } else {
                    Self::empty()
                }
            }
            _ => Self::empty(),
        }
    }

    /// Returns the union-hull: the smallest closed interval containing
    /// both operands.
    ///
    /// The operation is commutative, associative, and idempotent; the
    /// empty interval is the identity element (contrast with
    /// [`ClosedInterval::intersection`], where it is absorbing). Also
    /// available as the `+` operator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gamut::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(1, 5);
    /// let b = ClosedInterval::new(7, 9);
    /// assert_eq!(a.hull(b), ClosedInterval::new(1, 9));
    /// assert_eq!(a.hull(ClosedInterval::empty()), a);
    /// ```
    #[inline]
    pub fn hull(self, other: Self) -> Self
    where
        T: PartialOrd,
    {
        match (self.bounds, other.bounds) {
            (Some((al, ar)), Some((bl, br))) => {
                let left = if al <= bl { al } else { bl };
                let right = if ar >= br { ar } else { br };
                Self {
                    bounds: Some((left, right)),
                }
            }
            (Some(bounds), None) | (None, Some(bounds)) => Self {
                bounds: Some(bounds),
            },
            (None, None) => Self::empty(),
        }
    }

    /// Returns the intersection of two intervals over different numeric
    /// domains, widening both operands to their common representation
    /// first.
    ///
    /// # Errors
    ///
    /// Returns [`TypeUnificationError`] if an endpoint cannot be
    /// represented exactly in the unified type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gamut::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(1i32, 6i32);
    /// let b = ClosedInterval::new(2.5f64, 8.5f64);
    /// assert_eq!(
    ///     a.try_intersection(b).unwrap(),
    ///     ClosedInterval::new(2.5, 6.0)
    /// );
    /// ```
    pub fn try_intersection<U>(
        self,
        other: ClosedInterval<U>,
    ) -> Result<ClosedInterval<T::Out>, TypeUnificationError>
    where
        T: UnifyWith<U>,
        T::Out: PartialOrd,
    {
        let (lhs, rhs) = self.unify_bounds(other)?;
        Ok(lhs.intersection(rhs))
    }

    /// Returns the union-hull of two intervals over different numeric
    /// domains, widening both operands to their common representation
    /// first.
    ///
    /// # Errors
    ///
    /// Returns [`TypeUnificationError`] if an endpoint cannot be
    /// represented exactly in the unified type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gamut::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(1i32, 5i32);
    /// let b = ClosedInterval::new(2.5f64, 8.5f64);
    /// assert_eq!(a.try_hull(b).unwrap(), ClosedInterval::new(1.0, 8.5));
    /// ```
    pub fn try_hull<U>(
        self,
        other: ClosedInterval<U>,
    ) -> Result<ClosedInterval<T::Out>, TypeUnificationError>
    where
        T: UnifyWith<U>,
        T::Out: PartialOrd,
    {
        let (lhs, rhs) = self.unify_bounds(other)?;
        Ok(lhs.hull(rhs))
    }

    /// Widens both intervals to the common endpoint representation.
    ///
    /// Widening is monotone (conversions are exact), so sorted bounds stay
    /// sorted and the interval invariant carries over.
    fn unify_bounds<U>(
        self,
        other: ClosedInterval<U>,
    ) -> Result<(ClosedInterval<T::Out>, ClosedInterval<T::Out>), TypeUnificationError>
    where
        T: UnifyWith<U>,
    {
        let lhs = match self.bounds {
            Some((left, right)) => ClosedInterval {
                bounds: Some((left.into_unified()?, right.into_unified()?)),
            },
            None => ClosedInterval::empty(),
        };
        let rhs = match other.bounds {
            Some((left, right)) => ClosedInterval {
                bounds: Some((T::rhs_into_unified(left)?, T::rhs_into_unified(right)?)),
            },
            None => ClosedInterval::empty(),
        };
        Ok((lhs, rhs))
    }
}

/// `*` is set intersection, not interval arithmetic.
impl<T> Mul for ClosedInterval<T>
where
    T: PartialOrd,
{
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

/// `+` is union-hull, not interval arithmetic.
impl<T> Add for ClosedInterval<T>
where
    T: PartialOrd,
{
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.hull(rhs)
    }
}

impl<T> Default for ClosedInterval<T> {
    /// The empty interval.
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> fmt::Display for ClosedInterval<T>
where
    T: fmt::Display,
{
    /// Renders `[left,right]`, or `[]` for the empty interval.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.bounds {
            Some((left, right)) => write!(f, "[{},{}]", left, right),
            None => f.write_str("[]"),
        }
    }
}

impl<T> From<(T, T)> for ClosedInterval<T>
where
    T: PartialOrd,
{
    #[inline]
    fn from(pair: (T, T)) -> Self {
        Self::new(pair.0, pair.1)
    }
}

impl<T> From<RangeInclusive<T>> for ClosedInterval<T>
where
    T: PartialOrd,
{
    #[inline]
    fn from(range: RangeInclusive<T>) -> Self {
        let (start, end) = range.into_inner();
        Self::new(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;

    #[test]
    fn test_construction_sorts_endpoints() {
        let iv = ClosedInterval::new(9, 1);
        assert_eq!(iv.left(), Ok(1));
        assert_eq!(iv.right(), Ok(9));
        assert_eq!(ClosedInterval::new(1, 9), iv);
        assert!(!iv.is_empty());
    }

    #[test]
    fn test_construction_from_pair_and_range() {
        assert_eq!(ClosedInterval::from((5, 3)), ClosedInterval::new(3, 5));
        assert_eq!(ClosedInterval::from(3..=5), ClosedInterval::new(3, 5));
    }

    #[test]
    fn test_point() {
        let iv = ClosedInterval::point(4);
        assert_eq!(iv, ClosedInterval::new(4, 4));
        assert_eq!(iv.length(), 0);
        assert!(iv.contains(4));
        assert!(!iv.contains(5));
    }

    #[test]
    fn test_unit() {
        let iv = ClosedInterval::<i32>::unit();
        assert_eq!(iv, ClosedInterval::new(0, 1));

        let iv = ClosedInterval::<f64>::unit();
        assert_eq!(iv.left(), Ok(0.0));
        assert_eq!(iv.right(), Ok(1.0));
    }

    #[test]
    fn test_empty_and_default() {
        let iv = ClosedInterval::<i32>::empty();
        assert!(iv.is_empty());
        assert_eq!(iv, ClosedInterval::default());

        // The empty interval needs no arithmetic capabilities at all.
        let words = ClosedInterval::<String>::empty();
        assert!(words.is_empty());
    }

    #[test]
    fn test_endpoint_access_on_empty_fails() {
        let iv = ClosedInterval::<i32>::empty();
        assert_eq!(iv.left(), Err(EmptyIntervalError));
        assert_eq!(iv.right(), Err(EmptyIntervalError));
        assert_eq!(
            EmptyIntervalError.to_string(),
            "The empty interval has no endpoints"
        );
    }

    #[test]
    #[should_panic(expected = "non-comparable endpoints")]
    fn test_nan_endpoint_panics() {
        ClosedInterval::new(f64::NAN, 1.0);
    }

    #[test]
    fn test_length() {
        assert_eq!(ClosedInterval::new(1, 5).length(), 4);
        assert_eq!(ClosedInterval::new(-3.5, 1.0).length(), 4.5);
        // Deliberate asymmetry with left()/right(): length of no set is
        // the additive identity.
        assert_eq!(ClosedInterval::<i32>::empty().length(), 0);
    }

    #[test]
    fn test_length_infinite_endpoints() {
        let iv = ClosedInterval::new(f64::NEG_INFINITY, f64::INFINITY);
        assert_eq!(iv.length(), f64::INFINITY);
    }

    #[test]
    fn test_contains() {
        let iv = ClosedInterval::new(1, 5);
        assert!(iv.contains(1)); // left endpoint included
        assert!(iv.contains(3));
        assert!(iv.contains(5)); // right endpoint included
        assert!(!iv.contains(0));
        assert!(!iv.contains(6));
    }

    #[test]
    fn test_empty_contains_nothing() {
        let iv = ClosedInterval::<i32>::empty();
        for x in [i32::MIN, -1, 0, 1, i32::MAX] {
            assert!(!iv.contains(x));
        }
    }

    #[test]
    fn test_contains_interval() {
        let a = ClosedInterval::new(0, 10);
        assert!(a.contains_interval(&a));
        assert!(a.contains_interval(&ClosedInterval::new(2, 8)));
        assert!(a.contains_interval(&ClosedInterval::new(0, 10)));
        assert!(!a.contains_interval(&ClosedInterval::new(-1, 5)));
        assert!(!a.contains_interval(&ClosedInterval::new(5, 11)));

        // Empty is a subset of everything and contains only empty.
        assert!(a.contains_interval(&ClosedInterval::empty()));
        assert!(ClosedInterval::<i32>::empty().contains_interval(&ClosedInterval::empty()));
        assert!(!ClosedInterval::empty().contains_interval(&a));
    }

    #[test]
    fn test_intersects() {
        let a = ClosedInterval::new(1, 5);
        assert!(a.intersects(&ClosedInterval::new(3, 8)));
        assert!(a.intersects(&ClosedInterval::new(5, 9))); // touching counts
        assert!(!a.intersects(&ClosedInterval::new(6, 9)));
        assert!(!a.intersects(&ClosedInterval::empty()));
        assert!(!ClosedInterval::<i32>::empty().intersects(&ClosedInterval::empty()));
    }

    #[test]
    fn test_intersection() {
        let a = ClosedInterval::new(1, 6);
        let b = ClosedInterval::new(8, 3);
        assert_eq!(a.intersection(b), ClosedInterval::new(3, 6));

        // Disjoint operands produce the empty interval.
        let c = ClosedInterval::new(1, 5);
        let d = ClosedInterval::new(7, 9);
        assert!(c.intersection(d).is_empty());

        // Touching endpoints leave a single point.
        let e = ClosedInterval::new(5, 9);
        assert_eq!(c.intersection(e), ClosedInterval::point(5));
    }

    #[test]
    fn test_intersection_algebra() {
        let a = ClosedInterval::new(1, 6);
        let b = ClosedInterval::new(3, 8);
        let c = ClosedInterval::new(5, 10);
        let empty = ClosedInterval::empty();

        // Commutative, associative, idempotent.
        assert_eq!(a * b, b * a);
        assert_eq!((a * b) * c, a * (b * c));
        assert_eq!(a * a, a);

        // Empty absorbs.
        assert_eq!(a * empty, empty);
        assert_eq!(empty * a, empty);
    }

    #[test]
    fn test_hull() {
        let a = ClosedInterval::new(1, 6);
        let b = ClosedInterval::new(8, 3);
        assert_eq!(a.hull(b), ClosedInterval::new(1, 8));

        let c = ClosedInterval::new(1, 5);
        let d = ClosedInterval::new(7, 9);
        assert_eq!(c.hull(d), ClosedInterval::new(9, 1));
        assert_eq!(c.hull(d).to_string(), "[1,9]");
    }

    #[test]
    fn test_hull_algebra() {
        let a = ClosedInterval::new(1, 6);
        let b = ClosedInterval::new(3, 8);
        let c = ClosedInterval::new(12, 20);
        let empty = ClosedInterval::empty();

        // Commutative, associative, idempotent.
        assert_eq!(a + b, b + a);
        assert_eq!((a + b) + c, a + (b + c));
        assert_eq!(a + a, a);

        // Empty is the identity, not absorbing.
        assert_eq!(a + empty, a);
        assert_eq!(empty + a, a);
        assert_eq!(empty + empty, empty);
    }

    #[test]
    fn test_operators_match_named_operations() {
        let a = ClosedInterval::new(1, 6);
        let b = ClosedInterval::new(3, 8);
        assert_eq!(a * b, a.intersection(b));
        assert_eq!(a + b, a.hull(b));
    }

    #[test]
    fn test_equality() {
        assert_eq!(
            ClosedInterval::<i32>::empty(),
            ClosedInterval::<i32>::empty()
        );
        // The degenerate point [0,0] is not the empty interval.
        assert_ne!(ClosedInterval::point(0), ClosedInterval::empty());
        assert_ne!(ClosedInterval::new(1, 5), ClosedInterval::new(1, 6));
    }

    #[test]
    fn test_total_order() {
        let empty = ClosedInterval::<i32>::empty();
        let origin = ClosedInterval::point(0);

        // Empty sorts before every non-empty interval.
        assert!(empty < origin);
        assert!(!(origin < empty));
        assert!(!(empty < empty));

        // Lexicographic on (left, right).
        assert!(ClosedInterval::new(1, 5) < ClosedInterval::new(2, 3));
        assert!(ClosedInterval::new(1, 4) < ClosedInterval::new(1, 5));

        let mut ivs = vec![
            ClosedInterval::new(2, 3),
            ClosedInterval::new(1, 5),
            empty,
            ClosedInterval::new(1, 4),
        ];
        ivs.sort();
        assert_eq!(
            ivs,
            vec![
                empty,
                ClosedInterval::new(1, 4),
                ClosedInterval::new(1, 5),
                ClosedInterval::new(2, 3),
            ]
        );
    }

    #[test]
    fn test_total_order_float_endpoints() {
        let mut ivs = vec![
            ClosedInterval::new(OrderedFloat(1.5), OrderedFloat(2.0)),
            ClosedInterval::empty(),
            ClosedInterval::new(OrderedFloat(0.5), OrderedFloat(9.0)),
        ];
        ivs.sort();
        assert!(ivs[0].is_empty());
        assert_eq!(ivs[1].left(), Ok(OrderedFloat(0.5)));
        assert_eq!(ivs[2].left(), Ok(OrderedFloat(1.5)));
    }

    #[test]
    fn test_strictly_precedes() {
        let a = ClosedInterval::new(1, 5);
        assert!(a.strictly_precedes(&ClosedInterval::new(7, 9)));
        assert!(!a.strictly_precedes(&ClosedInterval::new(3, 8)));
        // Touching endpoints do not count.
        assert!(!a.strictly_precedes(&ClosedInterval::new(5, 9)));

        // The empty interval is unordered against everything.
        let empty = ClosedInterval::empty();
        assert!(!empty.strictly_precedes(&a));
        assert!(!a.strictly_precedes(&empty));
        assert!(!empty.strictly_precedes(&empty));
    }

    #[test]
    fn test_strictly_succeeds() {
        let a = ClosedInterval::new(7, 9);
        assert!(a.strictly_succeeds(&ClosedInterval::new(1, 5)));
        assert!(!a.strictly_succeeds(&ClosedInterval::new(8, 10)));
        assert!(!a.strictly_succeeds(&ClosedInterval::empty()));
    }

    #[test]
    fn test_display() {
        assert_eq!(ClosedInterval::new(1, 9).to_string(), "[1,9]");
        assert_eq!(ClosedInterval::new(0.5, 2.5).to_string(), "[0.5,2.5]");
        assert_eq!(ClosedInterval::<i32>::empty().to_string(), "[]");
    }

    #[test]
    fn test_unified_construction() {
        let iv = ClosedInterval::try_new_unified(1i32, 2.5f64).unwrap();
        assert_eq!(iv, ClosedInterval::new(1.0, 2.5));

        // Endpoints are sorted after widening, same as `new`.
        let iv = ClosedInterval::try_new_unified(2.5f64, 1i32).unwrap();
        assert_eq!(iv, ClosedInterval::new(1.0, 2.5));

        assert!(ClosedInterval::try_new_unified(i64::MAX, 0.5f64).is_err());
    }

    #[test]
    fn test_mixed_intersection_and_hull() {
        let a = ClosedInterval::new(1i32, 6i32);
        let b = ClosedInterval::new(2.5f64, 8.5f64);
        assert_eq!(
            a.try_intersection(b).unwrap(),
            ClosedInterval::new(2.5, 6.0)
        );
        assert_eq!(a.try_hull(b).unwrap(), ClosedInterval::new(1.0, 8.5));
    }

    #[test]
    fn test_mixed_operations_with_empty() {
        let a = ClosedInterval::new(2.5f64, 8.5f64);
        let empty = ClosedInterval::<i32>::empty();

        // Empty promotes to the unified domain and keeps its algebraic role.
        assert_eq!(empty.try_hull(a).unwrap(), a);
        assert!(empty.try_intersection(a).unwrap().is_empty());
    }

    #[test]
    fn test_mixed_operation_failure_propagates() {
        let a = ClosedInterval::new(0i64, i64::MAX);
        let b = ClosedInterval::new(0.5f64, 1.5f64);
        assert!(a.try_hull(b).is_err());
        assert!(a.try_intersection(b).is_err());
    }
}
