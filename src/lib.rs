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

//! # Gamut
//!
//! A generic closed-interval algebra over ordered scalar domains. The crate
//! centers on a single immutable value type, `ClosedInterval<T>`, together
//! with the small set of operations that make it useful: intersection,
//! union-hull, membership testing, measurement, and both a total
//! (lexicographic) and a partial ("entirely left of") ordering.
//!
//! ## Modules
//!
//! - `math`: The `ClosedInterval<T>` value type with canonical construction
//!   (out-of-order endpoints are swapped), an explicit empty-interval
//!   representation, set operations overloaded as `*` (intersection) and
//!   `+` (union-hull), ordering predicates, and rendering.
//! - `num`: Numeric type unification. An explicit promotion-rule table
//!   (`UnifyWith`) that widens mixed primitive endpoint types to a common
//!   representation, with exactness-checked conversions.
//!
//! ## Purpose
//!
//! Interval endpoints in real programs come in mixed precisions and mixed
//! signedness. These primitives keep the interval invariants in one place
//! and make the promotion rules explicit instead of relying on ad hoc casts
//! scattered through calling code.
//!
//! Refer to each module for detailed APIs and examples.

pub mod math;
pub mod num;
