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

//! # Math Primitives
//!
//! Closed-interval math over any ordered scalar domain. The interval here
//! is closed on both ends, `[left, right]`, and the empty set is a first
//! class value rather than a degenerate pair of endpoints.
//!
//! ## Submodules
//!
//! - `interval`: A generic `[left, right]` interval type with canonical
//!   construction (endpoints are stored in sorted order), an explicit empty
//!   interval, predicates (membership, containment, overlap, strict
//!   precedence), set operations (intersection as `*`, union-hull as `+`),
//!   measurement, a lexicographic total order, and `Display` rendering.
//!
//! ## Motivation
//!
//! Hull and intersection form a tidy little algebra: the empty interval is
//! absorbing under intersection and the identity under hull. Keeping both
//! operations total (no `Option` results) makes folds over interval
//! collections direct and allocation-free.
//!
//! Refer to the `interval` module for detailed APIs and examples.

pub mod interval;
