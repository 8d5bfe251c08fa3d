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

//! # Numeric Foundations
//!
//! Numeric support for mixed-representation interval endpoints.
//!
//! ## Submodules
//!
//! - `unify`: The `UnifyWith` trait and its macro-generated promotion-rule
//!   table. Mixed primitive numeric types (differing width, signedness, or
//!   integer/float) are widened to an explicit common representation with
//!   exactness-checked conversions; pairs with no common representation
//!   simply do not implement the trait.
//!
//! ## Motivation
//!
//! Languages with implicit numeric promotion pick a common type silently.
//! Here the rule table is spelled out and every conversion is verified to
//! round-trip, so widening never changes a value.
//!
//! Refer to the `unify` submodule for the full rule table.

pub mod unify;
