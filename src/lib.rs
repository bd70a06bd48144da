// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Exact intersection queries between 2D and 3D linear primitives.
//!
//! Every supported pair of primitives answers two questions: whether the two
//! closed point sets meet ([`do_intersect`]) and what they share
//! ([`intersection`]). Primitives are generic over a [`Scalar`] field; with
//! [`CgarRational`] or [`LazyExact`] every branch is decided exactly.
//!
//! ```
//! use cgar::{geometry::{Point2, Segment2}, intersection::{intersection, PointOrSegment}};
//! use cgar::numeric::cgar_rational::CgarRational;
//!
//! let s1 = Segment2::<CgarRational>::new(&Point2::new(0, 0), &Point2::new(2, 2));
//! let s2 = Segment2::<CgarRational>::new(&Point2::new(0, 2), &Point2::new(2, 0));
//! assert_eq!(intersection(&s1, &s2), Some(PointOrSegment::Point(Point2::new(1, 1))));
//! ```
//!
//! [`Scalar`]: numeric::scalar::Scalar
//! [`CgarRational`]: numeric::cgar_rational::CgarRational
//! [`LazyExact`]: numeric::lazy_exact::LazyExact

pub mod error;
pub mod geometry;
pub mod intersection;
pub mod kernel;
pub mod numeric;
pub mod operations;

pub use error::GeometryError;
pub use intersection::{
    DoIntersect, Intersect, do_intersect, do_intersect_3_planes, intersection,
    intersection_3_planes,
};
