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

//! Intersection queries between 2D and 3D primitives.
//!
//! Every supported pair implements [`DoIntersect`] and, unless the pair only
//! has the boolean query, [`Intersect`], in both argument orders. Results are
//! per-pair sum types from [`result`] wrapped in `Option`, `None` being the
//! empty set.

use crate::{geometry::plane::Plane3, numeric::scalar::Scalar};

/// Boolean query: do the two closed point sets share a point?
pub trait DoIntersect<Rhs: ?Sized = Self> {
    fn do_intersect(&self, other: &Rhs) -> bool;
}

/// Constructive query returning the shared point set.
pub trait Intersect<Rhs: ?Sized = Self> {
    type Output;

    fn intersection(&self, other: &Rhs) -> Option<Self::Output>;
}

pub fn intersection<A, B>(a: &A, b: &B) -> Option<A::Output>
where
    A: Intersect<B>,
{
    a.intersection(b)
}

pub fn do_intersect<A, B>(a: &A, b: &B) -> bool
where
    A: DoIntersect<B>,
{
    a.do_intersect(b)
}

pub fn intersection_3_planes<T: Scalar>(
    p1: &Plane3<T>,
    p2: &Plane3<T>,
    p3: &Plane3<T>,
) -> Option<result::PointLineOrPlane3<T>> {
    algebra::three_planes(p1, p2, p3)
}

pub fn do_intersect_3_planes<T: Scalar>(p1: &Plane3<T>, p2: &Plane3<T>, p3: &Plane3<T>) -> bool {
    algebra::three_planes(p1, p2, p3).is_some()
}

/// `DoIntersect` answered by the constructive query.
macro_rules! do_intersect_via_intersection {
    ($a:ty, $b:ty) => {
        impl<T: $crate::numeric::scalar::Scalar> $crate::intersection::DoIntersect<$b> for $a {
            fn do_intersect(&self, other: &$b) -> bool {
                $crate::intersection::Intersect::intersection(self, other).is_some()
            }
        }
    };
}

/// Both queries for `$b x $a`, forwarded to `$a x $b`.
macro_rules! symmetric {
    ($a:ty, $b:ty) => {
        impl<T: $crate::numeric::scalar::Scalar> $crate::intersection::Intersect<$a> for $b {
            type Output = <$a as $crate::intersection::Intersect<$b>>::Output;

            fn intersection(&self, other: &$a) -> Option<Self::Output> {
                $crate::intersection::Intersect::intersection(other, self)
            }
        }

        symmetric_do_intersect!($a, $b);
    };
}

/// The boolean query for `$b x $a`, forwarded to `$a x $b`.
macro_rules! symmetric_do_intersect {
    ($a:ty, $b:ty) => {
        impl<T: $crate::numeric::scalar::Scalar> $crate::intersection::DoIntersect<$a> for $b {
            fn do_intersect(&self, other: &$a) -> bool {
                $crate::intersection::DoIntersect::do_intersect(other, self)
            }
        }
    };
}

/// A pair of parametric pieces whose shared part is read off a parameter interval.
macro_rules! linear_pair {
    ($a:ty, $b:ty => $out:ty) => {
        impl<T: $crate::numeric::scalar::Scalar> $crate::intersection::Intersect<$b> for $a {
            type Output = $out;

            fn intersection(&self, other: &$b) -> Option<$out> {
                $crate::intersection::result::FromInterval::from_interval(
                    $crate::intersection::linear::linear_linear(self, other)?,
                )
            }
        }

        do_intersect_via_intersection!($a, $b);
    };
}

pub mod algebra;
pub mod clip;
pub mod interval;
pub mod linear;
#[cfg(feature = "object")]
pub mod object;
pub mod result;
mod three;
mod two;

pub use interval::{IntervalShape, Linear, ParamInterval, ParamLine};
pub use result::*;
