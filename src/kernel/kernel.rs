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

use std::cmp::Ordering;

use crate::{
    geometry::{
        line::{Line2, Line3},
        plane::Plane3,
        point::{Point, Point2, Point3},
        segment::Segment,
    },
    kernel::{orientation, predicates},
    numeric::scalar::{Scalar, Sign},
};

/// Capability bag for the geometry code: a number type plus the predicates and
/// constructions built on it. Kernels are zero-sized and only select `FT`.
pub trait Kernel {
    type FT: Scalar;

    fn name() -> &'static str;

    fn point2(x: f64, y: f64) -> Point2<Self::FT> {
        Point2::from_coords([Self::FT::from(x), Self::FT::from(y)])
    }

    fn point3(x: f64, y: f64, z: f64) -> Point3<Self::FT> {
        Point3::from_coords([Self::FT::from(x), Self::FT::from(y), Self::FT::from(z)])
    }

    /// Signed area of (a, b, c) times two (CCW>0, CW<0, 0 if collinear).
    fn orient2d(a: &Point2<Self::FT>, b: &Point2<Self::FT>, c: &Point2<Self::FT>) -> Self::FT {
        orientation::orient2d(a, b, c)
    }

    /// Signed volume of tetra (a,b,c,d): ((b-a) x (c-a)) · (d-a).
    fn orient3d(
        a: &Point3<Self::FT>,
        b: &Point3<Self::FT>,
        c: &Point3<Self::FT>,
        d: &Point3<Self::FT>,
    ) -> Self::FT {
        orientation::orient3d(a, b, c, d)
    }

    fn orientation_2(a: &Point2<Self::FT>, b: &Point2<Self::FT>, c: &Point2<Self::FT>) -> Sign {
        orientation::orientation_2(a, b, c)
    }

    fn orientation_3(
        a: &Point3<Self::FT>,
        b: &Point3<Self::FT>,
        c: &Point3<Self::FT>,
        d: &Point3<Self::FT>,
    ) -> Sign {
        orientation::orientation_3(a, b, c, d)
    }

    fn coplanar(
        a: &Point3<Self::FT>,
        b: &Point3<Self::FT>,
        c: &Point3<Self::FT>,
        d: &Point3<Self::FT>,
    ) -> bool {
        orientation::coplanar(a, b, c, d)
    }

    fn compare_xy(p: &Point2<Self::FT>, q: &Point2<Self::FT>) -> Ordering {
        orientation::compare_xy(p, q)
    }

    // Convenience predicates
    fn are_equal<const N: usize>(a: &Point<Self::FT, N>, b: &Point<Self::FT, N>) -> bool {
        predicates::are_equal(a, b)
    }

    fn are_collinear<const N: usize>(
        a: &Point<Self::FT, N>,
        b: &Point<Self::FT, N>,
        c: &Point<Self::FT, N>,
    ) -> bool {
        predicates::are_collinear(a, b, c)
    }

    fn is_point_on_segment<const N: usize>(p: &Point<Self::FT, N>, s: &Segment<Self::FT, N>) -> bool {
        predicates::is_point_on_segment(p, s)
    }

    /// Line through two points, `None` when they coincide.
    fn line_2(p: &Point2<Self::FT>, q: &Point2<Self::FT>) -> Option<Line2<Self::FT>> {
        Line2::through(p, q).ok()
    }

    fn line_3(p: &Point3<Self::FT>, q: &Point3<Self::FT>) -> Option<Line3<Self::FT>> {
        Line3::through(p, q).ok()
    }

    fn plane_3(
        p: &Point3<Self::FT>,
        q: &Point3<Self::FT>,
        r: &Point3<Self::FT>,
    ) -> Option<Plane3<Self::FT>> {
        Plane3::through(p, q, r).ok()
    }
}

pub type KPoint2<K> = Point2<<K as Kernel>::FT>;
pub type KPoint3<K> = Point3<<K as Kernel>::FT>;
