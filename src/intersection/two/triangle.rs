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

use crate::{
    geometry::{
        line::Line2,
        point::Point2,
        ray::Ray2,
        segment::Segment2,
        triangle::{Triangle, Triangle2, TriangleShape},
    },
    intersection::{
        Intersect, Linear,
        clip::{HalfSpace, clip_convex, region_from_points},
        linear::{linear_linear, linear_triangle_2_interval},
        result::{ConvexRegion2, FromInterval, PointOrSegment2},
    },
    numeric::scalar::Scalar,
};

/// The vertex list of a triangle's actual shape: counter-clockwise corners, or
/// the one or two points it collapses to.
pub(crate) fn subject_points<T: Scalar>(t: &Triangle2<T>) -> Vec<Point2<T>> {
    match t.shape() {
        TriangleShape::Point(p) => vec![p],
        TriangleShape::Segment(s) => vec![s.a, s.b],
        TriangleShape::Triangle => t.ccw_vertices().to_vec(),
    }
}

pub(crate) fn triangle_triangle_2<T: Scalar>(
    a: &Triangle2<T>,
    b: &Triangle2<T>,
) -> Option<ConvexRegion2<T>> {
    match (a.shape(), b.shape()) {
        (_, TriangleShape::Triangle) => {
            let edges = HalfSpace::triangle_edges(&b.ccw_vertices());
            region_from_points(clip_convex(subject_points(a), &edges))
        }
        (TriangleShape::Triangle, _) => {
            let edges = HalfSpace::triangle_edges(&a.ccw_vertices());
            region_from_points(clip_convex(subject_points(b), &edges))
        }
        (TriangleShape::Point(p), _) => b.has_on(&p).then_some(ConvexRegion2::Point(p)),
        (_, TriangleShape::Point(q)) => a.has_on(&q).then_some(ConvexRegion2::Point(q)),
        (TriangleShape::Segment(s), TriangleShape::Segment(t)) => {
            log::trace!("both triangles collapse to segments");
            let shared = PointOrSegment2::from_interval(linear_linear(&s, &t)?)?;
            Some(shared.into())
        }
    }
}

/// A line, ray or segment clipped by a triangle.
macro_rules! linear_triangle {
    ($l:ty) => {
        impl<T: Scalar> Intersect<Triangle2<T>> for $l {
            type Output = PointOrSegment2<T>;

            fn intersection(&self, tri: &Triangle2<T>) -> Option<PointOrSegment2<T>> {
                let shape = linear_triangle_2_interval(self, tri)
                    .materialize(&self.origin(), &self.direction())?;
                PointOrSegment2::from_interval(shape)
            }
        }

        do_intersect_via_intersection!($l, Triangle2<T>);
        symmetric!($l, Triangle2<T>);
    };
}

linear_triangle!(Line2<T>);
linear_triangle!(Ray2<T>);
linear_triangle!(Segment2<T>);

impl<T: Scalar> Intersect for Triangle<T, 2> {
    type Output = ConvexRegion2<T>;

    fn intersection(&self, other: &Triangle2<T>) -> Option<ConvexRegion2<T>> {
        triangle_triangle_2(self, other)
    }
}

do_intersect_via_intersection!(Triangle2<T>, Triangle2<T>);
