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
        line::Line3,
        point::Point3,
        ray::Ray3,
        segment::Segment3,
        triangle::{Triangle, Triangle3, TriangleShape},
        util::{lift_to_plane, project_to_2d},
    },
    intersection::{
        Intersect, Linear,
        algebra::{Split, split_by_values},
        clip::region_from_points,
        linear::linear_triangle_3_interval,
        result::{ConvexRegion3, FromInterval, PointOrSegment3},
        two::triangle::triangle_triangle_2,
    },
    numeric::scalar::Scalar,
};

/// A line, ray or segment against a triangle in space.
macro_rules! linear_triangle {
    ($l:ty) => {
        impl<T: Scalar> Intersect<Triangle3<T>> for $l {
            type Output = PointOrSegment3<T>;

            fn intersection(&self, tri: &Triangle3<T>) -> Option<PointOrSegment3<T>> {
                let shape = linear_triangle_3_interval(self, tri)
                    .materialize(&self.origin(), &self.direction())?;
                PointOrSegment3::from_interval(shape)
            }
        }

        do_intersect_via_intersection!($l, Triangle3<T>);
        symmetric!($l, Triangle3<T>);
    };
}

linear_triangle!(Line3<T>);
linear_triangle!(Ray3<T>);
linear_triangle!(Segment3<T>);

/// A segment (or point) of the other triangle's plane, ordered along axis `k`.
fn ends_along<T: Scalar>(split: Split<T, 3>, k: usize) -> Option<(Point3<T>, Point3<T>)> {
    match split {
        Split::Point(p) => Some((p.clone(), p)),
        Split::Segment(p, q) => {
            if p[k].compare(&q[k]) == Ordering::Greater {
                Some((q, p))
            } else {
                Some((p, q))
            }
        }
        Split::All => None,
    }
}

/// Two triangles sharing a supporting plane, solved in the coordinate plane
/// that drops the normal's dominant axis.
fn coplanar_triangles<T: Scalar>(a: &Triangle3<T>, b: &Triangle3<T>) -> Option<ConvexRegion3<T>> {
    log::debug!("coplanar triangles, solving in 2D");
    let plane = a.supporting_plane();
    let k = plane.normal.dominant_axis();
    let flat = |t: &Triangle3<T>| {
        let [p, q, r] = t.vertices().map(|v| project_to_2d(v, k));
        Triangle::new(&p, &q, &r)
    };
    let region = triangle_triangle_2(&flat(a), &flat(b))?;
    let lifted = region
        .vertices()
        .iter()
        .map(|p| lift_to_plane(p, &plane, k))
        .collect();
    region_from_points(lifted)
}

pub(crate) fn triangle_triangle_3<T: Scalar>(
    a: &Triangle3<T>,
    b: &Triangle3<T>,
) -> Option<ConvexRegion3<T>> {
    match (a.shape(), b.shape()) {
        (_, TriangleShape::Point(q)) => a.has_on(&q).then_some(ConvexRegion3::Point(q)),
        (TriangleShape::Point(p), _) => b.has_on(&p).then_some(ConvexRegion3::Point(p)),
        (_, TriangleShape::Segment(s)) => {
            log::trace!("triangle collapses to a segment");
            let shape = linear_triangle_3_interval(&s, a).materialize(&s.origin(), &s.direction())?;
            Some(PointOrSegment3::from_interval(shape)?.into())
        }
        (TriangleShape::Segment(s), _) => {
            log::trace!("triangle collapses to a segment");
            let shape = linear_triangle_3_interval(&s, b).materialize(&s.origin(), &s.direction())?;
            Some(PointOrSegment3::from_interval(shape)?.into())
        }
        (TriangleShape::Triangle, TriangleShape::Triangle) => crossing_triangles(a, b),
    }
}

/// Reject by the signed values of each triangle against the other's plane,
/// then overlap the two cuts along the planes' common line.
fn crossing_triangles<T: Scalar>(a: &Triangle3<T>, b: &Triangle3<T>) -> Option<ConvexRegion3<T>> {
    let (pa, pb) = (a.supporting_plane(), b.supporting_plane());
    let b_vals = b.vertices().map(|v| pa.value_at(v));
    if b_vals.iter().all(|v| v.is_zero()) {
        return coplanar_triangles(a, b);
    }
    let cut_b = split_by_values(b.vertices(), b_vals)?;
    let cut_a = split_by_values(a.vertices(), a.vertices().map(|v| pb.value_at(v)))?;

    let dir = pa.normal.cross(&pb.normal);
    if dir.is_zero() {
        return coplanar_triangles(a, b);
    }
    let k = dir.dominant_axis();
    let (a_lo, a_hi) = ends_along(cut_a, k)?;
    let (b_lo, b_hi) = ends_along(cut_b, k)?;

    let lo = if a_lo[k].compare(&b_lo[k]) == Ordering::Less { b_lo } else { a_lo };
    let hi = if a_hi[k].compare(&b_hi[k]) == Ordering::Greater { b_hi } else { a_hi };
    match lo[k].compare(&hi[k]) {
        Ordering::Greater => None,
        Ordering::Equal => Some(ConvexRegion3::Point(lo)),
        Ordering::Less => Some(ConvexRegion3::Segment(Segment3::new(&lo, &hi).canonical())),
    }
}

impl<T: Scalar> Intersect for Triangle<T, 3> {
    type Output = ConvexRegion3<T>;

    fn intersection(&self, other: &Triangle3<T>) -> Option<ConvexRegion3<T>> {
        triangle_triangle_3(self, other)
    }
}

do_intersect_via_intersection!(Triangle3<T>, Triangle3<T>);
