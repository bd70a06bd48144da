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

use std::array::from_fn;

use crate::{
    geometry::{
        aabb::{Aabb, AabbShape, IsoRectangle2},
        line::Line2,
        point::Point2,
        ray::Ray2,
        segment::Segment2,
        triangle::Triangle2,
    },
    intersection::{
        Intersect, Linear,
        clip::{HalfSpace, clip_convex, region_from_points},
        result::{ConvexRegion2, FromInterval, PointOrSegment2, PointSegmentOrRectangle2},
        two::triangle::subject_points,
    },
    numeric::scalar::Scalar,
};

impl<T: Scalar> Intersect for Aabb<T, 2> {
    type Output = PointSegmentOrRectangle2<T>;

    fn intersection(&self, other: &IsoRectangle2<T>) -> Option<PointSegmentOrRectangle2<T>> {
        if !self.intersects(other) {
            return None;
        }
        let lo: [T; 2] = from_fn(|i| self.min[i].clone().max(other.min[i].clone()));
        let hi: [T; 2] = from_fn(|i| self.max[i].clone().min(other.max[i].clone()));
        let overlap = Aabb::new(Point2::from_coords(lo), Point2::from_coords(hi));
        Some(match overlap.shape() {
            AabbShape::Point(p) => PointSegmentOrRectangle2::Point(p),
            AabbShape::Segment(s) => PointSegmentOrRectangle2::Segment(s),
            AabbShape::Box => PointSegmentOrRectangle2::Rectangle(overlap),
        })
    }
}

do_intersect_via_intersection!(IsoRectangle2<T>, IsoRectangle2<T>);

/// A line, ray or segment clipped to a rectangle by its slabs.
macro_rules! linear_rectangle {
    ($l:ty) => {
        impl<T: Scalar> Intersect<IsoRectangle2<T>> for $l {
            type Output = PointOrSegment2<T>;

            fn intersection(&self, rect: &IsoRectangle2<T>) -> Option<PointOrSegment2<T>> {
                let (o, v) = (self.origin(), self.direction());
                let shape = self.interval().clip_to_box(&o, &v, rect).materialize(&o, &v)?;
                PointOrSegment2::from_interval(shape)
            }
        }

        do_intersect_via_intersection!($l, IsoRectangle2<T>);
        symmetric!($l, IsoRectangle2<T>);
    };
}

linear_rectangle!(Line2<T>);
linear_rectangle!(Ray2<T>);
linear_rectangle!(Segment2<T>);

impl<T: Scalar> Intersect<IsoRectangle2<T>> for Triangle2<T> {
    type Output = ConvexRegion2<T>;

    fn intersection(&self, rect: &IsoRectangle2<T>) -> Option<ConvexRegion2<T>> {
        let faces = HalfSpace::box_faces(rect);
        region_from_points(clip_convex(subject_points(self), &faces))
    }
}

do_intersect_via_intersection!(Triangle2<T>, IsoRectangle2<T>);
symmetric!(Triangle2<T>, IsoRectangle2<T>);
