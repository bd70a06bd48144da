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

//! Boolean queries against `f64` bounding boxes. The box is converted to the
//! query's scalar first so every test runs in the same arithmetic as the
//! other primitive.

use std::cmp::Ordering;

use crate::{
    geometry::{
        aabb::IsoCuboid3,
        bbox::Bbox3,
        line::Line3,
        plane::Plane3,
        point::Point3,
        ray::Ray3,
        segment::Segment3,
        triangle::Triangle3,
        vector::Vector3,
    },
    intersection::{DoIntersect, Linear},
    numeric::scalar::Scalar,
};

impl DoIntersect for Bbox3 {
    fn do_intersect(&self, other: &Bbox3) -> bool {
        (0..3).all(|i| self.min[i] <= other.max[i] && other.min[i] <= self.max[i])
    }
}

impl<T: Scalar> DoIntersect<Point3<T>> for Bbox3 {
    fn do_intersect(&self, p: &Point3<T>) -> bool {
        self.to_aabb::<T>().has_on(p)
    }
}

symmetric_do_intersect!(Bbox3, Point3<T>);

/// Slab test on the parameter interval.
macro_rules! bbox_linear {
    ($l:ty) => {
        impl<T: Scalar> DoIntersect<$l> for Bbox3 {
            fn do_intersect(&self, l: &$l) -> bool {
                let (o, v) = (l.origin(), l.direction());
                !l.interval().clip_to_box(&o, &v, &self.to_aabb::<T>()).is_empty()
            }
        }

        symmetric_do_intersect!(Bbox3, $l);
    };
}

bbox_linear!(Line3<T>);
bbox_linear!(Ray3<T>);
bbox_linear!(Segment3<T>);

/// Half extents and center of a box.
fn half_extents<T: Scalar>(b: &IsoCuboid3<T>) -> ([T; 3], Point3<T>) {
    let half = T::from_num_den(1, 2);
    let h = std::array::from_fn(|i| b.extent(i) * half.clone());
    let c = Point3::from_coords(std::array::from_fn(|i| b.center(i)));
    (h, c)
}

/// Projection radius of a centered box onto `axis`.
fn box_radius<T: Scalar>(h: &[T; 3], axis: &Vector3<T>) -> T {
    (0..3).fold(T::zero(), |acc, i| acc + h[i].clone() * axis[i].abs())
}

impl<T: Scalar> DoIntersect<Plane3<T>> for Bbox3 {
    /// The plane passes within the box's projection radius of its center.
    fn do_intersect(&self, plane: &Plane3<T>) -> bool {
        let (h, c) = half_extents(&self.to_aabb::<T>());
        let s = plane.value_at(&c);
        s.abs().compare(&box_radius(&h, &plane.normal)) != Ordering::Greater
    }
}

symmetric_do_intersect!(Bbox3, Plane3<T>);

/// Whether `axis` separates the box (centered at the origin) from the points.
/// A zero axis never separates.
fn separates<T: Scalar>(axis: &Vector3<T>, pts: &[Vector3<T>; 3], h: &[T; 3]) -> bool {
    let r = box_radius(h, axis);
    let [p0, p1, p2] = pts.each_ref().map(|p| axis.dot(p));
    let lo = p0.clone().min(p1.clone()).min(p2.clone());
    let hi = p0.max(p1).max(p2);
    lo.compare(&r) == Ordering::Greater || hi.compare(&(-r)) == Ordering::Less
}

impl<T: Scalar> DoIntersect<Triangle3<T>> for Bbox3 {
    /// Separating axis test over the three box normals, the triangle normal
    /// and the nine edge cross products.
    fn do_intersect(&self, tri: &Triangle3<T>) -> bool {
        let (h, c) = half_extents(&self.to_aabb::<T>());
        let pts = tri.vertices().map(|v| v - &c);
        let edges: [Vector3<T>; 3] = std::array::from_fn(|i| &pts[(i + 1) % 3] - &pts[i]);

        let mut axes: Vec<Vector3<T>> = Vec::with_capacity(13);
        for k in 0..3 {
            let mut e = Vector3::zero();
            e.coords[k] = T::one();
            for f in &edges {
                axes.push(e.cross(f));
            }
            axes.push(e);
        }
        axes.push(edges[0].cross(&edges[1]));

        !axes.iter().any(|a| separates(a, &pts, &h))
    }
}

symmetric_do_intersect!(Bbox3, Triangle3<T>);
