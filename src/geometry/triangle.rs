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
        plane::Plane3,
        point::{Point, Point2, Point3},
        segment::Segment,
        vector::Vector3,
    },
    kernel::orientation::{collinear, orientation_2},
    numeric::scalar::{Scalar, Sign},
};

#[derive(Clone, Debug, PartialEq)]
pub struct Triangle<T: Scalar, const N: usize> {
    pub a: Point<T, N>,
    pub b: Point<T, N>,
    pub c: Point<T, N>,
}

/// What a triangle collapses to when its vertices are collinear.
#[derive(Clone, Debug, PartialEq)]
pub enum TriangleShape<T: Scalar, const N: usize> {
    Point(Point<T, N>),
    Segment(Segment<T, N>),
    Triangle,
}

impl<T: Scalar, const N: usize> Triangle<T, N> {
    pub fn new(a: &Point<T, N>, b: &Point<T, N>, c: &Point<T, N>) -> Self {
        Triangle {
            a: a.clone(),
            b: b.clone(),
            c: c.clone(),
        }
    }

    pub fn vertices(&self) -> [&Point<T, N>; 3] {
        [&self.a, &self.b, &self.c]
    }

    pub fn vertex(&self, i: usize) -> &Point<T, N> {
        match i % 3 {
            0 => &self.a,
            1 => &self.b,
            _ => &self.c,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        collinear(&self.a, &self.b, &self.c)
    }

    /// The lower-dimensional form of a degenerate triangle: the segment between
    /// its two extreme vertices, or a point when all three coincide.
    pub fn shape(&self) -> TriangleShape<T, N> {
        if !self.is_degenerate() {
            return TriangleShape::Triangle;
        }
        let mut lo = &self.a;
        let mut hi = &self.a;
        for v in [&self.b, &self.c] {
            if v.compare_lex(lo) == Ordering::Less {
                lo = v;
            }
            if v.compare_lex(hi) == Ordering::Greater {
                hi = v;
            }
        }
        if lo.coincides(hi) {
            TriangleShape::Point(lo.clone())
        } else {
            TriangleShape::Segment(Segment::new(lo, hi))
        }
    }
}

impl<T: Scalar> Triangle<T, 2> {
    pub fn orientation(&self) -> Sign {
        orientation_2(&self.a, &self.b, &self.c)
    }

    /// Vertices in counter-clockwise order.
    pub fn ccw_vertices(&self) -> [Point2<T>; 3] {
        if self.orientation() == Sign::Negative {
            [self.a.clone(), self.c.clone(), self.b.clone()]
        } else {
            [self.a.clone(), self.b.clone(), self.c.clone()]
        }
    }

    /// Closed triangle membership, boundary included.
    pub fn has_on(&self, p: &Point2<T>) -> bool {
        match self.shape() {
            TriangleShape::Point(q) => q.coincides(p),
            TriangleShape::Segment(s) => s.has_on(p),
            TriangleShape::Triangle => {
                let o = self.orientation();
                [
                    orientation_2(&self.a, &self.b, p),
                    orientation_2(&self.b, &self.c, p),
                    orientation_2(&self.c, &self.a, p),
                ]
                .iter()
                .all(|s| *s == o || s.is_zero())
            }
        }
    }
}

impl<T: Scalar> Triangle<T, 3> {
    /// `(b - a) x (c - a)`.
    pub fn normal(&self) -> Vector3<T> {
        (&self.b - &self.a).cross(&(&self.c - &self.a))
    }

    pub fn supporting_plane(&self) -> Plane3<T> {
        Plane3::from_point_normal(&self.a, self.normal())
    }

    /// Closed triangle membership, boundary included.
    pub fn has_on(&self, p: &Point3<T>) -> bool {
        match self.shape() {
            TriangleShape::Point(q) => q.coincides(p),
            TriangleShape::Segment(s) => s.has_on(p),
            TriangleShape::Triangle => {
                let n = self.normal();
                if !self.supporting_plane().has_on(p) {
                    return false;
                }
                self.edges_contain_projection(p, &n)
            }
        }
    }

    /// For `p` in the supporting plane: whether `p` is on the inner side of all three edges.
    pub(crate) fn edges_contain_projection(&self, p: &Point3<T>, n: &Vector3<T>) -> bool {
        (0..3).all(|i| {
            let u = self.vertex(i);
            let v = self.vertex(i + 1);
            (v - u).cross(&(p - u)).dot(n).is_positive_or_zero()
        })
    }
}

pub type Triangle2<T> = Triangle<T, 2>;
pub type Triangle3<T> = Triangle<T, 3>;
