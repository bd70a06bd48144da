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

//! Sutherland–Hodgman clipping of convex vertex lists against closed halfspaces.

use crate::{
    geometry::{
        aabb::Aabb,
        point::{Point, Point2},
        segment::Segment,
        triangle::Triangle,
        vector::{Vector, Vector2},
    },
    intersection::result::ConvexRegion,
    kernel::orientation::collinear,
    numeric::scalar::Scalar,
};

/// The closed halfspace `normal . p + offset >= 0`.
#[derive(Clone, Debug, PartialEq)]
pub struct HalfSpace<T: Scalar, const N: usize> {
    pub normal: Vector<T, N>,
    pub offset: T,
}

impl<T: Scalar, const N: usize> HalfSpace<T, N> {
    pub fn new(normal: Vector<T, N>, offset: T) -> Self {
        HalfSpace { normal, offset }
    }

    pub fn value_at(&self, p: &Point<T, N>) -> T {
        self.normal.dot(&p.as_vector()) + self.offset.clone()
    }
}

impl<T: Scalar> HalfSpace<T, 2> {
    /// Left of the directed edge `p -> q`; the value is `orient2d(p, q, x)`.
    pub fn left_of(p: &Point2<T>, q: &Point2<T>) -> Self {
        let e = q - p;
        let normal = Vector2::from_coords([-e[1].clone(), e[0].clone()]);
        let offset = -normal.dot(&p.as_vector());
        HalfSpace { normal, offset }
    }

    /// The three edge halfplanes of a counter-clockwise triangle.
    pub fn triangle_edges(ccw: &[Point2<T>; 3]) -> [Self; 3] {
        std::array::from_fn(|i| Self::left_of(&ccw[i], &ccw[(i + 1) % 3]))
    }
}

impl<T: Scalar, const N: usize> HalfSpace<T, N> {
    /// The `2N` slabs bounding a box: `x_i - min_i >= 0` and `max_i - x_i >= 0`.
    pub fn box_faces(aabb: &Aabb<T, N>) -> Vec<Self> {
        let mut out = Vec::with_capacity(2 * N);
        for i in 0..N {
            let mut lo = Vector::zero();
            lo.coords[i] = T::one();
            out.push(HalfSpace::new(lo, -aabb.min[i].clone()));
            let mut hi = Vector::zero();
            hi.coords[i] = -T::one();
            out.push(HalfSpace::new(hi, aabb.max[i].clone()));
        }
        out
    }
}

/// One clipping step. Input and output are closed convex vertex lists; lists of
/// one or two vertices stand for a point and a segment.
pub fn clip_halfspace<T: Scalar, const N: usize>(
    poly: &[Point<T, N>],
    h: &HalfSpace<T, N>,
) -> Vec<Point<T, N>> {
    let n = poly.len();
    let values: Vec<T> = poly.iter().map(|p| h.value_at(p)).collect();
    let mut out = Vec::with_capacity(n + 1);
    for i in 0..n {
        let j = (i + 1) % n;
        let (vc, vn) = (&values[i], &values[j]);
        if vc.is_positive_or_zero() {
            out.push(poly[i].clone());
        }
        if (vc.is_positive() && vn.is_negative()) || (vc.is_negative() && vn.is_positive()) {
            let t = vc.clone() / (vc.clone() - vn.clone());
            out.push(poly[i].lerp(&poly[j], &t));
        }
    }
    out
}

/// Clip against every halfspace in turn, then tidy the result.
pub fn clip_convex<T: Scalar, const N: usize>(
    subject: Vec<Point<T, N>>,
    halfspaces: &[HalfSpace<T, N>],
) -> Vec<Point<T, N>> {
    let mut poly = subject;
    for (step, h) in halfspaces.iter().enumerate() {
        poly = clip_halfspace(&poly, h);
        log::trace!("clip step {step}: {} vertices left", poly.len());
        if poly.is_empty() {
            break;
        }
    }
    normalize(poly)
}

/// Remove repeated vertices (also across the wrap), collapse collinear lists
/// to their two extremes and drop vertices lying on the edge between their
/// neighbours.
pub fn normalize<T: Scalar, const N: usize>(pts: Vec<Point<T, N>>) -> Vec<Point<T, N>> {
    let mut out: Vec<Point<T, N>> = Vec::with_capacity(pts.len());
    for p in pts {
        if out.last().is_none_or(|q| !q.coincides(&p)) {
            out.push(p);
        }
    }
    while out.len() > 1 && out[0].coincides(&out[out.len() - 1]) {
        out.pop();
    }
    if out.len() < 3 {
        return out;
    }

    if (2..out.len()).all(|i| collinear(&out[0], &out[1], &out[i])) {
        let lo = out.iter().min_by(|a, b| a.compare_lex(b));
        let hi = out.iter().max_by(|a, b| a.compare_lex(b));
        return match (lo, hi) {
            (Some(lo), Some(hi)) => vec![lo.clone(), hi.clone()],
            _ => Vec::new(),
        };
    }

    let mut i = 0;
    while i < out.len() && out.len() > 3 {
        let n = out.len();
        let prev = &out[(i + n - 1) % n];
        let next = &out[(i + 1) % n];
        if collinear(prev, &out[i], next) {
            out.remove(i);
            i = 0;
        } else {
            i += 1;
        }
    }
    out
}

/// Rotate a cyclic vertex list so it starts at its lexicographically smallest vertex.
pub fn rotate_to_lex_min<T: Scalar, const N: usize>(mut pts: Vec<Point<T, N>>) -> Vec<Point<T, N>> {
    let start = (0..pts.len())
        .min_by(|&a, &b| pts[a].compare_lex(&pts[b]))
        .unwrap_or(0);
    pts.rotate_left(start);
    pts
}

/// Package a normalized convex vertex list.
pub fn region_from_points<T: Scalar, const N: usize>(
    pts: Vec<Point<T, N>>,
) -> Option<ConvexRegion<T, N>> {
    let pts = rotate_to_lex_min(pts);
    match pts.len() {
        0 => None,
        1 => pts.into_iter().next().map(ConvexRegion::Point),
        2 => Some(ConvexRegion::Segment(Segment::new(&pts[0], &pts[1]).canonical())),
        3 => Some(ConvexRegion::Triangle(Triangle::new(&pts[0], &pts[1], &pts[2]))),
        _ => Some(ConvexRegion::Polygon(pts)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{numeric::cgar_rational::CgarRational, operations::Zero};

    type Q = CgarRational;

    fn p(x: i32, y: i32) -> Point2<Q> {
        Point2::new(x, y)
    }

    #[test]
    fn clip_square_by_diagonal() {
        let square = vec![p(0, 0), p(2, 0), p(2, 2), p(0, 2)];
        // keep x + y <= 2
        let h = HalfSpace::new(Vector2::new(-1, -1), Q::from(2));
        let out = clip_convex(square, &[h]);
        assert_eq!(out, vec![p(0, 0), p(2, 0), p(0, 2)]);
    }

    #[test]
    fn segment_clipped_by_halfplane() {
        let seg = vec![p(0, 0), p(4, 0)];
        let h = HalfSpace::new(Vector2::new(-1, 0), Q::from(1));
        assert_eq!(clip_convex(seg, &[h]), vec![p(0, 0), p(1, 0)]);
    }

    #[test]
    fn normalize_collinear_and_duplicates() {
        let pts = vec![p(0, 0), p(1, 0), p(1, 0), p(2, 0), p(2, 2), p(0, 0)];
        assert_eq!(normalize(pts), vec![p(0, 0), p(2, 0), p(2, 2)]);

        let flat = vec![p(1, 1), p(3, 3), p(2, 2)];
        assert_eq!(normalize(flat), vec![p(1, 1), p(3, 3)]);
    }

    #[test]
    fn box_faces_clip_triangle() {
        let rect = Aabb::new(p(1, 1), p(3, 3));
        let tri = vec![p(0, 0), p(4, 0), p(0, 4)];
        let out = clip_convex(tri, &HalfSpace::box_faces(&rect));
        assert_eq!(
            region_from_points(out),
            Some(ConvexRegion::Triangle(Triangle::new(&p(1, 1), &p(3, 1), &p(1, 3))))
        );
    }

    #[test]
    fn triangle_edges_are_inward() {
        let tri = [p(0, 0), p(4, 0), p(0, 4)];
        for h in HalfSpace::triangle_edges(&tri) {
            assert!(h.value_at(&p(1, 1)).is_positive());
        }
    }
}
