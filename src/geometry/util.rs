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
        point::{Point2, Point3},
        vector::{Vector2, Vector3},
    },
    kernel::orientation::{collinear, orient2d},
    numeric::scalar::Scalar,
};

/// Tolerance used by the `f64` scalar when comparing against zero.
pub const EPS: f64 = 1e-10;

/// The two axes kept when axis `k` is dropped, in cyclic order so that a
/// normal with a positive `k` component keeps its orientation.
#[inline(always)]
pub fn kept_axes(k: usize) -> (usize, usize) {
    ((k + 1) % 3, (k + 2) % 3)
}

pub fn project_to_2d<T: Scalar>(p: &Point3<T>, drop: usize) -> Point2<T> {
    let (i, j) = kept_axes(drop);
    Point2::from_coords([p[i].clone(), p[j].clone()])
}

pub fn project_vector_to_2d<T: Scalar>(v: &Vector3<T>, drop: usize) -> Vector2<T> {
    let (i, j) = kept_axes(drop);
    Vector2::from_coords([v[i].clone(), v[j].clone()])
}

/// Inverse of [`project_to_2d`] for points of `plane`, whose normal must have a
/// non-zero component on `drop`.
pub fn lift_to_plane<T: Scalar>(p: &Point2<T>, plane: &Plane3<T>, drop: usize) -> Point3<T> {
    let (i, j) = kept_axes(drop);
    let n = &plane.normal;
    let mut out = Point3::origin();
    out.coords[i] = p[0].clone();
    out.coords[j] = p[1].clone();
    out.coords[drop] = -(n[i].clone() * p[0].clone() + n[j].clone() * p[1].clone() + plane.d.clone())
        / n[drop].clone();
    out
}

/// Andrew's monotone chain. Returns hull indices counter-clockwise, starting
/// at the lexicographically smallest point, without collinear or repeated
/// points. Fewer than three distinct points come back as their extremes.
pub fn convex_hull_2d_indices<T: Scalar>(pts: &[Point2<T>]) -> Vec<usize> {
    let mut idxs: Vec<usize> = (0..pts.len()).collect();
    idxs.sort_by(|&i, &j| pts[i].compare_lex(&pts[j]));
    idxs.dedup_by(|a, b| pts[*a].compare_lex(&pts[*b]) == Ordering::Equal);

    if idxs.len() < 3 {
        return idxs;
    }

    let turns_left = |j: usize, k: usize, i: usize| orient2d(&pts[j], &pts[k], &pts[i]).is_positive();

    let mut lower: Vec<usize> = Vec::new();
    for &i in &idxs {
        while lower.len() >= 2 && !turns_left(lower[lower.len() - 2], lower[lower.len() - 1], i) {
            lower.pop();
        }
        lower.push(i);
    }

    let mut upper: Vec<usize> = Vec::new();
    for &i in idxs.iter().rev() {
        while upper.len() >= 2 && !turns_left(upper[upper.len() - 2], upper[upper.len() - 1], i) {
            upper.pop();
        }
        upper.push(i);
    }

    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// Convex hull of points known to lie in one plane, as a vertex cycle without
/// repeated or collinear vertices. Collinear input yields its two extremes.
pub fn convex_hull_coplanar_3<T: Scalar>(pts: &[Point3<T>]) -> Vec<Point3<T>> {
    let Some(first) = pts.first() else {
        return Vec::new();
    };
    let Some(second) = pts.iter().find(|p| !p.coincides(first)) else {
        return vec![first.clone()];
    };
    let Some(third) = pts.iter().find(|p| !collinear(first, second, *p)) else {
        let lo = pts.iter().min_by(|a, b| a.compare_lex(b)).unwrap_or(first);
        let hi = pts.iter().max_by(|a, b| a.compare_lex(b)).unwrap_or(second);
        return vec![lo.clone(), hi.clone()];
    };
    let n = (second - first).cross(&(third - first));
    let k = n.dominant_axis();
    let flat: Vec<Point2<T>> = pts.iter().map(|p| project_to_2d(p, k)).collect();
    convex_hull_2d_indices(&flat)
        .into_iter()
        .map(|i| pts[i].clone())
        .collect()
}
