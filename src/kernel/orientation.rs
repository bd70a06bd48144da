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
    geometry::point::{Point, Point2, Point3},
    numeric::scalar::{Scalar, Sign},
};

/// Twice the signed area of `(a, b, c)`:
/// - >0 if counter-clockwise
/// - <0 if clockwise
/// - =0 if collinear
pub fn orient2d<T: Scalar>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> T {
    let ab = b - a;
    let ac = c - a;
    ab.perp_dot(&ac)
}

/// Six times the signed volume of tetra (a,b,c,d): ((b-a) x (c-a)) · (d-a).
/// Positive when `d` is on the side `(a, b, c)` sees counter-clockwise.
pub fn orient3d<T: Scalar>(a: &Point3<T>, b: &Point3<T>, c: &Point3<T>, d: &Point3<T>) -> T {
    let ab = b - a;
    let ac = c - a;
    let ad = d - a;
    ab.cross(&ac).dot(&ad)
}

pub fn orientation_2<T: Scalar>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> Sign {
    orient2d(a, b, c).sign()
}

pub fn orientation_3<T: Scalar>(a: &Point3<T>, b: &Point3<T>, c: &Point3<T>, d: &Point3<T>) -> Sign {
    orient3d(a, b, c, d).sign()
}

/// Whether the three points lie on a common line, in any dimension.
pub fn collinear<T: Scalar, const N: usize>(a: &Point<T, N>, b: &Point<T, N>, c: &Point<T, N>) -> bool {
    (b - a).is_parallel_to(&(c - a))
}

pub fn coplanar<T: Scalar>(a: &Point3<T>, b: &Point3<T>, c: &Point3<T>, d: &Point3<T>) -> bool {
    orientation_3(a, b, c, d).is_zero()
}

fn det3<T: Scalar>(m: [[&T; 3]; 3]) -> T {
    let minor = |r0: usize, r1: usize, c0: usize, c1: usize| {
        m[r0][c0].clone() * m[r1][c1].clone() - m[r0][c1].clone() * m[r1][c0].clone()
    };
    m[0][0].clone() * minor(1, 2, 1, 2) - m[0][1].clone() * minor(1, 2, 0, 2)
        + m[0][2].clone() * minor(1, 2, 0, 1)
}

/// Positive when `t` is inside the circle through `p, q, r`, given that they are
/// counter-clockwise; the sign flips for a clockwise triple.
pub fn side_of_oriented_circle<T: Scalar>(
    p: &Point2<T>,
    q: &Point2<T>,
    r: &Point2<T>,
    t: &Point2<T>,
) -> Sign {
    let rows = [p - t, q - t, r - t];
    let lifts = [rows[0].squared_length(), rows[1].squared_length(), rows[2].squared_length()];
    det3([
        [&rows[0][0], &rows[0][1], &lifts[0]],
        [&rows[1][0], &rows[1][1], &lifts[1]],
        [&rows[2][0], &rows[2][1], &lifts[2]],
    ])
    .sign()
}

/// Positive inside the circle through `p, q, r`, zero on it, negative outside.
/// The three points must not be collinear.
pub fn side_of_bounded_circle<T: Scalar>(
    p: &Point2<T>,
    q: &Point2<T>,
    r: &Point2<T>,
    t: &Point2<T>,
) -> Sign {
    side_of_oriented_circle(p, q, r, t) * orientation_2(p, q, r)
}

/// Positive when `t` is inside the sphere through `p, q, r, s`, given that
/// `orientation_3(p, q, r, s)` is positive.
pub fn side_of_oriented_sphere<T: Scalar>(
    p: &Point3<T>,
    q: &Point3<T>,
    r: &Point3<T>,
    s: &Point3<T>,
    t: &Point3<T>,
) -> Sign {
    let rows = [p - t, q - t, r - t, s - t];
    let lifts: Vec<T> = rows.iter().map(|v| v.squared_length()).collect();

    // Laplace expansion along the lifted column.
    let mut det = T::zero();
    for skip in 0..4 {
        let kept: Vec<usize> = (0..4).filter(|&i| i != skip).collect();
        let minor = det3([
            [&rows[kept[0]][0], &rows[kept[0]][1], &rows[kept[0]][2]],
            [&rows[kept[1]][0], &rows[kept[1]][1], &rows[kept[1]][2]],
            [&rows[kept[2]][0], &rows[kept[2]][1], &rows[kept[2]][2]],
        ]);
        let term = lifts[skip].clone() * minor;
        // cofactor sign of entry (skip, 3)
        if (skip + 3) % 2 == 0 {
            det += &term;
        } else {
            det -= &term;
        }
    }
    det.sign().opposite()
}

pub fn compare_xy<T: Scalar>(p: &Point2<T>, q: &Point2<T>) -> Ordering {
    p.compare_lex(q)
}

pub fn compare_xyz<T: Scalar>(p: &Point3<T>, q: &Point3<T>) -> Ordering {
    p.compare_lex(q)
}
