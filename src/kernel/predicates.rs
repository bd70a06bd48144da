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
    geometry::{point::Point, segment::Segment},
    kernel::orientation::collinear,
    numeric::scalar::Scalar,
};

/// Coordinate-wise equality under the scalar's own comparison.
pub fn are_equal<T: Scalar, const N: usize>(p1: &Point<T, N>, p2: &Point<T, N>) -> bool {
    (0..N).all(|i| p1[i].compare(&p2[i]) == Ordering::Equal)
}

pub fn are_collinear<T: Scalar, const N: usize>(a: &Point<T, N>, b: &Point<T, N>, c: &Point<T, N>) -> bool {
    collinear(a, b, c)
}

/// Whether `p` is in the closed box spanned by `a` and `b`.
pub fn is_in_box<T: Scalar, const N: usize>(p: &Point<T, N>, a: &Point<T, N>, b: &Point<T, N>) -> bool {
    (0..N).all(|i| {
        let (lo, hi) = if a[i].compare(&b[i]) == Ordering::Greater {
            (&b[i], &a[i])
        } else {
            (&a[i], &b[i])
        };
        p[i].compare(lo) != Ordering::Less && p[i].compare(hi) != Ordering::Greater
    })
}

/// Closed segment membership; a zero-length segment contains only its endpoint.
pub fn is_point_on_segment<T: Scalar, const N: usize>(p: &Point<T, N>, seg: &Segment<T, N>) -> bool {
    // If P, A, B are not collinear, P cannot lie on AB
    if !collinear(&seg.a, &seg.b, p) {
        return false;
    }
    is_in_box(p, &seg.a, &seg.b)
}

/// Parameter `u` with `p = a + u (b - a)` if `p` lies on the line through `a != b`.
pub fn point_u_on_segment<T: Scalar, const N: usize>(
    a: &Point<T, N>,
    b: &Point<T, N>,
    p: &Point<T, N>,
) -> Option<T> {
    let ab = b - a;
    if ab.is_zero() || !collinear(a, b, p) {
        return None;
    }
    let k = ab.dominant_axis();
    Some((p[k].clone() - a[k].clone()) / ab[k].clone())
}
