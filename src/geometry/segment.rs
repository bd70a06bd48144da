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
    geometry::{point::Point, vector::Vector},
    numeric::scalar::Scalar,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Segment<T: Scalar, const N: usize> {
    pub a: Point<T, N>,
    pub b: Point<T, N>,
}

impl<T: Scalar, const N: usize> Segment<T, N> {
    pub fn new(a: &Point<T, N>, b: &Point<T, N>) -> Self {
        Self {
            a: a.clone(),
            b: b.clone(),
        }
    }

    pub fn source(&self) -> &Point<T, N> {
        &self.a
    }

    pub fn target(&self) -> &Point<T, N> {
        &self.b
    }

    /// `b - a`.
    pub fn direction(&self) -> Vector<T, N> {
        &self.b - &self.a
    }

    pub fn squared_length(&self) -> T {
        self.direction().squared_length()
    }

    /// A zero-length segment is just the point `a`.
    pub fn is_degenerate(&self) -> bool {
        self.a.coincides(&self.b)
    }

    pub fn has_on(&self, p: &Point<T, N>) -> bool {
        if self.is_degenerate() {
            return p.coincides(&self.a);
        }
        let d = self.direction();
        let ap = p - &self.a;
        if !ap.is_parallel_to(&d) {
            return false;
        }
        let bp = p - &self.b;
        ap.dot(&d).is_positive_or_zero() && bp.dot(&d).is_negative_or_zero()
    }

    pub fn inverse(&self) -> Self {
        Self::new(&self.b, &self.a)
    }

    /// Same point set, directed from the lexicographically smaller endpoint to the larger.
    pub fn canonical(&self) -> Self {
        if self.a.compare_lex(&self.b) == Ordering::Greater {
            self.inverse()
        } else {
            self.clone()
        }
    }

    /// Whether both segments cover the same point set, regardless of direction.
    pub fn same_point_set(&self, other: &Self) -> bool {
        (self.a.coincides(&other.a) && self.b.coincides(&other.b))
            || (self.a.coincides(&other.b) && self.b.coincides(&other.a))
    }
}

pub type Segment2<T> = Segment<T, 2>;
pub type Segment3<T> = Segment<T, 3>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point::{Point2, Point3};
    use crate::numeric::cgar_rational::CgarRational;

    #[test]
    fn has_on_including_endpoints() {
        let s = Segment2::<CgarRational>::new(&Point2::new(0, 0), &Point2::new(2, 2));
        assert!(s.has_on(&Point2::new(1, 1)));
        assert!(s.has_on(&Point2::new(2, 2)));
        assert!(!s.has_on(&Point2::new(3, 3)));
        assert!(!s.has_on(&Point2::new(1, 0)));
    }

    #[test]
    fn degenerate_segment_is_a_point() {
        let p = Point3::<CgarRational>::new(1, 2, 3);
        let s = Segment3::new(&p, &p);
        assert!(s.is_degenerate());
        assert!(s.has_on(&p));
        assert!(!s.has_on(&Point3::new(1, 2, 4)));
    }

    #[test]
    fn canonical_orders_endpoints() {
        let s = Segment2::<CgarRational>::new(&Point2::new(3, 0), &Point2::new(1, 5));
        let c = s.canonical();
        assert_eq!(c.a, Point2::new(1, 5));
        assert!(c.same_point_set(&s));
    }
}
