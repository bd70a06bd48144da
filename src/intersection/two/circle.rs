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

//! Circles are curves, so only the boolean queries exist and both stay
//! square-root free.

use std::cmp::Ordering;

use crate::{
    geometry::{circle::Circle2, line::Line2},
    intersection::DoIntersect,
    numeric::scalar::Scalar,
};

impl<T: Scalar> DoIntersect<Circle2<T>> for Line2<T> {
    /// The line is within one radius of the center: `value(c)^2 <= r^2 (a^2 + b^2)`.
    fn do_intersect(&self, circle: &Circle2<T>) -> bool {
        let v = self.value_at(&circle.center);
        let norm2 = self.a.clone() * self.a.clone() + self.b.clone() * self.b.clone();
        let lhs = v.clone() * v;
        lhs.compare(&(circle.squared_radius.clone() * norm2)) != Ordering::Greater
    }
}

symmetric_do_intersect!(Line2<T>, Circle2<T>);

impl<T: Scalar> DoIntersect for Circle2<T> {
    /// `|r1 - r2| <= d <= r1 + r2`, squared twice into
    /// `(d^2 - r1^2 - r2^2)^2 <= 4 r1^2 r2^2`.
    fn do_intersect(&self, other: &Circle2<T>) -> bool {
        let (r1, r2) = (&self.squared_radius, &other.squared_radius);
        let dd = self.center.squared_distance(&other.center) - r1.clone() - r2.clone();
        let four = T::from(4_i32);
        (dd.clone() * dd).compare(&(four * r1.clone() * r2.clone())) != Ordering::Greater
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        geometry::{circle::Circle2, line::Line2, point::Point2},
        intersection::do_intersect,
        numeric::cgar_rational::CgarRational,
    };

    type Q = CgarRational;

    fn circle(x: i32, y: i32, r2: i32) -> Circle2<Q> {
        Circle2::new(Point2::new(x, y), Q::from(r2))
    }

    #[test]
    fn line_against_circle() {
        let c = circle(0, 0, 4);
        let secant = Line2::through(&Point2::new(-5, 1), &Point2::new(5, 1)).unwrap();
        let tangent = Line2::through(&Point2::new(-5, 2), &Point2::new(5, 2)).unwrap();
        let outside = Line2::through(&Point2::new(-5, 3), &Point2::new(5, 3)).unwrap();
        assert!(do_intersect(&secant, &c));
        assert!(do_intersect(&c, &tangent));
        assert!(!do_intersect(&outside, &c));
    }

    #[test]
    fn circle_pairs() {
        let c = circle(0, 0, 4);
        assert!(do_intersect(&c, &c));
        // externally tangent
        assert!(do_intersect(&c, &circle(3, 0, 1)));
        // internally tangent
        assert!(do_intersect(&c, &circle(1, 0, 1)));
        // strictly inside, curves never meet
        assert!(!do_intersect(&c, &circle(0, 0, 1)));
        assert!(!do_intersect(&c, &circle(5, 0, 1)));
        assert!(do_intersect(&c, &circle(2, 2, 4)));
    }
}
