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

use crate::{
    geometry::{
        aabb::IsoRectangle2,
        circle::Circle2,
        line::Line2,
        point::Point2,
        ray::Ray2,
        segment::Segment2,
        triangle::Triangle2,
    },
    intersection::Intersect,
    numeric::scalar::Scalar,
};

/// A point meets `$other` in itself when `$test` holds.
macro_rules! point_on {
    ($other:ty, |$p:ident, $o:ident| $test:expr) => {
        impl<T: Scalar> Intersect<$other> for Point2<T> {
            type Output = Point2<T>;

            fn intersection(&self, other: &$other) -> Option<Point2<T>> {
                let ($p, $o) = (self, other);
                ($test).then(|| self.clone())
            }
        }

        do_intersect_via_intersection!(Point2<T>, $other);
    };
    ($other:ty, |$p:ident, $o:ident| $test:expr, symmetric) => {
        point_on!($other, |$p, $o| $test);
        symmetric!(Point2<T>, $other);
    };
}

point_on!(Point2<T>, |p, q| p.coincides(q));
point_on!(Line2<T>, |p, l| l.has_on(p), symmetric);
point_on!(Ray2<T>, |p, r| r.has_on(p), symmetric);
point_on!(Segment2<T>, |p, s| s.has_on(p), symmetric);
point_on!(Triangle2<T>, |p, t| t.has_on(p), symmetric);
point_on!(IsoRectangle2<T>, |p, r| r.has_on(p), symmetric);
point_on!(Circle2<T>, |p, c| c.has_on(p), symmetric);
