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
    geometry::{line::Line2, ray::Ray2, segment::Segment2},
    intersection::{
        Intersect,
        algebra::line_line_2,
        result::{PointOrLine2, PointOrRay2, PointOrSegment2, PointSegmentOrRay2},
    },
    numeric::scalar::Scalar,
};

impl<T: Scalar> Intersect for Line2<T> {
    type Output = PointOrLine2<T>;

    fn intersection(&self, other: &Line2<T>) -> Option<PointOrLine2<T>> {
        line_line_2(self, other)
    }
}

do_intersect_via_intersection!(Line2<T>, Line2<T>);

linear_pair!(Line2<T>, Ray2<T> => PointOrRay2<T>);
linear_pair!(Line2<T>, Segment2<T> => PointOrSegment2<T>);
linear_pair!(Ray2<T>, Ray2<T> => PointSegmentOrRay2<T>);
linear_pair!(Ray2<T>, Segment2<T> => PointOrSegment2<T>);
linear_pair!(Segment2<T>, Segment2<T> => PointOrSegment2<T>);

symmetric!(Line2<T>, Ray2<T>);
symmetric!(Line2<T>, Segment2<T>);
symmetric!(Ray2<T>, Segment2<T>);

#[cfg(test)]
mod tests {
    use crate::{
        geometry::{line::Line2, point::Point2, ray::Ray2, segment::Segment2, vector::Vector2},
        intersection::{
            do_intersect, intersection,
            result::{PointOrRay2, PointOrSegment2, PointSegmentOrRay2},
        },
        numeric::cgar_rational::CgarRational,
    };

    type Q = CgarRational;

    fn p(x: i32, y: i32) -> Point2<Q> {
        Point2::new(x, y)
    }

    #[test]
    fn crossing_segments_meet_in_a_point() {
        let s1 = Segment2::new(&p(0, 0), &p(2, 2));
        let s2 = Segment2::new(&p(0, 2), &p(2, 0));
        assert_eq!(intersection(&s1, &s2), Some(PointOrSegment2::Point(p(1, 1))));
    }

    #[test]
    fn collinear_segments_overlap() {
        let s1 = Segment2::new(&p(0, 0), &p(3, 0));
        let s2 = Segment2::new(&p(5, 0), &p(1, 0));
        assert_eq!(
            intersection(&s1, &s2),
            Some(PointOrSegment2::Segment(Segment2::new(&p(1, 0), &p(3, 0))))
        );
        assert_eq!(intersection(&s2, &s1), intersection(&s1, &s2));
    }

    #[test]
    fn touching_and_disjoint_segments() {
        let s1 = Segment2::new(&p(0, 0), &p(1, 0));
        let s2 = Segment2::new(&p(1, 0), &p(2, 0));
        assert_eq!(intersection(&s1, &s2), Some(PointOrSegment2::Point(p(1, 0))));

        let s3 = Segment2::new(&p(2, 1), &p(3, 1));
        assert_eq!(intersection(&s1, &s3), None);
        assert!(!do_intersect(&s1, &s3));

        // crossing lines, but beyond the end of one segment
        let s4 = Segment2::new(&p(3, -1), &p(3, 1));
        assert!(!do_intersect(&s1, &s4));
    }

    #[test]
    fn degenerate_segment_is_a_point() {
        let s = Segment2::new(&p(1, 1), &p(3, 3));
        let dot = Segment2::new(&p(2, 2), &p(2, 2));
        assert_eq!(intersection(&s, &dot), Some(PointOrSegment2::Point(p(2, 2))));
        assert_eq!(intersection(&dot, &s), Some(PointOrSegment2::Point(p(2, 2))));
    }

    #[test]
    fn line_and_ray() {
        let l = Line2::through(&p(0, 0), &p(1, 0)).unwrap();
        let up = Ray2::new(p(2, -1), Vector2::new(0, 1));
        assert_eq!(intersection(&l, &up), Some(PointOrRay2::Point(p(2, 0))));
        let away = Ray2::new(p(2, 1), Vector2::new(0, 1));
        assert_eq!(intersection(&away, &l), None);

        let along = Ray2::new(p(3, 0), Vector2::new(-1, 0));
        match intersection(&l, &along) {
            Some(PointOrRay2::Ray(r)) => {
                assert_eq!(r.source, p(3, 0));
                assert!(r.has_on(&p(-10, 0)));
                assert!(!r.has_on(&p(4, 0)));
            }
            other => panic!("expected a ray, got {other:?}"),
        }
    }

    #[test]
    fn ray_pairs() {
        let r1 = Ray2::new(p(0, 0), Vector2::new(1, 0));
        let same_way = Ray2::new(p(2, 0), Vector2::new(5, 0));
        assert_eq!(
            intersection(&r1, &same_way),
            Some(PointSegmentOrRay2::Ray(Ray2::new(p(2, 0), Vector2::new(1, 0))))
        );
        let facing = Ray2::new(p(2, 0), Vector2::new(-1, 0));
        assert_eq!(
            intersection(&r1, &facing),
            Some(PointSegmentOrRay2::Segment(Segment2::new(&p(0, 0), &p(2, 0))))
        );
        let back_to_back = Ray2::new(p(0, 0), Vector2::new(-1, 0));
        assert_eq!(intersection(&r1, &back_to_back), Some(PointSegmentOrRay2::Point(p(0, 0))));
    }
}
