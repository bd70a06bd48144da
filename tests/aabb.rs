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

use cgar::geometry::aabb::AabbShape;
use cgar::geometry::{
    Aabb, Bbox3, IsoCuboid3, IsoRectangle2, Line2, Point2, Point3, Segment2, Segment3, Triangle3,
};
use cgar::intersection::{PointOrSegment, PointSegmentOrRectangle2, do_intersect, intersection};
use cgar::numeric::cgar_f64::CgarF64;
use cgar::numeric::cgar_rational::CgarRational;
use cgar::numeric::scalar::Scalar;

type Q = CgarRational;

#[test]
fn test_aabb_from_union_and_intersection_2() {
    let p1 = Point2::<CgarF64>::new(0.0, 1.0);
    let p2 = Point2::new(2.0, -1.0);
    let a = Aabb::from_points(&p1, &p2);

    assert_eq!(a.min[0], CgarF64(0.0));
    assert_eq!(a.min[1], CgarF64(-1.0));
    assert_eq!(a.max[0], CgarF64(2.0));
    assert_eq!(a.max[1], CgarF64(1.0));

    let b = Aabb::from_points(&Point2::<CgarF64>::new(0.5, -0.5), &Point2::new(2.0, 0.5));
    let u = a.union(&b);
    assert_eq!(u.min[0], CgarF64(0.0));
    assert_eq!(u.min[1], CgarF64(-1.0));
    assert_eq!(u.max[0], CgarF64(2.0));
    assert_eq!(u.max[1], CgarF64(1.0));

    let c = Aabb::from_points(&Point2::<CgarF64>::new(2.5, 2.5), &Point2::new(3.0, 3.0));
    assert!(a.intersects(&b));
    assert!(!a.intersects(&c));
}

#[test]
fn test_degenerate_boxes_report_their_shape() {
    let flat = IsoRectangle2::<Q>::new(Point2::new(1, 0), Point2::new(1, 3));
    assert_eq!(
        flat.shape(),
        AabbShape::Segment(Segment2::new(&Point2::new(1, 0), &Point2::new(1, 3)))
    );
    let dot = IsoCuboid3::<Q>::new(Point3::new(1, 2, 3), Point3::new(1, 2, 3));
    assert_eq!(dot.shape(), AabbShape::Point(Point3::new(1, 2, 3)));
}

#[test]
fn test_rectangle_line_may_be_empty() {
    let r = IsoRectangle2::<Q>::new(Point2::new(0, 0), Point2::new(2, 1));
    let through = Line2::through(&Point2::new(-1, 0), &Point2::new(3, 2)).unwrap();
    assert_eq!(
        intersection(&r, &through),
        Some(PointOrSegment::Segment(Segment2::new(
            &Point2::from_coords([Q::from(0), Q::from_num_den(1, 2)]),
            &Point2::new(1, 1)
        )))
    );
    let beside = Line2::through(&Point2::new(5, 0), &Point2::new(5, 1)).unwrap();
    assert_eq!(intersection(&beside, &r), None);
    assert!(!do_intersect(&r, &beside));
}

#[test]
fn test_rectangles_sharing_an_edge() {
    let a = IsoRectangle2::<Q>::new(Point2::new(0, 0), Point2::new(1, 1));
    let b = IsoRectangle2::<Q>::new(Point2::new(1, 0), Point2::new(2, 1));
    assert_eq!(
        intersection(&a, &b),
        Some(PointSegmentOrRectangle2::Segment(Segment2::new(
            &Point2::new(1, 0),
            &Point2::new(1, 1)
        )))
    );
}

#[test]
fn test_bbox_from_points_and_queries() {
    let pts = [[0.0, 0.0, 0.0], [1.0, 2.0, -1.0], [0.5, 0.5, 3.0]];
    let b = Bbox3::from_points(pts.iter()).unwrap();
    assert_eq!(b.min, [0.0, 0.0, -1.0]);
    assert_eq!(b.max, [1.0, 2.0, 3.0]);

    let inside = Segment3::<Q>::new(&Point3::new(0, 0, 0), &Point3::new(1, 1, 1));
    assert!(do_intersect(&b, &inside));
    let tri = Triangle3::<Q>::new(
        &Point3::new(5, 0, 0),
        &Point3::new(5, 1, 0),
        &Point3::new(6, 0, 0),
    );
    assert!(!do_intersect(&tri, &b));
    assert!(do_intersect(&b, &b.union(&Bbox3::new([4.0; 3], [5.0; 3]))));
}
