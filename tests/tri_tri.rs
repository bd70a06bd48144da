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

use cgar::geometry::{Point2, Point3, Segment3, Triangle2, Triangle3};
use cgar::intersection::{ConvexRegion, do_intersect, intersection};
use cgar::numeric::cgar_f64::CgarF64;
use cgar::numeric::cgar_rational::CgarRational;

type Q = CgarRational;

#[test]
fn test_triangles_overlap() {
    let t1 = Triangle3::<CgarF64>::new(
        &Point3::new(0.0, 0.0, 0.0),
        &Point3::new(1.0, 0.0, 0.0),
        &Point3::new(0.0, 1.0, 0.0),
    );
    let t2 = Triangle3::new(
        &Point3::new(0.1, 0.1, 0.0),
        &Point3::new(0.9, 0.1, 0.0),
        &Point3::new(0.1, 0.9, 0.0),
    );
    assert!(do_intersect(&t1, &t2));

    let t3 = Triangle3::new(
        &Point3::new(2.0, 2.0, 0.0),
        &Point3::new(3.0, 2.0, 0.0),
        &Point3::new(2.0, 3.0, 0.0),
    );
    assert!(!do_intersect(&t1, &t3));
}

#[test]
fn test_piercing_triangles_share_a_segment() {
    let t1 = Triangle3::<Q>::new(
        &Point3::new(0, 0, 0),
        &Point3::new(4, 0, 0),
        &Point3::new(0, 4, 0),
    );
    // stands upright on the plane x = 1 and pokes through t1
    let t2 = Triangle3::new(
        &Point3::new(1, -2, -2),
        &Point3::new(1, 2, -2),
        &Point3::new(1, 2, 2),
    );
    let expected = Some(ConvexRegion::Segment(Segment3::new(
        &Point3::new(1, 0, 0),
        &Point3::new(1, 2, 0),
    )));
    assert_eq!(intersection(&t1, &t2), expected);
    assert_eq!(intersection(&t2, &t1), expected);
}

#[test]
fn test_coplanar_hexagon() {
    // two opposite triangles make a star of David
    let up = Triangle2::<Q>::new(&Point2::new(0, 0), &Point2::new(6, 0), &Point2::new(3, 6));
    let down = Triangle2::new(&Point2::new(0, 4), &Point2::new(3, -2), &Point2::new(6, 4));
    match intersection(&up, &down) {
        Some(ConvexRegion::Polygon(pts)) => {
            assert_eq!(pts.len(), 6);
            assert_eq!(pts[0], Point2::new(1, 2));
            assert_eq!(pts[1], Point2::new(2, 0));
        }
        other => panic!("expected a hexagon, got {other:?}"),
    }
}

#[test]
fn test_coplanar_3d_triangles_lift_back() {
    let lift = |x: i32, y: i32| Point3::<Q>::new(x, y, 6 - x - y);
    let a = Triangle3::new(&lift(0, 0), &lift(4, 0), &lift(0, 4));
    let b = Triangle3::new(&lift(0, 2), &lift(4, 2), &lift(0, -2));
    let region = intersection(&a, &b).expect("overlapping coplanar triangles");
    let vertices = region.vertices();
    assert_eq!(vertices.len(), 5);
    for v in &vertices {
        assert!(a.has_on(v) && b.has_on(v));
    }
}
