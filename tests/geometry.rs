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

use cgar::GeometryError;
use cgar::geometry::{
    Aabb, Circle2, Line2, Line3, Plane3, Point2, Point3, Ray2, Segment2, Sphere3, Vector2,
    Vector3,
};
use cgar::numeric::cgar_f64::CgarF64;
use cgar::numeric::cgar_rational::CgarRational;

type Q = CgarRational;

#[test]
fn test_squared_distance() {
    let p1 = Point2::<CgarF64>::new(0.0, 0.0);
    let p2 = Point2::new(3.0, 4.0);
    assert_eq!(p1.squared_distance(&p2).0, 25.0);
}

#[test]
fn test_vector_perp_dot() {
    let v1 = Vector2::<Q>::new(1, 0);
    let v2 = Vector2::new(0, 1);
    assert_eq!(v1.perp_dot(&v2), Q::from(1));
    assert_eq!(v2.perp_dot(&v1), Q::from(-1));
}

#[test]
fn test_segment_squared_length() {
    let s = Segment2::<Q>::new(&Point2::new(0, 0), &Point2::new(0, 5));
    assert_eq!(s.squared_length(), Q::from(25));
    assert!(!s.is_degenerate());
}

#[test]
fn test_checked_constructors() {
    let p = Point2::<Q>::new(1, 1);
    assert_eq!(Line2::through(&p, &p), Err(GeometryError::DegenerateLine));
    assert_eq!(
        Ray2::try_new(p.clone(), Vector2::new(0, 0)),
        Err(GeometryError::ZeroDirection)
    );
    assert_eq!(
        Circle2::try_new(p.clone(), Q::from(-1)),
        Err(GeometryError::NegativeRadius)
    );
    assert_eq!(
        Aabb::try_new(Point2::<Q>::new(2, 0), Point2::new(1, 1)),
        Err(GeometryError::InvertedBox { axis: 0 })
    );

    let q = Point3::<Q>::new(0, 0, 0);
    assert!(Line3::through(&q, &q).is_err());
    assert_eq!(
        Plane3::through(&q, &Point3::new(1, 0, 0), &Point3::new(2, 0, 0)),
        Err(GeometryError::DegeneratePlane)
    );
    assert_eq!(
        Sphere3::try_new(q.clone(), Q::from(-4)),
        Err(GeometryError::NegativeRadius)
    );
    assert_eq!(
        Plane3::<CgarF64>::try_new(Vector3::new(f64::NAN, 0.0, 1.0), CgarF64(0.0)),
        Err(GeometryError::InvalidCoordinate)
    );
}

#[test]
fn test_plane_through_points_is_oriented() {
    let plane = Plane3::<Q>::through(
        &Point3::new(0, 0, 0),
        &Point3::new(1, 0, 0),
        &Point3::new(0, 1, 0),
    )
    .unwrap();
    assert!(plane.oriented_side(&Point3::new(0, 0, 1)).is_positive());
    assert_eq!(plane.projection(&Point3::new(3, 4, 5)), Point3::new(3, 4, 0));
}
