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

//! Closed-form solves shared by the pair dispatchers.

use crate::{
    geometry::{
        line::{Line2, Line3},
        plane::Plane3,
        point::{Point, Point2, Point3},
        util::kept_axes,
        vector::Vector3,
    },
    intersection::{
        interval::Linear,
        result::{LineOrPlane3, PointLineOrPlane3, PointOrLine2},
    },
    numeric::scalar::{Scalar, Sign},
};

/// Intersection of two 2D lines from their coefficients. Coincident lines
/// return the first one.
pub fn line_line_2<T: Scalar>(l1: &Line2<T>, l2: &Line2<T>) -> Option<PointOrLine2<T>> {
    let d = l1.a.clone() * l2.b.clone() - l2.a.clone() * l1.b.clone();
    let bc = l1.b.clone() * l2.c.clone() - l2.b.clone() * l1.c.clone();
    let ac = l2.a.clone() * l1.c.clone() - l1.a.clone() * l2.c.clone();
    if d.is_zero() {
        if ac.is_zero() && bc.is_zero() {
            return Some(PointOrLine2::Line(l1.clone()));
        }
        return None;
    }
    Some(PointOrLine2::Point(Point2::from_coords([
        bc / d.clone(),
        ac / d,
    ])))
}

/// Where a parametric line meets a plane.
#[derive(Clone, Debug, PartialEq)]
pub enum LinePlane<T: Scalar> {
    /// Parallel and off the plane.
    Disjoint,
    /// The whole line lies in the plane.
    Contained,
    /// Crosses at this parameter.
    At(T),
}

pub fn line_plane<T: Scalar, L: Linear<T, 3>>(l: &L, plane: &Plane3<T>) -> LinePlane<T> {
    let den = plane.normal.dot(&l.direction());
    let num = -plane.value_at(&l.origin());
    if den.is_zero() {
        if num.is_zero() {
            LinePlane::Contained
        } else {
            LinePlane::Disjoint
        }
    } else {
        LinePlane::At(num / den)
    }
}

/// Intersection of two planes. For crossing planes the line runs along
/// `n1 x n2` and its point is found by zeroing the coordinate with the
/// largest 2x2 determinant.
pub fn plane_plane<T: Scalar>(p1: &Plane3<T>, p2: &Plane3<T>) -> Option<LineOrPlane3<T>> {
    let dir = p1.normal.cross(&p2.normal);
    if dir.is_zero() {
        return p1.coincides_with(p2).then(|| LineOrPlane3::Plane(p1.clone()));
    }
    let k = dir.dominant_axis();
    let (i, j) = kept_axes(k);
    let (n1, n2) = (&p1.normal, &p2.normal);
    let det = dir[k].clone();

    let mut point = Point3::origin();
    point.coords[i] =
        (n1[j].clone() * p2.d.clone() - n2[j].clone() * p1.d.clone()) / det.clone();
    point.coords[j] = (n2[i].clone() * p1.d.clone() - n1[i].clone() * p2.d.clone()) / det;
    Some(LineOrPlane3::Line(Line3::new(point, dir)))
}

/// Intersection of three planes: Cramer's rule when the normals are
/// independent, otherwise reduced pairwise.
pub fn three_planes<T: Scalar>(
    p1: &Plane3<T>,
    p2: &Plane3<T>,
    p3: &Plane3<T>,
) -> Option<PointLineOrPlane3<T>> {
    let c23 = p2.normal.cross(&p3.normal);
    let det = p1.normal.dot(&c23);
    if !det.is_zero() {
        let c31 = p3.normal.cross(&p1.normal);
        let c12 = p1.normal.cross(&p2.normal);
        let sum: Vector3<T> = &(&c23.scale(&p1.d) + &c31.scale(&p2.d)) + &c12.scale(&p3.d);
        let k = -(T::one() / det);
        return Some(PointLineOrPlane3::Point(Point3::from_coords(
            sum.scale(&k).coords,
        )));
    }

    log::trace!("three planes with dependent normals, reducing pairwise");
    match plane_plane(p1, p2)? {
        LineOrPlane3::Plane(_) => match plane_plane(p1, p3)? {
            LineOrPlane3::Plane(pl) => Some(PointLineOrPlane3::Plane(pl)),
            LineOrPlane3::Line(l) => Some(PointLineOrPlane3::Line(l)),
        },
        LineOrPlane3::Line(l) => match line_plane(&l, p3) {
            LinePlane::Disjoint => None,
            LinePlane::Contained => Some(PointLineOrPlane3::Line(l)),
            LinePlane::At(t) => Some(PointLineOrPlane3::Point(l.point_at(&t))),
        },
    }
}

/// Where a hyperplane (a line in 2D, a plane in 3D) cuts a triangle, given the
/// hyperplane's signed values at the three vertices.
#[derive(Clone, Debug, PartialEq)]
pub enum Split<T: Scalar, const N: usize> {
    Point(Point<T, N>),
    Segment(Point<T, N>, Point<T, N>),
    /// Every vertex is on the hyperplane.
    All,
}

/// Classify a triangle against a hyperplane by the signs of `values`. `None`
/// when all three vertices are strictly on one side. A crossing edge is cut at
/// the point interpolated from the signed values.
pub fn split_by_values<T: Scalar, const N: usize>(
    vertices: [&Point<T, N>; 3],
    values: [T; 3],
) -> Option<Split<T, N>> {
    let signs = values.clone().map(|v| v.sign());
    let zeros: Vec<usize> = (0..3).filter(|&i| signs[i].is_zero()).collect();
    if zeros.len() == 3 {
        return Some(Split::All);
    }
    let has_pos = signs.iter().any(|s| s.is_positive());
    let has_neg = signs.iter().any(|s| s.is_negative());

    if !(has_pos && has_neg) {
        return match zeros.as_slice() {
            [] => None,
            [i] => Some(Split::Point(vertices[*i].clone())),
            [i, j, ..] => Some(Split::Segment(vertices[*i].clone(), vertices[*j].clone())),
        };
    }

    let mut pts: Vec<Point<T, N>> = zeros.iter().map(|&i| vertices[i].clone()).collect();
    for i in 0..3 {
        let j = (i + 1) % 3;
        if signs[i] * signs[j] == Sign::Negative {
            let t = values[i].clone() / (values[i].clone() - values[j].clone());
            pts.push(vertices[i].lerp(vertices[j], &t));
        }
    }
    match pts.len() {
        2 => {
            let q = pts.pop()?;
            let p = pts.pop()?;
            Some(Split::Segment(p, q))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::cgar_rational::CgarRational;

    type Q = CgarRational;

    #[test]
    fn crossing_and_parallel_lines() {
        // x + y - 2 = 0 and x - y = 0 meet at (1, 1)
        let l1 = Line2::<Q>::new(Q::from(1), Q::from(1), Q::from(-2));
        let l2 = Line2::<Q>::new(Q::from(1), Q::from(-1), Q::from(0));
        assert_eq!(line_line_2(&l1, &l2), Some(PointOrLine2::Point(Point2::new(1, 1))));

        let l3 = Line2::<Q>::new(Q::from(2), Q::from(2), Q::from(-4));
        assert_eq!(line_line_2(&l1, &l3), Some(PointOrLine2::Line(l1.clone())));

        let l4 = Line2::<Q>::new(Q::from(1), Q::from(1), Q::from(5));
        assert_eq!(line_line_2(&l1, &l4), None);
    }

    #[test]
    fn planes_meet_on_a_line() {
        let z0 = Plane3::<Q>::from_coefficients(0, 0, 1, 0);
        let x1 = Plane3::<Q>::from_coefficients(1, 0, 0, -1);
        match plane_plane(&z0, &x1) {
            Some(LineOrPlane3::Line(l)) => {
                assert!(z0.has_on(&l.point));
                assert!(x1.has_on(&l.point));
                assert!(z0.has_on(&l.point_at(&Q::from(5))));
                assert!(x1.has_on(&l.point_at(&Q::from(5))));
            }
            other => panic!("expected a line, got {other:?}"),
        }
        let z1 = Plane3::<Q>::from_coefficients(0, 0, 2, -2);
        assert_eq!(plane_plane(&z0, &z1), None);
        let z0b = Plane3::<Q>::from_coefficients(0, 0, -3, 0);
        assert_eq!(plane_plane(&z0, &z0b), Some(LineOrPlane3::Plane(z0.clone())));
    }

    #[test]
    fn split_triangle_by_a_line() {
        let a = Point2::<Q>::new(0, 0);
        let b = Point2::<Q>::new(4, 0);
        let c = Point2::<Q>::new(0, 4);
        // x = 1
        let vals = |l: i32| [a.x().clone() - Q::from(l), b.x().clone() - Q::from(l), c.x().clone() - Q::from(l)];
        assert_eq!(
            split_by_values([&a, &b, &c], vals(1)),
            Some(Split::Segment(Point2::new(1, 0), Point2::new(1, 3)))
        );
        assert_eq!(split_by_values([&a, &b, &c], vals(0)), Some(Split::Segment(a.clone(), c.clone())));
        assert_eq!(split_by_values([&a, &b, &c], vals(4)), Some(Split::Point(b.clone())));
        assert_eq!(split_by_values([&a, &b, &c], vals(5)), None);
    }

    #[test]
    fn three_planes_cases() {
        let x = Plane3::<Q>::from_coefficients(1, 0, 0, -1);
        let y = Plane3::<Q>::from_coefficients(0, 1, 0, -2);
        let z = Plane3::<Q>::from_coefficients(0, 0, 1, -3);
        assert_eq!(
            three_planes(&x, &y, &z),
            Some(PointLineOrPlane3::Point(Point3::new(1, 2, 3)))
        );

        // a pencil through the z axis
        let a = Plane3::<Q>::from_coefficients(1, 0, 0, 0);
        let b = Plane3::<Q>::from_coefficients(0, 1, 0, 0);
        let c = Plane3::<Q>::from_coefficients(1, 1, 0, 0);
        match three_planes(&a, &b, &c) {
            Some(PointLineOrPlane3::Line(l)) => {
                assert!(l.has_on(&Point3::new(0, 0, 7)));
            }
            other => panic!("expected a line, got {other:?}"),
        }

        // three parallel walls, one apart
        let d = Plane3::<Q>::from_coefficients(1, 0, 0, -5);
        assert_eq!(three_planes(&a, &a, &d), None);
        assert_eq!(
            three_planes(&a, &a, &a),
            Some(PointLineOrPlane3::Plane(a.clone()))
        );
    }
}
