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

use cgar::geometry::{Point2, Point3};
use cgar::kernel::{
    orient2d, orient3d, orientation_2, orientation_3, side_of_bounded_circle,
    side_of_oriented_sphere,
};
use cgar::numeric::Sign;
use cgar::numeric::cgar_f64::CgarF64;
use cgar::numeric::cgar_rational::CgarRational;

type Q = CgarRational;

#[test]
fn orientation_3d_positive_volume() {
    let a = Point3::<CgarF64>::new(0.0, 0.0, 0.0);
    let b = Point3::new(1.0, 0.0, 0.0);
    let c = Point3::new(0.0, 1.0, 0.0);
    let d = Point3::new(0.0, 0.0, 1.0);

    let vol = orient3d(&a, &b, &c, &d);
    assert!(vol.0 > 0.0);
}

#[test]
fn orientation_3d_negative_volume() {
    let a = Point3::<Q>::new(0, 0, 0);
    let b = Point3::new(1, 0, 0);
    let c = Point3::new(0, 1, 0);
    let d = Point3::new(0, 0, -1); // below the abc plane

    assert_eq!(orientation_3(&a, &b, &c, &d), Sign::Negative);
}

#[test]
fn orientation_3d_coplanar() {
    let a = Point3::<Q>::new(0, 0, 0);
    let b = Point3::new(1, 0, 0);
    let c = Point3::new(0, 1, 0);
    let d = Point3::new(1, 1, 0); // lies in the same z=0 plane

    assert_eq!(orientation_3(&a, &b, &c, &d), Sign::Zero);
}

#[test]
fn orientation_2d_exact_on_tiny_turns() {
    let a = Point2::<Q>::new(0.0, 0.0);
    let b = Point2::new(1.0, 1.0);
    let c = Point2::new(2.0, 2.0 + 1e-15);
    assert_eq!(orientation_2(&a, &b, &c), Sign::Positive);
    assert!(orient2d(&a, &b, &Point2::new(2, 2)) == Q::from(0));
}

#[test]
fn circle_and_sphere_sides() {
    let p = Point2::<Q>::new(1, 0);
    let q = Point2::new(0, 1);
    let r = Point2::new(-1, 0);
    assert_eq!(side_of_bounded_circle(&p, &q, &r, &Point2::new(0, 0)), Sign::Positive);
    assert_eq!(side_of_bounded_circle(&r, &q, &p, &Point2::new(0, 0)), Sign::Positive);
    assert_eq!(side_of_bounded_circle(&p, &q, &r, &Point2::new(0, -1)), Sign::Zero);
    assert_eq!(side_of_bounded_circle(&p, &q, &r, &Point2::new(2, 2)), Sign::Negative);

    let a = Point3::<Q>::new(1, 0, 0);
    let b = Point3::new(0, 1, 0);
    let c = Point3::new(-1, 0, 0);
    let d = Point3::new(0, 0, 1);
    let sign = orientation_3(&a, &b, &c, &d);
    let inside = side_of_oriented_sphere(&a, &b, &c, &d, &Point3::new(0, 0, 0));
    assert_eq!(inside * sign, Sign::Positive);
    let outside = side_of_oriented_sphere(&a, &b, &c, &d, &Point3::new(3, 0, 0));
    assert_eq!(outside * sign, Sign::Negative);
}
