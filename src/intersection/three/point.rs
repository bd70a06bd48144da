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
        line::Line3,
        plane::Plane3,
        point::Point3,
        ray::Ray3,
        segment::Segment3,
        sphere::Sphere3,
        tetrahedron::Tetrahedron3,
        triangle::Triangle3,
    },
    intersection::{Intersect, three::tetrahedron::tetrahedron_has_on},
    numeric::scalar::Scalar,
};

/// A point meets `$other` in itself when `$test` holds.
macro_rules! point_on {
    ($other:ty, |$p:ident, $o:ident| $test:expr) => {
        impl<T: Scalar> Intersect<$other> for Point3<T> {
            type Output = Point3<T>;

            fn intersection(&self, other: &$other) -> Option<Point3<T>> {
                let ($p, $o) = (self, other);
                ($test).then(|| self.clone())
            }
        }

        do_intersect_via_intersection!(Point3<T>, $other);
    };
    ($other:ty, |$p:ident, $o:ident| $test:expr, symmetric) => {
        point_on!($other, |$p, $o| $test);
        symmetric!(Point3<T>, $other);
    };
}

point_on!(Point3<T>, |p, q| p.coincides(q));
point_on!(Line3<T>, |p, l| l.has_on(p), symmetric);
point_on!(Ray3<T>, |p, r| r.has_on(p), symmetric);
point_on!(Segment3<T>, |p, s| s.has_on(p), symmetric);
point_on!(Plane3<T>, |p, h| h.has_on(p), symmetric);
point_on!(Triangle3<T>, |p, t| t.has_on(p), symmetric);
point_on!(Tetrahedron3<T>, |p, t| tetrahedron_has_on(t, p), symmetric);
point_on!(Sphere3<T>, |p, s| s.has_on(p), symmetric);

#[cfg(test)]
mod tests {
    use crate::{
        geometry::{
            line::Line3, plane::Plane3, point::Point3, sphere::Sphere3, tetrahedron::Tetrahedron3,
            triangle::Triangle3, vector::Vector3,
        },
        intersection::{do_intersect, intersection},
        numeric::cgar_rational::CgarRational,
    };

    type Q = CgarRational;

    fn p(x: i32, y: i32, z: i32) -> Point3<Q> {
        Point3::new(x, y, z)
    }

    #[test]
    fn point_against_3d_primitives() {
        let o = p(1, 1, 1);
        assert_eq!(intersection(&o, &o), Some(o.clone()));
        assert!(!do_intersect(&o, &p(1, 1, 2)));

        let l = Line3::new(p(0, 0, 0), Vector3::new(2, 2, 2));
        assert_eq!(intersection(&l, &o), Some(o.clone()));

        let h = Plane3::<Q>::from_coefficients(1, 1, 1, -3);
        assert!(do_intersect(&h, &o));
        assert!(!do_intersect(&p(0, 0, 0), &h));

        let t = Triangle3::new(&p(0, 0, 3), &p(3, 0, 0), &p(0, 3, 0));
        assert!(do_intersect(&o, &t));

        let s = Sphere3::new(p(0, 0, 0), Q::from(3));
        assert!(do_intersect(&s, &o));
        assert!(!do_intersect(&p(0, 0, 0), &s));
    }

    #[test]
    fn point_in_solid_or_flat_tetrahedron() {
        let tet = Tetrahedron3::new(&p(0, 0, 0), &p(4, 0, 0), &p(0, 4, 0), &p(0, 0, 4));
        assert!(do_intersect(&p(1, 1, 1), &tet));
        assert!(do_intersect(&tet, &p(0, 0, 0)));
        assert!(!do_intersect(&p(2, 2, 2), &tet));

        // four coplanar points spanning a square
        let flat = Tetrahedron3::new(&p(0, 0, 0), &p(2, 0, 0), &p(2, 2, 0), &p(0, 2, 0));
        assert!(do_intersect(&p(1, 1, 0), &flat));
        assert!(!do_intersect(&p(1, 1, 1), &flat));
    }
}
