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
    geometry::{circle::Circle3, plane::Plane3, sphere::Sphere3},
    intersection::{
        Intersect,
        result::{PointCircleOrSphere3, PointOrCircle3},
    },
    numeric::scalar::Scalar,
};

/// Compare the squared distance from the center to the plane with the squared
/// radius: `(n.c + d)^2` against `r^2 |n|^2`.
fn plane_sphere<T: Scalar>(plane: &Plane3<T>, sphere: &Sphere3<T>) -> Option<PointOrCircle3<T>> {
    let v = plane.value_at(&sphere.center);
    let nn = plane.normal.squared_length();
    let h2 = v.clone() * v;
    match h2.compare(&(sphere.squared_radius.clone() * nn.clone())) {
        Ordering::Greater => None,
        Ordering::Equal => Some(PointOrCircle3::Point(plane.projection(&sphere.center))),
        Ordering::Less => {
            let r2 = sphere.squared_radius.clone() - h2 / nn;
            Some(PointOrCircle3::Circle(Circle3::new(
                plane.projection(&sphere.center),
                r2,
                plane.clone(),
            )))
        }
    }
}

impl<T: Scalar> Intersect<Sphere3<T>> for Plane3<T> {
    type Output = PointOrCircle3<T>;

    fn intersection(&self, sphere: &Sphere3<T>) -> Option<PointOrCircle3<T>> {
        plane_sphere(self, sphere)
    }
}

do_intersect_via_intersection!(Plane3<T>, Sphere3<T>);
symmetric!(Plane3<T>, Sphere3<T>);

impl<T: Scalar> Intersect for Sphere3<T> {
    type Output = PointCircleOrSphere3<T>;

    fn intersection(&self, other: &Sphere3<T>) -> Option<PointCircleOrSphere3<T>> {
        let (c1, c2) = (&self.center, &other.center);
        let (r1, r2) = (&self.squared_radius, &other.squared_radius);
        if c1.coincides(c2) {
            return (r1.compare(r2) == Ordering::Equal)
                .then(|| PointCircleOrSphere3::Sphere(self.clone()));
        }

        let d2 = c1.squared_distance(c2);
        let gap = d2.clone() - r1.clone() - r2.clone();
        let four = T::from(4_i32);
        match (gap.clone() * gap).compare(&(four * r1.clone() * r2.clone())) {
            Ordering::Greater => None,
            Ordering::Equal => {
                let two = T::from(2_i32);
                let t = (r1.clone() - r2.clone() + d2.clone()) / (two * d2);
                Some(PointCircleOrSphere3::Point(c1.lerp(c2, &t)))
            }
            Ordering::Less => {
                // radical plane: |p - c1|^2 - r1^2 = |p - c2|^2 - r2^2
                let axis = c2 - c1;
                let normal = &axis + &axis;
                let d = c1.as_vector().squared_length() - c2.as_vector().squared_length()
                    - r1.clone()
                    + r2.clone();
                log::trace!("spheres cross, reducing to the radical plane");
                Some(match plane_sphere(&Plane3::new(normal, d), self)? {
                    PointOrCircle3::Point(p) => PointCircleOrSphere3::Point(p),
                    PointOrCircle3::Circle(c) => PointCircleOrSphere3::Circle(c),
                })
            }
        }
    }
}

do_intersect_via_intersection!(Sphere3<T>, Sphere3<T>);

#[cfg(test)]
mod tests {
    use crate::{
        geometry::{
            circle::Circle3, plane::Plane3, point::Point3, sphere::Sphere3, vector::Vector3,
        },
        intersection::{
            do_intersect, intersection,
            result::{PointCircleOrSphere3, PointOrCircle3},
        },
        numeric::cgar_rational::CgarRational,
    };

    type Q = CgarRational;

    fn sphere(x: i32, y: i32, z: i32, r2: i32) -> Sphere3<Q> {
        Sphere3::new(Point3::new(x, y, z), Q::from(r2))
    }

    #[test]
    fn plane_slices_sphere() {
        let s = sphere(0, 0, 0, 4);
        let z1 = Plane3::<Q>::from_coefficients(0, 0, 1, -1);
        assert_eq!(
            intersection(&z1, &s),
            Some(PointOrCircle3::Circle(Circle3::new(Point3::new(0, 0, 1), Q::from(3), z1.clone())))
        );
        let z2 = Plane3::<Q>::from_coefficients(0, 0, 2, -4);
        assert_eq!(intersection(&s, &z2), Some(PointOrCircle3::Point(Point3::new(0, 0, 2))));
        let z3 = Plane3::<Q>::from_coefficients(0, 0, 1, -3);
        assert!(!do_intersect(&z3, &s));
    }

    #[test]
    fn sphere_pairs() {
        let s = sphere(0, 0, 0, 4);
        assert_eq!(intersection(&s, &s), Some(PointCircleOrSphere3::Sphere(s.clone())));
        assert_eq!(intersection(&s, &sphere(0, 0, 0, 1)), None);

        // externally tangent at (2, 0, 0)
        assert_eq!(
            intersection(&s, &sphere(3, 0, 0, 1)),
            Some(PointCircleOrSphere3::Point(Point3::new(2, 0, 0)))
        );
        // internally tangent at (2, 0, 0)
        assert_eq!(
            intersection(&s, &sphere(1, 0, 0, 1)),
            Some(PointCircleOrSphere3::Point(Point3::new(2, 0, 0)))
        );
        assert!(!do_intersect(&s, &sphere(5, 0, 0, 1)));

        // crossing spheres meet on the radical plane x = 1
        let radical = Plane3::new(Vector3::new(4, 0, 0), Q::from(-4));
        assert_eq!(
            intersection(&s, &sphere(2, 0, 0, 4)),
            Some(PointCircleOrSphere3::Circle(Circle3::new(Point3::new(1, 0, 0), Q::from(3), radical)))
        );
    }
}
