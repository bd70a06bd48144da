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
        ray::Ray3,
        segment::Segment3,
        triangle::{Triangle3, TriangleShape},
    },
    intersection::{
        Intersect, Linear,
        algebra::{LinePlane, Split, line_plane, plane_plane, split_by_values},
        interval::IntervalShape,
        result::{
            FromInterval, LineOrPlane3, PointOrLine3, PointOrRay3, PointOrSegment3,
            PointSegmentOrTriangle3,
        },
    },
    numeric::scalar::Scalar,
};

/// The part of a line, ray or segment lying on a plane.
pub(crate) fn plane_linear<T: Scalar, L: Linear<T, 3>>(
    plane: &Plane3<T>,
    l: &L,
) -> Option<IntervalShape<T, 3>> {
    let (o, v, within) = (l.origin(), l.direction(), l.interval());
    match line_plane(l, plane) {
        LinePlane::Disjoint => None,
        LinePlane::At(t) => within
            .contains(&t)
            .then(|| IntervalShape::Point(&o + &v.scale(&t))),
        LinePlane::Contained => within.materialize(&o, &v),
    }
}

macro_rules! plane_linear {
    ($l:ty => $out:ty) => {
        impl<T: Scalar> Intersect<$l> for Plane3<T> {
            type Output = $out;

            fn intersection(&self, other: &$l) -> Option<$out> {
                <$out>::from_interval(plane_linear(self, other)?)
            }
        }

        do_intersect_via_intersection!(Plane3<T>, $l);
        symmetric!(Plane3<T>, $l);
    };
}

plane_linear!(Line3<T> => PointOrLine3<T>);
plane_linear!(Ray3<T> => PointOrRay3<T>);
plane_linear!(Segment3<T> => PointOrSegment3<T>);

impl<T: Scalar> Intersect for Plane3<T> {
    type Output = LineOrPlane3<T>;

    fn intersection(&self, other: &Plane3<T>) -> Option<LineOrPlane3<T>> {
        plane_plane(self, other)
    }
}

do_intersect_via_intersection!(Plane3<T>, Plane3<T>);

impl<T: Scalar> Intersect<Triangle3<T>> for Plane3<T> {
    type Output = PointSegmentOrTriangle3<T>;

    fn intersection(&self, tri: &Triangle3<T>) -> Option<PointSegmentOrTriangle3<T>> {
        match tri.shape() {
            TriangleShape::Point(p) => {
                self.has_on(&p).then_some(PointSegmentOrTriangle3::Point(p))
            }
            TriangleShape::Segment(s) => {
                log::trace!("triangle collapses to a segment");
                let part = PointOrSegment3::from_interval(plane_linear(self, &s)?)?;
                Some(part.into())
            }
            TriangleShape::Triangle => {
                let vertices = tri.vertices();
                let values = vertices.map(|v| self.value_at(v));
                Some(match split_by_values(vertices, values)? {
                    Split::Point(p) => PointSegmentOrTriangle3::Point(p),
                    Split::Segment(p, q) => {
                        PointSegmentOrTriangle3::Segment(Segment3::new(&p, &q).canonical())
                    }
                    Split::All => PointSegmentOrTriangle3::Triangle(tri.clone()),
                })
            }
        }
    }
}

do_intersect_via_intersection!(Plane3<T>, Triangle3<T>);
symmetric!(Plane3<T>, Triangle3<T>);

#[cfg(test)]
mod tests {
    use crate::{
        geometry::{
            line::Line3, plane::Plane3, point::Point3, ray::Ray3, segment::Segment3,
            triangle::Triangle3, vector::Vector3,
        },
        intersection::{
            do_intersect, intersection,
            result::{
                LineOrPlane3, PointOrLine3, PointOrRay3, PointOrSegment3, PointSegmentOrTriangle3,
            },
        },
        numeric::cgar_rational::CgarRational,
    };

    type Q = CgarRational;

    fn p(x: i32, y: i32, z: i32) -> Point3<Q> {
        Point3::new(x, y, z)
    }

    fn z_eq(c: i32) -> Plane3<Q> {
        Plane3::from_coefficients(0, 0, 1, -c)
    }

    #[test]
    fn plane_against_linear_pieces() {
        let h = z_eq(1);
        let l = Line3::new(p(0, 0, 0), Vector3::new(1, 0, 1));
        assert_eq!(intersection(&h, &l), Some(PointOrLine3::Point(p(1, 0, 1))));

        let flat = Line3::new(p(0, 0, 1), Vector3::new(1, 2, 0));
        assert_eq!(intersection(&flat, &h), Some(PointOrLine3::Line(flat.clone())));
        let above = Line3::new(p(0, 0, 2), Vector3::new(1, 2, 0));
        assert!(!do_intersect(&h, &above));

        let r = Ray3::new(p(0, 0, 3), Vector3::new(0, 0, 1));
        assert_eq!(intersection(&h, &r), None);
        let lying = Ray3::new(p(0, 0, 1), Vector3::new(0, 1, 0));
        assert_eq!(intersection(&h, &lying), Some(PointOrRay3::Ray(lying.clone())));

        let s = Segment3::new(&p(0, 0, 0), &p(0, 0, 4));
        assert_eq!(intersection(&s, &h), Some(PointOrSegment3::Point(p(0, 0, 1))));
        let short = Segment3::new(&p(0, 0, 2), &p(0, 0, 4));
        assert!(!do_intersect(&short, &h));
    }

    #[test]
    fn plane_pairs() {
        let h = z_eq(1);
        assert_eq!(intersection(&h, &h), Some(LineOrPlane3::Plane(h.clone())));
        assert_eq!(intersection(&h, &z_eq(2)), None);
        assert!(matches!(
            intersection(&h, &Plane3::from_coefficients(1, 0, 0, 0)),
            Some(LineOrPlane3::Line(_))
        ));
    }

    #[test]
    fn plane_cuts_triangle() {
        let t = Triangle3::new(&p(0, 0, 0), &p(4, 0, 4), &p(0, 4, 4));
        let h = z_eq(2);
        assert_eq!(
            intersection(&h, &t),
            Some(PointSegmentOrTriangle3::Segment(Segment3::new(&p(0, 2, 2), &p(2, 0, 2))))
        );
        assert_eq!(intersection(&t, &z_eq(0)), Some(PointSegmentOrTriangle3::Point(p(0, 0, 0))));
        assert_eq!(
            intersection(&t, &z_eq(4)),
            Some(PointSegmentOrTriangle3::Segment(Segment3::new(&p(0, 4, 4), &p(4, 0, 4))))
        );
        assert_eq!(intersection(&t, &z_eq(5)), None);

        let lying = Triangle3::new(&p(0, 0, 2), &p(1, 0, 2), &p(0, 1, 2));
        assert_eq!(intersection(&h, &lying), Some(PointSegmentOrTriangle3::Triangle(lying.clone())));
    }
}
