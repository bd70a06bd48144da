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

//! Lines, rays and segments against each other and against triangles, in
//! either dimension. Everything is computed as a parameter interval along the
//! first argument and materialized by the caller.

use crate::{
    geometry::{
        line::Line2,
        point::Point,
        triangle::{Triangle, Triangle2, Triangle3, TriangleShape},
        util::{kept_axes, project_to_2d, project_vector_to_2d},
        vector::{Vector, Vector3},
    },
    intersection::{
        algebra::{LinePlane, Split, line_plane, split_by_values},
        interval::{IntervalShape, Linear, ParamInterval, ParamLine},
    },
    numeric::scalar::Scalar,
};

/// Parameter of a point known to lie on `origin + t * dir`, `dir != 0`.
pub(crate) fn param_along<T: Scalar, const N: usize>(
    origin: &Point<T, N>,
    dir: &Vector<T, N>,
    p: &Point<T, N>,
) -> T {
    let k = dir.dominant_axis();
    (p[k].clone() - origin[k].clone()) / dir[k].clone()
}

fn single<T: Scalar>(t: T, within: &ParamInterval<T>) -> ParamInterval<T> {
    if within.contains(&t) {
        ParamInterval::closed(t.clone(), t)
    } else {
        ParamInterval::empty()
    }
}

/// The two axes spanning the plane of two non-parallel directions, or `None`
/// when the two lines are skew. In 2D the plane is the whole space.
fn common_plane_axes<T: Scalar, const N: usize>(
    w: &Vector<T, N>,
    v1: &Vector<T, N>,
    v2: &Vector<T, N>,
) -> Option<(usize, usize)> {
    if N == 2 {
        return Some((0, 1));
    }
    let n = Vector3::from_coords([
        v1[1].clone() * v2[2].clone() - v1[2].clone() * v2[1].clone(),
        v1[2].clone() * v2[0].clone() - v1[0].clone() * v2[2].clone(),
        v1[0].clone() * v2[1].clone() - v1[1].clone() * v2[0].clone(),
    ]);
    let w = Vector3::from_coords([w[0].clone(), w[1].clone(), w[2].clone()]);
    if !w.dot(&n).is_zero() {
        return None;
    }
    Some(kept_axes(n.dominant_axis()))
}

/// Parameters along `a` of the points `a` shares with `b`.
pub fn linear_linear_interval<T, const N: usize, A, B>(a: &A, b: &B) -> ParamInterval<T>
where
    T: Scalar,
    A: Linear<T, N>,
    B: Linear<T, N>,
{
    let (o1, v1, i1) = (a.origin(), a.direction(), a.interval());
    let (o2, v2, i2) = (b.origin(), b.direction(), b.interval());

    if v1.is_zero() {
        return if b.contains_point(&o1) {
            single(T::zero(), &i1)
        } else {
            ParamInterval::empty()
        };
    }
    if v2.is_zero() {
        return match a.param_of(&o2) {
            Some(t) => single(t, &i1),
            None => ParamInterval::empty(),
        };
    }

    let w = &o2 - &o1;
    if v1.is_parallel_to(&v2) {
        if !w.is_parallel_to(&v1) {
            return ParamInterval::empty();
        }
        // collinear: carry b's interval over to a's parameter
        let k = v1.dominant_axis();
        let offset = w[k].clone() / v1[k].clone();
        let scale = v2[k].clone() / v1[k].clone();
        return i1.intersect(&i2.affine(&offset, &scale));
    }

    let Some((i, j)) = common_plane_axes(&w, &v1, &v2) else {
        return ParamInterval::empty();
    };
    let cross = v1[i].clone() * v2[j].clone() - v1[j].clone() * v2[i].clone();
    let t = (w[i].clone() * v2[j].clone() - w[j].clone() * v2[i].clone()) / cross.clone();
    let u = (w[i].clone() * v1[j].clone() - w[j].clone() * v1[i].clone()) / cross;
    if i2.contains(&u) {
        single(t, &i1)
    } else {
        ParamInterval::empty()
    }
}

pub fn linear_linear<T, const N: usize, A, B>(a: &A, b: &B) -> Option<IntervalShape<T, N>>
where
    T: Scalar,
    A: Linear<T, N>,
    B: Linear<T, N>,
{
    linear_linear_interval(a, b).materialize(&a.origin(), &a.direction())
}

/// Clip `within` to the parameters of a split of a triangle along `origin + t * dir`.
fn split_interval<T: Scalar, const N: usize>(
    split: Option<Split<T, N>>,
    vertices: [&Point<T, N>; 3],
    origin: &Point<T, N>,
    dir: &Vector<T, N>,
    within: &ParamInterval<T>,
) -> ParamInterval<T> {
    let range = match split {
        None => return ParamInterval::empty(),
        Some(Split::Point(p)) => {
            let t = param_along(origin, dir, &p);
            ParamInterval::closed(t.clone(), t)
        }
        Some(Split::Segment(p, q)) => {
            ParamInterval::closed(param_along(origin, dir, &p), param_along(origin, dir, &q))
        }
        Some(Split::All) => {
            let ts = vertices.map(|v| param_along(origin, dir, v));
            let [a, b, c] = ts;
            ParamInterval::closed(a.clone().min(b.clone()).min(c.clone()), a.max(b).max(c))
        }
    };
    within.intersect(&range)
}

/// Degenerate triangles, or a linear piece collapsed to a point, handled as
/// their lower-dimensional forms. `None` when neither is degenerate.
fn degenerate_linear_triangle<T, const N: usize, L>(
    l: &L,
    shape: TriangleShape<T, N>,
) -> Option<ParamInterval<T>>
where
    T: Scalar,
    L: Linear<T, N>,
{
    match shape {
        TriangleShape::Point(q) => {
            log::trace!("triangle collapses to a point");
            Some(match l.param_of(&q) {
                Some(t) => single(t, &l.interval()),
                None => ParamInterval::empty(),
            })
        }
        TriangleShape::Segment(s) => {
            log::trace!("triangle collapses to a segment");
            Some(linear_linear_interval(l, &s))
        }
        TriangleShape::Triangle => None,
    }
}

/// Parameters along `l` of its points inside the closed triangle.
pub fn linear_triangle_2_interval<T: Scalar, L: Linear<T, 2>>(
    l: &L,
    tri: &Triangle2<T>,
) -> ParamInterval<T> {
    if let Some(i) = degenerate_linear_triangle(l, tri.shape()) {
        return i;
    }
    let (o, v, iv) = (l.origin(), l.direction(), l.interval());
    if v.is_zero() {
        return if tri.has_on(&o) { single(T::zero(), &iv) } else { ParamInterval::empty() };
    }
    let line = Line2::from_point_direction(&o, &v);
    let vertices = tri.vertices();
    let values = vertices.map(|p| line.value_at(p));
    split_interval(split_by_values(vertices, values), vertices, &o, &v, &iv)
}

/// Parameters along `l` of its points inside the closed triangle.
pub fn linear_triangle_3_interval<T: Scalar, L: Linear<T, 3>>(
    l: &L,
    tri: &Triangle3<T>,
) -> ParamInterval<T> {
    if let Some(i) = degenerate_linear_triangle(l, tri.shape()) {
        return i;
    }
    let (o, v, iv) = (l.origin(), l.direction(), l.interval());
    if v.is_zero() {
        return if tri.has_on(&o) { single(T::zero(), &iv) } else { ParamInterval::empty() };
    }
    let plane = tri.supporting_plane();
    match line_plane(l, &plane) {
        LinePlane::Disjoint => ParamInterval::empty(),
        LinePlane::At(t) => {
            if !iv.contains(&t) {
                return ParamInterval::empty();
            }
            let p = &o + &v.scale(&t);
            if tri.edges_contain_projection(&p, &plane.normal) {
                single(t, &iv)
            } else {
                ParamInterval::empty()
            }
        }
        LinePlane::Contained => {
            log::trace!("linear piece lies in the triangle's plane, solving in 2D");
            let k = plane.normal.dominant_axis();
            let flat = ParamLine {
                origin: project_to_2d(&o, k),
                direction: project_vector_to_2d(&v, k),
                interval: iv,
            };
            let [a, b, c] = tri.vertices().map(|p| project_to_2d(p, k));
            linear_triangle_2_interval(&flat, &Triangle::new(&a, &b, &c))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        geometry::{
            line::Line3,
            point::{Point2, Point3},
            ray::Ray,
            segment::Segment,
            vector::Vector2,
        },
        numeric::cgar_rational::CgarRational,
    };

    type Q = CgarRational;

    fn q(n: i32, d: i32) -> Q {
        Q::from_num_den(n, d)
    }

    #[test]
    fn skew_lines_do_not_meet() {
        let l1 = Line3::<Q>::new(Point3::new(0, 0, 0), Vector3::new(1, 0, 0));
        let l2 = Line3::<Q>::new(Point3::new(0, 0, 1), Vector3::new(0, 1, 0));
        assert!(linear_linear_interval(&l1, &l2).is_empty());

        let l3 = Line3::<Q>::new(Point3::new(3, -1, 0), Vector3::new(0, 1, 0));
        assert_eq!(
            linear_linear(&l1, &l3),
            Some(IntervalShape::Point(Point3::new(3, 0, 0)))
        );
    }

    #[test]
    fn opposite_collinear_rays_overlap_in_a_segment() {
        let r1 = Ray::new(Point2::<Q>::new(0, 0), Vector2::new(1, 0));
        let r2 = Ray::new(Point2::<Q>::new(2, 0), Vector2::new(-3, 0));
        assert_eq!(
            linear_linear(&r1, &r2),
            Some(IntervalShape::Segment(Segment::new(&Point2::new(0, 0), &Point2::new(2, 0))))
        );
    }

    #[test]
    fn segment_through_triangle() {
        let tri = Triangle::new(&Point2::<Q>::new(0, 0), &Point2::new(4, 0), &Point2::new(0, 4));
        let s = Segment::new(&Point2::new(-1, 1), &Point2::new(5, 1));
        let i = linear_triangle_2_interval(&s, &tri);
        assert_eq!(i, ParamInterval::closed(q(1, 6), q(2, 3)));
    }

    #[test]
    fn segment_in_triangle_plane() {
        let tri = Triangle::new(
            &Point3::<Q>::new(0, 0, 0),
            &Point3::new(4, 0, 0),
            &Point3::new(0, 4, 0),
        );
        let s = Segment::new(&Point3::new(1, -1, 0), &Point3::new(1, 5, 0));
        let shape = linear_triangle_3_interval(&s, &tri).materialize(&s.origin(), &s.direction());
        assert_eq!(
            shape,
            Some(IntervalShape::Segment(Segment::new(&Point3::new(1, 0, 0), &Point3::new(1, 3, 0))))
        );
    }
}
