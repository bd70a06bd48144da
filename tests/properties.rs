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

use cgar::geometry::{IsoRectangle2, Point, Point2, Segment2, Triangle2};
use cgar::intersection::{ConvexRegion, ConvexRegion2, PointOrSegment, do_intersect, intersection};
use cgar::kernel::orientation_2;
use cgar::numeric::cgar_rational::CgarRational;
use cgar::numeric::{Scalar, Sign};
use proptest::prelude::*;

type Q = CgarRational;

fn point() -> impl Strategy<Value = Point2<Q>> {
    (-6i32..=6, -6i32..=6).prop_map(|(x, y)| Point2::new(x, y))
}

fn segment() -> impl Strategy<Value = Segment2<Q>> {
    (point(), point()).prop_map(|(a, b)| Segment2::new(&a, &b))
}

fn triangle() -> impl Strategy<Value = Triangle2<Q>> {
    (point(), point(), point()).prop_map(|(a, b, c)| Triangle2::new(&a, &b, &c))
}

fn rectangle() -> impl Strategy<Value = IsoRectangle2<Q>> {
    (point(), point()).prop_map(|(a, b)| IsoRectangle2::from_points(&a, &b))
}

fn region_points<const N: usize>(r: &ConvexRegion<Q, N>) -> Vec<Point<Q, N>> {
    match r {
        ConvexRegion::Point(p) => vec![p.clone()],
        ConvexRegion::Segment(s) => vec![s.source().clone(), s.target().clone()],
        ConvexRegion::Triangle(t) => t.vertices().into_iter().cloned().collect(),
        ConvexRegion::Polygon(v) => v.clone(),
    }
}

/// Counter-clockwise, strictly convex at every vertex, starting at the
/// lexicographically smallest vertex; segments are non-degenerate and ordered.
fn is_canonical(r: &ConvexRegion2<Q>) -> bool {
    let cycle: Vec<Point2<Q>> = match r {
        ConvexRegion::Point(_) => return true,
        ConvexRegion::Segment(s) => {
            return s.source().compare_lex(s.target()) == Ordering::Less;
        }
        ConvexRegion::Triangle(t) => t.vertices().into_iter().cloned().collect(),
        ConvexRegion::Polygon(v) => {
            if v.len() < 4 {
                return false;
            }
            v.clone()
        }
    };
    let n = cycle.len();
    let turns_left = (0..n).all(|i| {
        orientation_2(&cycle[i], &cycle[(i + 1) % n], &cycle[(i + 2) % n]) == Sign::Positive
    });
    let starts_at_min = cycle[1..]
        .iter()
        .all(|p| cycle[0].compare_lex(p) == Ordering::Less);
    turns_left && starts_at_min
}

fn region_has_on(r: &ConvexRegion2<Q>, p: &Point2<Q>) -> bool {
    match r {
        ConvexRegion::Point(q) => q.coincides(p),
        ConvexRegion::Segment(s) => s.has_on(p),
        ConvexRegion::Triangle(t) => t.has_on(p),
        ConvexRegion::Polygon(v) => {
            let n = v.len();
            (0..n).all(|i| orientation_2(&v[i], &v[(i + 1) % n], p) != Sign::Negative)
        }
    }
}

/// Every point of the half-integer grid covering the coordinate range.
fn grid() -> Vec<Point2<Q>> {
    let mut out = Vec::new();
    for i in -12..=12 {
        for j in -12..=12 {
            out.push(Point2::from_coords([Q::from_num_den(i, 2), Q::from_num_den(j, 2)]));
        }
    }
    out
}

fn same_vertex_set<const N: usize>(a: &[Point<Q, N>], b: &[Point<Q, N>]) -> bool {
    a.len() == b.len() && a.iter().all(|p| b.contains(p)) && b.iter().all(|p| a.contains(p))
}

proptest! {
    #[test]
    fn segment_pairs_are_symmetric(a in segment(), b in segment()) {
        prop_assert_eq!(do_intersect(&a, &b), do_intersect(&b, &a));
        prop_assert_eq!(intersection(&a, &b), intersection(&b, &a));
        prop_assert_eq!(do_intersect(&a, &b), intersection(&a, &b).is_some());
    }

    #[test]
    fn segment_result_lies_on_both(a in segment(), b in segment()) {
        match intersection(&a, &b) {
            Some(PointOrSegment::Point(p)) => {
                prop_assert!(a.has_on(&p) && b.has_on(&p));
            }
            Some(PointOrSegment::Segment(s)) => {
                prop_assert!(!s.is_degenerate());
                for p in [s.source(), s.target()] {
                    prop_assert!(a.has_on(p) && b.has_on(p));
                }
            }
            None => {}
        }
    }

    #[test]
    fn segment_with_itself_is_itself(a in segment()) {
        let expected = if a.is_degenerate() {
            PointOrSegment::Point(a.source().clone())
        } else {
            PointOrSegment::Segment(a.canonical())
        };
        prop_assert_eq!(intersection(&a, &a), Some(expected));
    }

    #[test]
    fn segment_meets_its_own_endpoints(a in segment()) {
        prop_assert!(do_intersect(&a, a.source()));
        prop_assert!(do_intersect(a.target(), &a));
    }

    #[test]
    fn triangle_overlap_lies_in_both(a in triangle(), b in triangle()) {
        prop_assert_eq!(do_intersect(&a, &b), do_intersect(&b, &a));
        let r = intersection(&a, &b);
        prop_assert_eq!(do_intersect(&a, &b), r.is_some());
        if let Some(r) = r {
            for p in region_points(&r) {
                prop_assert!(a.has_on(&p) && b.has_on(&p));
            }
        }
    }

    #[test]
    fn triangle_meets_itself(a in triangle()) {
        prop_assert!(do_intersect(&a, &a));
    }

    #[test]
    fn rectangle_clip_lies_in_both(t in triangle(), r in rectangle()) {
        prop_assert_eq!(do_intersect(&t, &r), do_intersect(&r, &t));
        if let Some(region) = intersection(&r, &t) {
            for p in region_points(&region) {
                prop_assert!(t.has_on(&p) && r.has_on(&p));
            }
        }
    }

    #[test]
    fn segment_rectangle_agrees_with_corners(s in segment(), r in rectangle()) {
        if r.has_on(s.source()) || r.has_on(s.target()) {
            prop_assert!(do_intersect(&s, &r));
        }
        if let Some(PointOrSegment::Segment(c)) = intersection(&r, &s) {
            prop_assert!(r.has_on(c.source()) && r.has_on(c.target()));
            prop_assert!(s.has_on(c.source()) && s.has_on(c.target()));
        }
    }
}

proptest! {
    #[test]
    fn triangle_overlap_is_canonical(a in triangle(), b in triangle()) {
        if let Some(r) = intersection(&a, &b) {
            prop_assert!(is_canonical(&r), "{:?}", r);
        }
    }

    #[test]
    fn rectangle_clip_is_canonical(t in triangle(), r in rectangle()) {
        if let Some(region) = intersection(&t, &r) {
            prop_assert!(is_canonical(&region), "{:?}", region);
        }
    }

    #[test]
    fn triangle_with_itself_is_itself(t in triangle()) {
        prop_assume!(!t.is_degenerate());
        match intersection(&t, &t) {
            Some(ConvexRegion::Triangle(r)) => {
                let own: Vec<Point2<Q>> = t.vertices().into_iter().cloned().collect();
                let got: Vec<Point2<Q>> = r.vertices().into_iter().cloned().collect();
                prop_assert!(same_vertex_set(&own, &got));
            }
            other => prop_assert!(false, "expected the triangle back, got {:?}", other),
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn shared_grid_points_lie_in_triangle_overlap(a in triangle(), b in triangle()) {
        let r = intersection(&a, &b);
        for p in grid() {
            if a.has_on(&p) && b.has_on(&p) {
                let r = r.as_ref();
                prop_assert!(r.is_some_and(|r| region_has_on(r, &p)), "{:?} missing from {:?}", p, r);
            }
        }
    }

    #[test]
    fn shared_grid_points_lie_in_rectangle_clip(t in triangle(), rect in rectangle()) {
        let r = intersection(&t, &rect);
        for p in grid() {
            if t.has_on(&p) && rect.has_on(&p) {
                let r = r.as_ref();
                prop_assert!(r.is_some_and(|r| region_has_on(r, &p)), "{:?} missing from {:?}", p, r);
            }
        }
    }
}
