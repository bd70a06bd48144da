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

//! A tetrahedron is a closed solid. Four coplanar vertices give a flat one,
//! which is the convex hull of its vertices inside their plane.

use crate::{
    geometry::{
        point::Point3,
        tetrahedron::Tetrahedron3,
        triangle::{Triangle3, TriangleShape},
        util::convex_hull_coplanar_3,
    },
    intersection::{
        Intersect,
        clip::{HalfSpace, clip_convex, region_from_points},
        result::ConvexRegion3,
        three::triangle::triangle_triangle_3,
    },
    numeric::scalar::Scalar,
};

/// The four triangles spanned by three of the vertices. For a flat
/// tetrahedron their union is the whole shape.
fn face_triangles<T: Scalar>(tet: &Tetrahedron3<T>) -> [Triangle3<T>; 4] {
    std::array::from_fn(|i| Triangle3::new(tet.vertex(i + 1), tet.vertex(i + 2), tet.vertex(i + 3)))
}

pub(crate) fn tetrahedron_has_on<T: Scalar>(tet: &Tetrahedron3<T>, p: &Point3<T>) -> bool {
    if tet.is_degenerate() {
        face_triangles(tet).iter().any(|f| f.has_on(p))
    } else {
        tet.has_on_solid(p)
    }
}

fn triangle_points<T: Scalar>(tri: &Triangle3<T>) -> Vec<Point3<T>> {
    match tri.shape() {
        TriangleShape::Point(p) => vec![p],
        TriangleShape::Segment(s) => vec![s.a, s.b],
        TriangleShape::Triangle => tri.vertices().map(|v| v.clone()).to_vec(),
    }
}

pub(crate) fn triangle_tetrahedron<T: Scalar>(
    tri: &Triangle3<T>,
    tet: &Tetrahedron3<T>,
) -> Option<ConvexRegion3<T>> {
    if tet.is_degenerate() {
        log::debug!("flat tetrahedron, intersecting its faces one by one");
        let pts: Vec<Point3<T>> = face_triangles(tet)
            .iter()
            .filter_map(|f| triangle_triangle_3(tri, f))
            .flat_map(|r| r.vertices())
            .collect();
        return region_from_points(convex_hull_coplanar_3(&pts));
    }
    let faces: Vec<HalfSpace<T, 3>> = tet
        .face_planes()
        .into_iter()
        .map(|plane| HalfSpace::new(plane.normal, plane.d))
        .collect();
    region_from_points(clip_convex(triangle_points(tri), &faces))
}

impl<T: Scalar> Intersect<Tetrahedron3<T>> for Triangle3<T> {
    type Output = ConvexRegion3<T>;

    fn intersection(&self, tet: &Tetrahedron3<T>) -> Option<ConvexRegion3<T>> {
        triangle_tetrahedron(self, tet)
    }
}

do_intersect_via_intersection!(Triangle3<T>, Tetrahedron3<T>);
symmetric!(Triangle3<T>, Tetrahedron3<T>);
