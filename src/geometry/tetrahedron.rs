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
    geometry::{plane::Plane3, point::Point3},
    kernel::orientation::orientation_3,
    numeric::scalar::{Scalar, Sign},
};

#[derive(Clone, Debug, PartialEq)]
pub struct Tetrahedron3<T: Scalar> {
    pub vertices: [Point3<T>; 4],
}

impl<T: Scalar> Tetrahedron3<T> {
    pub fn new(a: &Point3<T>, b: &Point3<T>, c: &Point3<T>, d: &Point3<T>) -> Self {
        Tetrahedron3 {
            vertices: [a.clone(), b.clone(), c.clone(), d.clone()],
        }
    }

    pub fn vertex(&self, i: usize) -> &Point3<T> {
        &self.vertices[i % 4]
    }

    pub fn orientation(&self) -> Sign {
        let [a, b, c, d] = &self.vertices;
        orientation_3(a, b, c, d)
    }

    /// A flat tetrahedron is the convex hull of four coplanar points.
    pub fn is_degenerate(&self) -> bool {
        self.orientation().is_zero()
    }

    /// Supporting planes of the four faces, each oriented with the solid on its
    /// non-negative side. Meaningless for a degenerate tetrahedron.
    pub fn face_planes(&self) -> [Plane3<T>; 4] {
        let flip = self.orientation() == Sign::Negative;
        std::array::from_fn(|i| {
            // face opposite vertex i, listed so that vertex i sees it counter-clockwise
            let (a, b, c) = match i {
                0 => (1, 3, 2),
                1 => (0, 2, 3),
                2 => (0, 3, 1),
                _ => (0, 1, 2),
            };
            let n = (self.vertex(b) - self.vertex(a)).cross(&(self.vertex(c) - self.vertex(a)));
            let plane = Plane3::from_point_normal(self.vertex(a), n);
            if flip { plane.opposite() } else { plane }
        })
    }

    /// Closed solid membership for a non-degenerate tetrahedron.
    pub fn has_on_solid(&self, p: &Point3<T>) -> bool {
        self.face_planes()
            .iter()
            .all(|plane| plane.value_at(p).is_positive_or_zero())
    }
}
