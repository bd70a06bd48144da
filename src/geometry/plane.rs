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
    error::GeometryError,
    geometry::{point::Point3, vector::Vector3},
    numeric::scalar::{Scalar, Sign},
};

/// The oriented plane `normal . p + d = 0`; the positive side is the one `normal` points to.
#[derive(Clone, Debug, PartialEq)]
pub struct Plane3<T: Scalar> {
    pub normal: Vector3<T>,
    pub d: T,
}

impl<T: Scalar> Plane3<T> {
    pub fn new(normal: Vector3<T>, d: T) -> Self {
        Plane3 { normal, d }
    }

    pub fn try_new(normal: Vector3<T>, d: T) -> Result<Self, GeometryError> {
        if !(normal.coords.iter().all(|c| c.is_valid()) && d.is_valid()) {
            return Err(GeometryError::InvalidCoordinate);
        }
        if normal.is_zero() {
            return Err(GeometryError::DegeneratePlane);
        }
        Ok(Plane3 { normal, d })
    }

    /// `a*x + b*y + c*z + d = 0`.
    pub fn from_coefficients<V: Into<T>>(a: V, b: V, c: V, d: V) -> Self {
        Plane3 {
            normal: Vector3::new(a, b, c),
            d: d.into(),
        }
    }

    pub fn from_point_normal(p: &Point3<T>, normal: Vector3<T>) -> Self {
        let d = -normal.dot(&p.as_vector());
        Plane3 { normal, d }
    }

    /// Plane through three points, oriented so they appear counter-clockwise from its positive side.
    pub fn through(p1: &Point3<T>, p2: &Point3<T>, p3: &Point3<T>) -> Result<Self, GeometryError> {
        let normal = (p2 - p1).cross(&(p3 - p1));
        if normal.is_zero() {
            return Err(GeometryError::DegeneratePlane);
        }
        Ok(Self::from_point_normal(p1, normal))
    }

    pub fn value_at(&self, p: &Point3<T>) -> T {
        self.normal.dot(&p.as_vector()) + self.d.clone()
    }

    pub fn oriented_side(&self, p: &Point3<T>) -> Sign {
        self.value_at(p).sign()
    }

    pub fn has_on(&self, p: &Point3<T>) -> bool {
        self.value_at(p).is_zero()
    }

    /// Orthogonal projection of `p` onto the plane.
    pub fn projection(&self, p: &Point3<T>) -> Point3<T> {
        let k = self.value_at(p) / self.normal.squared_length();
        p - &self.normal.scale(&k)
    }

    /// A point of the plane, on the axis of the normal's dominant component.
    pub fn point(&self) -> Point3<T> {
        let k = self.normal.dominant_axis();
        let mut p = Point3::origin();
        p.coords[k] = -self.d.clone() / self.normal[k].clone();
        p
    }

    pub fn opposite(&self) -> Self {
        Plane3 {
            normal: -&self.normal,
            d: -self.d.clone(),
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.normal.is_zero()
    }

    /// Whether both equations describe the same point set.
    pub fn coincides_with(&self, other: &Self) -> bool {
        if !self.normal.is_parallel_to(&other.normal) {
            return false;
        }
        let k = self.normal.dominant_axis();
        (self.normal[k].clone() * other.d.clone() - other.normal[k].clone() * self.d.clone())
            .is_zero()
    }
}
