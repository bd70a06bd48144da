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
    error::GeometryError,
    geometry::{
        plane::Plane3,
        point::{Point2, Point3},
        sphere::Sphere3,
    },
    numeric::scalar::Scalar,
};

/// Circle given by its center and squared radius. Only the curve belongs to it.
#[derive(Clone, Debug, PartialEq)]
pub struct Circle2<T: Scalar> {
    pub center: Point2<T>,
    pub squared_radius: T,
}

impl<T: Scalar> Circle2<T> {
    pub fn new(center: Point2<T>, squared_radius: T) -> Self {
        Circle2 {
            center,
            squared_radius,
        }
    }

    pub fn try_new(center: Point2<T>, squared_radius: T) -> Result<Self, GeometryError> {
        if !squared_radius.is_valid() {
            return Err(GeometryError::InvalidCoordinate);
        }
        if squared_radius.is_negative() {
            return Err(GeometryError::NegativeRadius);
        }
        Ok(Self::new(center, squared_radius))
    }

    /// Whether `p` is on the circle itself.
    pub fn has_on(&self, p: &Point2<T>) -> bool {
        p.squared_distance(&self.center).compare(&self.squared_radius) == Ordering::Equal
    }

    pub fn is_degenerate(&self) -> bool {
        self.squared_radius.is_zero()
    }
}

/// Circle in space: the intersection of a sphere with a plane through its center.
#[derive(Clone, Debug, PartialEq)]
pub struct Circle3<T: Scalar> {
    pub center: Point3<T>,
    pub squared_radius: T,
    pub plane: Plane3<T>,
}

impl<T: Scalar> Circle3<T> {
    /// The caller guarantees `center` lies on `plane`.
    pub fn new(center: Point3<T>, squared_radius: T, plane: Plane3<T>) -> Self {
        Circle3 {
            center,
            squared_radius,
            plane,
        }
    }

    pub fn diametral_sphere(&self) -> Sphere3<T> {
        Sphere3::new(self.center.clone(), self.squared_radius.clone())
    }

    pub fn has_on(&self, p: &Point3<T>) -> bool {
        self.plane.has_on(p) && self.diametral_sphere().has_on(p)
    }
}
