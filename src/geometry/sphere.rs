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

use crate::{error::GeometryError, geometry::point::Point3, numeric::scalar::Scalar};

/// Sphere given by its center and squared radius. Only the surface belongs to it.
#[derive(Clone, Debug, PartialEq)]
pub struct Sphere3<T: Scalar> {
    pub center: Point3<T>,
    pub squared_radius: T,
}

impl<T: Scalar> Sphere3<T> {
    pub fn new(center: Point3<T>, squared_radius: T) -> Self {
        Sphere3 {
            center,
            squared_radius,
        }
    }

    pub fn try_new(center: Point3<T>, squared_radius: T) -> Result<Self, GeometryError> {
        if !squared_radius.is_valid() {
            return Err(GeometryError::InvalidCoordinate);
        }
        if squared_radius.is_negative() {
            return Err(GeometryError::NegativeRadius);
        }
        Ok(Self::new(center, squared_radius))
    }

    pub fn has_on(&self, p: &Point3<T>) -> bool {
        p.squared_distance(&self.center).compare(&self.squared_radius) == Ordering::Equal
    }

    pub fn is_degenerate(&self) -> bool {
        self.squared_radius.is_zero()
    }
}
