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
    geometry::{point::Point, vector::Vector},
    numeric::scalar::Scalar,
};

/// Half-line `source + t * direction`, `t >= 0`.
#[derive(Clone, Debug, PartialEq)]
pub struct Ray<T: Scalar, const N: usize> {
    pub source: Point<T, N>,
    pub direction: Vector<T, N>,
}

impl<T: Scalar, const N: usize> Ray<T, N> {
    pub fn new(source: Point<T, N>, direction: Vector<T, N>) -> Self {
        Ray { source, direction }
    }

    pub fn try_new(source: Point<T, N>, direction: Vector<T, N>) -> Result<Self, GeometryError> {
        if direction.is_zero() {
            return Err(GeometryError::ZeroDirection);
        }
        Ok(Ray { source, direction })
    }

    /// Ray starting at `source` and passing through `through`.
    pub fn from_points(source: &Point<T, N>, through: &Point<T, N>) -> Result<Self, GeometryError> {
        Self::try_new(source.clone(), through - source)
    }

    pub fn point_at(&self, t: &T) -> Point<T, N> {
        &self.source + &self.direction.scale(t)
    }

    /// A point of the ray other than its source.
    pub fn second_point(&self) -> Point<T, N> {
        &self.source + &self.direction
    }

    pub fn has_on(&self, p: &Point<T, N>) -> bool {
        let v = p - &self.source;
        v.is_parallel_to(&self.direction) && v.dot(&self.direction).is_positive_or_zero()
    }

    pub fn is_degenerate(&self) -> bool {
        self.direction.is_zero()
    }
}

pub type Ray2<T> = Ray<T, 2>;
pub type Ray3<T> = Ray<T, 3>;
