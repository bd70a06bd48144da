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

use std::{array::from_fn, cmp::Ordering};

use crate::{
    error::GeometryError,
    geometry::{point::Point, point::Point2, segment::Segment},
    numeric::scalar::Scalar,
};

/// An axis‐aligned box in N dimensions with `min[i] <= max[i]` on every axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Aabb<T: Scalar, const N: usize> {
    pub min: Point<T, N>,
    pub max: Point<T, N>,
}

/// What a box collapses to when some of its extents are zero.
#[derive(Clone, Debug, PartialEq)]
pub enum AabbShape<T: Scalar, const N: usize> {
    Point(Point<T, N>),
    Segment(Segment<T, N>),
    /// At least two non-zero extents.
    Box,
}

impl<T: Scalar, const N: usize> Aabb<T, N> {
    /// The caller guarantees `min <= max` on every axis.
    pub fn new(min: Point<T, N>, max: Point<T, N>) -> Self {
        Aabb { min, max }
    }

    pub fn try_new(min: Point<T, N>, max: Point<T, N>) -> Result<Self, GeometryError> {
        for axis in 0..N {
            if !(min[axis].is_valid() && max[axis].is_valid()) {
                return Err(GeometryError::InvalidCoordinate);
            }
            if min[axis].compare(&max[axis]) == Ordering::Greater {
                return Err(GeometryError::InvertedBox { axis });
            }
        }
        Ok(Aabb { min, max })
    }

    /// Build the smallest box containing two points.
    pub fn from_points(a: &Point<T, N>, b: &Point<T, N>) -> Self {
        let mins = from_fn(|i| a[i].clone().min(b[i].clone()));
        let maxs = from_fn(|i| a[i].clone().max(b[i].clone()));
        Aabb::new(Point::from_coords(mins), Point::from_coords(maxs))
    }

    pub fn min(&self) -> &Point<T, N> {
        &self.min
    }

    pub fn max(&self) -> &Point<T, N> {
        &self.max
    }

    pub fn union(&self, other: &Self) -> Self {
        let mins = from_fn(|i| self.min[i].clone().min(other.min[i].clone()));
        let maxs = from_fn(|i| self.max[i].clone().max(other.max[i].clone()));
        Aabb::new(Point::from_coords(mins), Point::from_coords(maxs))
    }

    /// Do the closed boxes share a point?
    pub fn intersects(&self, other: &Self) -> bool {
        (0..N).all(|i| {
            self.max[i].compare(&other.min[i]) != Ordering::Less
                && other.max[i].compare(&self.min[i]) != Ordering::Less
        })
    }

    /// Closed membership.
    pub fn has_on(&self, p: &Point<T, N>) -> bool {
        (0..N).all(|i| {
            p[i].compare(&self.min[i]) != Ordering::Less
                && p[i].compare(&self.max[i]) != Ordering::Greater
        })
    }

    /// Center coordinate along axis `i`.
    pub fn center(&self, i: usize) -> T {
        let half = T::from_num_den(1, 2);
        (self.min[i].clone() + self.max[i].clone()) * half
    }

    /// Length along axis `i`.
    pub fn extent(&self, i: usize) -> T {
        self.max[i].clone() - self.min[i].clone()
    }

    /// Number of axes with a non-zero extent.
    pub fn dimension(&self) -> usize {
        (0..N).filter(|&i| !self.extent(i).is_zero()).count()
    }

    pub fn shape(&self) -> AabbShape<T, N> {
        match self.dimension() {
            0 => AabbShape::Point(self.min.clone()),
            1 => AabbShape::Segment(Segment::new(&self.min, &self.max)),
            _ => AabbShape::Box,
        }
    }
}

impl<T: Scalar> Aabb<T, 2> {
    /// Corners in counter-clockwise order starting at `min`.
    pub fn vertices(&self) -> [Point2<T>; 4] {
        [
            self.min.clone(),
            Point2::from_coords([self.max[0].clone(), self.min[1].clone()]),
            self.max.clone(),
            Point2::from_coords([self.min[0].clone(), self.max[1].clone()]),
        ]
    }
}

pub type IsoRectangle2<T> = Aabb<T, 2>;
pub type IsoCuboid3<T> = Aabb<T, 3>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::cgar_rational::CgarRational;

    type Q = CgarRational;

    #[test]
    fn from_points_union_and_intersects() {
        let a = IsoRectangle2::<Q>::from_points(&Point2::new(0, 1), &Point2::new(2, -1));
        assert_eq!(a.min, Point2::new(0, -1));
        assert_eq!(a.max, Point2::new(2, 1));

        let b = IsoRectangle2::<Q>::from_points(&Point2::new(1, 1), &Point2::new(4, 2));
        let u = a.union(&b);
        assert_eq!(u.max, Point2::new(4, 2));
        assert!(a.intersects(&b));

        let c = IsoRectangle2::<Q>::from_points(&Point2::new(3, 3), &Point2::new(5, 5));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn inverted_corners_are_rejected() {
        let r = IsoRectangle2::<Q>::try_new(Point2::new(0, 2), Point2::new(1, 1));
        assert_eq!(r, Err(GeometryError::InvertedBox { axis: 1 }));
    }

    #[test]
    fn flat_box_is_a_segment() {
        let r = IsoRectangle2::<Q>::new(Point2::new(1, 0), Point2::new(1, 3));
        assert_eq!(
            r.shape(),
            AabbShape::Segment(Segment::new(&Point2::new(1, 0), &Point2::new(1, 3)))
        );
    }
}
