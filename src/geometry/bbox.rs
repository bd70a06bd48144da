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

use std::array::from_fn;

use crate::{
    error::GeometryError,
    geometry::{aabb::IsoCuboid3, point::Point3},
    numeric::scalar::Scalar,
};

/// Axis-aligned box with `f64` corners, used as a cheap bounding volume.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bbox3 {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl Bbox3 {
    pub fn new(min: [f64; 3], max: [f64; 3]) -> Self {
        Bbox3 { min, max }
    }

    pub fn try_new(min: [f64; 3], max: [f64; 3]) -> Result<Self, GeometryError> {
        for axis in 0..3 {
            if !(min[axis].is_finite() && max[axis].is_finite()) {
                return Err(GeometryError::InvalidCoordinate);
            }
            if min[axis] > max[axis] {
                return Err(GeometryError::InvertedBox { axis });
            }
        }
        Ok(Bbox3 { min, max })
    }

    /// Smallest box containing every point, `None` for an empty iterator.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a [f64; 3]>,
    {
        let mut it = points.into_iter();
        let first = it.next()?;
        let mut b = Bbox3::new(*first, *first);
        for p in it {
            for i in 0..3 {
                b.min[i] = b.min[i].min(p[i]);
                b.max[i] = b.max[i].max(p[i]);
            }
        }
        Some(b)
    }

    pub fn union(&self, other: &Self) -> Self {
        Bbox3 {
            min: from_fn(|i| self.min[i].min(other.min[i])),
            max: from_fn(|i| self.max[i].max(other.max[i])),
        }
    }

    /// The same box over an arbitrary scalar; every `f64` is exactly representable
    /// in the exact and lazy scalars.
    pub fn to_aabb<T: Scalar>(&self) -> IsoCuboid3<T> {
        IsoCuboid3::new(
            Point3::from_coords(from_fn(|i| T::from(self.min[i]))),
            Point3::from_coords(from_fn(|i| T::from(self.max[i]))),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points_and_union() {
        let pts = [[0.0, 1.0, 2.0], [-1.0, 3.0, 0.5]];
        let b = Bbox3::from_points(pts.iter()).unwrap();
        assert_eq!(b.min, [-1.0, 1.0, 0.5]);
        assert_eq!(b.max, [0.0, 3.0, 2.0]);

        let u = b.union(&Bbox3::new([2.0, 2.0, 2.0], [4.0, 4.0, 4.0]));
        assert_eq!(u.max, [4.0, 4.0, 4.0]);
        assert!(Bbox3::from_points(std::iter::empty::<&[f64; 3]>()).is_none());
    }

    #[test]
    fn rejects_nan_and_inverted() {
        assert_eq!(
            Bbox3::try_new([0.0, f64::NAN, 0.0], [1.0; 3]),
            Err(GeometryError::InvalidCoordinate)
        );
        assert_eq!(
            Bbox3::try_new([0.0, 0.0, 2.0], [1.0; 3]),
            Err(GeometryError::InvertedBox { axis: 2 })
        );
    }
}
