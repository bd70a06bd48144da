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
    geometry::{
        point::{Point2, Point3},
        vector::{Vector2, Vector3},
    },
    numeric::scalar::{Scalar, Sign},
};

/// The oriented line `a*x + b*y + c = 0`.
///
/// Its direction is `(b, -a)`; the positive side is on the left.
#[derive(Clone, Debug, PartialEq)]
pub struct Line2<T: Scalar> {
    pub a: T,
    pub b: T,
    pub c: T,
}

impl<T: Scalar> Line2<T> {
    pub fn new(a: T, b: T, c: T) -> Self {
        Line2 { a, b, c }
    }

    pub fn try_new(a: T, b: T, c: T) -> Result<Self, GeometryError> {
        if !(a.is_valid() && b.is_valid() && c.is_valid()) {
            return Err(GeometryError::InvalidCoordinate);
        }
        if a.is_zero() && b.is_zero() {
            return Err(GeometryError::DegenerateLine);
        }
        Ok(Line2 { a, b, c })
    }

    /// The line through `p` and `q`, directed from `p` to `q`.
    pub fn through(p: &Point2<T>, q: &Point2<T>) -> Result<Self, GeometryError> {
        Self::try_new(
            p.y().clone() - q.y().clone(),
            q.x().clone() - p.x().clone(),
            p.x().clone() * q.y().clone() - p.y().clone() * q.x().clone(),
        )
    }

    /// Line through `p` along `dir`, which the caller guarantees to be non-zero.
    pub fn from_point_direction(p: &Point2<T>, dir: &Vector2<T>) -> Self {
        let a = -dir[1].clone();
        let b = dir[0].clone();
        let c = -(a.clone() * p.x().clone() + b.clone() * p.y().clone());
        Line2 { a, b, c }
    }

    /// `a*x + b*y + c`; equals `orient2d(p, q, r)` for a line built by `through(p, q)`.
    pub fn value_at(&self, p: &Point2<T>) -> T {
        self.a.clone() * p.x().clone() + self.b.clone() * p.y().clone() + self.c.clone()
    }

    pub fn oriented_side(&self, p: &Point2<T>) -> Sign {
        self.value_at(p).sign()
    }

    pub fn has_on(&self, p: &Point2<T>) -> bool {
        self.value_at(p).is_zero()
    }

    pub fn direction(&self) -> Vector2<T> {
        Vector2::from_coords([self.b.clone(), -self.a.clone()])
    }

    /// A point of the line.
    pub fn point(&self) -> Point2<T> {
        if !self.b.is_zero() {
            Point2::from_coords([T::zero(), -self.c.clone() / self.b.clone()])
        } else {
            Point2::from_coords([-self.c.clone() / self.a.clone(), T::zero()])
        }
    }

    pub fn opposite(&self) -> Self {
        Line2 {
            a: -self.a.clone(),
            b: -self.b.clone(),
            c: -self.c.clone(),
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.a.is_zero() && self.b.is_zero()
    }
}

/// The line `point + t * direction`.
#[derive(Clone, Debug, PartialEq)]
pub struct Line3<T: Scalar> {
    pub point: Point3<T>,
    pub direction: Vector3<T>,
}

impl<T: Scalar> Line3<T> {
    pub fn new(point: Point3<T>, direction: Vector3<T>) -> Self {
        Line3 { point, direction }
    }

    pub fn try_new(point: Point3<T>, direction: Vector3<T>) -> Result<Self, GeometryError> {
        if direction.is_zero() {
            return Err(GeometryError::ZeroDirection);
        }
        Ok(Line3 { point, direction })
    }

    pub fn through(p: &Point3<T>, q: &Point3<T>) -> Result<Self, GeometryError> {
        Self::try_new(p.clone(), q - p)
    }

    pub fn point_at(&self, t: &T) -> Point3<T> {
        &self.point + &self.direction.scale(t)
    }

    pub fn has_on(&self, p: &Point3<T>) -> bool {
        (p - &self.point).is_parallel_to(&self.direction)
    }

    pub fn opposite(&self) -> Self {
        Line3 {
            point: self.point.clone(),
            direction: -&self.direction,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.direction.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::cgar_rational::CgarRational;

    type Q = CgarRational;

    #[test]
    fn through_orients_left_side_positive() {
        let l = Line2::<Q>::through(&Point2::new(0, 0), &Point2::new(1, 0)).unwrap();
        assert_eq!(l.oriented_side(&Point2::new(0, 1)), Sign::Positive);
        assert_eq!(l.oriented_side(&Point2::new(0, -1)), Sign::Negative);
        assert!(l.has_on(&Point2::new(7, 0)));
        assert!(l.has_on(&l.point()));
    }

    #[test]
    fn coincident_points_do_not_make_a_line() {
        let p = Point2::<Q>::new(2, 3);
        assert_eq!(Line2::through(&p, &p), Err(GeometryError::DegenerateLine));
        let q = Point3::<Q>::new(1, 1, 1);
        assert_eq!(Line3::through(&q, &q), Err(GeometryError::ZeroDirection));
    }

    #[test]
    fn point_direction_round_trip() {
        let p = Point2::<Q>::new(1, 2);
        let d = Vector2::<Q>::new(3, -1);
        let l = Line2::from_point_direction(&p, &d);
        assert!(l.has_on(&p));
        assert!(l.has_on(&(&p + &d)));
        assert!(l.direction().is_parallel_to(&d));
    }
}
