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

use std::{
    array::from_fn,
    cmp::Ordering,
    ops::{Add, Index, IndexMut, Sub},
};

use crate::{geometry::vector::Vector, numeric::scalar::Scalar, operations::Zero};

#[derive(Clone, Debug, PartialEq)]
pub struct Point<T: Scalar, const N: usize> {
    pub coords: [T; N],
}

impl<T: Scalar, const N: usize> Point<T, N> {
    pub fn from_coords(coords: [T; N]) -> Self {
        Point { coords }
    }

    pub fn from_vals<V>(vals: [V; N]) -> Self
    where
        V: Into<T>,
    {
        Point {
            coords: vals.map(|v| v.into()),
        }
    }

    pub fn origin() -> Self {
        Point {
            coords: from_fn(|_| T::zero()),
        }
    }

    pub fn coords(&self) -> &[T; N] {
        &self.coords
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.coords.iter()
    }

    pub fn as_vector(&self) -> Vector<T, N> {
        Vector::from_coords(self.coords.clone())
    }

    pub fn vector_to(&self, other: &Self) -> Vector<T, N> {
        other - self
    }

    pub fn add_vector(&self, v: &Vector<T, N>) -> Self {
        self + v
    }

    /// `self + t * (other - self)`.
    pub fn lerp(&self, other: &Self, t: &T) -> Self {
        Point {
            coords: from_fn(|i| {
                self.coords[i].clone()
                    + t.clone() * (other.coords[i].clone() - self.coords[i].clone())
            }),
        }
    }

    pub fn squared_distance(&self, other: &Self) -> T {
        (other - self).squared_length()
    }

    /// Coordinate-wise equality under the scalar's sign semantics.
    pub fn coincides(&self, other: &Self) -> bool {
        (0..N).all(|i| self.coords[i].compare(&other.coords[i]) == Ordering::Equal)
    }

    /// Lexicographic order on (x, y[, z]).
    pub fn compare_lex(&self, other: &Self) -> Ordering {
        for i in 0..N {
            match self.coords[i].compare(&other.coords[i]) {
                Ordering::Equal => continue,
                ordering => return ordering,
            }
        }
        Ordering::Equal
    }

    pub fn cast<U: Scalar>(&self) -> Point<U, N>
    where
        U: From<T>,
    {
        Point {
            coords: from_fn(|i| U::from(self.coords[i].clone())),
        }
    }
}

impl<T: Scalar> Point<T, 2> {
    pub fn new<V: Into<T>>(x: V, y: V) -> Self {
        Point {
            coords: [x.into(), y.into()],
        }
    }

    pub fn x(&self) -> &T {
        &self.coords[0]
    }

    pub fn y(&self) -> &T {
        &self.coords[1]
    }
}

impl<T: Scalar> Point<T, 3> {
    pub fn new<V: Into<T>>(x: V, y: V, z: V) -> Self {
        Point {
            coords: [x.into(), y.into(), z.into()],
        }
    }

    pub fn x(&self) -> &T {
        &self.coords[0]
    }

    pub fn y(&self) -> &T {
        &self.coords[1]
    }

    pub fn z(&self) -> &T {
        &self.coords[2]
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Point<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.coords[i]
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for Point<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.coords[i]
    }
}

impl<'a, 'b, T: Scalar, const N: usize> Sub<&'b Point<T, N>> for &'a Point<T, N> {
    type Output = Vector<T, N>;
    fn sub(self, rhs: &'b Point<T, N>) -> Vector<T, N> {
        Vector::from_coords(from_fn(|i| {
            self.coords[i].clone() - rhs.coords[i].clone()
        }))
    }
}

impl<'a, 'b, T: Scalar, const N: usize> Add<&'b Vector<T, N>> for &'a Point<T, N> {
    type Output = Point<T, N>;
    fn add(self, rhs: &'b Vector<T, N>) -> Point<T, N> {
        Point {
            coords: from_fn(|i| self.coords[i].clone() + rhs.coords[i].clone()),
        }
    }
}

impl<'a, 'b, T: Scalar, const N: usize> Sub<&'b Vector<T, N>> for &'a Point<T, N> {
    type Output = Point<T, N>;
    fn sub(self, rhs: &'b Vector<T, N>) -> Point<T, N> {
        Point {
            coords: from_fn(|i| self.coords[i].clone() - rhs.coords[i].clone()),
        }
    }
}

impl<T: Scalar, const N: usize> Zero for Point<T, N> {
    fn zero() -> Self {
        Point::origin()
    }

    fn is_zero(&self) -> bool {
        self.coords.iter().all(|coord| coord.is_zero())
    }
    fn is_positive(&self) -> bool {
        self.coords.iter().all(|coord| coord.is_positive())
    }
    fn is_negative(&self) -> bool {
        self.coords.iter().all(|coord| coord.is_negative())
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Point<T, N> {
    fn from(coords: [T; N]) -> Self {
        Point { coords }
    }
}

impl<T: Scalar, const N: usize> PartialOrd for Point<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare_lex(other))
    }
}

pub type Point2<T> = Point<T, 2>;
pub type Point3<T> = Point<T, 3>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::cgar_rational::CgarRational;

    #[test]
    fn lerp_hits_exact_thirds() {
        let a = Point2::<CgarRational>::new(0, 0);
        let b = Point2::<CgarRational>::new(3, 6);
        let p = a.lerp(&b, &CgarRational::from_num_den(1, 3));
        assert_eq!(p, Point2::new(1, 2));
    }

    #[test]
    fn lexicographic_order() {
        let a = Point3::<CgarRational>::new(1, 2, 3);
        let b = Point3::<CgarRational>::new(1, 3, 0);
        assert_eq!(a.compare_lex(&b), Ordering::Less);
        assert!(b > a);
    }
}
