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
    ops::{Add, Index, Mul, Neg, Sub},
};

use crate::numeric::scalar::Scalar;

#[derive(Clone, Debug, PartialEq)]
pub struct Vector<T: Scalar, const N: usize> {
    pub coords: [T; N],
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    pub fn from_coords(coords: [T; N]) -> Self {
        Vector { coords }
    }

    pub fn from_vals<V>(vals: [V; N]) -> Self
    where
        V: Into<T>,
    {
        Vector {
            coords: vals.map(|v| v.into()),
        }
    }

    pub fn zero() -> Self {
        Vector {
            coords: from_fn(|_| T::zero()),
        }
    }

    pub fn dot(&self, other: &Self) -> T {
        let mut acc = T::zero();
        for i in 0..N {
            acc += &(self.coords[i].clone() * other.coords[i].clone());
        }
        acc
    }

    pub fn squared_length(&self) -> T {
        self.dot(self)
    }

    pub fn scale(&self, k: &T) -> Self {
        Vector {
            coords: from_fn(|i| self.coords[i].clone() * k.clone()),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.coords.iter().all(|c| c.is_zero())
    }

    /// Index of the component with the largest magnitude; ties go to the lowest index.
    pub fn dominant_axis(&self) -> usize {
        let mut best = 0;
        let mut best_abs = self.coords[0].abs();
        for i in 1..N {
            let a = self.coords[i].abs();
            if a.compare(&best_abs) == Ordering::Greater {
                best = i;
                best_abs = a;
            }
        }
        best
    }

    /// Whether both vectors span the same line, i.e. every 2x2 minor vanishes.
    pub fn is_parallel_to(&self, other: &Self) -> bool {
        for i in 0..N {
            for j in (i + 1)..N {
                let minor = self.coords[i].clone() * other.coords[j].clone()
                    - self.coords[j].clone() * other.coords[i].clone();
                if !minor.is_zero() {
                    return false;
                }
            }
        }
        true
    }
}

impl<T: Scalar> Vector<T, 2> {
    pub fn new<V: Into<T>>(x: V, y: V) -> Self {
        Vector {
            coords: [x.into(), y.into()],
        }
    }

    /// z-component of the 3D cross product: `self.x * other.y - self.y * other.x`.
    pub fn perp_dot(&self, other: &Self) -> T {
        self.coords[0].clone() * other.coords[1].clone()
            - self.coords[1].clone() * other.coords[0].clone()
    }

    /// Counter-clockwise rotation by a quarter turn.
    pub fn perpendicular(&self) -> Self {
        Vector {
            coords: [-self.coords[1].clone(), self.coords[0].clone()],
        }
    }
}

impl<T: Scalar> Vector<T, 3> {
    pub fn new<V: Into<T>>(x: V, y: V, z: V) -> Self {
        Vector {
            coords: [x.into(), y.into(), z.into()],
        }
    }

    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = &self.coords;
        let [bx, by, bz] = &other.coords;
        Vector {
            coords: [
                ay.clone() * bz.clone() - az.clone() * by.clone(),
                az.clone() * bx.clone() - ax.clone() * bz.clone(),
                ax.clone() * by.clone() - ay.clone() * bx.clone(),
            ],
        }
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.coords[i]
    }
}

impl<'a, 'b, T: Scalar, const N: usize> Add<&'b Vector<T, N>> for &'a Vector<T, N> {
    type Output = Vector<T, N>;
    fn add(self, rhs: &'b Vector<T, N>) -> Vector<T, N> {
        Vector::from_coords(from_fn(|i| {
            self.coords[i].clone() + rhs.coords[i].clone()
        }))
    }
}

impl<'a, 'b, T: Scalar, const N: usize> Sub<&'b Vector<T, N>> for &'a Vector<T, N> {
    type Output = Vector<T, N>;
    fn sub(self, rhs: &'b Vector<T, N>) -> Vector<T, N> {
        Vector::from_coords(from_fn(|i| {
            self.coords[i].clone() - rhs.coords[i].clone()
        }))
    }
}

impl<'a, 'b, T: Scalar, const N: usize> Mul<&'b T> for &'a Vector<T, N> {
    type Output = Vector<T, N>;
    fn mul(self, rhs: &'b T) -> Vector<T, N> {
        self.scale(rhs)
    }
}

impl<'a, T: Scalar, const N: usize> Neg for &'a Vector<T, N> {
    type Output = Vector<T, N>;
    fn neg(self) -> Vector<T, N> {
        Vector::from_coords(from_fn(|i| -self.coords[i].clone()))
    }
}

impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Vector<T, N>;
    fn neg(self) -> Vector<T, N> {
        Vector::from_coords(self.coords.map(|c| -c))
    }
}

pub type Vector2<T> = Vector<T, 2>;
pub type Vector3<T> = Vector<T, 3>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::cgar_rational::CgarRational;

    #[test]
    fn cross_of_axes() {
        let i = Vector3::<CgarRational>::new(1, 0, 0);
        let j = Vector3::<CgarRational>::new(0, 1, 0);
        assert_eq!(i.cross(&j), Vector3::new(0, 0, 1));
    }

    #[test]
    fn dominant_axis_ties_to_lowest_index() {
        let v = Vector3::<CgarRational>::new(-2, 2, 1);
        assert_eq!(v.dominant_axis(), 0);
        let w = Vector3::<CgarRational>::new(1, -3, 3);
        assert_eq!(w.dominant_axis(), 1);
    }

    #[test]
    fn parallel_vectors() {
        let a = Vector3::<CgarRational>::new(1, 2, 3);
        let b = Vector3::<CgarRational>::new(-2, -4, -6);
        assert!(a.is_parallel_to(&b));
        assert!(!a.is_parallel_to(&Vector3::new(1, 2, 4)));
    }
}
