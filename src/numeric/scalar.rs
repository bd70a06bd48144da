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

use num_traits::ToPrimitive;

use crate::operations::{Abs, One, Zero};

use std::{
    cmp::Ordering,
    fmt::Debug,
    ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
};

/// Sign of a scalar or of a geometric predicate.
///
/// Orientation predicates return `Positive` for a left turn (counter-clockwise)
/// and `Negative` for a right turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    pub fn is_zero(self) -> bool {
        self == Sign::Zero
    }

    pub fn is_positive(self) -> bool {
        self == Sign::Positive
    }

    pub fn is_negative(self) -> bool {
        self == Sign::Negative
    }

    pub fn opposite(self) -> Sign {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }

    pub fn as_i8(self) -> i8 {
        match self {
            Sign::Negative => -1,
            Sign::Zero => 0,
            Sign::Positive => 1,
        }
    }
}

impl Mul for Sign {
    type Output = Sign;

    fn mul(self, rhs: Sign) -> Sign {
        match (self, rhs) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (a, b) if a == b => Sign::Positive,
            _ => Sign::Negative,
        }
    }
}

impl From<Ordering> for Sign {
    fn from(o: Ordering) -> Self {
        match o {
            Ordering::Less => Sign::Negative,
            Ordering::Equal => Sign::Zero,
            Ordering::Greater => Sign::Positive,
        }
    }
}

impl From<Sign> for Ordering {
    fn from(s: Sign) -> Self {
        match s {
            Sign::Negative => Ordering::Less,
            Sign::Zero => Ordering::Equal,
            Sign::Positive => Ordering::Greater,
        }
    }
}

/// The ordered field every primitive is built over.
///
/// Geometric code never compares scalars with `<` directly: it goes through
/// [`Scalar::sign`] and [`Scalar::compare`], which are exact for the exact
/// and lazy number types and tolerance based for `CgarF64`.
pub trait Scalar:
    Clone
    + Debug
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + Zero
    + One
    + Abs
    + ToPrimitive
    + From<i32>
    + From<f64>
{
    fn from_num_den(num: i32, den: i32) -> Self;

    /// False only for a non-number sentinel value.
    fn is_valid(&self) -> bool {
        true
    }

    fn sign(&self) -> Sign {
        if self.is_positive() {
            Sign::Positive
        } else if self.is_negative() {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        (self.clone() - other.clone()).sign().into()
    }

    fn min(self, other: Self) -> Self {
        if self.compare(&other) == Ordering::Greater {
            other
        } else {
            self
        }
    }

    fn max(self, other: Self) -> Self {
        if self.compare(&other) == Ordering::Less {
            other
        } else {
            self
        }
    }

    fn square(&self) -> Self {
        self.clone() * self.clone()
    }
}
