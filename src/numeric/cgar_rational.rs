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
    cmp::Ordering,
    fmt,
    hash::Hash,
    ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
};

use num_traits::ToPrimitive;
use rug::Rational;

use crate::{
    numeric::{
        cgar_f64::CgarF64,
        scalar::{Scalar, Sign},
    },
    operations::{Abs, One, Zero},
};

/// Arbitrary-precision rational backed by GMP. Every predicate evaluated on it is exact.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Hash, Default)]
pub struct CgarRational(pub Rational);

impl CgarRational {
    pub fn new(num: i64, den: i64) -> Self {
        CgarRational(Rational::from((num, den)))
    }
}

impl Scalar for CgarRational {
    fn from_num_den(num: i32, den: i32) -> Self {
        CgarRational(Rational::from((num, den)))
    }

    fn sign(&self) -> Sign {
        self.0.cmp0().into()
    }

    fn compare(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Add for CgarRational {
    type Output = CgarRational;
    fn add(self, rhs: CgarRational) -> CgarRational {
        CgarRational(self.0 + rhs.0)
    }
}

impl Sub for CgarRational {
    type Output = CgarRational;
    fn sub(self, rhs: CgarRational) -> CgarRational {
        CgarRational(self.0 - rhs.0)
    }
}

impl Mul for CgarRational {
    type Output = CgarRational;
    fn mul(self, rhs: CgarRational) -> CgarRational {
        CgarRational(self.0 * rhs.0)
    }
}

impl Div for CgarRational {
    type Output = CgarRational;
    fn div(self, rhs: CgarRational) -> CgarRational {
        CgarRational(self.0 / rhs.0)
    }
}

impl<'a, 'b> Add<&'b CgarRational> for &'a CgarRational {
    type Output = CgarRational;

    fn add(self, rhs: &'b CgarRational) -> CgarRational {
        let mut result = self.0.clone();
        result += &rhs.0;
        CgarRational(result)
    }
}

impl<'a, 'b> Sub<&'b CgarRational> for &'a CgarRational {
    type Output = CgarRational;

    fn sub(self, rhs: &'b CgarRational) -> CgarRational {
        let mut result = self.0.clone();
        result -= &rhs.0;
        CgarRational(result)
    }
}

impl<'a, 'b> Mul<&'b CgarRational> for &'a CgarRational {
    type Output = CgarRational;

    fn mul(self, rhs: &'b CgarRational) -> CgarRational {
        let mut result = self.0.clone();
        result *= &rhs.0;
        CgarRational(result)
    }
}

impl<'a, 'b> Div<&'b CgarRational> for &'a CgarRational {
    type Output = CgarRational;

    fn div(self, rhs: &'b CgarRational) -> CgarRational {
        let mut result = self.0.clone();
        result /= &rhs.0;
        CgarRational(result)
    }
}

impl<'c> AddAssign<&'c CgarRational> for CgarRational {
    fn add_assign(&mut self, rhs: &'c CgarRational) {
        self.0 += &rhs.0;
    }
}

impl<'c> SubAssign<&'c CgarRational> for CgarRational {
    fn sub_assign(&mut self, rhs: &'c CgarRational) {
        self.0 -= &rhs.0;
    }
}

impl Neg for CgarRational {
    type Output = CgarRational;
    fn neg(self) -> CgarRational {
        CgarRational(-self.0)
    }
}

impl<'a> Neg for &'a CgarRational {
    type Output = CgarRational;
    fn neg(self) -> CgarRational {
        CgarRational(-self.0.clone())
    }
}

impl Zero for CgarRational {
    fn zero() -> Self {
        CgarRational(Rational::new())
    }

    fn is_zero(&self) -> bool {
        self.0.cmp0() == Ordering::Equal
    }

    fn is_positive(&self) -> bool {
        self.0.cmp0() == Ordering::Greater
    }

    fn is_negative(&self) -> bool {
        self.0.cmp0() == Ordering::Less
    }
}

impl One for CgarRational {
    fn one() -> Self {
        CgarRational(Rational::from(1))
    }
}

impl Abs for CgarRational {
    fn abs(&self) -> Self {
        CgarRational(self.0.clone().abs())
    }
}

impl From<i32> for CgarRational {
    fn from(value: i32) -> Self {
        CgarRational(Rational::from(value))
    }
}

impl From<f64> for CgarRational {
    /// Binary floating point values are converted without rounding.
    fn from(value: f64) -> Self {
        match Rational::from_f64(value) {
            Some(r) => CgarRational(r),
            None => {
                log::warn!("non-finite value {value} converted to an exact rational as zero");
                CgarRational(Rational::new())
            }
        }
    }
}

impl From<Rational> for CgarRational {
    fn from(value: Rational) -> Self {
        CgarRational(value)
    }
}

impl From<CgarF64> for CgarRational {
    fn from(value: CgarF64) -> Self {
        CgarRational::from(value.0)
    }
}

impl ToPrimitive for CgarRational {
    fn to_i64(&self) -> Option<i64> {
        self.0.to_f64().to_i64()
    }
    fn to_u64(&self) -> Option<u64> {
        self.0.to_f64().to_u64()
    }
    fn to_f64(&self) -> Option<f64> {
        Some(self.0.to_f64())
    }
}

impl fmt::Display for CgarRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirds_sum_to_one_exactly() {
        let third = CgarRational::from_num_den(1, 3);
        let sum = third.clone() + third.clone() + third;
        assert_eq!(sum, CgarRational::one());
        assert_eq!((sum - CgarRational::one()).sign(), Sign::Zero);
    }

    #[test]
    fn from_f64_is_exact() {
        let r = CgarRational::from(0.1);
        assert_ne!(r, CgarRational::from_num_den(1, 10));
        assert_eq!(CgarRational::from(0.5), CgarRational::from_num_den(1, 2));
    }
}
