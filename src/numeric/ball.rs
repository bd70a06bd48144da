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

use crate::numeric::scalar::Sign;

/// Midpoint-radius enclosure of a real value: the value lies in `[m - r, m + r]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ball {
    pub m: f64,
    pub r: f64,
}

#[inline]
fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let bb = s - a;
    let err = (a - (s - bb)) + (b - bb);
    (s, err)
}

#[inline]
fn two_prod(a: f64, b: f64) -> (f64, f64) {
    let p = a * b;
    let err = f64::mul_add(a, b, -p);
    (p, err)
}

// Radii are themselves rounded; push them outward so the enclosure stays valid.
#[inline]
fn widen(r: f64) -> f64 {
    if r == 0.0 {
        0.0
    } else {
        r * (1.0 + 4.0 * f64::EPSILON) + f64::MIN_POSITIVE
    }
}

impl Ball {
    #[inline]
    pub fn exact(x: f64) -> Self {
        if x.is_finite() {
            Ball { m: x, r: 0.0 }
        } else {
            Ball::unknown()
        }
    }

    /// Enclosure of a value that was rounded once to the nearest double.
    #[inline]
    pub fn rounded(x: f64) -> Self {
        if x.is_finite() {
            Ball {
                m: x,
                r: widen(x.abs() * f64::EPSILON),
            }
        } else {
            Ball::unknown()
        }
    }

    #[inline]
    pub fn unknown() -> Self {
        Ball {
            m: 0.0,
            r: f64::INFINITY,
        }
    }

    #[inline]
    pub fn is_unknown(self) -> bool {
        !self.m.is_finite() || !self.r.is_finite()
    }

    #[inline]
    pub fn add(self, o: Self) -> Self {
        let (s, e) = two_sum(self.m, o.m);
        Ball {
            m: s,
            r: widen(self.r + o.r + e.abs()),
        }
    }

    #[inline]
    pub fn sub(self, o: Self) -> Self {
        self.add(o.neg())
    }

    #[inline]
    pub fn neg(self) -> Self {
        Ball {
            m: -self.m,
            r: self.r,
        }
    }

    #[inline]
    pub fn mul(self, o: Self) -> Self {
        let (p, e) = two_prod(self.m, o.m);
        Ball {
            m: p,
            r: widen(self.m.abs() * o.r + o.m.abs() * self.r + self.r * o.r + e.abs()),
        }
    }

    /// Conservative division; a denominator enclosure straddling zero gives `unknown`.
    #[inline]
    pub fn div(self, o: Self) -> Self {
        if o.m.abs() <= o.r {
            return Ball::unknown();
        }
        let denom = o.m.abs() * (o.m.abs() - o.r);
        if denom <= 0.0 {
            return Ball::unknown();
        }
        let m = self.m / o.m;
        let r = (self.m.abs() * o.r + o.m.abs() * self.r) / denom + m.abs() * f64::EPSILON;
        Ball { m, r: widen(r) }
    }

    /// The sign of every value in the enclosure, if they all agree.
    #[inline]
    pub fn sign_if_certain(self) -> Option<Sign> {
        if self.is_unknown() {
            return None;
        }
        if self.r == 0.0 && self.m == 0.0 {
            Some(Sign::Zero)
        } else if self.m > self.r {
            Some(Sign::Positive)
        } else if self.m < -self.r {
            Some(Sign::Negative)
        } else {
            None
        }
    }
}
