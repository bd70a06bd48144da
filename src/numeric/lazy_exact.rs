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
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use std::sync::Arc;

use num_traits::ToPrimitive;
use once_cell::sync::OnceCell;
use rug::Rational;

use crate::numeric::ball::Ball;
use crate::numeric::cgar_rational::CgarRational;
use crate::numeric::scalar::{Scalar, Sign};
use crate::operations::{Abs, One, Zero};

/// A lazily-evaluated scalar expression:
/// - Stores a certified floating point enclosure ([`Ball`]) eagerly
/// - Computes the exact value (CgarRational) only when the enclosure cannot
///   decide a sign, and memoizes it
///
/// Expression nodes are immutable and shared via Arc, so a value reused in
/// several predicates is evaluated exactly at most once.
#[derive(Clone)]
pub struct LazyExact(Arc<Node>);

struct Node {
    kind: Kind,
    ball: Ball,
    exact: OnceCell<CgarRational>,
}

#[derive(Clone)]
enum Kind {
    Leaf,
    Add(LazyExact, LazyExact),
    Sub(LazyExact, LazyExact),
    Mul(LazyExact, LazyExact),
    Div(LazyExact, LazyExact),
    Neg(LazyExact),
}

impl LazyExact {
    /* ========= Constructors ========= */

    pub fn from_f64(v: f64) -> Self {
        Self::from_cgar_rational(CgarRational::from(v))
    }

    pub fn from_i32(v: i32) -> Self {
        Self::leaf(CgarRational::from(v), Ball::exact(v as f64))
    }

    pub fn from_rug_rational(r: Rational) -> Self {
        Self::from_cgar_rational(CgarRational(r))
    }

    pub fn from_cgar_rational(v: CgarRational) -> Self {
        let approx = v.0.to_f64();
        let ball = if CgarRational::from(approx) == v {
            Ball::exact(approx)
        } else {
            Ball::rounded(approx)
        };
        Self::leaf(v, ball)
    }

    fn leaf(exact: CgarRational, ball: Ball) -> Self {
        let cell = OnceCell::new();
        let _ = cell.set(exact);
        LazyExact(Arc::new(Node {
            kind: Kind::Leaf,
            ball,
            exact: cell,
        }))
    }

    #[inline]
    fn node(kind: Kind) -> Self {
        let ball = match &kind {
            Kind::Leaf => Ball::unknown(),
            Kind::Add(a, b) => a.ball().add(b.ball()),
            Kind::Sub(a, b) => a.ball().sub(b.ball()),
            Kind::Mul(a, b) => a.ball().mul(b.ball()),
            Kind::Div(a, b) => a.ball().div(b.ball()),
            Kind::Neg(x) => x.ball().neg(),
        };
        LazyExact(Arc::new(Node {
            kind,
            ball,
            exact: OnceCell::new(),
        }))
    }

    /* ========= Basic queries ========= */

    pub fn ball(&self) -> Ball {
        self.0.ball
    }

    /// Cheap approximate value.
    pub fn approx(&self) -> f64 {
        if self.0.ball.is_unknown() {
            self.exact().0.to_f64()
        } else {
            self.0.ball.m
        }
    }

    /// Exact value; computed lazily and cached.
    pub fn exact(&self) -> CgarRational {
        self.0
            .exact
            .get_or_init(|| match &self.0.kind {
                Kind::Leaf => CgarRational::zero(),
                Kind::Add(a, b) => a.exact() + b.exact(),
                Kind::Sub(a, b) => a.exact() - b.exact(),
                Kind::Mul(a, b) => a.exact() * b.exact(),
                Kind::Div(a, b) => {
                    let denom = b.exact();
                    assert!(!denom.is_zero(), "LazyExact: division by zero in exact()");
                    a.exact() / denom
                }
                Kind::Neg(x) => -x.exact(),
            })
            .clone()
    }

    pub fn has_exact(&self) -> bool {
        self.0.exact.get().is_some()
    }
}

impl Scalar for LazyExact {
    fn from_num_den(num: i32, den: i32) -> Self {
        Self::from_cgar_rational(CgarRational::from_num_den(num, den))
    }

    /// Sign from the floating point enclosure when it is certain, otherwise exact.
    fn sign(&self) -> Sign {
        if let Some(s) = self.0.ball.sign_if_certain() {
            return s;
        }
        self.exact().sign()
    }
}

/* ========= Operator overloads (build expression DAGs) ========= */

impl Add for LazyExact {
    type Output = LazyExact;
    fn add(self, rhs: LazyExact) -> LazyExact {
        LazyExact::node(Kind::Add(self, rhs))
    }
}

impl Sub for LazyExact {
    type Output = LazyExact;
    fn sub(self, rhs: LazyExact) -> LazyExact {
        LazyExact::node(Kind::Sub(self, rhs))
    }
}

impl Mul for LazyExact {
    type Output = LazyExact;
    fn mul(self, rhs: LazyExact) -> LazyExact {
        LazyExact::node(Kind::Mul(self, rhs))
    }
}

impl Div for LazyExact {
    type Output = LazyExact;
    fn div(self, rhs: LazyExact) -> LazyExact {
        LazyExact::node(Kind::Div(self, rhs))
    }
}

impl Neg for LazyExact {
    type Output = LazyExact;
    fn neg(self) -> LazyExact {
        LazyExact::node(Kind::Neg(self))
    }
}

impl<'a> AddAssign<&'a LazyExact> for LazyExact {
    fn add_assign(&mut self, rhs: &'a LazyExact) {
        *self = LazyExact::node(Kind::Add(self.clone(), rhs.clone()));
    }
}

impl<'a> SubAssign<&'a LazyExact> for LazyExact {
    fn sub_assign(&mut self, rhs: &'a LazyExact) {
        *self = LazyExact::node(Kind::Sub(self.clone(), rhs.clone()));
    }
}

impl PartialEq for LazyExact {
    fn eq(&self, other: &LazyExact) -> bool {
        (self.clone() - other.clone()).sign() == Sign::Zero
    }
}

impl PartialOrd for LazyExact {
    fn partial_cmp(&self, other: &LazyExact) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Zero for LazyExact {
    fn zero() -> Self {
        LazyExact::from_i32(0)
    }

    fn is_zero(&self) -> bool {
        self.sign() == Sign::Zero
    }

    fn is_positive(&self) -> bool {
        self.sign() == Sign::Positive
    }

    fn is_negative(&self) -> bool {
        self.sign() == Sign::Negative
    }
}

impl One for LazyExact {
    fn one() -> Self {
        LazyExact::from_i32(1)
    }
}

impl Abs for LazyExact {
    fn abs(&self) -> Self {
        if self.sign() == Sign::Negative {
            -self.clone()
        } else {
            self.clone()
        }
    }
}

impl ToPrimitive for LazyExact {
    fn to_i64(&self) -> Option<i64> {
        self.approx().to_i64()
    }
    fn to_u64(&self) -> Option<u64> {
        self.approx().to_u64()
    }
    fn to_f64(&self) -> Option<f64> {
        Some(self.approx())
    }
}

/* ========= Conversions ========= */

impl From<f64> for LazyExact {
    fn from(v: f64) -> Self {
        Self::from_f64(v)
    }
}
impl From<i32> for LazyExact {
    fn from(v: i32) -> Self {
        Self::from_i32(v)
    }
}
impl From<Rational> for LazyExact {
    fn from(v: Rational) -> Self {
        Self::from_rug_rational(v)
    }
}
impl From<CgarRational> for LazyExact {
    fn from(v: CgarRational) -> Self {
        Self::from_cgar_rational(v)
    }
}
impl From<&LazyExact> for CgarRational {
    fn from(x: &LazyExact) -> Self {
        x.exact()
    }
}

/* ========= Debug ========= */

impl fmt::Debug for LazyExact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Show approx eagerly; exact only if already realized
        let a = self.0.ball.m;
        if let Some(e) = self.0.exact.get() {
            write!(f, "LazyExact(approx={:.6}, exact={})", a, e)
        } else {
            write!(f, "LazyExact(approx={:.6}, exact=<lazy>)", a)
        }
    }
}
