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

//! Parametric view of lines, rays and segments: `origin + t * direction` with
//! `t` restricted to an interval.

use std::cmp::Ordering;

use crate::{
    geometry::{
        aabb::Aabb,
        line::{Line2, Line3},
        point::Point,
        ray::Ray,
        segment::Segment,
        vector::Vector,
    },
    numeric::scalar::Scalar,
};

/// A closed parameter interval; `None` bounds are infinite.
#[derive(Clone, Debug, PartialEq)]
pub struct ParamInterval<T: Scalar> {
    pub lo: Option<T>,
    pub hi: Option<T>,
}

/// What a clipped interval looks like once mapped back onto its line.
#[derive(Clone, Debug, PartialEq)]
pub enum IntervalShape<T: Scalar, const N: usize> {
    Point(Point<T, N>),
    Segment(Segment<T, N>),
    Ray(Ray<T, N>),
    /// The whole line, as origin and direction.
    Line(Point<T, N>, Vector<T, N>),
}

impl<T: Scalar> ParamInterval<T> {
    /// `(-inf, +inf)`
    pub fn unbounded() -> Self {
        ParamInterval { lo: None, hi: None }
    }

    /// `[0, +inf)`
    pub fn ray() -> Self {
        ParamInterval {
            lo: Some(T::zero()),
            hi: None,
        }
    }

    /// `[0, 1]`
    pub fn unit() -> Self {
        ParamInterval {
            lo: Some(T::zero()),
            hi: Some(T::one()),
        }
    }

    pub fn empty() -> Self {
        ParamInterval {
            lo: Some(T::one()),
            hi: Some(T::zero()),
        }
    }

    /// `[min(a, b), max(a, b)]`
    pub fn closed(a: T, b: T) -> Self {
        if a.compare(&b) == Ordering::Greater {
            ParamInterval {
                lo: Some(b),
                hi: Some(a),
            }
        } else {
            ParamInterval {
                lo: Some(a),
                hi: Some(b),
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        match (&self.lo, &self.hi) {
            (Some(lo), Some(hi)) => lo.compare(hi) == Ordering::Greater,
            _ => false,
        }
    }

    pub fn contains(&self, t: &T) -> bool {
        self.lo.as_ref().is_none_or(|lo| t.compare(lo) != Ordering::Less)
            && self.hi.as_ref().is_none_or(|hi| t.compare(hi) != Ordering::Greater)
    }

    /// `lo = max(lo, t)`
    pub fn raise_lo(&mut self, t: T) {
        self.lo = Some(match self.lo.take() {
            Some(lo) => lo.max(t),
            None => t,
        });
    }

    /// `hi = min(hi, t)`
    pub fn lower_hi(&mut self, t: T) {
        self.hi = Some(match self.hi.take() {
            Some(hi) => hi.min(t),
            None => t,
        });
    }

    pub fn intersect(&self, other: &Self) -> Self {
        let mut out = self.clone();
        if let Some(lo) = &other.lo {
            out.raise_lo(lo.clone());
        }
        if let Some(hi) = &other.hi {
            out.lower_hi(hi.clone());
        }
        out
    }

    /// The image `{offset + scale * t}`; `scale` must be non-zero.
    pub fn affine(&self, offset: &T, scale: &T) -> Self {
        let map = |t: &T| offset.clone() + scale.clone() * t.clone();
        let lo = self.lo.as_ref().map(map);
        let hi = self.hi.as_ref().map(map);
        if scale.is_negative() {
            ParamInterval { lo: hi, hi: lo }
        } else {
            ParamInterval { lo, hi }
        }
    }

    /// Liang–Barsky: restrict the interval to the part of `origin + t * dir`
    /// inside the closed box.
    pub fn clip_to_box<const N: usize>(
        &self,
        origin: &Point<T, N>,
        dir: &Vector<T, N>,
        aabb: &Aabb<T, N>,
    ) -> Self {
        let mut out = self.clone();
        for i in 0..N {
            if dir[i].is_zero() {
                let o = &origin[i];
                if o.compare(&aabb.min[i]) == Ordering::Less
                    || o.compare(&aabb.max[i]) == Ordering::Greater
                {
                    return ParamInterval::empty();
                }
                continue;
            }
            let t_min = (aabb.min[i].clone() - origin[i].clone()) / dir[i].clone();
            let t_max = (aabb.max[i].clone() - origin[i].clone()) / dir[i].clone();
            let (near, far) = if dir[i].is_negative() {
                (t_max, t_min)
            } else {
                (t_min, t_max)
            };
            out.raise_lo(near);
            out.lower_hi(far);
            if out.is_empty() {
                break;
            }
        }
        out
    }

    /// Map the interval back onto `origin + t * dir`. A zero `dir` always
    /// yields the origin when the interval is non-empty.
    pub fn materialize<const N: usize>(
        &self,
        origin: &Point<T, N>,
        dir: &Vector<T, N>,
    ) -> Option<IntervalShape<T, N>> {
        if self.is_empty() {
            return None;
        }
        if dir.is_zero() {
            return Some(IntervalShape::Point(origin.clone()));
        }
        let at = |t: &T| origin + &dir.scale(t);
        match (&self.lo, &self.hi) {
            (Some(lo), Some(hi)) => {
                if lo.compare(hi) == Ordering::Equal {
                    Some(IntervalShape::Point(at(lo)))
                } else {
                    Some(IntervalShape::Segment(Segment::new(&at(lo), &at(hi)).canonical()))
                }
            }
            (Some(lo), None) => Some(IntervalShape::Ray(Ray::new(at(lo), dir.clone()))),
            (None, Some(hi)) => Some(IntervalShape::Ray(Ray::new(at(hi), -dir))),
            (None, None) => Some(IntervalShape::Line(origin.clone(), dir.clone())),
        }
    }
}

/// Anything of the form `origin + t * direction, t in interval`.
pub trait Linear<T: Scalar, const N: usize> {
    fn origin(&self) -> Point<T, N>;
    fn direction(&self) -> Vector<T, N>;
    fn interval(&self) -> ParamInterval<T>;

    /// Parameter of `p` if it is on the supporting line. For a zero direction
    /// only the origin qualifies, at parameter zero.
    fn param_of(&self, p: &Point<T, N>) -> Option<T> {
        let o = self.origin();
        let v = self.direction();
        let w = p - &o;
        if v.is_zero() {
            return w.is_zero().then(T::zero);
        }
        if !w.is_parallel_to(&v) {
            return None;
        }
        let k = v.dominant_axis();
        Some(w[k].clone() / v[k].clone())
    }

    fn contains_point(&self, p: &Point<T, N>) -> bool {
        self.param_of(p).is_some_and(|t| self.interval().contains(&t))
    }
}

/// A free-standing parametric piece, used for projections and generic code.
#[derive(Clone, Debug, PartialEq)]
pub struct ParamLine<T: Scalar, const N: usize> {
    pub origin: Point<T, N>,
    pub direction: Vector<T, N>,
    pub interval: ParamInterval<T>,
}

impl<T: Scalar, const N: usize> ParamLine<T, N> {
    pub fn of<L: Linear<T, N>>(l: &L) -> Self {
        ParamLine {
            origin: l.origin(),
            direction: l.direction(),
            interval: l.interval(),
        }
    }
}

impl<T: Scalar, const N: usize> Linear<T, N> for ParamLine<T, N> {
    fn origin(&self) -> Point<T, N> {
        self.origin.clone()
    }
    fn direction(&self) -> Vector<T, N> {
        self.direction.clone()
    }
    fn interval(&self) -> ParamInterval<T> {
        self.interval.clone()
    }
}

impl<T: Scalar> Linear<T, 2> for Line2<T> {
    fn origin(&self) -> Point<T, 2> {
        self.point()
    }
    fn direction(&self) -> Vector<T, 2> {
        Line2::direction(self)
    }
    fn interval(&self) -> ParamInterval<T> {
        ParamInterval::unbounded()
    }
}

impl<T: Scalar> Linear<T, 3> for Line3<T> {
    fn origin(&self) -> Point<T, 3> {
        self.point.clone()
    }
    fn direction(&self) -> Vector<T, 3> {
        self.direction.clone()
    }
    fn interval(&self) -> ParamInterval<T> {
        ParamInterval::unbounded()
    }
}

impl<T: Scalar, const N: usize> Linear<T, N> for Ray<T, N> {
    fn origin(&self) -> Point<T, N> {
        self.source.clone()
    }
    fn direction(&self) -> Vector<T, N> {
        self.direction.clone()
    }
    fn interval(&self) -> ParamInterval<T> {
        ParamInterval::ray()
    }
}

impl<T: Scalar, const N: usize> Linear<T, N> for Segment<T, N> {
    fn origin(&self) -> Point<T, N> {
        self.a.clone()
    }
    fn direction(&self) -> Vector<T, N> {
        &self.b - &self.a
    }
    fn interval(&self) -> ParamInterval<T> {
        ParamInterval::unit()
    }
}
