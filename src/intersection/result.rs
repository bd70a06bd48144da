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

//! Per-pair result types. Each query returns `Option<R>`; `None` is the empty set.

use crate::{
    geometry::{
        aabb::IsoRectangle2,
        circle::Circle3,
        line::{Line2, Line3},
        plane::Plane3,
        point::{Point, Point2, Point3},
        ray::Ray,
        segment::Segment,
        sphere::Sphere3,
        triangle::Triangle,
    },
    intersection::interval::IntervalShape,
    numeric::scalar::Scalar,
};

#[derive(Clone, Debug, PartialEq)]
pub enum PointOrSegment<T: Scalar, const N: usize> {
    Point(Point<T, N>),
    Segment(Segment<T, N>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum PointOrRay<T: Scalar, const N: usize> {
    Point(Point<T, N>),
    Ray(Ray<T, N>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum PointSegmentOrRay<T: Scalar, const N: usize> {
    Point(Point<T, N>),
    Segment(Segment<T, N>),
    Ray(Ray<T, N>),
}

/// A bounded convex set. Polygons have at least four vertices, no two
/// consecutive ones collinear with the next, and start at the
/// lexicographically smallest vertex; in 2D they are counter-clockwise.
#[derive(Clone, Debug, PartialEq)]
pub enum ConvexRegion<T: Scalar, const N: usize> {
    Point(Point<T, N>),
    Segment(Segment<T, N>),
    Triangle(Triangle<T, N>),
    Polygon(Vec<Point<T, N>>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum PointOrLine2<T: Scalar> {
    Point(Point2<T>),
    Line(Line2<T>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum PointSegmentOrRectangle2<T: Scalar> {
    Point(Point2<T>),
    Segment(Segment<T, 2>),
    Rectangle(IsoRectangle2<T>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum PointOrLine3<T: Scalar> {
    Point(Point3<T>),
    Line(Line3<T>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum LineOrPlane3<T: Scalar> {
    Line(Line3<T>),
    Plane(Plane3<T>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum PointOrCircle3<T: Scalar> {
    Point(Point3<T>),
    Circle(Circle3<T>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum PointSegmentOrTriangle3<T: Scalar> {
    Point(Point3<T>),
    Segment(Segment<T, 3>),
    Triangle(Triangle<T, 3>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum PointCircleOrSphere3<T: Scalar> {
    Point(Point3<T>),
    Circle(Circle3<T>),
    Sphere(Sphere3<T>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum PointLineOrPlane3<T: Scalar> {
    Point(Point3<T>),
    Line(Line3<T>),
    Plane(Plane3<T>),
}

pub type PointOrSegment2<T> = PointOrSegment<T, 2>;
pub type PointOrSegment3<T> = PointOrSegment<T, 3>;
pub type PointOrRay2<T> = PointOrRay<T, 2>;
pub type PointOrRay3<T> = PointOrRay<T, 3>;
pub type PointSegmentOrRay2<T> = PointSegmentOrRay<T, 2>;
pub type PointSegmentOrRay3<T> = PointSegmentOrRay<T, 3>;
pub type ConvexRegion2<T> = ConvexRegion<T, 2>;
pub type ConvexRegion3<T> = ConvexRegion<T, 3>;

/// Conversion from the shape of a clipped parameter interval. Shapes a pair
/// cannot produce map to `None`.
pub(crate) trait FromInterval<T: Scalar, const N: usize>: Sized {
    fn from_interval(shape: IntervalShape<T, N>) -> Option<Self>;
}

impl<T: Scalar, const N: usize> FromInterval<T, N> for PointOrSegment<T, N> {
    fn from_interval(shape: IntervalShape<T, N>) -> Option<Self> {
        match shape {
            IntervalShape::Point(p) => Some(PointOrSegment::Point(p)),
            IntervalShape::Segment(s) => Some(PointOrSegment::Segment(s)),
            _ => None,
        }
    }
}

impl<T: Scalar, const N: usize> FromInterval<T, N> for PointOrRay<T, N> {
    fn from_interval(shape: IntervalShape<T, N>) -> Option<Self> {
        match shape {
            IntervalShape::Point(p) => Some(PointOrRay::Point(p)),
            IntervalShape::Ray(r) => Some(PointOrRay::Ray(r)),
            _ => None,
        }
    }
}

impl<T: Scalar, const N: usize> FromInterval<T, N> for PointSegmentOrRay<T, N> {
    fn from_interval(shape: IntervalShape<T, N>) -> Option<Self> {
        match shape {
            IntervalShape::Point(p) => Some(PointSegmentOrRay::Point(p)),
            IntervalShape::Segment(s) => Some(PointSegmentOrRay::Segment(s)),
            IntervalShape::Ray(r) => Some(PointSegmentOrRay::Ray(r)),
            IntervalShape::Line(..) => None,
        }
    }
}

impl<T: Scalar> FromInterval<T, 3> for PointOrLine3<T> {
    fn from_interval(shape: IntervalShape<T, 3>) -> Option<Self> {
        match shape {
            IntervalShape::Point(p) => Some(PointOrLine3::Point(p)),
            IntervalShape::Line(o, v) => Some(PointOrLine3::Line(Line3::new(o, v))),
            _ => None,
        }
    }
}

impl<T: Scalar, const N: usize> From<PointOrSegment<T, N>> for ConvexRegion<T, N> {
    fn from(r: PointOrSegment<T, N>) -> Self {
        match r {
            PointOrSegment::Point(p) => ConvexRegion::Point(p),
            PointOrSegment::Segment(s) => ConvexRegion::Segment(s),
        }
    }
}

impl<T: Scalar> From<PointOrSegment<T, 3>> for PointSegmentOrTriangle3<T> {
    fn from(r: PointOrSegment<T, 3>) -> Self {
        match r {
            PointOrSegment::Point(p) => PointSegmentOrTriangle3::Point(p),
            PointOrSegment::Segment(s) => PointSegmentOrTriangle3::Segment(s),
        }
    }
}

impl<T: Scalar, const N: usize> ConvexRegion<T, N> {
    /// Every vertex of the region, in order.
    pub fn vertices(&self) -> Vec<Point<T, N>> {
        match self {
            ConvexRegion::Point(p) => vec![p.clone()],
            ConvexRegion::Segment(s) => vec![s.a.clone(), s.b.clone()],
            ConvexRegion::Triangle(t) => vec![t.a.clone(), t.b.clone(), t.c.clone()],
            ConvexRegion::Polygon(pts) => pts.clone(),
        }
    }
}
