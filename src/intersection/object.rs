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

//! Type-erased intersection results for callers that inspect the outcome by
//! dynamic type instead of matching on the per-pair enum.

use std::any::Any;

use crate::{
    geometry::point::Point,
    intersection::{
        Intersect,
        result::{
            ConvexRegion, LineOrPlane3, PointCircleOrSphere3, PointLineOrPlane3, PointOrCircle3,
            PointOrLine2, PointOrLine3, PointOrRay, PointOrSegment, PointSegmentOrRay,
            PointSegmentOrRectangle2, PointSegmentOrTriangle3,
        },
    },
    numeric::scalar::Scalar,
};

/// Holds one value of any type, or nothing.
#[derive(Debug, Default)]
pub struct Object {
    value: Option<Box<dyn Any>>,
}

impl Object {
    pub fn empty() -> Self {
        Object { value: None }
    }

    pub fn new<U: Any>(value: U) -> Self {
        Object {
            value: Some(Box::new(value)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Whether the held value has type `U`.
    pub fn is<U: Any>(&self) -> bool {
        self.value.as_ref().is_some_and(|v| v.is::<U>())
    }

    /// Take the value out if it has type `U`, otherwise hand the object back.
    pub fn into_inner<U: Any>(self) -> Result<U, Self> {
        match self.value {
            Some(v) => v.downcast::<U>().map(|b| *b).map_err(|v| Object { value: Some(v) }),
            None => Err(self),
        }
    }
}

/// Borrow the held value as a `U`, `None` if empty or of another type.
pub fn object_cast<U: Any>(o: &Object) -> Option<&U> {
    o.value.as_ref()?.downcast_ref::<U>()
}

/// [`Intersect::intersection`] with the result erased into an [`Object`].
pub fn intersection_object<A, B>(a: &A, b: &B) -> Object
where
    A: Intersect<B>,
    Object: From<Option<A::Output>>,
{
    Object::from(a.intersection(b))
}

macro_rules! erase_sized {
    ($e:ident: $($v:ident),+) => {
        impl<T: Scalar + 'static, const N: usize> From<Option<$e<T, N>>> for Object {
            fn from(r: Option<$e<T, N>>) -> Self {
                match r {
                    None => Object::empty(),
                    $(Some($e::$v(x)) => Object::new(x),)+
                }
            }
        }
    };
}

macro_rules! erase {
    ($e:ident: $($v:ident),+) => {
        impl<T: Scalar + 'static> From<Option<$e<T>>> for Object {
            fn from(r: Option<$e<T>>) -> Self {
                match r {
                    None => Object::empty(),
                    $(Some($e::$v(x)) => Object::new(x),)+
                }
            }
        }
    };
}

erase_sized!(PointOrSegment: Point, Segment);
erase_sized!(PointOrRay: Point, Ray);
erase_sized!(PointSegmentOrRay: Point, Segment, Ray);
erase_sized!(ConvexRegion: Point, Segment, Triangle, Polygon);
erase!(PointOrLine2: Point, Line);
erase!(PointSegmentOrRectangle2: Point, Segment, Rectangle);
erase!(PointOrLine3: Point, Line);
erase!(LineOrPlane3: Line, Plane);
erase!(PointOrCircle3: Point, Circle);
erase!(PointSegmentOrTriangle3: Point, Segment, Triangle);
erase!(PointCircleOrSphere3: Point, Circle, Sphere);
erase!(PointLineOrPlane3: Point, Line, Plane);

impl<T: Scalar + 'static, const N: usize> From<Option<Point<T, N>>> for Object {
    fn from(r: Option<Point<T, N>>) -> Self {
        r.map_or_else(Object::empty, Object::new)
    }
}
