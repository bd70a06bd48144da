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
    geometry::{line::Line3, ray::Ray3, segment::Segment3},
    intersection::result::{PointOrLine3, PointOrRay3, PointOrSegment3, PointSegmentOrRay3},
};

linear_pair!(Line3<T>, Line3<T> => PointOrLine3<T>);
linear_pair!(Line3<T>, Ray3<T> => PointOrRay3<T>);
linear_pair!(Line3<T>, Segment3<T> => PointOrSegment3<T>);
linear_pair!(Ray3<T>, Ray3<T> => PointSegmentOrRay3<T>);
linear_pair!(Ray3<T>, Segment3<T> => PointOrSegment3<T>);
linear_pair!(Segment3<T>, Segment3<T> => PointOrSegment3<T>);

symmetric!(Line3<T>, Ray3<T>);
symmetric!(Line3<T>, Segment3<T>);
symmetric!(Ray3<T>, Segment3<T>);
