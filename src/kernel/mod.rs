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

pub mod bigrational_kernel;
pub mod f64_kernel;
pub mod kernel;
pub mod lazy_kernel;
pub mod orientation;
pub mod predicates;

pub use bigrational_kernel::ExactKernel;
pub use f64_kernel::F64Kernel;
pub use kernel::{KPoint2, KPoint3, Kernel};
pub use lazy_kernel::LazyKernel;
pub use orientation::{
    collinear, compare_xy, compare_xyz, coplanar, orient2d, orient3d, orientation_2,
    orientation_3, side_of_bounded_circle, side_of_oriented_circle, side_of_oriented_sphere,
};
pub use predicates::{are_collinear, are_equal, is_point_on_segment, point_u_on_segment};
