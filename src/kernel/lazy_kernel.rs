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

use crate::{kernel::kernel::Kernel, numeric::lazy_exact::LazyExact};

/// Filtered kernel: interval arithmetic first, exact rationals only when the
/// interval cannot decide a sign.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LazyKernel;

impl Kernel for LazyKernel {
    type FT = LazyExact;

    fn name() -> &'static str {
        "lazy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{kernel::ExactKernel, numeric::scalar::Sign};

    #[test]
    fn agrees_with_exact_on_a_degenerate_turn() {
        let a = LazyKernel::point2(0.1, 0.1);
        let b = LazyKernel::point2(0.2, 0.2);
        let c = LazyKernel::point2(0.3, 0.3);
        // the filter cannot decide this one, so the exact fallback has to
        let exact = ExactKernel::orientation_2(
            &ExactKernel::point2(0.1, 0.1),
            &ExactKernel::point2(0.2, 0.2),
            &ExactKernel::point2(0.3, 0.3),
        );
        assert_eq!(LazyKernel::orientation_2(&a, &b, &c), exact);
        assert_eq!(
            LazyKernel::orientation_2(&a, &b, &LazyKernel::point2(0.2, 1.0)),
            Sign::Positive
        );
    }
}
