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

use std::ops::{Add, Mul, Neg, Sub};

/// Plain double used on the fast path of a filtered predicate.
///
/// Only ring operations are provided: the static error analysis in
/// [`StaticError`](super::static_error::StaticError) covers `+`, `-` and `*`
/// and nothing else, so a body that divides cannot be filtered.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct RestrictedDouble(pub f64);

impl RestrictedDouble {
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl<'a, 'b> Add<&'b RestrictedDouble> for &'a RestrictedDouble {
    type Output = RestrictedDouble;
    #[inline]
    fn add(self, rhs: &'b RestrictedDouble) -> RestrictedDouble {
        RestrictedDouble(self.0 + rhs.0)
    }
}

impl<'a, 'b> Sub<&'b RestrictedDouble> for &'a RestrictedDouble {
    type Output = RestrictedDouble;
    #[inline]
    fn sub(self, rhs: &'b RestrictedDouble) -> RestrictedDouble {
        RestrictedDouble(self.0 - rhs.0)
    }
}

impl<'a, 'b> Mul<&'b RestrictedDouble> for &'a RestrictedDouble {
    type Output = RestrictedDouble;
    #[inline]
    fn mul(self, rhs: &'b RestrictedDouble) -> RestrictedDouble {
        RestrictedDouble(self.0 * rhs.0)
    }
}

impl<'a> Neg for &'a RestrictedDouble {
    type Output = RestrictedDouble;
    #[inline]
    fn neg(self) -> RestrictedDouble {
        RestrictedDouble(-self.0)
    }
}
