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

/// Static error bound of a double-precision expression.
///
/// A leaf `StaticError::leaf(b)` stands for any input `x` with `|x| <= b`.
/// Running a predicate body over these values instead of the real inputs
/// yields, for every sign test, an `error` such that the computed double
/// lies within `error` of the exact value whenever all inputs respect `b`.
/// That error is the epsilon of the corresponding fast-path sign test.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StaticError {
    pub bound: f64,
    pub error: f64,
    pub degree: u32,
} // computed ∈ [exact - error, exact + error], |computed| <= bound

/// Smallest double strictly greater than `x`.
#[inline]
pub(crate) fn next_up(x: f64) -> f64 {
    if x.is_nan() || x == f64::INFINITY {
        return x;
    }
    if x == 0.0 {
        return f64::from_bits(1);
    }
    let bits = x.to_bits();
    if x > 0.0 {
        f64::from_bits(bits + 1)
    } else {
        f64::from_bits(bits - 1)
    }
}

/// Unit in the last place of a non-negative `x`, rounded up.
#[inline]
pub(crate) fn ulp(x: f64) -> f64 {
    let x = x.abs();
    next_up(next_up(x) - x)
}

// Sums and products of bounds are rounded to nearest; stepping one ulp up
// keeps every intermediate an upper bound of the real-valued result.
#[inline]
fn add_up(a: f64, b: f64) -> f64 {
    next_up(a + b)
}
#[inline]
fn mul_up(a: f64, b: f64) -> f64 {
    next_up(a * b)
}

impl StaticError {
    /// An input value of magnitude at most `bound`, known exactly.
    #[inline]
    pub fn leaf(bound: f64) -> Self {
        StaticError {
            bound,
            error: 0.0,
            degree: 1,
        }
    }

    #[inline]
    pub fn add(self, o: Self) -> Self {
        let b = add_up(self.bound, o.bound);
        let u = ulp(b) / 2.0;
        StaticError {
            bound: add_up(b, u),
            error: add_up(add_up(u, self.error), o.error),
            degree: self.degree.max(o.degree),
        }
    }

    // |a - b| obeys the same bound as |a + b|.
    #[inline]
    pub fn sub(self, o: Self) -> Self {
        self.add(o)
    }

    #[inline]
    pub fn neg(self) -> Self {
        self
    }

    #[inline]
    pub fn mul(self, o: Self) -> Self {
        let b = mul_up(self.bound, o.bound);
        let u = ulp(b) / 2.0;
        let e = add_up(
            add_up(add_up(u, mul_up(self.error, o.error)), mul_up(self.error, o.bound)),
            mul_up(self.bound, o.error),
        );
        StaticError {
            bound: add_up(b, u),
            error: e,
            degree: self.degree + o.degree,
        }
    }

    #[inline]
    pub fn square(self) -> Self {
        self.mul(self)
    }
}

impl<'a, 'b> Add<&'b StaticError> for &'a StaticError {
    type Output = StaticError;
    fn add(self, rhs: &'b StaticError) -> StaticError {
        StaticError::add(*self, *rhs)
    }
}

impl<'a, 'b> Sub<&'b StaticError> for &'a StaticError {
    type Output = StaticError;
    fn sub(self, rhs: &'b StaticError) -> StaticError {
        StaticError::sub(*self, *rhs)
    }
}

impl<'a, 'b> Mul<&'b StaticError> for &'a StaticError {
    type Output = StaticError;
    fn mul(self, rhs: &'b StaticError) -> StaticError {
        StaticError::mul(*self, *rhs)
    }
}

impl<'a> Neg for &'a StaticError {
    type Output = StaticError;
    fn neg(self) -> StaticError {
        StaticError::neg(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_up_steps_one_ulp() {
        assert!(next_up(1.0) > 1.0);
        assert_eq!(next_up(1.0), 1.0 + f64::EPSILON);
        assert_eq!(next_up(0.0), f64::from_bits(1));
        assert!(next_up(-1.0) > -1.0);
    }

    #[test]
    fn exact_leaves_carry_no_error() {
        let a = StaticError::leaf(4.0);
        assert_eq!(a.error, 0.0);
        assert_eq!(a.degree, 1);
    }

    #[test]
    fn errors_grow_with_operations() {
        let a = StaticError::leaf(1.0);
        let s = &a - &a;
        assert!(s.bound >= 2.0);
        assert!(s.error > 0.0);

        let p = &s * &s;
        assert_eq!(p.degree, 2);
        assert!(p.bound >= 4.0);
        // second-order term dominates the rounding of the product
        assert!(p.error >= s.error * s.bound);
    }

    #[test]
    fn error_scales_with_bound() {
        let small = StaticError::leaf(1.0);
        let large = StaticError::leaf(1024.0);
        let es = (&(&small - &small) * &(&small - &small)).error;
        let el = (&(&large - &large) * &(&large - &large)).error;
        assert!(el > es * 1000.0);
    }
}
