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
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::ToPrimitive;
use rug::Rational;

/// Arbitrary-precision rational backed by GMP. Every finite `f64` converts
/// to it without loss, so predicates evaluated over it are exact.
#[derive(Clone, Debug)]
pub struct ExactRational(pub Rational);

impl ExactRational {
    pub fn zero() -> Self {
        ExactRational(Rational::new())
    }

    /// Exact conversion. Returns `None` for NaN and infinities.
    pub fn from_f64(v: f64) -> Option<Self> {
        Rational::from_f64(v).map(ExactRational)
    }

    /// Exact conversion of a value the caller already checked to be finite.
    pub fn from_finite(v: f64) -> Self {
        match Rational::from_f64(v) {
            Some(r) => ExactRational(r),
            None => panic!("ExactRational: non-finite input {v}"),
        }
    }

    pub fn sign(&self) -> Ordering {
        self.0.cmp0()
    }

    pub fn is_zero(&self) -> bool {
        self.0.cmp0() == Ordering::Equal
    }

    pub fn square(&self) -> Self {
        self * self
    }
}

impl<'a, 'b> Add<&'b ExactRational> for &'a ExactRational {
    type Output = ExactRational;

    fn add(self, rhs: &'b ExactRational) -> ExactRational {
        let mut result = self.0.clone();
        result += &rhs.0;
        ExactRational(result)
    }
}

impl<'a, 'b> Sub<&'b ExactRational> for &'a ExactRational {
    type Output = ExactRational;

    fn sub(self, rhs: &'b ExactRational) -> ExactRational {
        let mut result = self.0.clone();
        result -= &rhs.0;
        ExactRational(result)
    }
}

impl<'a, 'b> Mul<&'b ExactRational> for &'a ExactRational {
    type Output = ExactRational;

    fn mul(self, rhs: &'b ExactRational) -> ExactRational {
        let mut result = self.0.clone();
        result *= &rhs.0;
        ExactRational(result)
    }
}

impl<'a> Neg for &'a ExactRational {
    type Output = ExactRational;

    fn neg(self) -> ExactRational {
        ExactRational(Rational::from(-&self.0))
    }
}

impl PartialEq for ExactRational {
    fn eq(&self, other: &ExactRational) -> bool {
        self.0 == other.0
    }
}

impl Eq for ExactRational {}

impl PartialOrd for ExactRational {
    fn partial_cmp(&self, other: &ExactRational) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ExactRational {
    fn cmp(&self, other: &ExactRational) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl From<i32> for ExactRational {
    fn from(v: i32) -> Self {
        ExactRational(Rational::from(v))
    }
}

impl ToPrimitive for ExactRational {
    fn to_i64(&self) -> Option<i64> {
        self.0.to_f64().to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.0.to_f64().to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.0.to_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_is_lossless() {
        let tiny = 1e-300;
        let r = ExactRational::from_f64(tiny).unwrap();
        assert_eq!(r.to_f64(), Some(tiny));
        assert!(ExactRational::from_f64(f64::NAN).is_none());
        assert!(ExactRational::from_f64(f64::INFINITY).is_none());
    }

    #[test]
    fn cancellation_is_exact() {
        // (1e16 + 1) - 1e16 loses the 1 in f64 but not here.
        let big = ExactRational::from_finite(1e16);
        let one = ExactRational::from(1);
        let sum = &big + &one;
        let diff = &sum - &big;
        assert_eq!(diff, one);
        assert_eq!((&diff - &one).sign(), Ordering::Equal);
    }
}
