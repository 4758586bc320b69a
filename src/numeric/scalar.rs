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

use std::fmt::Debug;

use crate::numeric::{
    exact_rational::ExactRational, restricted_double::RestrictedDouble, static_error::StaticError,
};

/// Number types a filtered predicate body can be evaluated over.
///
/// The same body runs three ways: over [`RestrictedDouble`] on the fast
/// path, over [`StaticError`] to derive epsilons, and over
/// [`ExactRational`] when the filter cannot certify the answer. Ring
/// operations come from `&T op &T` impls, bounded where the body is defined.
pub trait FilterScalar: Clone + Debug {
    fn square(&self) -> Self;
}

impl FilterScalar for RestrictedDouble {
    #[inline]
    fn square(&self) -> Self {
        RestrictedDouble(self.0 * self.0)
    }
}

impl FilterScalar for StaticError {
    #[inline]
    fn square(&self) -> Self {
        StaticError::square(*self)
    }
}

impl FilterScalar for ExactRational {
    fn square(&self) -> Self {
        ExactRational::square(self)
    }
}
