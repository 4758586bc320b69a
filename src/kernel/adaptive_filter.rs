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

use std::marker::PhantomData;

use smallvec::{SmallVec, smallvec};
use tracing::debug;

use crate::kernel::predicates::FilteredPredicate;
use crate::kernel::sign::{Sign, Uncertain};
use crate::numeric::{ExactRational, RestrictedDouble, StaticError};

/// Bound value of a filter that has never been calibrated. Every argument
/// magnitude exceeds it, so the first call always calibrates.
pub const UNINITIALIZED_BOUND: f64 = -1.0;

/// Decides the sign of an intermediate predicate value.
///
/// `slot` identifies the sign test inside the predicate body; each slot owns
/// one epsilon.
pub trait SignOracle<T> {
    fn sign(&mut self, slot: usize, x: &T) -> Result<Sign, Uncertain>;
}

/// Fast path: certify the double against the slot's epsilon.
pub struct EpsilonCheck<'e> {
    epsilons: &'e [f64],
}

impl<'e> EpsilonCheck<'e> {
    pub fn new(epsilons: &'e [f64]) -> Self {
        EpsilonCheck { epsilons }
    }
}

impl SignOracle<RestrictedDouble> for EpsilonCheck<'_> {
    #[inline]
    fn sign(&mut self, slot: usize, x: &RestrictedDouble) -> Result<Sign, Uncertain> {
        let eps = self.epsilons[slot];
        let v = x.value();
        // NaN and overflowed values fail every test below.
        if v > eps {
            Ok(Sign::Positive)
        } else if v < -eps {
            Ok(Sign::Negative)
        } else if v == 0.0 && eps == 0.0 {
            Ok(Sign::Zero)
        } else {
            Err(Uncertain)
        }
    }
}

/// Epsilon derivation: records the static error reaching each sign test and
/// answers with a scripted sign so the body keeps running.
pub struct EpsilonRecorder {
    recorded: SmallVec<[Option<f64>; 4]>,
    answer: Sign,
}

impl EpsilonRecorder {
    pub fn new(slots: usize) -> Self {
        EpsilonRecorder {
            recorded: smallvec![None; slots],
            answer: Sign::Zero,
        }
    }

    fn missing(&self) -> usize {
        self.recorded.iter().filter(|e| e.is_none()).count()
    }
}

impl SignOracle<StaticError> for EpsilonRecorder {
    fn sign(&mut self, slot: usize, x: &StaticError) -> Result<Sign, Uncertain> {
        let e = &mut self.recorded[slot];
        *e = Some(e.map_or(x.error, |prev| prev.max(x.error)));
        Ok(self.answer)
    }
}

/// Exact path: the sign of a rational is never uncertain.
pub struct ExactSign;

impl SignOracle<ExactRational> for ExactSign {
    #[inline]
    fn sign(&mut self, _slot: usize, x: &ExactRational) -> Result<Sign, Uncertain> {
        Ok(Sign::of_ordering(x.sign()))
    }
}

/// Counters describing how a filter's calls were resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub fast: u64,
    pub recomputations: u64,
    pub exact: u64,
}

/// Runs the predicate body over `StaticError` leaves of magnitude `bound`
/// and returns one epsilon per sign slot.
///
/// A slot guarded by a branch is only reached for some signs of earlier
/// tests, so the body is replayed with each scripted answer until every slot
/// has been recorded. A slot no replay reaches keeps an infinite epsilon and
/// can never certify.
pub fn derive_epsilons<P: FilteredPredicate>(bound: f64) -> SmallVec<[f64; 4]> {
    let leaves: SmallVec<[StaticError; 12]> = (0..P::ARITY).map(|_| StaticError::leaf(bound)).collect();
    let mut recorder = EpsilonRecorder::new(P::SLOTS);
    for answer in [Sign::Zero, Sign::Positive, Sign::Negative] {
        if recorder.missing() == 0 {
            break;
        }
        recorder.answer = answer;
        let _ = P::eval(&leaves, &mut recorder);
    }
    recorder
        .recorded
        .iter()
        .map(|e| e.unwrap_or(f64::INFINITY))
        .collect()
}

/// One static adaptive filter: the calibrated magnitude bound and the
/// epsilons derived from it, for a single predicate.
///
/// The bound starts at [`UNINITIALIZED_BOUND`]. When a call cannot be
/// certified (an argument exceeds the bound, or a value falls within its
/// epsilon) the bound is reset to the largest argument magnitude of that
/// call, the epsilons are re-derived from it, and the fast path is retried
/// once. A second failure evaluates the body exactly. The bound and the
/// epsilons are always written together by `&mut self`, so they never
/// disagree.
#[derive(Clone, Debug)]
pub struct AdaptiveFilter<P: FilteredPredicate> {
    bound: f64,
    epsilons: SmallVec<[f64; 4]>,
    stats: FilterStats,
    _predicate: PhantomData<P>,
}

impl<P: FilteredPredicate> Default for AdaptiveFilter<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: FilteredPredicate> AdaptiveFilter<P> {
    pub fn new() -> Self {
        AdaptiveFilter {
            bound: UNINITIALIZED_BOUND,
            epsilons: smallvec![0.0; P::SLOTS],
            stats: FilterStats::default(),
            _predicate: PhantomData,
        }
    }

    pub fn bound(&self) -> f64 {
        self.bound
    }

    pub fn epsilons(&self) -> &[f64] {
        &self.epsilons
    }

    pub fn stats(&self) -> FilterStats {
        self.stats
    }

    pub fn is_calibrated(&self) -> bool {
        self.bound >= 0.0
    }

    /// Evaluates the predicate; the result is always the exact answer.
    pub fn evaluate(&mut self, args: &[f64]) -> P::Output {
        assert_eq!(
            args.len(),
            P::ARITY,
            "{}: expected {} arguments",
            P::NAME,
            P::ARITY
        );
        assert!(
            args.iter().all(|a| a.is_finite()),
            "{}: non-finite argument in {:?}",
            P::NAME,
            args
        );

        let mut tried = false;
        loop {
            if self.within_bound(args) {
                if let Ok(out) = self.try_fast(args) {
                    self.stats.fast += 1;
                    return out;
                }
            }
            if tried {
                break;
            }
            tried = true;
            self.recompute(args);
        }

        self.stats.exact += 1;
        debug!(predicate = P::NAME, bound = self.bound, "static filter failed, evaluating exactly");
        Self::evaluate_exact(args)
    }

    /// The exact path alone, bypassing the filter.
    pub fn evaluate_exact(args: &[f64]) -> P::Output {
        let exact: SmallVec<[ExactRational; 12]> =
            args.iter().map(|&a| ExactRational::from_finite(a)).collect();
        match P::eval(&exact, &mut ExactSign) {
            Ok(out) => out,
            Err(Uncertain) => unreachable!("{}: exact sign reported uncertainty", P::NAME),
        }
    }

    fn within_bound(&self, args: &[f64]) -> bool {
        args.iter().all(|a| a.abs() <= self.bound)
    }

    fn try_fast(&self, args: &[f64]) -> Result<P::Output, Uncertain> {
        let vals: SmallVec<[RestrictedDouble; 12]> = args.iter().map(|&a| RestrictedDouble(a)).collect();
        P::eval(&vals, &mut EpsilonCheck::new(&self.epsilons))
    }

    fn recompute(&mut self, args: &[f64]) {
        self.bound = args.iter().fold(0.0_f64, |m, a| m.max(a.abs()));
        self.epsilons = derive_epsilons::<P>(self.bound);
        self.stats.recomputations += 1;
        debug!(
            predicate = P::NAME,
            bound = self.bound,
            epsilons = ?self.epsilons.as_slice(),
            "static filter recalibrated"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::predicates::{CompareCoord, Orientation, PowerTestDegenerate};

    #[test]
    fn first_call_calibrates_then_runs_fast() {
        let mut f = AdaptiveFilter::<Orientation>::new();
        assert!(!f.is_calibrated());

        let args = [0.0, 0.0, 1.0, 0.0, 0.0, 1.0];
        assert_eq!(f.evaluate(&args), Sign::Positive);
        assert_eq!(
            f.stats(),
            FilterStats {
                fast: 1,
                recomputations: 1,
                exact: 0
            }
        );
        assert_eq!(f.bound(), 1.0);

        assert_eq!(f.evaluate(&args), Sign::Positive);
        assert_eq!(f.stats().fast, 2);
        assert_eq!(f.stats().recomputations, 1);
    }

    #[test]
    fn out_of_bound_arguments_recalibrate() {
        let mut f = AdaptiveFilter::<Orientation>::new();
        f.evaluate(&[0.0, 0.0, 1.0, 0.0, 0.0, 1.0]);
        let eps_small = f.epsilons()[0];

        assert_eq!(f.evaluate(&[0.0, 0.0, 100.0, 0.0, 0.0, 100.0]), Sign::Positive);
        assert_eq!(f.bound(), 100.0);
        assert!(f.epsilons()[0] > eps_small);
        assert_eq!(f.stats().recomputations, 2);
    }

    #[test]
    fn degenerate_input_falls_back_to_exact() {
        let mut f = AdaptiveFilter::<Orientation>::new();
        // exactly collinear: the double value is zero but epsilon is not
        let args = [0.0, 0.0, 1.0, 1.0, 2.0, 2.0];
        assert_eq!(f.evaluate(&args), Sign::Zero);
        assert_eq!(
            f.stats(),
            FilterStats {
                fast: 0,
                recomputations: 1,
                exact: 1
            }
        );
    }

    #[test]
    fn compare_of_equal_values_is_exact() {
        let mut f = AdaptiveFilter::<CompareCoord>::new();
        assert_eq!(f.evaluate(&[3.5, 3.5]), Sign::Zero);
        assert_eq!(f.evaluate(&[3.0, 3.5]), Sign::Negative);
    }

    #[test]
    fn branch_dependent_slots_are_all_derived() {
        let eps = derive_epsilons::<PowerTestDegenerate>(10.0);
        assert_eq!(eps.len(), 4);
        assert!(eps.iter().all(|e| e.is_finite() && *e > 0.0));
    }
}
