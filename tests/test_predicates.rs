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

use planar_arr::geometry::{Point2, WeightedPoint2};
use planar_arr::kernel::predicates::{Orientation, SideOfOrientedCircle};
use planar_arr::kernel::{AdaptiveFilter, FilteredKernel, Sign, UNINITIALIZED_BOUND};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn exact_orientation(p: &Point2, q: &Point2, r: &Point2) -> Sign {
    AdaptiveFilter::<Orientation>::evaluate_exact(&[p.x, p.y, q.x, q.y, r.x, r.y])
}

fn coord() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1e3..1e3_f64,
        -1e-6..1e-6_f64,
        (-1e150..1e150_f64),
        (-4i32..4).prop_map(|i| i as f64 * 0.5),
    ]
}

proptest! {
    #[test]
    fn filtered_orientation_matches_exact(
        px in coord(), py in coord(),
        qx in coord(), qy in coord(),
        rx in coord(), ry in coord(),
    ) {
        let k = FilteredKernel::new();
        let (p, q, r) = (Point2::new(px, py), Point2::new(qx, qy), Point2::new(rx, ry));
        prop_assert_eq!(k.orientation(&p, &q, &r), exact_orientation(&p, &q, &r));
    }

    #[test]
    fn swapping_two_points_flips_orientation(
        px in coord(), py in coord(),
        qx in coord(), qy in coord(),
        rx in coord(), ry in coord(),
    ) {
        let k = FilteredKernel::new();
        let (p, q, r) = (Point2::new(px, py), Point2::new(qx, qy), Point2::new(rx, ry));
        let a = k.orientation(&p, &q, &r);
        let b = k.orientation(&q, &p, &r);
        prop_assert_eq!(a.to_ordering(), b.to_ordering().reverse());
    }

    #[test]
    fn compare_xy_is_exact_on_doubles(ax in coord(), ay in coord(), bx in coord(), by in coord()) {
        let k = FilteredKernel::new();
        let (a, b) = (Point2::new(ax, ay), Point2::new(bx, by));
        let expected = ax.partial_cmp(&bx).unwrap().then(ay.partial_cmp(&by).unwrap());
        prop_assert_eq!(k.compare_xy(&a, &b), expected);
    }
}

#[test]
fn near_collinear_points_are_decided_exactly() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let k = FilteredKernel::new();
    for _ in 0..2000 {
        let t: f64 = rng.random_range(0.0..1.0);
        let nudge: f64 = rng.random_range(-1e-10..1e-10);
        let p = Point2::new(0.1, 0.1);
        let q = Point2::new(12.3, 45.6);
        // on the line through p and q, give or take the nudge
        let r = Point2::new(p.x + t * (q.x - p.x), p.y + t * (q.y - p.y) + nudge);
        assert_eq!(k.orientation(&p, &q, &r), exact_orientation(&p, &q, &r), "r = {r}");
    }
    let stats = k.orientation_stats();
    assert_eq!(stats.fast + stats.exact, 2000);
}

#[test]
fn exactly_collinear_doubles_are_zero() {
    let k = FilteredKernel::new();
    let p = Point2::new(0.0, 0.0);
    let q = Point2::new(1.0, 3.0);
    let r = Point2::new(1024.0, 3072.0);
    assert_eq!(k.orientation(&p, &q, &r), Sign::Zero);
    assert!(k.collinear(&r, &p, &q));
    // a zero determinant can never be certified by the filter
    assert_eq!(k.orientation_stats().exact, 2);

    // 0.1 + 0.2 is not 0.3 as a double, so this is a genuine left turn
    let a = Point2::new(0.0, 0.0);
    let b = Point2::new(0.1, 0.1);
    let c = Point2::new(0.1 + 0.2, 0.3);
    assert_eq!(k.orientation(&a, &b, &c), exact_orientation(&a, &b, &c));
}

#[test]
fn each_call_recalibrates_at_most_once() {
    let mut f = AdaptiveFilter::<Orientation>::new();
    assert_eq!(f.bound(), UNINITIALIZED_BOUND);
    assert!(!f.is_calibrated());

    let small = [0.0, 0.0, 1.0, 0.0, 0.0, 1.0];
    assert_eq!(f.evaluate(&small), Sign::Positive);
    assert_eq!(f.stats().recomputations, 1);
    assert_eq!(f.bound(), 1.0);

    // still within the bound and clearly decided: no further calibration
    assert_eq!(f.evaluate(&[0.5, 0.0, 1.0, 1.0, 0.0, 1.0]), Sign::Positive);
    assert_eq!(f.stats().recomputations, 1);

    let large = [0.0, 0.0, 1e6, 0.0, 0.0, -1e6];
    assert_eq!(f.evaluate(&large), Sign::Negative);
    assert_eq!(f.stats().recomputations, 2);
    assert_eq!(f.bound(), 1e6);

    let s = f.stats();
    assert_eq!(s.fast + s.exact, 3);
}

#[test]
fn circle_test_agrees_with_exact() {
    let k = FilteredKernel::new();
    let p = Point2::new(1.0, 0.0);
    let q = Point2::new(0.0, 1.0);
    let r = Point2::new(-1.0, 0.0);
    assert_eq!(k.side_of_oriented_circle(&p, &q, &r, &Point2::new(0.0, 0.0)), Sign::Positive);
    assert_eq!(k.side_of_oriented_circle(&p, &q, &r, &Point2::new(0.0, -1.0)), Sign::Zero);
    assert_eq!(k.side_of_oriented_circle(&p, &q, &r, &Point2::new(3.0, 3.0)), Sign::Negative);

    let t = Point2::new(0.0, -1.0 + 1e-15);
    let exact = AdaptiveFilter::<SideOfOrientedCircle>::evaluate_exact(&[
        p.x, p.y, q.x, q.y, r.x, r.y, t.x, t.y,
    ]);
    assert_eq!(k.side_of_oriented_circle(&p, &q, &r, &t), exact);
}

#[test]
fn weighted_power_test_matches_unweighted_circle() {
    let k = FilteredKernel::new();
    let w = |x, y| WeightedPoint2::new(x, y, 0.0);
    let inside = w(0.0, 0.0);
    let outside = w(5.0, 5.0);
    let (p, q, r) = (w(1.0, 0.0), w(0.0, 1.0), w(-1.0, 0.0));
    let a = k.power_test(&p, &q, &r, &inside);
    let b = k.power_test(&p, &q, &r, &outside);
    assert_ne!(a, Sign::Zero);
    assert_eq!(a.to_ordering(), b.to_ordering().reverse());
}

#[test]
fn failing_inputs_pass_the_fast_path_after_recalibration() {
    let mut f = AdaptiveFilter::<Orientation>::new();
    // three points within 1e-11 of a common line
    let args = [0.0, 0.0, 1.0, 1.0, 2.0, 2.0 + 1e-11];
    assert_eq!(f.evaluate(&args), Sign::Positive);
    assert_eq!(f.stats().recomputations, 1);
    assert_eq!(f.stats().fast, 1);

    assert_eq!(f.evaluate(&args), Sign::Positive);
    assert_eq!(f.stats().recomputations, 1);
    assert_eq!(f.stats().fast, 2);
    assert_eq!(f.stats().exact, 0);
}
