// Copyright (c) 2025 The Softlane Project Developers
// SPDX-License-Identifier: MIT
// Project: Softlane
// Module: softlane::ops::arith

//! Arithmetic engine: elementwise and single-lane arithmetic, saturating
//! forms, and the sum-of-absolute-differences reduction.
//!
//! Integer lanes wrap per two's complement; saturating forms clamp to the
//! element range. The `_single` variants compute lane 0 only and pass the
//! remaining lanes through from the first operand, modeling the scalar
//! forms of the emulated instruction sets.

use softlane_error::kinds;

use crate::ops::construct::set1;
use crate::ops::lanes::dup_lane;
use crate::prelude::Result;
use crate::traits::{ArithLane, FloatLane, IntLane, WidenLane};
use crate::vector::Vector;

/// Elementwise wrapping (integer) or IEEE (float) addition.
pub fn add<E: ArithLane, const N: usize>(
    a: Vector<E, N>,
    b: Vector<E, N>,
) -> Result<Vector<E, N>> {
    Ok(Vector::from_fn(|i| a.lanes()[i].lane_add(b.lanes()[i])))
}

/// Elementwise wrapping (integer) or IEEE (float) subtraction.
pub fn sub<E: ArithLane, const N: usize>(
    a: Vector<E, N>,
    b: Vector<E, N>,
) -> Result<Vector<E, N>> {
    Ok(Vector::from_fn(|i| a.lanes()[i].lane_sub(b.lanes()[i])))
}

/// Elementwise wrapping (integer) or IEEE (float) multiplication.
pub fn mul<E: ArithLane, const N: usize>(
    a: Vector<E, N>,
    b: Vector<E, N>,
) -> Result<Vector<E, N>> {
    Ok(Vector::from_fn(|i| a.lanes()[i].lane_mul(b.lanes()[i])))
}

/// Elementwise division. Integer division by zero in any lane is an
/// arithmetic error; float lanes follow IEEE-754.
pub fn div<E: ArithLane, const N: usize>(
    a: Vector<E, N>,
    b: Vector<E, N>,
) -> Result<Vector<E, N>> {
    Vector::try_from_fn(|i| a.lanes()[i].lane_div(b.lanes()[i]))
}

fn single<E: ArithLane, const N: usize, F: FnOnce(E, E) -> Result<E>>(
    a: Vector<E, N>,
    b: Vector<E, N>,
    f: F,
) -> Result<Vector<E, N>> {
    let mut result = a;
    if N > 0 {
        result.set(0, f(a.lanes()[0], b.lanes()[0])?)?;
    }
    Ok(result)
}

/// Lane 0 sum, remaining lanes copied from the first operand.
pub fn add_single<E: ArithLane, const N: usize>(
    a: Vector<E, N>,
    b: Vector<E, N>,
) -> Result<Vector<E, N>> {
    single(a, b, |x, y| Ok(x.lane_add(y)))
}

/// Lane 0 difference, remaining lanes copied from the first operand.
pub fn sub_single<E: ArithLane, const N: usize>(
    a: Vector<E, N>,
    b: Vector<E, N>,
) -> Result<Vector<E, N>> {
    single(a, b, |x, y| Ok(x.lane_sub(y)))
}

/// Lane 0 product, remaining lanes copied from the first operand.
pub fn mul_single<E: ArithLane, const N: usize>(
    a: Vector<E, N>,
    b: Vector<E, N>,
) -> Result<Vector<E, N>> {
    single(a, b, |x, y| Ok(x.lane_mul(y)))
}

/// Lane 0 quotient, remaining lanes copied from the first operand.
pub fn div_single<E: ArithLane, const N: usize>(
    a: Vector<E, N>,
    b: Vector<E, N>,
) -> Result<Vector<E, N>> {
    single(a, b, |x, y| x.lane_div(y))
}

/// Elementwise saturating addition.
pub fn adds<E: IntLane, const N: usize>(a: Vector<E, N>, b: Vector<E, N>) -> Result<Vector<E, N>> {
    Ok(Vector::from_fn(|i| a.lanes()[i].sat_add(b.lanes()[i])))
}

/// Elementwise saturating subtraction.
pub fn subs<E: IntLane, const N: usize>(a: Vector<E, N>, b: Vector<E, N>) -> Result<Vector<E, N>> {
    Ok(Vector::from_fn(|i| a.lanes()[i].sat_sub(b.lanes()[i])))
}

/// Elementwise wrapping negation.
pub fn neg<E: ArithLane, const N: usize>(v: Vector<E, N>) -> Result<Vector<E, N>> {
    Ok(Vector::from_fn(|i| v.lanes()[i].lane_neg()))
}

/// Elementwise saturating negation: the signed minimum negates to the
/// maximum instead of wrapping.
pub fn qneg<E: IntLane, const N: usize>(v: Vector<E, N>) -> Result<Vector<E, N>> {
    Ok(Vector::from_fn(|i| v.lanes()[i].sat_neg()))
}

/// Elementwise absolute value; the signed minimum wraps to itself.
pub fn abs<E: ArithLane, const N: usize>(v: Vector<E, N>) -> Result<Vector<E, N>> {
    Ok(Vector::from_fn(|i| v.lanes()[i].lane_abs()))
}

/// Elementwise saturating absolute value.
pub fn qabs<E: IntLane, const N: usize>(v: Vector<E, N>) -> Result<Vector<E, N>> {
    Ok(Vector::from_fn(|i| v.lanes()[i].sat_abs()))
}

/// Elementwise minimum; for float lanes the second operand wins when the
/// pair is unordered.
pub fn min<E: ArithLane, const N: usize>(
    a: Vector<E, N>,
    b: Vector<E, N>,
) -> Result<Vector<E, N>> {
    Ok(Vector::from_fn(|i| a.lanes()[i].lane_min(b.lanes()[i])))
}

/// Elementwise maximum; for float lanes the second operand wins when the
/// pair is unordered.
pub fn max<E: ArithLane, const N: usize>(
    a: Vector<E, N>,
    b: Vector<E, N>,
) -> Result<Vector<E, N>> {
    Ok(Vector::from_fn(|i| a.lanes()[i].lane_max(b.lanes()[i])))
}

/// Elementwise halving addition, `(a + b) >> 1` without intermediate
/// overflow.
pub fn hadd<E: IntLane, const N: usize>(a: Vector<E, N>, b: Vector<E, N>) -> Result<Vector<E, N>> {
    Ok(Vector::from_fn(|i| a.lanes()[i].halving_add(b.lanes()[i])))
}

/// Elementwise rounding halving addition, `(a + b + 1) >> 1`.
pub fn rhadd<E: IntLane, const N: usize>(a: Vector<E, N>, b: Vector<E, N>) -> Result<Vector<E, N>> {
    Ok(Vector::from_fn(|i| {
        a.lanes()[i].rounding_halving_add(b.lanes()[i])
    }))
}

/// Elementwise halving subtraction, `(a - b) >> 1`.
pub fn hsub<E: IntLane, const N: usize>(a: Vector<E, N>, b: Vector<E, N>) -> Result<Vector<E, N>> {
    Ok(Vector::from_fn(|i| a.lanes()[i].halving_sub(b.lanes()[i])))
}

/// Multiply-accumulate: `acc + a * b` per lane, wrapping.
pub fn mla<E: ArithLane, const N: usize>(
    acc: Vector<E, N>,
    a: Vector<E, N>,
    b: Vector<E, N>,
) -> Result<Vector<E, N>> {
    Ok(Vector::from_fn(|i| {
        acc.lanes()[i].lane_add(a.lanes()[i].lane_mul(b.lanes()[i]))
    }))
}

/// Multiply-subtract: `acc - a * b` per lane, wrapping.
pub fn mls<E: ArithLane, const N: usize>(
    acc: Vector<E, N>,
    a: Vector<E, N>,
    b: Vector<E, N>,
) -> Result<Vector<E, N>> {
    Ok(Vector::from_fn(|i| {
        acc.lanes()[i].lane_sub(a.lanes()[i].lane_mul(b.lanes()[i]))
    }))
}

/// Multiplies every lane by one scalar.
pub fn mul_n<E: ArithLane, const N: usize>(a: Vector<E, N>, x: E) -> Result<Vector<E, N>> {
    mul(a, set1(x)?)
}

/// Multiplies every lane of `a` by lane `i` of `b`.
pub fn mul_lane<E: ArithLane, const N: usize>(
    a: Vector<E, N>,
    b: Vector<E, N>,
    i: usize,
) -> Result<Vector<E, N>> {
    mul(a, dup_lane(b, i)?)
}

/// Multiply-accumulate against a scalar: `acc + a * x` per lane.
pub fn mla_n<E: ArithLane, const N: usize>(
    acc: Vector<E, N>,
    a: Vector<E, N>,
    x: E,
) -> Result<Vector<E, N>> {
    mla(acc, a, set1(x)?)
}

/// Multiply-accumulate against one lane: `acc + a * b[i]` per lane.
pub fn mla_lane<E: ArithLane, const N: usize>(
    acc: Vector<E, N>,
    a: Vector<E, N>,
    b: Vector<E, N>,
    i: usize,
) -> Result<Vector<E, N>> {
    mla(acc, a, dup_lane(b, i)?)
}

/// Multiply-subtract against a scalar: `acc - a * x` per lane.
pub fn mls_n<E: ArithLane, const N: usize>(
    acc: Vector<E, N>,
    a: Vector<E, N>,
    x: E,
) -> Result<Vector<E, N>> {
    mls(acc, a, set1(x)?)
}

/// Multiply-subtract against one lane: `acc - a * b[i]` per lane.
pub fn mls_lane<E: ArithLane, const N: usize>(
    acc: Vector<E, N>,
    a: Vector<E, N>,
    b: Vector<E, N>,
    i: usize,
) -> Result<Vector<E, N>> {
    mls(acc, a, dup_lane(b, i)?)
}

/// Sum of absolute differences: `Σ |a[i] - b[i]|` accumulated at double
/// width and placed in lane 0 of an otherwise-zero register with `M`
/// wide lanes, where `N == 2 * M`.
pub fn sad<E: WidenLane, const N: usize, const M: usize>(
    a: Vector<E, N>,
    b: Vector<E, N>,
) -> Result<Vector<E::Wide, M>> {
    if N != 2 * M {
        return Err(kinds::shape_mismatch());
    }
    let mut sum = E::Wide::ZERO;
    for i in 0..N {
        // max - min at double width is the absolute difference for both
        // signed and unsigned elements.
        let x = a.lanes()[i].widen();
        let y = b.lanes()[i].widen();
        sum = sum.lane_add(x.lane_max(y).lane_sub(x.lane_min(y)));
    }
    let mut result = Vector::<E::Wide, M>::default();
    result.set(0, sum)?;
    Ok(result)
}

/// Elementwise reciprocal, `1 / x`.
pub fn rcp<E: FloatLane, const N: usize>(v: Vector<E, N>) -> Result<Vector<E, N>> {
    Ok(Vector::from_fn(|i| v.lanes()[i].lane_recip()))
}

/// Lane 0 reciprocal, remaining lanes copied from the operand.
pub fn rcp_single<E: FloatLane, const N: usize>(v: Vector<E, N>) -> Result<Vector<E, N>> {
    single(v, v, |x, _| Ok(x.lane_recip()))
}

/// Elementwise reciprocal square root, `1 / sqrt(x)`.
pub fn rsqrt<E: FloatLane, const N: usize>(v: Vector<E, N>) -> Result<Vector<E, N>> {
    Ok(Vector::from_fn(|i| v.lanes()[i].lane_rsqrt()))
}

/// Lane 0 reciprocal square root, remaining lanes copied from the
/// operand.
pub fn rsqrt_single<E: FloatLane, const N: usize>(v: Vector<E, N>) -> Result<Vector<E, N>> {
    single(v, v, |x, _| Ok(x.lane_rsqrt()))
}

/// Elementwise square root.
pub fn sqrt<E: FloatLane, const N: usize>(v: Vector<E, N>) -> Result<Vector<E, N>> {
    Ok(Vector::from_fn(|i| v.lanes()[i].lane_sqrt()))
}

/// Lane 0 square root, remaining lanes copied from the operand.
pub fn sqrt_single<E: FloatLane, const N: usize>(v: Vector<E, N>) -> Result<Vector<E, N>> {
    single(v, v, |x, _| Ok(x.lane_sqrt()))
}
