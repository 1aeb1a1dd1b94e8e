// Copyright (c) 2025 The Softlane Project Developers
// SPDX-License-Identifier: MIT
// Project: Softlane
// Module: softlane::ops::cmp

//! Comparison & mask engine.
//!
//! Elementwise predicates produce a mask register of the operand's
//! unsigned bit type: each lane is all-bits-one when the predicate holds
//! and all-bits-zero otherwise. The `_single` forms compute the mask for
//! lane 0 only and carry the first operand's remaining lanes through as
//! raw bit patterns. The `comi` family compares lane 0 of each operand
//! and returns `1`/`0` directly.
//!
//! Float comparisons follow IEEE-754: every ordered predicate is false on
//! an unordered pair, `neq` and the negated predicates are true, and
//! `ord`/`unord` test for NaN explicitly.

use crate::prelude::Result;
use crate::traits::{FloatLane, IntLane, LaneElement, MaskLane};
use crate::vector::Vector;

fn mask_lane<E: LaneElement>(set: bool) -> E::Bits {
    if set {
        E::Bits::ALL
    } else {
        E::Bits::ZERO
    }
}

fn compare<E: LaneElement, const N: usize, F: Fn(E, E) -> bool>(
    a: Vector<E, N>,
    b: Vector<E, N>,
    pred: F,
) -> Vector<E::Bits, N> {
    Vector::from_fn(|i| mask_lane::<E>(pred(a.lanes()[i], b.lanes()[i])))
}

fn compare_single<E: LaneElement, const N: usize, F: Fn(E, E) -> bool>(
    a: Vector<E, N>,
    b: Vector<E, N>,
    pred: F,
) -> Vector<E::Bits, N> {
    Vector::from_fn(|i| {
        if i == 0 {
            mask_lane::<E>(pred(a.lanes()[0], b.lanes()[0]))
        } else {
            a.lanes()[i].to_bits()
        }
    })
}

macro_rules! predicate_ops {
    ($($(#[$doc:meta])* $name:ident, $name_single:ident => $pred:expr;)*) => {$(
        $(#[$doc])*
        pub fn $name<E: LaneElement, const N: usize>(
            a: Vector<E, N>,
            b: Vector<E, N>,
        ) -> Result<Vector<E::Bits, N>> {
            Ok(compare(a, b, $pred))
        }

        /// Lane 0 form of the corresponding elementwise predicate; the
        /// first operand's remaining lanes pass through as bit patterns.
        pub fn $name_single<E: LaneElement, const N: usize>(
            a: Vector<E, N>,
            b: Vector<E, N>,
        ) -> Result<Vector<E::Bits, N>> {
            Ok(compare_single(a, b, $pred))
        }
    )*};
}

predicate_ops! {
    /// Elementwise equality mask.
    eq, eq_single => |x, y| x == y;
    /// Elementwise greater-than mask.
    gt, gt_single => |x, y| x > y;
    /// Elementwise greater-or-equal mask.
    ge, ge_single => |x, y| x >= y;
    /// Elementwise less-than mask.
    lt, lt_single => |x, y| x < y;
    /// Elementwise less-or-equal mask.
    le, le_single => |x, y| x <= y;
    /// Elementwise inequality mask; true on unordered float pairs.
    neq, neq_single => |x, y| x != y;
    /// Elementwise not-greater-than mask; true on unordered float pairs.
    ngt, ngt_single => |x, y| !(x > y);
    /// Elementwise not-greater-or-equal mask; true on unordered float
    /// pairs.
    nge, nge_single => |x, y| !(x >= y);
    /// Elementwise not-less-than mask; true on unordered float pairs.
    nlt, nlt_single => |x, y| !(x < y);
    /// Elementwise not-less-or-equal mask; true on unordered float pairs.
    nle, nle_single => |x, y| !(x <= y);
}

/// Elementwise ordered mask: all-ones where neither lane is NaN.
pub fn ord<E: FloatLane, const N: usize>(
    a: Vector<E, N>,
    b: Vector<E, N>,
) -> Result<Vector<E::Bits, N>> {
    Ok(compare(a, b, |x, y| !(x.is_nan() || y.is_nan())))
}

/// Elementwise unordered mask: all-ones where either lane is NaN.
pub fn unord<E: FloatLane, const N: usize>(
    a: Vector<E, N>,
    b: Vector<E, N>,
) -> Result<Vector<E::Bits, N>> {
    Ok(compare(a, b, |x, y| x.is_nan() || y.is_nan()))
}

/// Lane 0 ordered mask, remaining lanes passed through from the first
/// operand.
pub fn ord_single<E: FloatLane, const N: usize>(
    a: Vector<E, N>,
    b: Vector<E, N>,
) -> Result<Vector<E::Bits, N>> {
    Ok(compare_single(a, b, |x, y| !(x.is_nan() || y.is_nan())))
}

/// Lane 0 unordered mask, remaining lanes passed through from the first
/// operand.
pub fn unord_single<E: FloatLane, const N: usize>(
    a: Vector<E, N>,
    b: Vector<E, N>,
) -> Result<Vector<E::Bits, N>> {
    Ok(compare_single(a, b, |x, y| x.is_nan() || y.is_nan()))
}

macro_rules! comi_ops {
    ($($(#[$doc:meta])* $name:ident => $pred:expr;)*) => {$(
        $(#[$doc])*
        pub fn $name<E: LaneElement, const N: usize>(
            a: Vector<E, N>,
            b: Vector<E, N>,
        ) -> Result<i32> {
            let x = a.get(0)?;
            let y = b.get(0)?;
            Ok(i32::from($pred(x, y)))
        }
    )*};
}

comi_ops! {
    /// Scalar equality on lane 0, returning 1/0.
    comi_eq => |x, y| x == y;
    /// Scalar inequality on lane 0, returning 1/0.
    comi_neq => |x, y| x != y;
    /// Scalar greater-than on lane 0, returning 1/0.
    comi_gt => |x, y| x > y;
    /// Scalar greater-or-equal on lane 0, returning 1/0.
    comi_ge => |x, y| x >= y;
    /// Scalar less-than on lane 0, returning 1/0.
    comi_lt => |x, y| x < y;
    /// Scalar less-or-equal on lane 0, returning 1/0.
    comi_le => |x, y| x <= y;
}

/// Elementwise bit test: lanes become numeric `1` where `a & b` has any
/// bit set, `0` otherwise (a value predicate, not a mask).
pub fn tst<E: IntLane, const N: usize>(
    a: Vector<E, N>,
    b: Vector<E, N>,
) -> Result<Vector<E::Bits, N>> {
    Ok(Vector::from_fn(|i| {
        if a.lanes()[i].tst(b.lanes()[i]) {
            E::Bits::ONE
        } else {
            E::Bits::ZERO
        }
    }))
}

/// Elementwise greater-than on absolute values.
pub fn abs_gt<E: FloatLane, const N: usize>(
    a: Vector<E, N>,
    b: Vector<E, N>,
) -> Result<Vector<E::Bits, N>> {
    Ok(compare(a, b, |x, y| x.lane_abs() > y.lane_abs()))
}

/// Elementwise greater-or-equal on absolute values.
pub fn abs_ge<E: FloatLane, const N: usize>(
    a: Vector<E, N>,
    b: Vector<E, N>,
) -> Result<Vector<E::Bits, N>> {
    Ok(compare(a, b, |x, y| x.lane_abs() >= y.lane_abs()))
}

/// Elementwise less-than on absolute values.
pub fn abs_lt<E: FloatLane, const N: usize>(
    a: Vector<E, N>,
    b: Vector<E, N>,
) -> Result<Vector<E::Bits, N>> {
    Ok(compare(a, b, |x, y| x.lane_abs() < y.lane_abs()))
}

/// Elementwise less-or-equal on absolute values.
pub fn abs_le<E: FloatLane, const N: usize>(
    a: Vector<E, N>,
    b: Vector<E, N>,
) -> Result<Vector<E::Bits, N>> {
    Ok(compare(a, b, |x, y| x.lane_abs() <= y.lane_abs()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float_bits::FloatBits32;

    #[test]
    fn eq_on_equal_registers_is_all_ones() {
        let v = Vector::<i16, 4>::from_lanes([-5, 0, 5, i16::MAX]);
        assert_eq!(
            eq(v, v),
            Ok(Vector::from_lanes([u16::MAX; 4]))
        );
        let w = Vector::<i16, 4>::from_lanes([-5, 1, 5, i16::MAX]);
        assert_eq!(
            eq(v, w),
            Ok(Vector::from_lanes([u16::MAX, 0, u16::MAX, u16::MAX]))
        );
    }

    #[test]
    fn ordering_predicates_compare_both_operands() {
        let a = Vector::<i8, 4>::from_lanes([1, 5, -3, 0]);
        let b = Vector::<i8, 4>::from_lanes([2, 5, -4, 0]);
        assert_eq!(gt(a, b), Ok(Vector::from_lanes([0, 0, 0xff, 0])));
        assert_eq!(ge(a, b), Ok(Vector::from_lanes([0, 0xff, 0xff, 0xff])));
        assert_eq!(lt(a, b), Ok(Vector::from_lanes([0xff, 0, 0, 0])));
        assert_eq!(nlt(a, b), Ok(Vector::from_lanes([0, 0xff, 0xff, 0xff])));
    }

    #[test]
    fn float_masks_are_all_ones_bit_patterns() {
        let a = Vector::<f32, 2>::from_lanes([1.0, 2.0]);
        let b = Vector::<f32, 2>::from_lanes([1.0, 3.0]);
        let m = eq(a, b).map(Vector::into_lanes);
        assert_eq!(
            m.map(|l| (FloatBits32::from_bits(l[0]), l[1])),
            Ok((FloatBits32::ALL_SET, 0))
        );
    }

    #[test]
    fn nan_is_false_for_ordered_true_for_negated() {
        let a = Vector::<f32, 1>::from_lanes([f32::NAN]);
        let b = Vector::<f32, 1>::from_lanes([1.0]);
        assert_eq!(eq(a, b), Ok(Vector::from_lanes([0])));
        assert_eq!(gt(a, b), Ok(Vector::from_lanes([0])));
        assert_eq!(neq(a, b), Ok(Vector::from_lanes([u32::MAX])));
        assert_eq!(ngt(a, b), Ok(Vector::from_lanes([u32::MAX])));
    }

    #[test]
    fn ord_and_unord_detect_nan() {
        let a = Vector::<f32, 3>::from_lanes([1.0, f32::NAN, 2.0]);
        let b = Vector::<f32, 3>::from_lanes([1.0, 1.0, f32::NAN]);
        assert_eq!(
            ord(a, b),
            Ok(Vector::from_lanes([u32::MAX, 0, 0]))
        );
        assert_eq!(
            unord(a, b),
            Ok(Vector::from_lanes([0, u32::MAX, u32::MAX]))
        );
    }

    #[test]
    fn single_forms_pass_bit_patterns_through() {
        let a = Vector::<f32, 4>::from_lanes([1.0, 2.0, 3.0, 4.0]);
        let b = Vector::<f32, 4>::from_lanes([1.0, 9.0, 9.0, 9.0]);
        let m = eq_single(a, b).map(Vector::into_lanes);
        assert_eq!(
            m,
            Ok([
                u32::MAX,
                2.0f32.to_bits(),
                3.0f32.to_bits(),
                4.0f32.to_bits()
            ])
        );
    }

    #[test]
    fn comi_returns_zero_or_one() {
        let a = Vector::<f64, 2>::from_lanes([1.5, 0.0]);
        let b = Vector::<f64, 2>::from_lanes([1.5, 99.0]);
        assert_eq!(comi_eq(a, b), Ok(1));
        assert_eq!(comi_neq(a, b), Ok(0));
        assert_eq!(comi_le(a, b), Ok(1));
        assert_eq!(comi_gt(a, b), Ok(0));
        let n = Vector::<f64, 2>::from_lanes([f64::NAN, 0.0]);
        assert_eq!(comi_eq(n, b), Ok(0));
        assert_eq!(comi_neq(n, b), Ok(1));
    }

    #[test]
    fn tst_produces_numeric_ones() {
        let a = Vector::<u8, 4>::from_lanes([0b1100, 0b0011, 0, 0xff]);
        let b = Vector::<u8, 4>::from_lanes([0b0100, 0b1100, 0xff, 0x80]);
        assert_eq!(tst(a, b), Ok(Vector::from_lanes([1, 0, 0, 1])));
    }

    #[test]
    fn absolute_compares_ignore_sign() {
        let a = Vector::<f32, 2>::from_lanes([-3.0, 1.0]);
        let b = Vector::<f32, 2>::from_lanes([2.0, -2.0]);
        assert_eq!(abs_gt(a, b), Ok(Vector::from_lanes([u32::MAX, 0])));
        assert_eq!(abs_le(a, b), Ok(Vector::from_lanes([0, u32::MAX])));
    }
}
