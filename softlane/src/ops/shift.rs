// Copyright (c) 2025 The Softlane Project Developers
// SPDX-License-Identifier: MIT
// Project: Softlane
// Module: softlane::ops::shift

//! Shift engine.
//!
//! Register-count shifts (`sll`/`srl`/`sra`) read the shift amount from
//! lane 0 of the second operand and apply it to every lane of the first,
//! matching the emulated instructions. Immediate forms take the count
//! directly. Out-of-range counts never trap: left shifts zero the lane,
//! logical right shifts zero it, arithmetic right shifts fill it with the
//! sign bit. The register-count left shift keeps the historical guard that
//! zeroes one count before the lane width; the immediate form shares it.

use crate::prelude::Result;
use crate::traits::{IntLane, LaneElement, MaskLane, ShiftLane};
use crate::vector::Vector;

fn count_lane<E: LaneElement, const N: usize>(count: &Vector<E, N>) -> u32 {
    count
        .lanes()
        .first()
        .map_or(0, |c| c.to_bits().shift_count())
}

/// Logical left shift of every lane by lane 0 of `count`.
///
/// Lanes zero when the count reaches `BITS - 1`.
pub fn sll<E: ShiftLane, const N: usize>(
    a: Vector<E, N>,
    count: Vector<E, N>,
) -> Result<Vector<E, N>> {
    slli(a, count_lane(&count))
}

/// Logical right shift of every lane by lane 0 of `count`.
pub fn srl<E: ShiftLane, const N: usize>(
    a: Vector<E, N>,
    count: Vector<E, N>,
) -> Result<Vector<E, N>> {
    srli(a, count_lane(&count))
}

/// Arithmetic right shift of every lane by lane 0 of `count`.
pub fn sra<E: ShiftLane, const N: usize>(
    a: Vector<E, N>,
    count: Vector<E, N>,
) -> Result<Vector<E, N>> {
    srai(a, count_lane(&count))
}

/// Logical left shift by an immediate count.
///
/// Lanes zero when `count >= BITS - 1`, same guard as [`sll`].
pub fn slli<E: ShiftLane, const N: usize>(a: Vector<E, N>, count: u32) -> Result<Vector<E, N>> {
    Ok(Vector::from_fn(|i| a.lanes()[i].shl_guarded(count)))
}

/// Logical right shift by an immediate count; lanes zero at `count >= BITS`.
pub fn srli<E: ShiftLane, const N: usize>(a: Vector<E, N>, count: u32) -> Result<Vector<E, N>> {
    Ok(Vector::from_fn(|i| a.lanes()[i].shr_logical(count)))
}

/// Arithmetic right shift by an immediate count; the sign bit fills the
/// lane at `count >= BITS`.
pub fn srai<E: ShiftLane, const N: usize>(a: Vector<E, N>, count: u32) -> Result<Vector<E, N>> {
    Ok(Vector::from_fn(|i| a.lanes()[i].shr_arith(count)))
}

/// Per-lane shift by signed counts: lane `i` of `a` shifts left by
/// `counts[i]` when non-negative, right (arithmetically for signed types)
/// by its magnitude otherwise.
pub fn shl_reg<E: ShiftLane, const N: usize>(
    a: Vector<E, N>,
    counts: Vector<E, N>,
) -> Result<Vector<E, N>> {
    Ok(Vector::from_fn(|i| {
        a.lanes()[i].shl_signed(counts.lanes()[i].signed_count())
    }))
}

/// Rounding right shift by an immediate count: `(a + (1 << (count - 1)))
/// >> count` evaluated without intermediate overflow.
pub fn rshr<E: ShiftLane, const N: usize>(a: Vector<E, N>, count: u32) -> Result<Vector<E, N>> {
    Ok(Vector::from_fn(|i| a.lanes()[i].rounding_shr(count)))
}
