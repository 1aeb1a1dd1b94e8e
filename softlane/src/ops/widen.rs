// Copyright (c) 2025 The Softlane Project Developers
// SPDX-License-Identifier: MIT
// Project: Softlane
// Module: softlane::ops::widen

//! Width-conversion engine: widening arithmetic, narrowing packs, and
//! lane-wise numeric conversion.
//!
//! Operations that change the lane width cannot relate the two lane counts
//! in the type system, so each one validates the shape at run time and
//! reports a validation error on mismatch. Widening products are computed
//! in the double-width type and never lose bits; narrowing either
//! saturates to the destination range or truncates, as each operation
//! documents.

use softlane_error::kinds;

use crate::ops::lanes::dup_lane;
use crate::prelude::Result;
use crate::traits::{ArithLane, ConvertLane, IntLane, LaneElement, NarrowLane, WidenLane};
use crate::vector::Vector;

/// High half of the double-width product of each lane pair.
pub fn mulhi<E: WidenLane, const N: usize>(
    a: Vector<E, N>,
    b: Vector<E, N>,
) -> Result<Vector<E, N>> {
    Ok(Vector::from_fn(|i| {
        a.lanes()[i].widen().lane_mul(b.lanes()[i].widen()).high_half()
    }))
}

/// Low half of the double-width product of each lane pair.
pub fn mullo<E: WidenLane, const N: usize>(
    a: Vector<E, N>,
    b: Vector<E, N>,
) -> Result<Vector<E, N>> {
    Ok(Vector::from_fn(|i| {
        a.lanes()[i].widen().lane_mul(b.lanes()[i].widen()).wrap_narrow()
    }))
}

/// Multiplies adjacent lane pairs in the double-width type and sums each
/// pair: output lane `j` is `a[2j]*b[2j] + a[2j+1]*b[2j+1]`.
///
/// The output has half the lane count at twice the width; `N != 2 * M` is
/// a shape error.
pub fn madd<E: WidenLane, const N: usize, const M: usize>(
    a: Vector<E, N>,
    b: Vector<E, N>,
) -> Result<Vector<E::Wide, M>> {
    if N != 2 * M {
        return Err(kinds::shape_mismatch());
    }
    Ok(Vector::from_fn(|j| {
        let lo = a.lanes()[2 * j].widen().lane_mul(b.lanes()[2 * j].widen());
        let hi = a.lanes()[2 * j + 1].widen().lane_mul(b.lanes()[2 * j + 1].widen());
        lo.lane_add(hi)
    }))
}

/// Widening addition: each lane pair is extended to the double-width type
/// before adding, so the sum never wraps.
pub fn addl<E: WidenLane, const N: usize>(
    a: Vector<E, N>,
    b: Vector<E, N>,
) -> Result<Vector<E::Wide, N>> {
    Ok(Vector::from_fn(|i| {
        a.lanes()[i].widen().lane_add(b.lanes()[i].widen())
    }))
}

/// Widening subtraction.
pub fn subl<E: WidenLane, const N: usize>(
    a: Vector<E, N>,
    b: Vector<E, N>,
) -> Result<Vector<E::Wide, N>> {
    Ok(Vector::from_fn(|i| {
        a.lanes()[i].widen().lane_sub(b.lanes()[i].widen())
    }))
}

/// Widening multiplication; the full double-width product of each pair.
pub fn mull<E: WidenLane, const N: usize>(
    a: Vector<E, N>,
    b: Vector<E, N>,
) -> Result<Vector<E::Wide, N>> {
    Ok(Vector::from_fn(|i| {
        a.lanes()[i].widen().lane_mul(b.lanes()[i].widen())
    }))
}

/// Adds a narrow register to a wide one, extending each narrow lane first.
pub fn addw<W: NarrowLane, const N: usize>(
    a: Vector<W, N>,
    b: Vector<W::Narrow, N>,
) -> Result<Vector<W, N>> {
    Ok(Vector::from_fn(|i| {
        a.lanes()[i].lane_add(b.lanes()[i].widen())
    }))
}

/// Subtracts a narrow register from a wide one, extending each narrow lane
/// first.
pub fn subw<W: NarrowLane, const N: usize>(
    a: Vector<W, N>,
    b: Vector<W::Narrow, N>,
) -> Result<Vector<W, N>> {
    Ok(Vector::from_fn(|i| {
        a.lanes()[i].lane_sub(b.lanes()[i].widen())
    }))
}

/// Widening multiply-accumulate: `acc + a * b` with the product taken in
/// the double-width type.
pub fn mlal<E: WidenLane, const N: usize>(
    acc: Vector<E::Wide, N>,
    a: Vector<E, N>,
    b: Vector<E, N>,
) -> Result<Vector<E::Wide, N>> {
    Ok(Vector::from_fn(|i| {
        acc.lanes()[i].lane_add(a.lanes()[i].widen().lane_mul(b.lanes()[i].widen()))
    }))
}

/// Widening multiply-subtract: `acc - a * b` with the product taken in the
/// double-width type.
pub fn mlsl<E: WidenLane, const N: usize>(
    acc: Vector<E::Wide, N>,
    a: Vector<E, N>,
    b: Vector<E, N>,
) -> Result<Vector<E::Wide, N>> {
    Ok(Vector::from_fn(|i| {
        acc.lanes()[i].lane_sub(a.lanes()[i].widen().lane_mul(b.lanes()[i].widen()))
    }))
}

/// Narrows two wide registers into one with saturation: lanes `0..N` come
/// from `a`, lanes `N..2N` from `b`, each clamped to the narrow range.
///
/// `M != 2 * N` is a shape error.
pub fn pack<W: NarrowLane, const N: usize, const M: usize>(
    a: Vector<W, N>,
    b: Vector<W, N>,
) -> Result<Vector<W::Narrow, M>> {
    if M != 2 * N {
        return Err(kinds::shape_mismatch());
    }
    Ok(Vector::from_fn(|i| {
        if i < N {
            a.lanes()[i].saturate_narrow()
        } else {
            b.lanes()[i - N].saturate_narrow()
        }
    }))
}

/// Wrapping add, then the high half of each sum as the narrow type.
pub fn addhn<W: NarrowLane, const N: usize>(
    a: Vector<W, N>,
    b: Vector<W, N>,
) -> Result<Vector<W::Narrow, N>> {
    Ok(Vector::from_fn(|i| {
        a.lanes()[i].lane_add(b.lanes()[i]).high_half()
    }))
}

/// Wrapping subtract, then the high half of each difference.
pub fn subhn<W: NarrowLane, const N: usize>(
    a: Vector<W, N>,
    b: Vector<W, N>,
) -> Result<Vector<W::Narrow, N>> {
    Ok(Vector::from_fn(|i| {
        a.lanes()[i].lane_sub(b.lanes()[i]).high_half()
    }))
}

/// Saturating add, then the high half of each sum.
pub fn raddhn<W: NarrowLane, const N: usize>(
    a: Vector<W, N>,
    b: Vector<W, N>,
) -> Result<Vector<W::Narrow, N>> {
    Ok(Vector::from_fn(|i| {
        a.lanes()[i].sat_add(b.lanes()[i]).high_half()
    }))
}

/// Lane-wise numeric conversion at equal lane count.
///
/// Float-to-integer truncates toward zero, saturates at the destination
/// range, and maps NaN to zero; integer-to-float rounds to nearest.
pub fn cvt<E: ConvertLane<T>, T: LaneElement, const N: usize>(
    a: Vector<E, N>,
) -> Result<Vector<T, N>> {
    Ok(Vector::from_fn(|i| a.lanes()[i].convert()))
}

/// Lane-indexed conversion: broadcasts lane `i` of the source, then
/// converts every lane, so the whole result carries the converted value
/// of that one lane.
pub fn cvt_n<E: ConvertLane<T>, T: LaneElement, const N: usize>(
    v: Vector<E, N>,
    i: usize,
) -> Result<Vector<T, N>> {
    cvt(dup_lane(v, i)?)
}
