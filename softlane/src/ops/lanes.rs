// Copyright (c) 2025 The Softlane Project Developers
// SPDX-License-Identifier: MIT
// Project: Softlane
// Module: softlane::ops::lanes

//! Lane-manipulation engine: extraction, insertion, register halves, and
//! the byte-group reversals and extract-concatenate forms.

use softlane_error::kinds;

use crate::prelude::Result;
use crate::traits::LaneElement;
use crate::vector::Vector;

/// Reads lane `i`.
pub fn get_lane<E: LaneElement, const N: usize>(v: Vector<E, N>, i: usize) -> Result<E> {
    v.get(i)
}

/// Returns `v` with lane `i` replaced.
pub fn set_lane<E: LaneElement, const N: usize>(
    v: Vector<E, N>,
    i: usize,
    value: E,
) -> Result<Vector<E, N>> {
    let mut out = v;
    out.set(i, value)?;
    Ok(out)
}

/// Broadcasts lane `i` of `v` into every lane.
pub fn dup_lane<E: LaneElement, const N: usize>(
    v: Vector<E, N>,
    i: usize,
) -> Result<Vector<E, N>> {
    let value = v.get(i)?;
    Ok(Vector::from_fn(|_| value))
}

/// Concatenates two registers: `a` fills the low lanes, `b` the high ones.
///
/// `M != 2 * N` is a shape error.
pub fn combine<E: LaneElement, const N: usize, const M: usize>(
    a: Vector<E, N>,
    b: Vector<E, N>,
) -> Result<Vector<E, M>> {
    if M != 2 * N {
        return Err(kinds::shape_mismatch());
    }
    Ok(Vector::from_fn(|i| {
        if i < N { a.lanes()[i] } else { b.lanes()[i - N] }
    }))
}

/// The low half of a register. `N != 2 * M` is a shape error.
pub fn get_low<E: LaneElement, const N: usize, const M: usize>(
    v: Vector<E, N>,
) -> Result<Vector<E, M>> {
    if N != 2 * M {
        return Err(kinds::shape_mismatch());
    }
    Ok(Vector::from_fn(|i| v.lanes()[i]))
}

/// The high half of a register. `N != 2 * M` is a shape error.
pub fn get_high<E: LaneElement, const N: usize, const M: usize>(
    v: Vector<E, N>,
) -> Result<Vector<E, M>> {
    if N != 2 * M {
        return Err(kinds::shape_mismatch());
    }
    Ok(Vector::from_fn(|i| v.lanes()[M + i]))
}

fn rev_within<E: LaneElement, const N: usize>(
    v: Vector<E, N>,
    group_bytes: usize,
) -> Result<Vector<E, N>> {
    // The element must be strictly smaller than the reversal group, the
    // group a whole number of elements, and the register a whole number of
    // groups.
    if E::BYTES >= group_bytes
        || group_bytes % E::BYTES != 0
        || Vector::<E, N>::byte_len() % group_bytes != 0
    {
        return Err(kinds::invalid_group());
    }
    let per_group = group_bytes / E::BYTES;
    Ok(Vector::from_fn(|i| {
        let base = (i / per_group) * per_group;
        v.lanes()[base + (per_group - 1 - (i % per_group))]
    }))
}

/// Reverses the element order within each 64-bit span of the register.
pub fn rev64<E: LaneElement, const N: usize>(v: Vector<E, N>) -> Result<Vector<E, N>> {
    rev_within(v, 8)
}

/// Reverses the element order within each 32-bit span of the register.
pub fn rev32<E: LaneElement, const N: usize>(v: Vector<E, N>) -> Result<Vector<E, N>> {
    rev_within(v, 4)
}

/// Reverses the element order within each 16-bit span of the register.
pub fn rev16<E: LaneElement, const N: usize>(v: Vector<E, N>) -> Result<Vector<E, N>> {
    rev_within(v, 2)
}

/// Extracts a sliding window from the concatenation of two registers:
/// lane `i` of the result is lane `offset + i` of `a ++ b`.
///
/// `offset >= N` is an offset error.
pub fn ext<E: LaneElement, const N: usize>(
    a: Vector<E, N>,
    b: Vector<E, N>,
    offset: usize,
) -> Result<Vector<E, N>> {
    if offset >= N {
        return Err(kinds::offset_out_of_bounds());
    }
    Ok(Vector::from_fn(|i| {
        let j = offset + i;
        if j < N { a.lanes()[j] } else { b.lanes()[j - N] }
    }))
}
