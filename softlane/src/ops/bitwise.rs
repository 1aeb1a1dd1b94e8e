// Copyright (c) 2025 The Softlane Project Developers
// SPDX-License-Identifier: MIT
// Project: Softlane
// Module: softlane::ops::bitwise

//! Bitwise engine: boolean operations over the raw register bits.
//!
//! These operate on each lane's bit pattern and are independent of the
//! numeric interpretation of the element type; applying them per lane is
//! equivalent to applying them over the register's bytes.

use crate::prelude::Result;
use crate::traits::{LaneElement, MaskLane};
use crate::vector::Vector;

fn bitwise<E: LaneElement, const N: usize, F: Fn(E::Bits, E::Bits) -> E::Bits>(
    a: Vector<E, N>,
    b: Vector<E, N>,
    f: F,
) -> Vector<E, N> {
    Vector::from_fn(|i| E::from_bits(f(a.lanes()[i].to_bits(), b.lanes()[i].to_bits())))
}

/// Bitwise AND over the full register.
pub fn and<E: LaneElement, const N: usize>(
    a: Vector<E, N>,
    b: Vector<E, N>,
) -> Result<Vector<E, N>> {
    Ok(bitwise(a, b, MaskLane::bit_and))
}

/// Bitwise OR over the full register.
pub fn or<E: LaneElement, const N: usize>(
    a: Vector<E, N>,
    b: Vector<E, N>,
) -> Result<Vector<E, N>> {
    Ok(bitwise(a, b, MaskLane::bit_or))
}

/// Bitwise XOR over the full register.
pub fn xor<E: LaneElement, const N: usize>(
    a: Vector<E, N>,
    b: Vector<E, N>,
) -> Result<Vector<E, N>> {
    Ok(bitwise(a, b, MaskLane::bit_xor))
}

/// `(!a) & b` — the first operand is complemented.
pub fn andnot<E: LaneElement, const N: usize>(
    a: Vector<E, N>,
    b: Vector<E, N>,
) -> Result<Vector<E, N>> {
    Ok(bitwise(a, b, |x, y| x.bit_not().bit_and(y)))
}

/// `!(a & b)` — complemented AND.
pub fn bic<E: LaneElement, const N: usize>(
    a: Vector<E, N>,
    b: Vector<E, N>,
) -> Result<Vector<E, N>> {
    Ok(bitwise(a, b, |x, y| x.bit_and(y).bit_not()))
}

/// `!(a | b)` — complemented OR.
pub fn orn<E: LaneElement, const N: usize>(
    a: Vector<E, N>,
    b: Vector<E, N>,
) -> Result<Vector<E, N>> {
    Ok(bitwise(a, b, |x, y| x.bit_or(y).bit_not()))
}
