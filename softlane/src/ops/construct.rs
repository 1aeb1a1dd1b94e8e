// Copyright (c) 2025 The Softlane Project Developers
// SPDX-License-Identifier: MIT
// Project: Softlane
// Module: softlane::ops::construct

//! Construction and transfer engine: building registers from scalars and
//! moving them to and from element buffers.
//!
//! Loads and stores take element slices, not byte slices; the byte codec
//! lives on [`Vector`] itself. Buffers may be longer than needed, but a
//! short buffer is a length error. The multi-register forms interleave:
//! consecutive buffer elements cycle through the group's member registers,
//! which is what de-interleaves structure-of-arrays data on load and
//! re-interleaves it on store.

use softlane_error::kinds;

use crate::prelude::Result;
use crate::traits::LaneElement;
use crate::vector::{Group, Vector};

/// Builds a register with lane 0 taking the first array element.
pub fn set<E: LaneElement, const N: usize>(lanes: [E; N]) -> Result<Vector<E, N>> {
    Ok(Vector::from_lanes(lanes))
}

/// Builds a register in reversed order: lane 0 takes the last array
/// element.
pub fn setr<E: LaneElement, const N: usize>(lanes: [E; N]) -> Result<Vector<E, N>> {
    Ok(Vector::from_fn(|i| lanes[N - 1 - i]))
}

/// Broadcasts one value into every lane.
pub fn set1<E: LaneElement, const N: usize>(value: E) -> Result<Vector<E, N>> {
    Ok(Vector::from_fn(|_| value))
}

/// Broadcasts one value into every lane. Alias of [`set1`] kept for the
/// duplicate-scalar instruction family.
pub fn dup<E: LaneElement, const N: usize>(value: E) -> Result<Vector<E, N>> {
    set1(value)
}

/// The all-zero register.
pub fn zero<E: LaneElement, const N: usize>() -> Result<Vector<E, N>> {
    Ok(Vector::default())
}

/// Loads a register from the first `N` elements of `src`.
pub fn load<E: LaneElement, const N: usize>(src: &[E]) -> Result<Vector<E, N>> {
    if src.len() < N {
        return Err(kinds::length_mismatch());
    }
    Ok(Vector::from_fn(|i| src[i]))
}

/// Stores a register into the first `N` elements of `out`.
pub fn store<E: LaneElement, const N: usize>(v: Vector<E, N>, out: &mut [E]) -> Result<()> {
    if out.len() < N {
        return Err(kinds::length_mismatch());
    }
    out[..N].copy_from_slice(v.lanes());
    Ok(())
}

/// Loads one element into lane 0 and zeroes the remaining lanes.
pub fn load_single<E: LaneElement, const N: usize>(src: &[E]) -> Result<Vector<E, N>> {
    if src.is_empty() {
        return Err(kinds::length_mismatch());
    }
    let mut v = Vector::default();
    v.set(0, src[0])?;
    Ok(v)
}

/// Loads one element and broadcasts it into every lane.
pub fn load_dup<E: LaneElement, const N: usize>(src: &[E]) -> Result<Vector<E, N>> {
    if src.is_empty() {
        return Err(kinds::length_mismatch());
    }
    set1(src[0])
}

/// Loads one element into lane `pos`, keeping the other lanes of `v`.
pub fn load_lane<E: LaneElement, const N: usize>(
    v: Vector<E, N>,
    src: &[E],
    pos: usize,
) -> Result<Vector<E, N>> {
    if src.is_empty() {
        return Err(kinds::length_mismatch());
    }
    let mut out = v;
    out.set(pos, src[0])?;
    Ok(out)
}

/// Stores lane `pos` of `v` into the first element of `out`.
pub fn store_lane<E: LaneElement, const N: usize>(
    v: Vector<E, N>,
    out: &mut [E],
    pos: usize,
) -> Result<()> {
    if out.is_empty() {
        return Err(kinds::length_mismatch());
    }
    out[0] = v.get(pos)?;
    Ok(())
}

/// Interleaves the low halves of two registers: the output alternates
/// `a[0], b[0], a[1], b[1], ...` drawn from lanes `0..N/2`.
///
/// Odd lane counts cannot interleave and report a shape error.
pub fn unpack_low<E: LaneElement, const N: usize>(
    a: Vector<E, N>,
    b: Vector<E, N>,
) -> Result<Vector<E, N>> {
    if N % 2 != 0 {
        return Err(kinds::shape_mismatch());
    }
    Ok(Vector::from_fn(|i| {
        let k = i / 2;
        if i % 2 == 0 { a.lanes()[k] } else { b.lanes()[k] }
    }))
}

/// Interleaves the high halves of two registers, lanes `N/2..N`.
pub fn unpack_high<E: LaneElement, const N: usize>(
    a: Vector<E, N>,
    b: Vector<E, N>,
) -> Result<Vector<E, N>> {
    if N % 2 != 0 {
        return Err(kinds::shape_mismatch());
    }
    Ok(Vector::from_fn(|i| {
        let k = N / 2 + i / 2;
        if i % 2 == 0 { a.lanes()[k] } else { b.lanes()[k] }
    }))
}

/// Loads `K` registers from `N * K` consecutive elements, de-interleaving:
/// element `i` lands in lane `i / K` of member register `i % K`.
pub fn load_deinterleaved<E: LaneElement, const N: usize, const K: usize>(
    src: &[E],
) -> Result<Group<E, N, K>> {
    if src.len() < N * K {
        return Err(kinds::length_mismatch());
    }
    let mut group = Group::default();
    for (i, &value) in src.iter().enumerate().take(N * K) {
        group.set_lane(i % K, i / K, value)?;
    }
    Ok(group)
}

/// Stores `K` registers into `N * K` consecutive elements, re-interleaving:
/// lane `i / K` of member register `i % K` lands in element `i`.
pub fn store_interleaved<E: LaneElement, const N: usize, const K: usize>(
    group: &Group<E, N, K>,
    out: &mut [E],
) -> Result<()> {
    if out.len() < N * K {
        return Err(kinds::length_mismatch());
    }
    for (i, slot) in out.iter_mut().enumerate().take(N * K) {
        *slot = group.get_lane(i % K, i / K)?;
    }
    Ok(())
}

/// Loads `K` elements into lane `pos` of each member register, keeping the
/// other lanes of `group`.
pub fn load_group_lane<E: LaneElement, const N: usize, const K: usize>(
    group: Group<E, N, K>,
    src: &[E],
    pos: usize,
) -> Result<Group<E, N, K>> {
    if src.len() < K {
        return Err(kinds::length_mismatch());
    }
    let mut out = group;
    for (k, &value) in src.iter().enumerate().take(K) {
        out.set_lane(k, pos, value)?;
    }
    Ok(out)
}

/// Loads `K` elements, broadcasting element `k` into every lane of member
/// register `k`.
pub fn load_group_dup<E: LaneElement, const N: usize, const K: usize>(
    src: &[E],
) -> Result<Group<E, N, K>> {
    if src.len() < K {
        return Err(kinds::length_mismatch());
    }
    let mut group = Group::default();
    for k in 0..K {
        group.set(k, set1(src[k])?)?;
    }
    Ok(group)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_orders_lanes_naturally_setr_reverses() {
        assert_eq!(set([1i16, 2, 3, 4]), Ok(Vector::from_lanes([1, 2, 3, 4])));
        assert_eq!(setr([1i16, 2, 3, 4]), Ok(Vector::from_lanes([4, 3, 2, 1])));
    }

    #[test]
    fn broadcast_and_zero() {
        assert_eq!(set1::<u8, 4>(7), Ok(Vector::from_lanes([7; 4])));
        assert_eq!(dup::<u8, 4>(7), set1::<u8, 4>(7));
        assert_eq!(zero::<i32, 2>(), Ok(Vector::from_lanes([0, 0])));
    }

    #[test]
    fn load_store_round_trip() -> Result<()> {
        let data = [10i16, 20, 30, 40, 50];
        let v = load::<i16, 4>(&data)?;
        assert_eq!(v, Vector::from_lanes([10, 20, 30, 40]));
        let mut out = [0i16; 5];
        store(v, &mut out)?;
        assert_eq!(out, [10, 20, 30, 40, 0]);
        assert!(load::<i16, 4>(&data[..3]).is_err());
        assert!(store(v, &mut out[..3]).is_err());
        Ok(())
    }

    #[test]
    fn single_and_dup_loads() {
        assert_eq!(
            load_single::<i16, 4>(&[9]),
            Ok(Vector::from_lanes([9, 0, 0, 0]))
        );
        assert_eq!(load_dup::<i16, 4>(&[9]), Ok(Vector::from_lanes([9; 4])));
        assert!(load_single::<i16, 4>(&[]).is_err());
    }

    #[test]
    fn lane_loads_and_stores() -> Result<()> {
        let v = Vector::<u8, 4>::from_lanes([1, 2, 3, 4]);
        assert_eq!(
            load_lane(v, &[9], 2),
            Ok(Vector::from_lanes([1, 2, 9, 4]))
        );
        assert!(load_lane(v, &[9], 4).is_err());
        let mut out = [0u8; 1];
        store_lane(v, &mut out, 3)?;
        assert_eq!(out, [4]);
        assert!(store_lane(v, &mut out, 4).is_err());
        Ok(())
    }

    #[test]
    fn unpack_interleaves_halves() {
        let a = Vector::<u8, 4>::from_lanes([1, 2, 3, 4]);
        let b = Vector::<u8, 4>::from_lanes([5, 6, 7, 8]);
        assert_eq!(unpack_low(a, b), Ok(Vector::from_lanes([1, 5, 2, 6])));
        assert_eq!(unpack_high(a, b), Ok(Vector::from_lanes([3, 7, 4, 8])));
    }

    #[test]
    fn deinterleave_then_interleave_restores_buffer() -> Result<()> {
        // x/y pairs: member 0 collects the x values, member 1 the y values.
        let src = [1i16, -1, 2, -2, 3, -3, 4, -4];
        let g = load_deinterleaved::<i16, 4, 2>(&src)?;
        assert_eq!(g.get(0)?, Vector::from_lanes([1, 2, 3, 4]));
        assert_eq!(g.get(1)?, Vector::from_lanes([-1, -2, -3, -4]));
        let mut out = [0i16; 8];
        store_interleaved(&g, &mut out)?;
        assert_eq!(out, src);
        assert!(load_deinterleaved::<i16, 4, 2>(&src[..7]).is_err());
        Ok(())
    }

    #[test]
    fn group_lane_and_dup_loads() -> Result<()> {
        let g = load_group_dup::<u8, 4, 3>(&[1, 2, 3])?;
        assert_eq!(g.get(2)?, Vector::from_lanes([3; 4]));
        let g2 = load_group_lane(g, &[7, 8, 9], 1)?;
        assert_eq!(g2.get(0)?, Vector::from_lanes([1, 7, 1, 1]));
        assert_eq!(g2.get(2)?, Vector::from_lanes([3, 9, 3, 3]));
        assert!(load_group_lane(g, &[7, 8, 9], 4).is_err());
        assert!(load_group_dup::<u8, 4, 3>(&[1, 2]).is_err());
        Ok(())
    }
}
