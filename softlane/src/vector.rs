// Copyright (c) 2025 The Softlane Project Developers
// SPDX-License-Identifier: MIT
// Project: Softlane
// Module: softlane::vector

//! The lane container and the grouped container.
//!
//! [`Vector<E, N>`] models one hardware register: `N` lanes of element
//! type `E`, stored as a plain lane array rather than a punned byte
//! buffer, with explicit, checked accessors. Lane 0 occupies the
//! lowest-addressed bytes when a register is copied to or from memory.
//!
//! [`Group<E, N, K>`] is an ordered sequence of `K` identically shaped
//! registers, used by the interleaved multi-register transfer operations.

use softlane_error::kinds;

use crate::prelude::Result;
use crate::traits::LaneElement;

/// One emulated vector register: `N` lanes of element type `E`.
///
/// Values are always passed and returned by value; every operation
/// produces a new register. Lane index checks report a bounds error
/// rather than wrapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector<E: LaneElement, const N: usize> {
    lanes: [E; N],
}

impl<E: LaneElement, const N: usize> Default for Vector<E, N> {
    fn default() -> Self {
        Self {
            lanes: [E::default(); N],
        }
    }
}

impl<E: LaneElement, const N: usize> Vector<E, N> {
    /// Builds a register from a lane array, lane 0 first.
    #[must_use]
    pub fn from_lanes(lanes: [E; N]) -> Self {
        Self { lanes }
    }

    /// The number of lanes.
    #[must_use]
    pub const fn lane_count(&self) -> usize {
        N
    }

    /// The register extent in bytes.
    #[must_use]
    pub const fn byte_len() -> usize {
        N * E::BYTES
    }

    /// Borrows the lane array.
    #[must_use]
    pub fn lanes(&self) -> &[E; N] {
        &self.lanes
    }

    /// Consumes the register into its lane array.
    #[must_use]
    pub fn into_lanes(self) -> [E; N] {
        self.lanes
    }

    /// Reads lane `i`.
    pub fn get(&self, i: usize) -> Result<E> {
        if i >= N {
            return Err(kinds::lane_out_of_bounds());
        }
        Ok(self.lanes[i])
    }

    /// Writes lane `i`.
    pub fn set(&mut self, i: usize, value: E) -> Result<()> {
        if i >= N {
            return Err(kinds::lane_out_of_bounds());
        }
        self.lanes[i] = value;
        Ok(())
    }

    /// Builds a register by evaluating `f` for each lane index.
    #[must_use]
    pub fn from_fn<F: FnMut(usize) -> E>(mut f: F) -> Self {
        let mut lanes = [E::default(); N];
        for i in 0..N {
            lanes[i] = f(i);
        }
        Self { lanes }
    }

    /// Builds a register by evaluating a fallible `f` for each lane index.
    pub fn try_from_fn<F: FnMut(usize) -> Result<E>>(mut f: F) -> Result<Self> {
        let mut lanes = [E::default(); N];
        for i in 0..N {
            lanes[i] = f(i)?;
        }
        Ok(Self { lanes })
    }

    /// Decodes a register from its little-endian byte image. The slice
    /// length must equal the register byte extent.
    pub fn from_le_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::byte_len() {
            return Err(kinds::length_mismatch());
        }
        Self::try_from_fn(|i| E::from_le_bytes(&bytes[i * E::BYTES..(i + 1) * E::BYTES]))
    }

    /// Encodes the register into its little-endian byte image, lane 0 at
    /// the lowest address.
    pub fn write_le(&self, out: &mut [u8]) -> Result<()> {
        if out.len() != Self::byte_len() {
            return Err(kinds::length_mismatch());
        }
        for i in 0..N {
            self.lanes[i].write_le_bytes(&mut out[i * E::BYTES..(i + 1) * E::BYTES])?;
        }
        Ok(())
    }

    /// Reinterprets the register's byte image as `M` lanes of `E2`.
    ///
    /// The target shape must cover exactly the same byte extent
    /// (`M * sizeof(E2) == N * sizeof(E)`), otherwise a validation error
    /// is reported. The byte image itself is unchanged.
    pub fn reinterpret<E2: LaneElement, const M: usize>(&self) -> Result<Vector<E2, M>> {
        if M * E2::BYTES != N * E::BYTES {
            return Err(kinds::reinterpret_mismatch());
        }
        Vector::<E2, M>::try_from_fn(|k| {
            let mut lane_bytes = [0u8; 8];
            for b in 0..E2::BYTES {
                let j = k * E2::BYTES + b;
                lane_bytes[b] = self.byte_at(j)?;
            }
            E2::from_le_bytes(&lane_bytes[..E2::BYTES])
        })
    }

    /// Byte `j` of the register's little-endian image.
    fn byte_at(&self, j: usize) -> Result<u8> {
        if j >= Self::byte_len() {
            return Err(kinds::lane_out_of_bounds());
        }
        let mut scratch = [0u8; 8];
        self.lanes[j / E::BYTES].write_le_bytes(&mut scratch[..E::BYTES])?;
        Ok(scratch[j % E::BYTES])
    }
}

/// An ordered, fixed-length sequence of `K` identically shaped registers.
///
/// `K` is 2, 3, or 4 for the emulated multi-register transfer forms; the
/// type itself accepts any `K`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Group<E: LaneElement, const N: usize, const K: usize> {
    regs: [Vector<E, N>; K],
}

impl<E: LaneElement, const N: usize, const K: usize> Default for Group<E, N, K> {
    fn default() -> Self {
        Self {
            regs: [Vector::default(); K],
        }
    }
}

impl<E: LaneElement, const N: usize, const K: usize> Group<E, N, K> {
    /// Builds a group from its member registers.
    #[must_use]
    pub fn from_regs(regs: [Vector<E, N>; K]) -> Self {
        Self { regs }
    }

    /// The number of member registers.
    #[must_use]
    pub const fn reg_count(&self) -> usize {
        K
    }

    /// Borrows the member registers.
    #[must_use]
    pub fn regs(&self) -> &[Vector<E, N>; K] {
        &self.regs
    }

    /// Consumes the group into its member registers.
    #[must_use]
    pub fn into_regs(self) -> [Vector<E, N>; K] {
        self.regs
    }

    /// Reads member register `k`.
    pub fn get(&self, k: usize) -> Result<Vector<E, N>> {
        if k >= K {
            return Err(kinds::lane_out_of_bounds());
        }
        Ok(self.regs[k])
    }

    /// Writes member register `k`.
    pub fn set(&mut self, k: usize, reg: Vector<E, N>) -> Result<()> {
        if k >= K {
            return Err(kinds::lane_out_of_bounds());
        }
        self.regs[k] = reg;
        Ok(())
    }

    /// Reads lane `i` of member register `k`.
    pub fn get_lane(&self, k: usize, i: usize) -> Result<E> {
        if k >= K {
            return Err(kinds::lane_out_of_bounds());
        }
        self.regs[k].get(i)
    }

    /// Writes lane `i` of member register `k`.
    pub fn set_lane(&mut self, k: usize, i: usize, value: E) -> Result<()> {
        if k >= K {
            return Err(kinds::lane_out_of_bounds());
        }
        self.regs[k].set(i, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lane_access_is_bounds_checked() {
        let mut v = Vector::<i16, 4>::from_lanes([1, 2, 3, 4]);
        assert_eq!(v.get(3), Ok(4));
        assert!(v.get(4).is_err());
        assert!(v.set(4, 9).is_err());
        v.set(0, 9).ok();
        assert_eq!(v.lanes(), &[9, 2, 3, 4]);
    }

    #[test]
    fn byte_image_is_little_endian_lane0_first() {
        let v = Vector::<u16, 2>::from_lanes([0x1122, 0x3344]);
        let mut buf = [0u8; 4];
        v.write_le(&mut buf).ok();
        assert_eq!(buf, [0x22, 0x11, 0x44, 0x33]);
        assert_eq!(Vector::<u16, 2>::from_le_slice(&buf), Ok(v));
        assert!(Vector::<u16, 2>::from_le_slice(&buf[..3]).is_err());
    }

    #[test]
    fn reinterpret_preserves_bytes() {
        let v = Vector::<u16, 2>::from_lanes([0x1122, 0x3344]);
        assert_eq!(
            v.reinterpret::<u8, 4>(),
            Ok(Vector::from_lanes([0x22, 0x11, 0x44, 0x33]))
        );
        assert_eq!(
            v.reinterpret::<u32, 1>(),
            Ok(Vector::from_lanes([0x3344_1122]))
        );
        // Shape that does not cover the same byte extent is rejected.
        assert!(v.reinterpret::<u8, 3>().is_err());
    }

    #[test]
    fn group_members_share_shape() {
        let mut g = Group::<i8, 4, 2>::default();
        g.set(0, Vector::from_lanes([1, 2, 3, 4])).ok();
        g.set_lane(1, 0, 9).ok();
        assert_eq!(g.get_lane(0, 2), Ok(3));
        assert_eq!(g.get_lane(1, 0), Ok(9));
        assert!(g.get(2).is_err());
    }
}
