// Copyright (c) 2025 The Softlane Project Developers
// SPDX-License-Identifier: MIT
// Project: Softlane
// Module: softlane property tests

//! Property-based checks of the lane engines against scalar reference
//! models computed in a wider integer type.

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use softlane::ops;
use softlane::{MaskLane, Vector};

fn ok<T>(r: softlane::Result<T>) -> Result<T, TestCaseError> {
    r.map_err(|e| TestCaseError::fail(format!("{e}")))
}

proptest! {
    #[test]
    fn wrapping_add_matches_two_complement(a: [i8; 8], b: [i8; 8]) {
        let va = Vector::from_lanes(a);
        let vb = Vector::from_lanes(b);
        let expected = Vector::from_fn(|i| {
            (i16::from(a[i]) + i16::from(b[i])) as i8
        });
        prop_assert_eq!(ops::add(va, vb), Ok(expected));
    }

    #[test]
    fn saturating_add_matches_wide_clamp(a: [i8; 8], b: [i8; 8]) {
        let va = Vector::from_lanes(a);
        let vb = Vector::from_lanes(b);
        let expected = Vector::from_fn(|i| {
            (i16::from(a[i]) + i16::from(b[i]))
                .clamp(i16::from(i8::MIN), i16::from(i8::MAX)) as i8
        });
        prop_assert_eq!(ops::adds(va, vb), Ok(expected));
    }

    #[test]
    fn saturating_sub_matches_wide_clamp(a: [u16; 4], b: [u16; 4]) {
        let va = Vector::from_lanes(a);
        let vb = Vector::from_lanes(b);
        let expected = Vector::from_fn(|i| {
            (i32::from(a[i]) - i32::from(b[i])).clamp(0, i32::from(u16::MAX)) as u16
        });
        prop_assert_eq!(ops::subs(va, vb), Ok(expected));
    }

    #[test]
    fn pack_clamps_to_the_narrow_range(a: [i16; 4], b: [i16; 4]) {
        let va = Vector::from_lanes(a);
        let vb = Vector::from_lanes(b);
        let expected = Vector::from_fn(|i| {
            let wide = if i < 4 { a[i] } else { b[i - 4] };
            wide.clamp(i16::from(i8::MIN), i16::from(i8::MAX)) as i8
        });
        prop_assert_eq!(ops::pack::<i16, 4, 8>(va, vb), Ok(expected));
    }

    #[test]
    fn product_halves_reconstruct_the_product(a: [i16; 4], b: [i16; 4]) {
        let va = Vector::from_lanes(a);
        let vb = Vector::from_lanes(b);
        let hi = ok(ops::mulhi(va, vb))?.into_lanes();
        let lo = ok(ops::mullo(va, vb))?.into_lanes();
        for i in 0..4 {
            let full = (i32::from(hi[i]) << 16) | i32::from(lo[i] as u16);
            prop_assert_eq!(full, i32::from(a[i]) * i32::from(b[i]));
        }
    }

    #[test]
    fn logical_right_shift_bounds(v: [u16; 4], count in 0u32..40) {
        let reg = Vector::from_lanes(v);
        let expected = Vector::from_fn(|i| {
            if count >= 16 { 0 } else { v[i] >> count }
        });
        prop_assert_eq!(ops::srli(reg, count), Ok(expected));
    }

    #[test]
    fn arithmetic_right_shift_preserves_sign(v: [i16; 4], count in 0u32..40) {
        let reg = Vector::from_lanes(v);
        let shifted = ok(ops::srai(reg, count))?.into_lanes();
        for i in 0..4 {
            prop_assert_eq!(shifted[i] < 0, v[i] < 0);
            prop_assert_eq!(i32::from(shifted[i]), i32::from(v[i]) >> count.min(15));
        }
    }

    #[test]
    fn left_shift_guard_zeroes_early(v: [u16; 4], count in 0u32..40) {
        let reg = Vector::from_lanes(v);
        let expected = Vector::from_fn(|i| {
            if count >= 15 { 0 } else { v[i] << count }
        });
        prop_assert_eq!(ops::slli(reg, count), Ok(expected));
    }

    #[test]
    fn comparison_lanes_are_all_or_nothing(a: [i32; 4], b: [i32; 4]) {
        let va = Vector::from_lanes(a);
        let vb = Vector::from_lanes(b);
        let expected = Vector::from_fn(|i| {
            if a[i] > b[i] { u32::ALL } else { u32::ZERO }
        });
        prop_assert_eq!(ops::gt(va, vb), Ok(expected));
    }

    #[test]
    fn mask_selects_through_bitwise_ops(a: [i16; 4], b: [i16; 4]) {
        // (a & mask) | (b & !mask) picks lanes by the predicate.
        let va = Vector::from_lanes(a);
        let vb = Vector::from_lanes(b);
        let mask = ok(ok(ops::ge(va, vb))?.reinterpret::<i16, 4>())?;
        let picked = ops::or(ok(ops::and(va, mask))?, ok(ops::andnot(mask, vb))?);
        let expected = Vector::from_fn(|i| if a[i] >= b[i] { a[i] } else { b[i] });
        prop_assert_eq!(picked, Ok(expected));
    }

    #[test]
    fn bitwise_identities(v: [u64; 2], w: [u64; 2]) {
        let a = Vector::from_lanes(v);
        let b = Vector::from_lanes(w);
        prop_assert_eq!(ops::and(a, a), Ok(a));
        prop_assert_eq!(ops::xor(a, a), ops::zero::<u64, 2>());
        prop_assert_eq!(ops::andnot(ok(ops::zero())?, a), Ok(a));
        // De Morgan: !(a & b) == !a | !b.
        let all = ok(ops::set1::<u64, 2>(u64::MAX))?;
        let nota = ok(ops::xor(a, all))?;
        let notb = ok(ops::xor(b, all))?;
        prop_assert_eq!(ops::bic(a, b), ops::or(nota, notb));
    }

    #[test]
    fn byte_image_round_trips(v: [i32; 4]) {
        let reg = Vector::from_lanes(v);
        let mut buf = [0u8; 16];
        ok(reg.write_le(&mut buf))?;
        prop_assert_eq!(Vector::<i32, 4>::from_le_slice(&buf), Ok(reg));
        // Reinterpretation reads the same image at another shape.
        let bytes = ok(reg.reinterpret::<u8, 16>())?;
        prop_assert_eq!(bytes.into_lanes(), buf);
    }

    #[test]
    fn lane_round_trip(v: [u8; 8], i in 0usize..8, value: u8) {
        let reg = Vector::from_lanes(v);
        let updated = ok(ops::set_lane(reg, i, value))?;
        prop_assert_eq!(ops::get_lane(updated, i), Ok(value));
        for j in (0..8).filter(|&j| j != i) {
            prop_assert_eq!(ops::get_lane(updated, j), Ok(v[j]));
        }
    }

    #[test]
    fn combine_splits_back_into_halves(a: [u16; 4], b: [u16; 4]) {
        let va = Vector::from_lanes(a);
        let vb = Vector::from_lanes(b);
        let c = ok(ops::combine::<u16, 4, 8>(va, vb))?;
        prop_assert_eq!(ops::get_low::<u16, 8, 4>(c), Ok(va));
        prop_assert_eq!(ops::get_high::<u16, 8, 4>(c), Ok(vb));
    }

    #[test]
    fn interleave_round_trips(src: [i16; 8]) {
        let g = ok(ops::load_deinterleaved::<i16, 4, 2>(&src))?;
        let mut out = [0i16; 8];
        ok(ops::store_interleaved(&g, &mut out))?;
        prop_assert_eq!(out, src);
    }

    #[test]
    fn sum_of_absolute_differences_reference(a: [u8; 8], b: [u8; 8]) {
        let va = Vector::from_lanes(a);
        let vb = Vector::from_lanes(b);
        let got = ok(ops::sad::<u8, 8, 4>(va, vb))?;
        let total: u16 = (0..8).map(|i| u16::from(a[i].abs_diff(b[i]))).sum();
        prop_assert_eq!(got.get(0), Ok(total));
        for j in 1..4 {
            prop_assert_eq!(got.get(j), Ok(0));
        }
    }

    #[test]
    fn rounding_halving_add_reference(a: [u8; 8], b: [u8; 8]) {
        let va = Vector::from_lanes(a);
        let vb = Vector::from_lanes(b);
        let expected = Vector::from_fn(|i| {
            ((u16::from(a[i]) + u16::from(b[i]) + 1) >> 1) as u8
        });
        prop_assert_eq!(ops::rhadd(va, vb), Ok(expected));
    }
}
