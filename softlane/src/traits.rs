// Copyright (c) 2025 The Softlane Project Developers
// SPDX-License-Identifier: MIT
// Project: Softlane
// Module: softlane::traits

//! Lane-element traits used by the vector engines.
//!
//! The engines in [`crate::ops`] are generic over an element type `E` and a
//! lane count `N`. These traits describe everything an element type has to
//! provide: bit-pattern access for masks and bitwise operations, the exact
//! wrapping/saturating arithmetic of a hardware ALU, guarded shifts, and
//! the widening/narrowing relations between adjacent element widths.

use softlane_error::kinds;

use crate::prelude::Result;

/// An unsigned lane type usable as the mask/bit-pattern form of an element.
///
/// Every [`LaneElement`] names a `Bits` type implementing this trait; masks
/// produced by the comparison engine are registers of that type with each
/// lane either [`MaskLane::ALL`] or [`MaskLane::ZERO`].
pub trait MaskLane: LaneElement<Bits = Self> + Ord + Eq {
    /// All-bits-zero lane value.
    const ZERO: Self;
    /// All-bits-one lane value.
    const ALL: Self;
    /// Numeric one, used by predicates that produce `1`/`0` rather than
    /// masks.
    const ONE: Self;

    /// Bitwise AND.
    fn bit_and(self, rhs: Self) -> Self;
    /// Bitwise OR.
    fn bit_or(self, rhs: Self) -> Self;
    /// Bitwise XOR.
    fn bit_xor(self, rhs: Self) -> Self;
    /// Bitwise complement.
    fn bit_not(self) -> Self;
    /// This value as a shift count, saturated to `u32::MAX`.
    fn shift_count(self) -> u32;
}

/// A scalar type usable as the element of a [`crate::Vector`] lane.
///
/// Implemented for `i8`/`u8`/`i16`/`u16`/`i32`/`u32`/`i64`/`u64`/`f32`/
/// `f64`. The byte codec places the least significant byte first, matching
/// the register layout the transfer engine copies to and from buffers.
pub trait LaneElement:
    Copy + Default + PartialEq + PartialOrd + core::fmt::Debug + Send + Sync + 'static
{
    /// Same-width unsigned type carrying this element's raw bit pattern.
    type Bits: MaskLane;

    /// Element width in bytes.
    const BYTES: usize;
    /// Element width in bits.
    const BITS: u32;

    /// The raw bit pattern of this value.
    fn to_bits(self) -> Self::Bits;
    /// Reconstructs a value from its raw bit pattern.
    fn from_bits(bits: Self::Bits) -> Self;

    /// All-bits-one lane when `set`, all-bits-zero otherwise.
    fn mask(set: bool) -> Self {
        if set {
            Self::from_bits(Self::Bits::ALL)
        } else {
            Self::from_bits(Self::Bits::ZERO)
        }
    }

    /// Decodes a value from exactly [`Self::BYTES`] little-endian bytes.
    fn from_le_bytes(bytes: &[u8]) -> Result<Self>;
    /// Encodes this value into exactly [`Self::BYTES`] little-endian bytes.
    fn write_le_bytes(self, out: &mut [u8]) -> Result<()>;
}

/// Elementwise arithmetic with the numeric behavior of a packed ALU:
/// two's-complement wraparound for integers, IEEE-754 for floats.
pub trait ArithLane: LaneElement {
    /// Wrapping (integer) or IEEE (float) addition.
    fn lane_add(self, rhs: Self) -> Self;
    /// Wrapping (integer) or IEEE (float) subtraction.
    fn lane_sub(self, rhs: Self) -> Self;
    /// Wrapping (integer) or IEEE (float) multiplication.
    fn lane_mul(self, rhs: Self) -> Self;
    /// Division. Integer division by zero is an arithmetic error; float
    /// division follows IEEE-754 (±∞ or NaN).
    fn lane_div(self, rhs: Self) -> Result<Self>;
    /// Wrapping (integer) or IEEE (float) negation.
    fn lane_neg(self) -> Self;
    /// Absolute value; wraps for the signed integer minimum.
    fn lane_abs(self) -> Self;
    /// Minimum; for floats the second operand wins when unordered.
    fn lane_min(self, rhs: Self) -> Self;
    /// Maximum; for floats the second operand wins when unordered.
    fn lane_max(self, rhs: Self) -> Self;
    /// Whether this value is a floating-point NaN; always false for
    /// integers.
    fn is_nan(self) -> bool {
        false
    }
}

/// Integer lane operations beyond plain wrapping arithmetic.
pub trait IntLane: ArithLane + Ord + Eq {
    /// Smallest representable value.
    const MIN: Self;
    /// Largest representable value.
    const MAX: Self;
    /// Zero.
    const ZERO: Self;
    /// One.
    const ONE: Self;
    /// Whether the type is signed.
    const SIGNED: bool;

    /// Addition clamped to `[MIN, MAX]`.
    fn sat_add(self, rhs: Self) -> Self;
    /// Subtraction clamped to `[MIN, MAX]`.
    fn sat_sub(self, rhs: Self) -> Self;
    /// Absolute value clamped to `MAX` (the signed minimum saturates
    /// instead of wrapping).
    fn sat_abs(self) -> Self;
    /// Negation clamped to the representable range; for unsigned types the
    /// result is zero.
    fn sat_neg(self) -> Self;
    /// `(a + b) >> 1` computed without intermediate overflow.
    fn halving_add(self, rhs: Self) -> Self;
    /// `(a + b + 1) >> 1` computed without intermediate overflow.
    fn rounding_halving_add(self, rhs: Self) -> Self;
    /// `(a - b) >> 1` computed without intermediate overflow.
    fn halving_sub(self, rhs: Self) -> Self;
    /// Whether `a & b` has any bit set.
    fn tst(self, rhs: Self) -> bool;
    /// This value as a signed per-lane shift count, saturated to the
    /// `i32` range.
    fn signed_count(self) -> i32;
}

/// Per-lane shifts with the guard semantics of the emulated instructions.
pub trait ShiftLane: IntLane {
    /// Logical left shift with the emulated guard: the lane zeroes when
    /// `count >= BITS - 1`, one count earlier than the type width.
    fn shl_guarded(self, count: u32) -> Self;
    /// Logical left shift zeroing at `count >= BITS`.
    fn shl_exact(self, count: u32) -> Self;
    /// Logical (zero-extending) right shift; zero at `count >= BITS`.
    fn shr_logical(self, count: u32) -> Self;
    /// Arithmetic (sign-extending) right shift; the sign bit fills the
    /// whole lane at `count >= BITS`. Equal to [`Self::shr_logical`] for
    /// unsigned types.
    fn shr_arith(self, count: u32) -> Self;
    /// Right shift that rounds half away from zero: `(a + (1 << (n-1))) >>
    /// n` evaluated in a wider intermediate.
    fn rounding_shr(self, count: u32) -> Self;
    /// Shift by a signed count: non-negative counts shift left, negative
    /// counts shift right (arithmetically for signed types).
    fn shl_signed(self, count: i32) -> Self;
}

/// An integer element with a defined double-width counterpart.
pub trait WidenLane: IntLane {
    /// The element type twice this width, same signedness.
    type Wide: NarrowLane<Narrow = Self> + ShiftLane;

    /// Sign- or zero-extends into the double-width type.
    fn widen(self) -> Self::Wide;
}

/// An integer element with a defined half-width counterpart.
pub trait NarrowLane: IntLane {
    /// The element type half this width, same signedness.
    type Narrow: WidenLane<Wide = Self>;

    /// Clamps to the narrow type's range, then truncates.
    fn saturate_narrow(self) -> Self::Narrow;
    /// Truncates, keeping the low half bits.
    fn wrap_narrow(self) -> Self::Narrow;
    /// Keeps the high half bits as the narrow type.
    fn high_half(self) -> Self::Narrow;
}

/// Floating-point lane operations.
pub trait FloatLane: ArithLane {
    /// A quiet NaN.
    const NAN: Self;

    /// Square root. Uses the platform function under `std`; a
    /// Newton-iteration software path otherwise.
    fn lane_sqrt(self) -> Self;
    /// Reciprocal, `1 / x`.
    fn lane_recip(self) -> Self;
    /// Reciprocal square root, `1 / sqrt(x)`.
    fn lane_rsqrt(self) -> Self;
}

/// Lane-wise numeric conversion between element types of equal lane count.
///
/// Float-to-integer conversion truncates toward zero and saturates at the
/// destination range (NaN converts to zero); integer-to-float produces the
/// nearest representable value.
pub trait ConvertLane<T: LaneElement>: LaneElement {
    /// Converts this lane value to the destination element type.
    fn convert(self) -> T;
}

// --- implementations ---

macro_rules! impl_mask_lane {
    ($($ty:ty),*) => {$(
        impl MaskLane for $ty {
            const ZERO: Self = 0;
            const ALL: Self = <$ty>::MAX;
            const ONE: Self = 1;

            fn bit_and(self, rhs: Self) -> Self {
                self & rhs
            }

            fn bit_or(self, rhs: Self) -> Self {
                self | rhs
            }

            fn bit_xor(self, rhs: Self) -> Self {
                self ^ rhs
            }

            fn bit_not(self) -> Self {
                !self
            }

            fn shift_count(self) -> u32 {
                u32::try_from(self).unwrap_or(u32::MAX)
            }
        }
    )*};
}

impl_mask_lane!(u8, u16, u32, u64);

macro_rules! impl_int_element {
    ($ty:ty, $bits:ty, $bytes:expr) => {
        impl LaneElement for $ty {
            type Bits = $bits;

            const BYTES: usize = $bytes;
            const BITS: u32 = $bytes * 8;

            fn to_bits(self) -> $bits {
                self as $bits
            }

            fn from_bits(bits: $bits) -> Self {
                bits as $ty
            }

            fn from_le_bytes(bytes: &[u8]) -> Result<Self> {
                if bytes.len() != Self::BYTES {
                    return Err(kinds::length_mismatch());
                }
                let arr: [u8; $bytes] =
                    bytes.try_into().map_err(|_| kinds::value_conversion())?;
                Ok(<$ty>::from_le_bytes(arr))
            }

            fn write_le_bytes(self, out: &mut [u8]) -> Result<()> {
                if out.len() != Self::BYTES {
                    return Err(kinds::length_mismatch());
                }
                out.copy_from_slice(&self.to_le_bytes());
                Ok(())
            }
        }
    };
}

impl_int_element!(i8, u8, 1);
impl_int_element!(u8, u8, 1);
impl_int_element!(i16, u16, 2);
impl_int_element!(u16, u16, 2);
impl_int_element!(i32, u32, 4);
impl_int_element!(u32, u32, 4);
impl_int_element!(i64, u64, 8);
impl_int_element!(u64, u64, 8);

macro_rules! impl_float_element {
    ($ty:ty, $bits:ty, $bytes:expr) => {
        impl LaneElement for $ty {
            type Bits = $bits;

            const BYTES: usize = $bytes;
            const BITS: u32 = $bytes * 8;

            fn to_bits(self) -> $bits {
                self.to_bits()
            }

            fn from_bits(bits: $bits) -> Self {
                <$ty>::from_bits(bits)
            }

            fn from_le_bytes(bytes: &[u8]) -> Result<Self> {
                if bytes.len() != Self::BYTES {
                    return Err(kinds::length_mismatch());
                }
                let arr: [u8; $bytes] =
                    bytes.try_into().map_err(|_| kinds::value_conversion())?;
                Ok(<$ty>::from_le_bytes(arr))
            }

            fn write_le_bytes(self, out: &mut [u8]) -> Result<()> {
                if out.len() != Self::BYTES {
                    return Err(kinds::length_mismatch());
                }
                out.copy_from_slice(&self.to_le_bytes());
                Ok(())
            }
        }
    };
}

impl_float_element!(f32, u32, 4);
impl_float_element!(f64, u64, 8);

macro_rules! impl_signed_lane {
    ($ty:ty, $bits:ty, $wide:ty) => {
        impl ArithLane for $ty {
            fn lane_add(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            fn lane_sub(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }

            fn lane_mul(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }

            fn lane_div(self, rhs: Self) -> Result<Self> {
                if rhs == 0 {
                    return Err(kinds::division_by_zero());
                }
                Ok(self.wrapping_div(rhs))
            }

            fn lane_neg(self) -> Self {
                self.wrapping_neg()
            }

            fn lane_abs(self) -> Self {
                self.wrapping_abs()
            }

            fn lane_min(self, rhs: Self) -> Self {
                Ord::min(self, rhs)
            }

            fn lane_max(self, rhs: Self) -> Self {
                Ord::max(self, rhs)
            }
        }

        impl IntLane for $ty {
            const MIN: Self = <$ty>::MIN;
            const MAX: Self = <$ty>::MAX;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const SIGNED: bool = true;

            fn sat_add(self, rhs: Self) -> Self {
                self.saturating_add(rhs)
            }

            fn sat_sub(self, rhs: Self) -> Self {
                self.saturating_sub(rhs)
            }

            fn sat_abs(self) -> Self {
                self.saturating_abs()
            }

            fn sat_neg(self) -> Self {
                self.saturating_neg()
            }

            fn halving_add(self, rhs: Self) -> Self {
                (((self as $wide) + (rhs as $wide)) >> 1) as $ty
            }

            fn rounding_halving_add(self, rhs: Self) -> Self {
                (((self as $wide) + (rhs as $wide) + 1) >> 1) as $ty
            }

            fn halving_sub(self, rhs: Self) -> Self {
                (((self as $wide) - (rhs as $wide)) >> 1) as $ty
            }

            fn tst(self, rhs: Self) -> bool {
                (self & rhs) != 0
            }

            fn signed_count(self) -> i32 {
                (self as i64).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
            }
        }

        impl ShiftLane for $ty {
            fn shl_guarded(self, count: u32) -> Self {
                if count >= Self::BITS - 1 {
                    0
                } else {
                    self << count
                }
            }

            fn shl_exact(self, count: u32) -> Self {
                if count >= Self::BITS {
                    0
                } else {
                    self << count
                }
            }

            fn shr_logical(self, count: u32) -> Self {
                if count >= Self::BITS {
                    0
                } else {
                    (((self as $bits) >> count) as $ty)
                }
            }

            fn shr_arith(self, count: u32) -> Self {
                if count >= Self::BITS {
                    self >> (Self::BITS - 1)
                } else {
                    self >> count
                }
            }

            fn rounding_shr(self, count: u32) -> Self {
                if count == 0 {
                    return self;
                }
                let c = count.min(Self::BITS);
                (((self as $wide) + ((1 as $wide) << (c - 1))) >> c) as $ty
            }

            fn shl_signed(self, count: i32) -> Self {
                if count >= 0 {
                    ShiftLane::shl_exact(self, count as u32)
                } else {
                    self.shr_arith(count.unsigned_abs())
                }
            }
        }
    };
}

impl_signed_lane!(i8, u8, i64);
impl_signed_lane!(i16, u16, i64);
impl_signed_lane!(i32, u32, i64);
impl_signed_lane!(i64, u64, i128);

macro_rules! impl_unsigned_lane {
    ($ty:ty, $wide:ty) => {
        impl ArithLane for $ty {
            fn lane_add(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            fn lane_sub(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }

            fn lane_mul(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }

            fn lane_div(self, rhs: Self) -> Result<Self> {
                if rhs == 0 {
                    return Err(kinds::division_by_zero());
                }
                Ok(self / rhs)
            }

            fn lane_neg(self) -> Self {
                self.wrapping_neg()
            }

            fn lane_abs(self) -> Self {
                self
            }

            fn lane_min(self, rhs: Self) -> Self {
                Ord::min(self, rhs)
            }

            fn lane_max(self, rhs: Self) -> Self {
                Ord::max(self, rhs)
            }
        }

        impl IntLane for $ty {
            const MIN: Self = <$ty>::MIN;
            const MAX: Self = <$ty>::MAX;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const SIGNED: bool = false;

            fn sat_add(self, rhs: Self) -> Self {
                self.saturating_add(rhs)
            }

            fn sat_sub(self, rhs: Self) -> Self {
                self.saturating_sub(rhs)
            }

            fn sat_abs(self) -> Self {
                self
            }

            fn sat_neg(self) -> Self {
                0
            }

            fn halving_add(self, rhs: Self) -> Self {
                (((self as $wide) + (rhs as $wide)) >> 1) as $ty
            }

            fn rounding_halving_add(self, rhs: Self) -> Self {
                (((self as $wide) + (rhs as $wide) + 1) >> 1) as $ty
            }

            fn halving_sub(self, rhs: Self) -> Self {
                (((self as $wide).wrapping_sub(rhs as $wide) >> 1) as $ty)
            }

            fn tst(self, rhs: Self) -> bool {
                (self & rhs) != 0
            }

            fn signed_count(self) -> i32 {
                let v = self as u64;
                if v > i32::MAX as u64 {
                    i32::MAX
                } else {
                    v as i32
                }
            }
        }

        impl ShiftLane for $ty {
            fn shl_guarded(self, count: u32) -> Self {
                if count >= Self::BITS - 1 {
                    0
                } else {
                    self << count
                }
            }

            fn shl_exact(self, count: u32) -> Self {
                if count >= Self::BITS {
                    0
                } else {
                    self << count
                }
            }

            fn shr_logical(self, count: u32) -> Self {
                if count >= Self::BITS {
                    0
                } else {
                    self >> count
                }
            }

            fn shr_arith(self, count: u32) -> Self {
                self.shr_logical(count)
            }

            fn rounding_shr(self, count: u32) -> Self {
                if count == 0 {
                    return self;
                }
                let c = count.min(Self::BITS);
                (((self as $wide) + ((1 as $wide) << (c - 1))) >> c) as $ty
            }

            fn shl_signed(self, count: i32) -> Self {
                if count >= 0 {
                    ShiftLane::shl_exact(self, count as u32)
                } else {
                    self.shr_logical(count.unsigned_abs())
                }
            }
        }
    };
}

impl_unsigned_lane!(u8, u16);
impl_unsigned_lane!(u16, u32);
impl_unsigned_lane!(u32, u64);
impl_unsigned_lane!(u64, u128);

macro_rules! impl_widen_narrow {
    ($narrow:ty => $wide:ty) => {
        impl WidenLane for $narrow {
            type Wide = $wide;

            fn widen(self) -> $wide {
                self as $wide
            }
        }

        impl NarrowLane for $wide {
            type Narrow = $narrow;

            fn saturate_narrow(self) -> $narrow {
                if self > <$narrow>::MAX as $wide {
                    <$narrow>::MAX
                } else if self < <$narrow>::MIN as $wide {
                    <$narrow>::MIN
                } else {
                    self as $narrow
                }
            }

            fn wrap_narrow(self) -> $narrow {
                self as $narrow
            }

            fn high_half(self) -> $narrow {
                (self >> <$narrow>::BITS) as $narrow
            }
        }
    };
}

impl_widen_narrow!(i8 => i16);
impl_widen_narrow!(u8 => u16);
impl_widen_narrow!(i16 => i32);
impl_widen_narrow!(u16 => u32);
impl_widen_narrow!(i32 => i64);
impl_widen_narrow!(u32 => u64);

macro_rules! impl_float_lane {
    ($ty:ty, $mask:expr, $sqrt:path) => {
        impl ArithLane for $ty {
            fn lane_add(self, rhs: Self) -> Self {
                self + rhs
            }

            fn lane_sub(self, rhs: Self) -> Self {
                self - rhs
            }

            fn lane_mul(self, rhs: Self) -> Self {
                self * rhs
            }

            fn lane_div(self, rhs: Self) -> Result<Self> {
                Ok(self / rhs)
            }

            fn lane_neg(self) -> Self {
                -self
            }

            fn lane_abs(self) -> Self {
                <$ty>::from_bits(self.to_bits() & $mask)
            }

            fn lane_min(self, rhs: Self) -> Self {
                if self < rhs {
                    self
                } else {
                    rhs
                }
            }

            fn lane_max(self, rhs: Self) -> Self {
                if self > rhs {
                    self
                } else {
                    rhs
                }
            }

            fn is_nan(self) -> bool {
                self.is_nan()
            }
        }

        impl FloatLane for $ty {
            const NAN: Self = <$ty>::NAN;

            fn lane_sqrt(self) -> Self {
                $sqrt(self)
            }

            fn lane_recip(self) -> Self {
                1.0 / self
            }

            fn lane_rsqrt(self) -> Self {
                1.0 / self.lane_sqrt()
            }
        }
    };
}

impl_float_lane!(f32, 0x7fff_ffff, sqrt_f32);
impl_float_lane!(f64, 0x7fff_ffff_ffff_ffff, sqrt_f64);

#[cfg(feature = "std")]
fn sqrt_f32(x: f32) -> f32 {
    x.sqrt()
}

#[cfg(feature = "std")]
fn sqrt_f64(x: f64) -> f64 {
    x.sqrt()
}

// Software square root for no_std builds: bit-level initial guess refined
// by Newton iterations. f32 goes through the f64 path so the rounding back
// to f32 absorbs the residual error.
#[cfg(not(feature = "std"))]
fn sqrt_f64(x: f64) -> f64 {
    if x.is_nan() || x < 0.0 {
        return f64::NAN;
    }
    if x == 0.0 || x.is_infinite() {
        return x;
    }
    let mut y = f64::from_bits((x.to_bits() >> 1) + 0x1ff8_0000_0000_0000);
    for _ in 0..6 {
        y = 0.5 * (y + x / y);
    }
    y
}

#[cfg(not(feature = "std"))]
fn sqrt_f32(x: f32) -> f32 {
    sqrt_f64(f64::from(x)) as f32
}

macro_rules! impl_convert {
    ($src:ty => $($dst:ty),+) => {$(
        impl ConvertLane<$dst> for $src {
            fn convert(self) -> $dst {
                self as $dst
            }
        }
    )+};
}

impl_convert!(i16 => f32);
impl_convert!(u16 => f32);
impl_convert!(i32 => f32, f64);
impl_convert!(u32 => f32, f64);
impl_convert!(i64 => f32, f64);
impl_convert!(u64 => f32, f64);
impl_convert!(f32 => i32, u32, i64, u64, f64);
impl_convert!(f64 => i32, u32, i64, u64, f32);
