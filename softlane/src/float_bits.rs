// Copyright (c) 2025 The Softlane Project Developers
// SPDX-License-Identifier: MIT
// Project: Softlane
// Module: softlane::float_bits

//! Wrapper types for f32 and f64 ensuring bit-pattern based equality and
//! hashing.
//!
//! Comparison masks over float registers are all-ones/all-zero bit
//! patterns that are not meaningful as float *values* (an all-ones f32 is
//! a NaN), so tests and callers that need to inspect float registers
//! bit-exactly go through these wrappers.

use core::hash::{Hash, Hasher};

use softlane_error::kinds;

use crate::prelude::Result;

macro_rules! float_bits {
    ($name:ident, $float:ty, $bits:ty, $bytes:expr, $nan:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
        #[repr(transparent)]
        pub struct $name(pub $bits);

        impl $name {
            /// A canonical quiet NaN bit pattern (sign 0, exponent all
            /// ones, significand MSB set).
            pub const NAN: Self = $name($nan);
            /// The all-bits-one pattern produced by a true comparison
            /// lane.
            pub const ALL_SET: Self = $name(<$bits>::MAX);

            /// Captures the bit pattern of a float value.
            #[must_use]
            pub fn from_float(val: $float) -> Self {
                Self(val.to_bits())
            }

            /// The float value this pattern represents.
            #[must_use]
            pub const fn value(self) -> $float {
                <$float>::from_bits(self.0)
            }

            /// The underlying bits.
            #[must_use]
            pub const fn to_bits(self) -> $bits {
                self.0
            }

            /// Wraps raw bits.
            #[must_use]
            pub const fn from_bits(bits: $bits) -> Self {
                Self(bits)
            }

            /// Whether the pattern encodes a NaN.
            #[must_use]
            pub fn is_nan(self) -> bool {
                self.value().is_nan()
            }

            /// Decodes a pattern from little-endian bytes.
            pub fn from_le_bytes(bytes: &[u8]) -> Result<Self> {
                if bytes.len() != $bytes {
                    return Err(kinds::length_mismatch());
                }
                let arr: [u8; $bytes] =
                    bytes.try_into().map_err(|_| kinds::value_conversion())?;
                Ok(Self(<$bits>::from_le_bytes(arr)))
            }
        }

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.0.hash(state);
            }
        }

        impl From<$float> for $name {
            fn from(val: $float) -> Self {
                Self::from_float(val)
            }
        }
    };
}

float_bits!(
    FloatBits32,
    f32,
    u32,
    4,
    0x7fc0_0000,
    "Wrapper for f32 with Hash/Eq over the raw bit pattern."
);
float_bits!(
    FloatBits64,
    f64,
    u64,
    8,
    0x7ff8_0000_0000_0000,
    "Wrapper for f64 with Hash/Eq over the raw bit pattern."
);
