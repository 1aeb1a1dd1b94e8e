// Softlane - softlane-error
// Module: Softlane Error Kind Constructors
//
// Copyright (c) 2025 The Softlane Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Helper constructors for the common softlane error kinds.

use crate::{codes, Error, ErrorCategory};

/// Lane index outside `[0, N)`.
#[must_use]
pub const fn lane_out_of_bounds() -> Error {
    Error::new(
        ErrorCategory::Bounds,
        codes::LANE_OUT_OF_BOUNDS,
        "Lane index out of bounds",
    )
}

/// Sliding-window or extract offset outside the valid range.
#[must_use]
pub const fn offset_out_of_bounds() -> Error {
    Error::new(
        ErrorCategory::Bounds,
        codes::OFFSET_OUT_OF_BOUNDS,
        "Offset out of bounds",
    )
}

/// Register shape relation violated (e.g. output lane count is not twice
/// the input lane count).
#[must_use]
pub const fn shape_mismatch() -> Error {
    Error::new(
        ErrorCategory::Validation,
        codes::SHAPE_MISMATCH,
        "Register shape mismatch",
    )
}

/// Buffer length does not match the register byte extent.
#[must_use]
pub const fn length_mismatch() -> Error {
    Error::new(
        ErrorCategory::Validation,
        codes::LENGTH_MISMATCH,
        "Buffer length mismatch",
    )
}

/// Reinterpretation element width does not divide the register size.
#[must_use]
pub const fn reinterpret_mismatch() -> Error {
    Error::new(
        ErrorCategory::Validation,
        codes::REINTERPRET_MISMATCH,
        "Reinterpretation does not divide register size",
    )
}

/// Byte group size invalid for element reversal.
#[must_use]
pub const fn invalid_group() -> Error {
    Error::new(
        ErrorCategory::Validation,
        codes::INVALID_GROUP,
        "Invalid byte group for element reversal",
    )
}

/// Integer division by zero.
#[must_use]
pub const fn division_by_zero() -> Error {
    Error::new(
        ErrorCategory::Arithmetic,
        codes::DIVISION_BY_ZERO,
        "Integer division by zero",
    )
}

/// Value not representable in the destination type.
#[must_use]
pub const fn value_conversion() -> Error {
    Error::new(
        ErrorCategory::Type,
        codes::VALUE_CONVERSION,
        "Value conversion failed",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_match_constants() {
        assert_eq!(lane_out_of_bounds(), Error::LANE_OUT_OF_BOUNDS);
        assert_eq!(shape_mismatch(), Error::SHAPE_MISMATCH);
        assert_eq!(division_by_zero(), Error::DIVISION_BY_ZERO);
    }
}
