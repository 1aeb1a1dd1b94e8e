// Softlane - softlane-error
// Module: Softlane Error Codes
//
// Copyright (c) 2025 The Softlane Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for softlane

// Validation error codes (1000-1999)
/// Register shape mismatch (lane count / element width relation violated)
pub const SHAPE_MISMATCH: u16 = 1000;
/// Buffer length does not match the register byte extent
pub const LENGTH_MISMATCH: u16 = 1001;
/// Reinterpretation does not divide evenly into the register byte extent
pub const REINTERPRET_MISMATCH: u16 = 1002;
/// Byte group size invalid for element reversal
pub const INVALID_GROUP: u16 = 1003;

// Bounds error codes (2000-2999)
/// Lane index out of bounds
pub const LANE_OUT_OF_BOUNDS: u16 = 2000;
/// Sliding-window offset out of bounds
pub const OFFSET_OUT_OF_BOUNDS: u16 = 2001;

// Arithmetic error codes (3000-3999)
/// Integer division by zero
pub const DIVISION_BY_ZERO: u16 = 3000;

// Type error codes (4000-4999)
/// Value not representable in the destination type
pub const VALUE_CONVERSION: u16 = 4000;

// Runtime error codes (5000-5999)
/// General runtime error
pub const RUNTIME_ERROR: u16 = 5000;
