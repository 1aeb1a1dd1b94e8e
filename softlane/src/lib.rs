// Copyright (c) 2025 The Softlane Project Developers
// SPDX-License-Identifier: MIT
// Project: Softlane
// Module: softlane

//! Portable software emulation of per-lane SIMD numeric semantics.
//!
//! This crate models a hardware vector register as a fixed-shape lane
//! container ([`Vector`]) and provides pure, per-lane scalar engines that
//! reproduce the exact numeric behavior of packed SIMD instructions:
//! wrapping and saturating integer arithmetic, mask-producing comparisons,
//! sign/zero-extending shifts, widening and narrowing conversions with
//! clamping, horizontal reductions, and lane manipulation.
//!
//! Operations are generic over an element type and a lane count, so a
//! single implementation of, say, saturating add serves every register
//! shape a caller instantiates. Architecture-specific intrinsic names are
//! expected to be bound to these generic entry points by an external
//! aliasing layer; this crate defines only the semantics.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![deny(clippy::todo, clippy::unimplemented)]
#![warn(clippy::pedantic)]
// Allow specific lints necessary for low-level lane math, matching Cargo.toml
#![allow(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::cast_lossless,
    clippy::needless_range_loop
)]

// Import std when available
#[cfg(feature = "std")]
extern crate std;

// Modules
pub mod float_bits;
pub mod ops;
pub mod prelude;
pub mod traits;
pub mod vector;

// Re-export key types
pub use float_bits::{FloatBits32, FloatBits64};
pub use traits::{
    ArithLane, ConvertLane, FloatLane, IntLane, LaneElement, MaskLane, NarrowLane, ShiftLane,
    WidenLane,
};
pub use vector::{Group, Vector};
// Re-export error type from softlane-error for convenience
pub use softlane_error::Error as SoftlaneError;
pub use softlane_error::Result;
