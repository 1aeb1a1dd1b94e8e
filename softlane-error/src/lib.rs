// Softlane - softlane-error
// Module: Softlane Error Handling
//
// Copyright (c) 2025 The Softlane Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Softlane error handling library
//!
//! This library provides the error handling system shared by the softlane
//! crates. It includes error types, error-code constants, and helper
//! constructors for the contract violations the vector engines can report.
//!
//! # Error Categories
//!
//! Errors are organized into categories, each with its own range of error
//! codes:
//!
//! ## Validation errors (1000-1999)
//! - Register shape mismatches (lane count / element width relations)
//! - Buffer length mismatches on load/store
//!
//! ## Bounds errors (2000-2999)
//! - Lane index out of range
//! - Window offset out of range
//!
//! ## Arithmetic errors (3000-3999)
//! - Integer division by zero
//!
//! # Usage
//!
//! ```
//! use softlane_error::{codes, Error, ErrorCategory};
//!
//! let error = Error::new(
//!     ErrorCategory::Bounds,
//!     codes::LANE_OUT_OF_BOUNDS,
//!     "Lane index out of bounds",
//! );
//! assert!(error.is_bounds_error());
//!
//! let same = softlane_error::kinds::lane_out_of_bounds();
//! assert_eq!(same.code, error.code);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(clippy::perf)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

// Standard library support
#[cfg(feature = "std")]
extern crate std;

/// Error codes for softlane
pub mod codes;
/// Error and error handling types
pub mod errors;
/// Error kind constructor helpers
pub mod kinds;

pub mod prelude;

// Re-export key types
pub use errors::{Error, ErrorCategory};

/// A specialized `Result` type for softlane operations.
///
/// This type alias uses `softlane_error::Error` as the error type. The
/// error type is a plain `Copy` struct, so the alias is suitable for
/// `no_std` environments.
pub type Result<T> = core::result::Result<T, Error>;

// Re-export the kind constructors for convenience
pub use kinds::{division_by_zero, lane_out_of_bounds, length_mismatch, shape_mismatch};
