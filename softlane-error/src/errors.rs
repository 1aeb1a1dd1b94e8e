// Softlane - softlane-error
// Module: Softlane Error Types
//
// Copyright (c) 2025 The Softlane Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

/// Unified error handling for the softlane crates.
///
/// This module provides the error type used across the softlane workspace:
/// a `Copy` struct carrying a category, a numeric code, and a static
/// message, usable without allocation.
use core::fmt;

use crate::codes;

/// `Error` categories for softlane operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// Contract violations detected before computing (shape, length)
    Validation = 1,
    /// Index range violations (lane index, window offset)
    Bounds     = 2,
    /// Arithmetic failures that are errors rather than defined outcomes
    Arithmetic = 3,
    /// Type and value-conversion errors
    Type       = 4,
    /// General runtime errors
    Runtime    = 5,
}

/// Softlane `Error` type
///
/// The main error type for the softlane workspace. It provides categorized
/// errors with error codes and static messages.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code:     u16,
    /// `Error` message
    pub message:  &'static str,
}

impl Error {
    /// Lane index out of bounds error
    pub const LANE_OUT_OF_BOUNDS: Self = Self::new(
        ErrorCategory::Bounds,
        codes::LANE_OUT_OF_BOUNDS,
        "Lane index out of bounds",
    );
    /// Register shape mismatch error
    pub const SHAPE_MISMATCH: Self = Self::new(
        ErrorCategory::Validation,
        codes::SHAPE_MISMATCH,
        "Register shape mismatch",
    );
    /// Integer division by zero error
    pub const DIVISION_BY_ZERO: Self = Self::new(
        ErrorCategory::Arithmetic,
        codes::DIVISION_BY_ZERO,
        "Integer division by zero",
    );

    /// Create a new error.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message,
        }
    }

    /// Check if this is a validation error
    #[must_use]
    pub fn is_validation_error(&self) -> bool {
        self.category == ErrorCategory::Validation
    }

    /// Check if this is a bounds error
    #[must_use]
    pub fn is_bounds_error(&self) -> bool {
        self.category == ErrorCategory::Bounds
    }

    /// Check if this is an arithmetic error
    #[must_use]
    pub fn is_arithmetic_error(&self) -> bool {
        self.category == ErrorCategory::Arithmetic
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}:{}] {}", self.category, self.code, self.message)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_includes_category_and_code() {
        let err = Error::new(
            ErrorCategory::Bounds,
            codes::LANE_OUT_OF_BOUNDS,
            "Lane index out of bounds",
        );
        let mut buf = [0u8; 64];
        let mut cursor = Cursor::new(&mut buf);
        use core::fmt::Write;
        write!(cursor, "{err}").ok();
        let written = cursor.written();
        assert!(core::str::from_utf8(written)
            .is_ok_and(|s| s.contains("2000") && s.contains("Bounds")));
    }

    #[test]
    fn category_predicates() {
        assert!(Error::LANE_OUT_OF_BOUNDS.is_bounds_error());
        assert!(Error::SHAPE_MISMATCH.is_validation_error());
        assert!(Error::DIVISION_BY_ZERO.is_arithmetic_error());
        assert!(!Error::DIVISION_BY_ZERO.is_bounds_error());
    }

    struct Cursor<'a> {
        buf: &'a mut [u8],
        len: usize,
    }

    impl<'a> Cursor<'a> {
        fn new(buf: &'a mut [u8]) -> Self {
            Self { buf, len: 0 }
        }

        fn written(&self) -> &[u8] {
            &self.buf[..self.len]
        }
    }

    impl core::fmt::Write for Cursor<'_> {
        fn write_str(&mut self, s: &str) -> core::fmt::Result {
            let bytes = s.as_bytes();
            let end = self.len + bytes.len();
            if end > self.buf.len() {
                return Err(core::fmt::Error);
            }
            self.buf[self.len..end].copy_from_slice(bytes);
            self.len = end;
            Ok(())
        }
    }
}
