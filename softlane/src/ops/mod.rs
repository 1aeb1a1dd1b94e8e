// Copyright (c) 2025 The Softlane Project Developers
// SPDX-License-Identifier: MIT
// Project: Softlane
// Module: softlane::ops

//! The per-lane operation engines.
//!
//! Each submodule is one engine: pure, stateless functions consuming and
//! producing [`crate::Vector`] / [`crate::Group`] values. Every operation
//! returns a `Result`; shape relations that cannot be expressed as const
//! generic bounds are validated at run time and reported as validation
//! errors, never silently adjusted.

pub mod arith;
pub mod bitwise;
pub mod cmp;
pub mod construct;
pub mod lanes;
pub mod shift;
pub mod widen;

pub use arith::*;
pub use bitwise::*;
pub use cmp::*;
pub use construct::*;
pub use lanes::*;
pub use shift::*;
pub use widen::*;
