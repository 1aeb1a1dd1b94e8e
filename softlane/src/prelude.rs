// Copyright (c) 2025 The Softlane Project Developers
// SPDX-License-Identifier: MIT
// Project: Softlane
// Module: softlane::prelude

//! Crate prelude for `softlane`
//!
//! This module provides a unified set of imports for both std and `no_std`
//! environments. It re-exports commonly used types and traits from core,
//! softlane-error, and this crate's own modules.

// Core imports for both std and no_std environments
pub use core::{
    cmp::{Eq, Ord, PartialEq, PartialOrd},
    convert::{TryFrom, TryInto},
    fmt,
    fmt::{Debug, Display},
    marker::PhantomData,
    mem,
    ops::{Add, Div, Mul, Neg, Rem, Shl, Shr, Sub},
};

// Re-export from std when the std feature is enabled
#[cfg(feature = "std")]
pub use std::{
    boxed::Box,
    format,
    string::{String, ToString},
    vec,
    vec::Vec,
};

// Re-export from softlane-error using its prelude
pub use softlane_error::prelude::*;

// Re-export from this crate's modules
pub use crate::{
    float_bits::{FloatBits32, FloatBits64},
    ops,
    traits::{
        ArithLane, ConvertLane, FloatLane, IntLane, LaneElement, MaskLane, NarrowLane, ShiftLane,
        WidenLane,
    },
    vector::{Group, Vector},
};
