// Softlane - softlane-error
// Module: Softlane Error Prelude
//
// Copyright (c) 2025 The Softlane Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for softlane-error
//!
//! This module provides a unified set of imports for both std and `no_std`
//! environments. It re-exports the commonly used error types and traits to
//! simplify imports in the softlane crates.

pub use core::{
    cmp::{
        Eq,
        Ord,
        PartialEq,
        PartialOrd,
    },
    convert::{
        TryFrom,
        TryInto,
    },
    fmt,
    fmt::{
        Debug,
        Display,
    },
    marker::PhantomData,
    mem,
    slice,
    str,
};

pub use crate::{
    codes,
    kinds,
    Error,
    ErrorCategory,
    Result,
};
