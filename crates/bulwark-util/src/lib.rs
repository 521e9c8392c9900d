// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte helpers shared by the bulwark crates.
//!
//! Tag comparison goes through [`constant_time_eq`]; tests use
//! [`is_slice_zeroized`] to check that key-derived buffers were wiped.

#![cfg_attr(not(test), no_std)]

use subtle::ConstantTimeEq;

/// Constant-time equality comparison for byte slices.
///
/// Slices of different length compare unequal. For equal lengths the running
/// time does not depend on where the slices differ.
///
/// # Example
///
/// ```
/// use bulwark_util::constant_time_eq;
///
/// assert!(constant_time_eq(&[1, 2, 3], &[1, 2, 3]));
/// assert!(!constant_time_eq(&[1, 2, 3], &[1, 2, 4]));
/// ```
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

/// Returns `true` if every byte of `slice` is zero.
#[inline]
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().fold(0u8, |acc, &b| acc | b) == 0
}
