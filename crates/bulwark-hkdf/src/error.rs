// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use bulwark_hmac::HmacError;
use thiserror::Error;

/// HKDF error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HkdfError {
    /// Requested output length exceeds maximum (255 * HashLen)
    #[error("requested output length {requested} exceeds maximum {max} (255 * HashLen)")]
    OutputTooLong {
        /// Requested OKM length in bytes
        requested: usize,
        /// `255 * digest_size` for the algorithm
        max: usize,
    },

    /// The underlying HMAC rejected the operation
    #[error(transparent)]
    Hmac(#[from] HmacError),
}
