// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

use crate::registry::HashAlgorithmId;

/// HMAC error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HmacError {
    /// The configured [`HashProvider`](crate::HashProvider) cannot supply this primitive
    #[error("hash algorithm {0} is not supported by the provider")]
    UnsupportedAlgorithm(HashAlgorithmId),

    /// Unrecognized algorithm name or numeric identifier
    #[error("unknown hash algorithm identifier")]
    UnknownAlgorithm,

    /// Output buffer cannot hold the digest
    #[error("output buffer too short: need {expected} bytes, got {actual}")]
    OutputTooShort {
        /// Digest size of the keyed algorithm
        expected: usize,
        /// Length of the caller's buffer
        actual: usize,
    },

    /// `update`/`finalize` called before `set_key`
    #[error("context used before a key was set")]
    NotKeyed,

    /// `finalize` called twice without an intervening update, reset or rekey
    #[error("context already finalized")]
    AlreadyFinalized,

    /// Computed tag does not match the expected tag
    #[error("MAC verification failed")]
    VerificationFailed,
}
