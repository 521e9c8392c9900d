// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte containers for derived secrets. Both wipe themselves on drop.

use alloc::vec::Vec;
use core::fmt;

use bulwark_hmac::{HashAlgorithmId, MAX_DIGEST_SIZE};
use zeroize::Zeroize;

/// Pseudorandom key produced by HKDF-Extract.
///
/// Always exactly `digest_size` bytes of the algorithm it was extracted with.
pub struct Prk {
    algorithm: HashAlgorithmId,
    bytes: [u8; MAX_DIGEST_SIZE],
}

impl Prk {
    pub(crate) fn new(algorithm: HashAlgorithmId) -> Self {
        Self {
            algorithm,
            bytes: [0u8; MAX_DIGEST_SIZE],
        }
    }

    pub(crate) fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut self.bytes[..self.algorithm.digest_size()]
    }

    /// Algorithm this key was extracted with.
    pub fn algorithm(&self) -> HashAlgorithmId {
        self.algorithm
    }

    /// Key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.algorithm.digest_size()]
    }

    /// Key length in bytes (the digest size).
    pub fn len(&self) -> usize {
        self.algorithm.digest_size()
    }

    /// Always `false`.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AsRef<[u8]> for Prk {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Drop for Prk {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl fmt::Debug for Prk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prk")
            .field("algorithm", &self.algorithm)
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// Output keying material produced by HKDF-Expand.
pub struct Okm {
    bytes: Vec<u8>,
}

impl Okm {
    pub(crate) fn zeroed(len: usize) -> Self {
        Self {
            bytes: alloc::vec![0u8; len],
        }
    }

    pub(crate) fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Derived bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of derived bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// `true` for a zero-length derivation.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl AsRef<[u8]> for Okm {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl Drop for Okm {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl fmt::Debug for Okm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Okm")
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}
