// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use bulwark_util::constant_time_eq;

use crate::registry::MAX_DIGEST_SIZE;

/// A finished MAC, `digest_size` bytes of the keyed algorithm.
///
/// Equality is constant-time.
#[derive(Clone, Copy)]
pub struct Tag {
    bytes: [u8; MAX_DIGEST_SIZE],
    len: usize,
}

impl Tag {
    pub(crate) fn from_slice(bytes: &[u8]) -> Self {
        let mut tag = Self {
            bytes: [0u8; MAX_DIGEST_SIZE],
            len: bytes.len(),
        };
        tag.bytes[..bytes.len()].copy_from_slice(bytes);
        tag
    }

    /// Tag bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Tag length in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; every supported digest is non-empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Constant-time comparison against `expected`.
    pub fn verify(&self, expected: &[u8]) -> bool {
        constant_time_eq(self.as_bytes(), expected)
    }
}

impl AsRef<[u8]> for Tag {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        constant_time_eq(self.as_bytes(), other.as_bytes())
    }
}

impl Eq for Tag {}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag(")?;
        for b in self.as_bytes() {
            write!(f, "{:02x}", b)?;
        }
        write!(f, ")")
    }
}
