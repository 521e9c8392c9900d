// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Hash algorithm identifiers and their block/digest sizes.

use core::fmt;
use core::str::FromStr;

use crate::error::HmacError;

/// Largest block size of any supported primitive (SHA-384/512, BLAKE2b)
pub const MAX_BLOCK_SIZE: usize = 128;

/// Largest digest size of any supported primitive (SHA-512)
pub const MAX_DIGEST_SIZE: usize = 64;

/// Hash primitives the HMAC engine can be keyed with.
///
/// The discriminant is the stable numeric identifier accepted by
/// `TryFrom<u8>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum HashAlgorithmId {
    /// MD5 (RFC 1321)
    Md5 = 0,
    /// SHA-1 (FIPS 180-4)
    Sha1 = 1,
    /// SHA-224 (FIPS 180-4)
    Sha224 = 2,
    /// SHA-256 (FIPS 180-4)
    Sha256 = 3,
    /// SHA-384 (FIPS 180-4)
    Sha384 = 4,
    /// SHA-512 (FIPS 180-4)
    Sha512 = 5,
    /// BLAKE2b with a 256-bit digest (RFC 7693)
    Blake2b256 = 6,
}

impl HashAlgorithmId {
    /// Every supported identifier, in numeric order.
    pub const ALL: [HashAlgorithmId; 7] = [
        HashAlgorithmId::Md5,
        HashAlgorithmId::Sha1,
        HashAlgorithmId::Sha224,
        HashAlgorithmId::Sha256,
        HashAlgorithmId::Sha384,
        HashAlgorithmId::Sha512,
        HashAlgorithmId::Blake2b256,
    ];

    // (block size, digest size) in bytes
    const fn sizes(self) -> (usize, usize) {
        match self {
            HashAlgorithmId::Md5 => (64, 16),
            HashAlgorithmId::Sha1 => (64, 20),
            HashAlgorithmId::Sha224 => (64, 28),
            HashAlgorithmId::Sha256 => (64, 32),
            HashAlgorithmId::Sha384 => (128, 48),
            HashAlgorithmId::Sha512 => (128, 64),
            HashAlgorithmId::Blake2b256 => (128, 32),
        }
    }

    /// Input block size of the compression function, in bytes.
    pub const fn block_size(self) -> usize {
        self.sizes().0
    }

    /// Output size of the hash, in bytes.
    pub const fn digest_size(self) -> usize {
        self.sizes().1
    }

    /// Conventional name, e.g. `"SHA-256"`.
    pub const fn name(self) -> &'static str {
        match self {
            HashAlgorithmId::Md5 => "MD5",
            HashAlgorithmId::Sha1 => "SHA-1",
            HashAlgorithmId::Sha224 => "SHA-224",
            HashAlgorithmId::Sha256 => "SHA-256",
            HashAlgorithmId::Sha384 => "SHA-384",
            HashAlgorithmId::Sha512 => "SHA-512",
            HashAlgorithmId::Blake2b256 => "BLAKE2b-256",
        }
    }
}

impl fmt::Display for HashAlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for HashAlgorithmId {
    type Error = HmacError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        HashAlgorithmId::ALL
            .into_iter()
            .find(|id| *id as u8 == value)
            .ok_or(HmacError::UnknownAlgorithm)
    }
}

impl From<HashAlgorithmId> for u8 {
    fn from(id: HashAlgorithmId) -> Self {
        id as u8
    }
}

/// Compares `input` against `canonical` ignoring ASCII case.
///
/// The canonical `-` between family and size may be written as `-`, `_`
/// or left out; no other separator is accepted.
fn matches_name(input: &str, canonical: &str) -> bool {
    let (family, size) = canonical.split_once('-').unwrap_or((canonical, ""));

    let Some(rest) = input
        .get(..family.len())
        .filter(|prefix| prefix.eq_ignore_ascii_case(family))
        .map(|_| &input[family.len()..])
    else {
        return false;
    };

    let rest = match rest.as_bytes().first() {
        Some(b'-' | b'_') if !size.is_empty() => &rest[1..],
        _ => rest,
    };

    rest.eq_ignore_ascii_case(size)
}

impl FromStr for HashAlgorithmId {
    type Err = HmacError;

    /// Parses names such as `"SHA-256"`, `"sha256"` or `"blake2b_256"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HashAlgorithmId::ALL
            .into_iter()
            .find(|id| matches_name(s, id.name()))
            .ok_or(HmacError::UnknownAlgorithm)
    }
}
