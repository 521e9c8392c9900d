// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC key normalization and pad derivation per RFC 2104 Section 2

use zeroize::{Zeroize, Zeroizing};

use crate::hash::HashAlgorithm;
use crate::registry::MAX_BLOCK_SIZE;

/// Inner pad byte (RFC 2104 `ipad`)
pub const IPAD: u8 = 0x36;

/// Outer pad byte (RFC 2104 `opad`)
pub const OPAD: u8 = 0x5c;

/// Normalizes `key` into a block-sized, zero-padded key block.
///
/// Keys longer than the block size are first compressed with `hash`, so the
/// block then starts with `digest_size` bytes of `H(key)`. Only the first
/// `hash.block_size()` bytes of the result are meaningful; the rest are zero.
///
/// `hash` is left reset.
///
/// # Panics
///
/// Panics if `hash` reports a block or digest size above [`MAX_BLOCK_SIZE`].
pub fn normalize_key(hash: &mut dyn HashAlgorithm, key: &[u8]) -> Zeroizing<[u8; MAX_BLOCK_SIZE]> {
    let block_size = hash.block_size();
    let mut key_block = Zeroizing::new([0u8; MAX_BLOCK_SIZE]);

    if key.len() > block_size {
        let digest_size = hash.digest_size();
        hash.reset();
        hash.update(key);
        hash.finalize_into_reset(&mut key_block[..digest_size]);
    } else {
        key_block[..key.len()].copy_from_slice(key);
    }

    key_block
}

/// Inner and outer HMAC pads derived from one key.
///
/// Both pads are wiped on drop.
pub struct KeyPads {
    block_size: usize,
    /// K ⊕ ipad
    k_ipad: [u8; MAX_BLOCK_SIZE],
    /// K ⊕ opad
    k_opad: [u8; MAX_BLOCK_SIZE],
}

impl KeyPads {
    /// Derives the pads for `key` using `hash` for over-long keys.
    ///
    /// An empty key is legal and yields the all-zero key block.
    pub fn derive(hash: &mut dyn HashAlgorithm, key: &[u8]) -> Self {
        let key_block = normalize_key(hash, key);
        let block_size = hash.block_size();

        let mut pads = Self {
            block_size,
            k_ipad: [0u8; MAX_BLOCK_SIZE],
            k_opad: [0u8; MAX_BLOCK_SIZE],
        };

        for (i, kb) in key_block[..block_size].iter().enumerate() {
            pads.k_ipad[i] = kb ^ IPAD;
            pads.k_opad[i] = kb ^ OPAD;
        }

        pads
    }

    /// Block size the pads were derived for.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// K ⊕ ipad, `block_size` bytes.
    pub fn inner(&self) -> &[u8] {
        &self.k_ipad[..self.block_size]
    }

    /// K ⊕ opad, `block_size` bytes.
    pub fn outer(&self) -> &[u8] {
        &self.k_opad[..self.block_size]
    }

    /// Overwrites both pads with zeros.
    pub fn wipe(&mut self) {
        self.k_ipad.zeroize();
        self.k_opad.zeroize();
    }

    /// Returns `true` once both pads have been wiped.
    pub fn is_zeroized(&self) -> bool {
        bulwark_util::is_slice_zeroized(&self.k_ipad) && bulwark_util::is_slice_zeroized(&self.k_opad)
    }
}

impl Drop for KeyPads {
    fn drop(&mut self) {
        self.wipe();
    }
}
