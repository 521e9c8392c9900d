// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HKDF Extract-then-Expand per RFC 5869

use alloc::vec::Vec;

use bulwark_hmac::{HashAlgorithmId, HmacContext, MAX_DIGEST_SIZE};
use zeroize::{Zeroize, Zeroizing};

use crate::error::HkdfError;
use crate::material::{Okm, Prk};

/// Expand produces at most this many blocks (one-byte counter).
const MAX_BLOCKS: usize = 255;

/// Largest OKM length `algorithm` can produce: `255 * digest_size`.
pub fn max_output_len(algorithm: HashAlgorithmId) -> usize {
    MAX_BLOCKS * algorithm.digest_size()
}

/// HKDF-Extract per RFC 5869 Section 2.2
///
/// `PRK = HMAC-Hash(salt, IKM)`. An empty `salt` is replaced by
/// `digest_size` zero bytes.
///
/// # Errors
///
/// Returns [`HkdfError::Hmac`] if `algorithm` is not available.
pub fn extract(algorithm: HashAlgorithmId, salt: &[u8], ikm: &[u8]) -> Result<Prk, HkdfError> {
    let mut ctx = HmacContext::new();
    let prk = extract_in(&mut ctx, algorithm, salt, ikm);
    ctx.wipe();
    prk
}

/// HKDF-Expand per RFC 5869 Section 2.3, allocating `length` bytes.
///
/// # Errors
///
/// Returns [`HkdfError::OutputTooLong`] if `length` exceeds
/// [`max_output_len`], or [`HkdfError::Hmac`] if `algorithm` is not
/// available.
pub fn expand(
    algorithm: HashAlgorithmId,
    prk: &[u8],
    info: &[u8],
    length: usize,
) -> Result<Okm, HkdfError> {
    check_length(algorithm, length)?;

    let mut okm = Okm::zeroed(length);
    expand_into(algorithm, prk, info, okm.as_mut_bytes())?;
    Ok(okm)
}

/// HKDF-Expand per RFC 5869 Section 2.3, filling `okm`.
///
/// `T(n) = HMAC-Hash(PRK, T(n-1) || info || n)` for `n` in `1..=255`,
/// concatenated and truncated to `okm.len()`. An empty `okm` succeeds
/// without hashing.
///
/// # Errors
///
/// Same as [`expand`]. An over-long `okm` is rejected untouched; after an
/// HMAC error it is zeroed.
pub fn expand_into(
    algorithm: HashAlgorithmId,
    prk: &[u8],
    info: &[u8],
    okm: &mut [u8],
) -> Result<(), HkdfError> {
    check_length(algorithm, okm.len())?;

    if okm.is_empty() {
        return Ok(());
    }

    let mut ctx = HmacContext::new();
    let result = ctx
        .set_key(algorithm, prk)
        .map_err(HkdfError::from)
        .and_then(|()| expand_keyed(&mut ctx, info, okm));
    ctx.wipe();

    if result.is_err() {
        okm.zeroize();
    }
    result
}

/// Extract-then-Expand: `expand(extract(salt, ikm), info, length)`.
///
/// # Errors
///
/// Same as [`expand`]. The length is checked before extracting.
pub fn hkdf(
    algorithm: HashAlgorithmId,
    ikm: &[u8],
    salt: &[u8],
    info: &[u8],
    length: usize,
) -> Result<Okm, HkdfError> {
    check_length(algorithm, length)?;

    let prk = extract(algorithm, salt, ikm)?;
    expand(algorithm, prk.as_bytes(), info, length)
}

/// HKDF bound to one PRK, for deriving several outputs without re-keying.
///
/// The HMAC context stays keyed with the PRK between expansions; it and the
/// PRK copy are wiped on drop.
pub struct Hkdf {
    algorithm: HashAlgorithmId,
    ctx: HmacContext,
    prk: Zeroizing<Vec<u8>>,
}

impl Hkdf {
    /// Runs Extract and keeps the resulting PRK.
    ///
    /// # Errors
    ///
    /// Returns [`HkdfError::Hmac`] if `algorithm` is not available.
    pub fn extract(algorithm: HashAlgorithmId, salt: &[u8], ikm: &[u8]) -> Result<Self, HkdfError> {
        Self::extract_with_context(HmacContext::new(), algorithm, salt, ikm)
    }

    /// Like [`Hkdf::extract`], computing through `ctx` (and therefore its
    /// hash provider). Any key `ctx` holds is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`HkdfError::Hmac`] if the provider rejects `algorithm`.
    pub fn extract_with_context(
        mut ctx: HmacContext,
        algorithm: HashAlgorithmId,
        salt: &[u8],
        ikm: &[u8],
    ) -> Result<Self, HkdfError> {
        let prk = extract_in(&mut ctx, algorithm, salt, ikm)?;
        Self::from_prk_with_context(ctx, algorithm, prk.as_bytes())
    }

    /// Skips Extract and uses `prk` directly.
    ///
    /// Any PRK length is accepted; RFC 5869 recommends at least
    /// `digest_size` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`HkdfError::Hmac`] if `algorithm` is not available.
    pub fn from_prk(algorithm: HashAlgorithmId, prk: &[u8]) -> Result<Self, HkdfError> {
        Self::from_prk_with_context(HmacContext::new(), algorithm, prk)
    }

    /// Like [`Hkdf::from_prk`], computing through `ctx`.
    ///
    /// # Errors
    ///
    /// Returns [`HkdfError::Hmac`] if the provider rejects `algorithm`.
    pub fn from_prk_with_context(
        mut ctx: HmacContext,
        algorithm: HashAlgorithmId,
        prk: &[u8],
    ) -> Result<Self, HkdfError> {
        ctx.set_key(algorithm, prk)?;

        log::trace!("hkdf: keyed with {}-byte prk for {}", prk.len(), algorithm);

        Ok(Self {
            algorithm,
            ctx,
            prk: Zeroizing::new(prk.to_vec()),
        })
    }

    /// Algorithm of the underlying HMAC.
    pub fn algorithm(&self) -> HashAlgorithmId {
        self.algorithm
    }

    /// The pseudorandom key.
    pub fn prk(&self) -> &[u8] {
        self.prk.as_slice()
    }

    /// [`max_output_len`] for this instance's algorithm.
    pub fn max_output_len(&self) -> usize {
        max_output_len(self.algorithm())
    }

    /// HKDF-Expand into a fresh [`Okm`] of `length` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`HkdfError::OutputTooLong`] if `length` exceeds
    /// [`Hkdf::max_output_len`].
    pub fn expand(&mut self, info: &[u8], length: usize) -> Result<Okm, HkdfError> {
        check_length(self.algorithm(), length)?;

        let mut okm = Okm::zeroed(length);
        self.expand_into(info, okm.as_mut_bytes())?;
        Ok(okm)
    }

    /// HKDF-Expand into `okm`.
    ///
    /// # Errors
    ///
    /// Returns [`HkdfError::OutputTooLong`] if `okm` is longer than
    /// [`Hkdf::max_output_len`], leaving it untouched.
    pub fn expand_into(&mut self, info: &[u8], okm: &mut [u8]) -> Result<(), HkdfError> {
        check_length(self.algorithm(), okm.len())?;

        if okm.is_empty() {
            return Ok(());
        }

        let result = expand_keyed(&mut self.ctx, info, okm);
        if result.is_err() {
            okm.zeroize();
        }
        result
    }
}

impl core::fmt::Debug for Hkdf {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Hkdf")
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}

fn check_length(algorithm: HashAlgorithmId, length: usize) -> Result<(), HkdfError> {
    let max = max_output_len(algorithm);

    if length > max {
        log::debug!(
            "hkdf: requested {} bytes, {} allows at most {}",
            length,
            algorithm,
            max
        );
        return Err(HkdfError::OutputTooLong {
            requested: length,
            max,
        });
    }

    Ok(())
}

fn extract_in(
    ctx: &mut HmacContext,
    algorithm: HashAlgorithmId,
    salt: &[u8],
    ikm: &[u8],
) -> Result<Prk, HkdfError> {
    const DEFAULT_SALT: [u8; MAX_DIGEST_SIZE] = [0u8; MAX_DIGEST_SIZE];

    let salt = if salt.is_empty() {
        &DEFAULT_SALT[..algorithm.digest_size()]
    } else {
        salt
    };

    ctx.set_key(algorithm, salt)?;
    ctx.update(ikm)?;

    let mut prk = Prk::new(algorithm);
    ctx.finalize_into(prk.as_mut_bytes())?;

    log::trace!("hkdf: extracted {}-byte prk with {}", prk.len(), algorithm);
    Ok(prk)
}

/// Runs the Expand loop on a context already keyed with the PRK.
///
/// `okm.len()` must have passed `check_length`.
fn expand_keyed(ctx: &mut HmacContext, info: &[u8], okm: &mut [u8]) -> Result<(), HkdfError> {
    let digest_size = ctx.digest_size().ok_or(bulwark_hmac::HmacError::NotKeyed)?;
    let mut block = Zeroizing::new([0u8; MAX_DIGEST_SIZE]);

    ctx.reset()?;

    // T(0) is empty, so the first block hashes only info || 0x01
    for (n, chunk) in (1..=u8::MAX).zip(okm.chunks_mut(digest_size)) {
        if n > 1 {
            ctx.update(&block[..digest_size])?;
        }
        ctx.update(info)?;
        ctx.update(&[n])?;
        ctx.finalize_into(&mut block[..digest_size])?;

        chunk.copy_from_slice(&block[..chunk.len()]);
    }

    ctx.reset()?;

    log::trace!("hkdf: expanded {} bytes", okm.len());
    Ok(())
}
