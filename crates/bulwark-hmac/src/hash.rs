// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Hash primitive capability consumed by the HMAC engine.
//!
//! The engine never implements a compression function itself. It asks a
//! [`HashProvider`] for a boxed [`HashAlgorithm`] at key-set time; the
//! default [`RustCryptoProvider`] serves the RustCrypto implementations
//! enabled through cargo features.

use alloc::boxed::Box;
use alloc::sync::Arc;

use digest::core_api::BlockSizeUser;
use digest::{Digest, FixedOutputReset};

use crate::error::HmacError;
use crate::registry::{HashAlgorithmId, MAX_BLOCK_SIZE};

/// A streaming hash instance bound to one primitive.
///
/// Implementations own their running compression state and nothing else.
pub trait HashAlgorithm: Send {
    /// Primitive this instance computes.
    fn id(&self) -> HashAlgorithmId;

    /// Input block size in bytes.
    fn block_size(&self) -> usize {
        self.id().block_size()
    }

    /// Output size in bytes.
    fn digest_size(&self) -> usize {
        self.id().digest_size()
    }

    /// Discards absorbed input and returns to the initial state.
    fn reset(&mut self);

    /// Like [`reset`](Self::reset), but also overwrites any buffered input.
    ///
    /// Called when the instance held key-derived bytes that must not
    /// outlive it (rekey, wipe and drop).
    fn wipe(&mut self);

    /// Absorbs `data`.
    fn update(&mut self, data: &[u8]);

    /// Writes the digest of everything absorbed since the last reset into
    /// `out` and re-initializes the instance.
    ///
    /// # Panics
    ///
    /// Panics if `out.len() != self.digest_size()`.
    fn finalize_into_reset(&mut self, out: &mut [u8]);
}

/// Factory for [`HashAlgorithm`] instances.
///
/// Alternate backends (hardware offload, instrumented test doubles) plug in
/// here rather than inside the HMAC context.
pub trait HashProvider: Send + Sync {
    /// Creates a fresh instance of `id`.
    ///
    /// # Errors
    ///
    /// Returns [`HmacError::UnsupportedAlgorithm`] if this provider cannot
    /// supply the primitive.
    fn instantiate(&self, id: HashAlgorithmId) -> Result<Box<dyn HashAlgorithm>, HmacError>;
}

impl<P: HashProvider + ?Sized> HashProvider for Arc<P> {
    fn instantiate(&self, id: HashAlgorithmId) -> Result<Box<dyn HashAlgorithm>, HmacError> {
        (**self).instantiate(id)
    }
}

/// Adapter from a RustCrypto [`Digest`] to [`HashAlgorithm`].
pub(crate) struct RustCryptoHash<D: Digest + FixedOutputReset> {
    id: HashAlgorithmId,
    inner: D,
}

impl<D> RustCryptoHash<D>
where
    D: Digest + FixedOutputReset + BlockSizeUser,
{
    pub(crate) fn new(id: HashAlgorithmId) -> Self {
        debug_assert_eq!(<D as BlockSizeUser>::block_size(), id.block_size());
        debug_assert_eq!(<D as Digest>::output_size(), id.digest_size());

        Self {
            id,
            inner: D::new(),
        }
    }
}

impl<D: Digest + FixedOutputReset> RustCryptoHash<D> {
    /// `Digest::reset` only rewinds the block buffer position; the bytes stay.
    ///
    /// A block of zeros overwrites every slot after a nonzero position. A
    /// position of zero skips the buffer for whole blocks, so one more byte
    /// and another block cover that case too.
    fn scrub(&mut self) {
        let zeros = [0u8; MAX_BLOCK_SIZE];
        let block = &zeros[..self.id.block_size()];

        Digest::update(&mut self.inner, block);
        Digest::update(&mut self.inner, &zeros[..1]);
        Digest::update(&mut self.inner, block);
        Digest::reset(&mut self.inner);
    }
}

impl<D> HashAlgorithm for RustCryptoHash<D>
where
    D: Digest + FixedOutputReset + BlockSizeUser + Send,
{
    fn id(&self) -> HashAlgorithmId {
        self.id
    }

    fn reset(&mut self) {
        Digest::reset(&mut self.inner);
    }

    fn wipe(&mut self) {
        self.scrub();
    }

    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.inner, data);
    }

    fn finalize_into_reset(&mut self, out: &mut [u8]) {
        let out: &mut digest::Output<D> = out.into();
        Digest::finalize_into_reset(&mut self.inner, out);
    }
}

impl<D: Digest + FixedOutputReset> Drop for RustCryptoHash<D> {
    fn drop(&mut self) {
        // Buffered input may be key material.
        self.scrub();
    }
}

/// Provider backed by the RustCrypto hash crates.
///
/// Each primitive sits behind its cargo feature (`md5`, `sha1`, `sha2`,
/// `blake2`); a disabled primitive yields
/// [`HmacError::UnsupportedAlgorithm`].
#[derive(Debug, Default, Clone, Copy)]
pub struct RustCryptoProvider;

impl HashProvider for RustCryptoProvider {
    fn instantiate(&self, id: HashAlgorithmId) -> Result<Box<dyn HashAlgorithm>, HmacError> {
        match id {
            #[cfg(feature = "md5")]
            HashAlgorithmId::Md5 => Ok(Box::new(RustCryptoHash::<md5::Md5>::new(id))),
            #[cfg(feature = "sha1")]
            HashAlgorithmId::Sha1 => Ok(Box::new(RustCryptoHash::<sha1::Sha1>::new(id))),
            #[cfg(feature = "sha2")]
            HashAlgorithmId::Sha224 => Ok(Box::new(RustCryptoHash::<sha2::Sha224>::new(id))),
            #[cfg(feature = "sha2")]
            HashAlgorithmId::Sha256 => Ok(Box::new(RustCryptoHash::<sha2::Sha256>::new(id))),
            #[cfg(feature = "sha2")]
            HashAlgorithmId::Sha384 => Ok(Box::new(RustCryptoHash::<sha2::Sha384>::new(id))),
            #[cfg(feature = "sha2")]
            HashAlgorithmId::Sha512 => Ok(Box::new(RustCryptoHash::<sha2::Sha512>::new(id))),
            #[cfg(feature = "blake2")]
            HashAlgorithmId::Blake2b256 => Ok(Box::new(RustCryptoHash::<
                blake2::Blake2b<digest::consts::U32>,
            >::new(id))),
            #[allow(unreachable_patterns)]
            _ => {
                log::debug!("no RustCrypto backend compiled in for {}", id);
                Err(HmacError::UnsupportedAlgorithm(id))
            }
        }
    }
}
