// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Streaming HMAC context per RFC 2104
//!
//! `HMAC(K, m) = H((K' ⊕ opad) || H((K' ⊕ ipad) || m))`
//!
//! The inner hash is primed with `K' ⊕ ipad` lazily, on the first
//! [`update`](HmacContext::update) or [`finalize`](HmacContext::finalize)
//! after keying, so the same pads serve any number of messages.

use alloc::boxed::Box;
use core::fmt;

use zeroize::Zeroize;

use crate::error::HmacError;
use crate::hash::{HashAlgorithm, HashProvider, RustCryptoProvider};
use crate::key::KeyPads;
use crate::registry::{HashAlgorithmId, MAX_DIGEST_SIZE};
use crate::tag::Tag;

/// Lifecycle of an [`HmacContext`].
///
/// ```text
/// Empty --set_key--> Ready --update--> Primed --finalize--> Finalized
///                      ^                  |                     |
///                      |                  +------update---------+
///                      +--------reset / set_key (any state)-----+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HmacState {
    /// No key set.
    Empty,
    /// Keyed; the inner hash has not absorbed the inner pad yet.
    Ready,
    /// Inner hash primed and absorbing message bytes.
    Primed,
    /// A tag was produced; the key and pads are kept for the next message.
    Finalized,
}

/// Everything that exists only while a key is set.
struct Keyed {
    algorithm: HashAlgorithmId,
    hash: Box<dyn HashAlgorithm>,
    pads: KeyPads,
}

/// Streaming HMAC computation over a runtime-selected hash primitive.
///
/// A context is rekeyable and reusable: after [`finalize`](Self::finalize)
/// the next [`update`](Self::update) starts a new message under the same
/// key. Pads and the inner digest are wiped on rekey, on [`wipe`](Self::wipe)
/// and on drop.
///
/// Contexts perform no locking; use one per thread.
pub struct HmacContext {
    provider: Box<dyn HashProvider>,
    keyed: Option<Keyed>,
    state: HmacState,
    /// H(K ⊕ ipad || m), alive only inside `finalize_into`
    inner_digest: [u8; MAX_DIGEST_SIZE],
}

impl HmacContext {
    /// Creates an empty context backed by [`RustCryptoProvider`].
    pub fn new() -> Self {
        Self::with_provider(RustCryptoProvider)
    }

    /// Creates an empty context that instantiates hashes through `provider`.
    pub fn with_provider<P: HashProvider + 'static>(provider: P) -> Self {
        Self {
            provider: Box::new(provider),
            keyed: None,
            state: HmacState::Empty,
            inner_digest: [0u8; MAX_DIGEST_SIZE],
        }
    }

    /// Keys the context for `algorithm`.
    ///
    /// Any previous key, pads and in-flight message are discarded first, so
    /// on error the context is left [`HmacState::Empty`].
    ///
    /// # Errors
    ///
    /// Returns [`HmacError::UnsupportedAlgorithm`] if the provider cannot
    /// supply `algorithm`, or supplies an instance whose sizes disagree with
    /// the registry.
    pub fn set_key(&mut self, algorithm: HashAlgorithmId, key: &[u8]) -> Result<(), HmacError> {
        self.wipe();

        let mut hash = self.provider.instantiate(algorithm)?;

        if hash.id() != algorithm
            || hash.block_size() != algorithm.block_size()
            || hash.digest_size() != algorithm.digest_size()
        {
            log::debug!("hmac: provider returned a mismatched instance for {}", algorithm);
            return Err(HmacError::UnsupportedAlgorithm(algorithm));
        }

        let pads = KeyPads::derive(&mut *hash, key);

        self.keyed = Some(Keyed {
            algorithm,
            hash,
            pads,
        });
        self.state = HmacState::Ready;

        log::trace!("hmac: keyed for {}", algorithm);
        Ok(())
    }

    /// Feeds message bytes.
    ///
    /// Chunking is irrelevant: any split of a message produces the same tag
    /// as a single call with the whole message.
    ///
    /// # Errors
    ///
    /// Returns [`HmacError::NotKeyed`] if no key is set.
    pub fn update(&mut self, data: &[u8]) -> Result<(), HmacError> {
        let keyed = self.keyed.as_mut().ok_or(HmacError::NotKeyed)?;

        if self.state != HmacState::Primed {
            prime(keyed);
            self.state = HmacState::Primed;
        }

        keyed.hash.update(data);
        Ok(())
    }

    /// Completes the MAC into `out` and returns the number of bytes written
    /// (the digest size).
    ///
    /// With no preceding [`update`](Self::update) this is the MAC of the
    /// empty message.
    ///
    /// # Errors
    ///
    /// - [`HmacError::NotKeyed`] if no key is set.
    /// - [`HmacError::AlreadyFinalized`] if the previous call already
    ///   finalized and nothing was fed since.
    /// - [`HmacError::OutputTooShort`] if `out` is shorter than the digest.
    ///
    /// No bytes are hashed when an error is returned.
    pub fn finalize_into(&mut self, out: &mut [u8]) -> Result<usize, HmacError> {
        let keyed = self.keyed.as_mut().ok_or(HmacError::NotKeyed)?;
        let digest_size = keyed.algorithm.digest_size();

        if self.state == HmacState::Finalized {
            log::debug!("hmac: finalize called twice for {}", keyed.algorithm);
            return Err(HmacError::AlreadyFinalized);
        }

        if out.len() < digest_size {
            return Err(HmacError::OutputTooShort {
                expected: digest_size,
                actual: out.len(),
            });
        }

        if self.state == HmacState::Ready {
            prime(keyed);
        }

        // Inner hash: H(K ⊕ ipad || m)
        let inner = &mut self.inner_digest[..digest_size];
        keyed.hash.finalize_into_reset(inner);

        // Outer hash: H(K ⊕ opad || inner)
        keyed.hash.update(keyed.pads.outer());
        keyed.hash.update(inner);
        keyed.hash.finalize_into_reset(&mut out[..digest_size]);

        inner.zeroize();
        self.state = HmacState::Finalized;

        Ok(digest_size)
    }

    /// Completes the MAC and returns it as a [`Tag`].
    ///
    /// # Errors
    ///
    /// Same as [`finalize_into`](Self::finalize_into), minus the buffer check.
    pub fn finalize(&mut self) -> Result<Tag, HmacError> {
        let mut out = [0u8; MAX_DIGEST_SIZE];
        let len = self.finalize_into(&mut out)?;
        Ok(Tag::from_slice(&out[..len]))
    }

    /// Finalizes and compares the MAC against `expected` in constant time.
    ///
    /// # Errors
    ///
    /// Returns [`HmacError::VerificationFailed`] on mismatch (including a
    /// length mismatch), or any error of [`finalize`](Self::finalize).
    pub fn verify(&mut self, expected: &[u8]) -> Result<(), HmacError> {
        let tag = self.finalize()?;

        if tag.verify(expected) {
            Ok(())
        } else {
            Err(HmacError::VerificationFailed)
        }
    }

    /// Drops any in-flight message and returns to [`HmacState::Ready`]
    /// under the current key.
    ///
    /// # Errors
    ///
    /// Returns [`HmacError::NotKeyed`] if no key is set.
    pub fn reset(&mut self) -> Result<(), HmacError> {
        let keyed = self.keyed.as_mut().ok_or(HmacError::NotKeyed)?;
        keyed.hash.reset();
        self.state = HmacState::Ready;
        Ok(())
    }

    /// Discards the key, pads and hash state, returning to
    /// [`HmacState::Empty`].
    pub fn wipe(&mut self) {
        if let Some(mut keyed) = self.keyed.take() {
            keyed.hash.wipe();
            keyed.pads.wipe();
        }
        self.inner_digest.zeroize();
        self.state = HmacState::Empty;
    }

    /// Current lifecycle state.
    pub fn state(&self) -> HmacState {
        self.state
    }

    /// Algorithm selected by the last successful [`set_key`](Self::set_key).
    pub fn algorithm(&self) -> Option<HashAlgorithmId> {
        self.keyed.as_ref().map(|k| k.algorithm)
    }

    /// Tag size of the keyed algorithm.
    pub fn digest_size(&self) -> Option<usize> {
        self.algorithm().map(HashAlgorithmId::digest_size)
    }

    /// Block size of the keyed algorithm.
    pub fn block_size(&self) -> Option<usize> {
        self.algorithm().map(HashAlgorithmId::block_size)
    }

    #[cfg(test)]
    pub(crate) fn pads_for_test(&self) -> Option<(&[u8], &[u8])> {
        self.keyed
            .as_ref()
            .map(|k| (k.pads.inner(), k.pads.outer()))
    }

    #[cfg(test)]
    pub(crate) fn inner_digest_for_test(&self) -> &[u8] {
        &self.inner_digest
    }
}

/// Restarts the inner hash and absorbs `K ⊕ ipad`.
fn prime(keyed: &mut Keyed) {
    keyed.hash.reset();
    keyed.hash.update(keyed.pads.inner());
}

impl Default for HmacContext {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for HmacContext {
    fn drop(&mut self) {
        self.wipe();
    }
}

impl fmt::Debug for HmacContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HmacContext")
            .field("algorithm", &self.algorithm())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// One-shot HMAC of `message` under `key`.
///
/// # Errors
///
/// Returns [`HmacError::UnsupportedAlgorithm`] if `algorithm` is not
/// compiled in.
pub fn hmac(algorithm: HashAlgorithmId, key: &[u8], message: &[u8]) -> Result<Tag, HmacError> {
    let mut ctx = HmacContext::new();
    ctx.set_key(algorithm, key)?;
    ctx.update(message)?;
    ctx.finalize()
}
