// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::boxed::Box;
use core::sync::atomic::{AtomicUsize, Ordering};

use crate::error::HmacError;
use crate::hash::{HashAlgorithm, HashProvider, RustCryptoProvider};
use crate::registry::HashAlgorithmId;

/// Configurable behavior for [`MockHashProvider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockHashProviderBehaviour {
    /// Normal operation (delegates to [`RustCryptoProvider`]).
    None,
    /// Refuse this one algorithm.
    Unsupported(HashAlgorithmId),
    /// Always serve this algorithm, whatever was requested.
    Substitute(HashAlgorithmId),
    /// Fail instantiate on the Nth call (1-indexed: 1 = first call fails).
    FailAtNthInstantiate(usize),
}

/// Mock hash provider for testing.
///
/// Wraps [`RustCryptoProvider`] but allows simulating unsupported or
/// misbehaving backends via [`MockHashProviderBehaviour`].
pub struct MockHashProvider {
    inner: RustCryptoProvider,
    behaviour: MockHashProviderBehaviour,
    instantiate_count: AtomicUsize,
}

impl MockHashProvider {
    /// Creates a new mock provider with the specified behavior.
    pub fn new(behaviour: MockHashProviderBehaviour) -> Self {
        Self {
            inner: RustCryptoProvider,
            behaviour,
            instantiate_count: AtomicUsize::new(0),
        }
    }

    /// Changes the mock behavior at runtime.
    pub fn change_behaviour(&mut self, behaviour: MockHashProviderBehaviour) {
        self.behaviour = behaviour;
    }

    /// Returns how many times `instantiate` was called.
    pub fn call_count(&self) -> usize {
        self.instantiate_count.load(Ordering::Relaxed)
    }

    /// Resets the call counter to zero.
    pub fn reset_count(&self) {
        self.instantiate_count.store(0, Ordering::Relaxed);
    }
}

impl HashProvider for MockHashProvider {
    fn instantiate(&self, id: HashAlgorithmId) -> Result<Box<dyn HashAlgorithm>, HmacError> {
        let current = self.instantiate_count.fetch_add(1, Ordering::Relaxed);

        match self.behaviour {
            MockHashProviderBehaviour::None => self.inner.instantiate(id),
            MockHashProviderBehaviour::Unsupported(refused) if refused == id => {
                Err(HmacError::UnsupportedAlgorithm(id))
            }
            MockHashProviderBehaviour::Unsupported(_) => self.inner.instantiate(id),
            MockHashProviderBehaviour::Substitute(other) => self.inner.instantiate(other),
            MockHashProviderBehaviour::FailAtNthInstantiate(n) if current + 1 == n => {
                Err(HmacError::UnsupportedAlgorithm(id))
            }
            MockHashProviderBehaviour::FailAtNthInstantiate(_) => self.inner.instantiate(id),
        }
    }
}
