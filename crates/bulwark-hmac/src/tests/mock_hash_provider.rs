// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::sync::Arc;

use crate::context::{HmacContext, HmacState, hmac};
use crate::error::HmacError;
use crate::hash::HashProvider;
use crate::registry::HashAlgorithmId;
use crate::support::test_utils::{MockHashProvider, MockHashProviderBehaviour};

// =============================================================================
// MockHashProvider itself
// =============================================================================

#[test]
fn test_mock_hash_provider_behaviour_none() {
    let mock = MockHashProvider::new(MockHashProviderBehaviour::None);

    for id in HashAlgorithmId::ALL {
        let hash = mock.instantiate(id).expect("Failed to instantiate(..)");
        assert_eq!(hash.id(), id);
    }
}

#[test]
fn test_mock_hash_provider_behaviour_unsupported() {
    let mock = MockHashProvider::new(MockHashProviderBehaviour::Unsupported(HashAlgorithmId::Md5));

    let result = mock.instantiate(HashAlgorithmId::Md5);
    assert!(matches!(
        result,
        Err(HmacError::UnsupportedAlgorithm(HashAlgorithmId::Md5))
    ));

    // Other algorithms are unaffected
    assert!(mock.instantiate(HashAlgorithmId::Sha256).is_ok());
}

#[test]
fn test_mock_hash_provider_behaviour_fail_at_nth_third_call() {
    let mock = MockHashProvider::new(MockHashProviderBehaviour::FailAtNthInstantiate(3));

    assert!(mock.instantiate(HashAlgorithmId::Sha1).is_ok());
    assert!(mock.instantiate(HashAlgorithmId::Sha1).is_ok());

    // Third call fails
    assert!(matches!(
        mock.instantiate(HashAlgorithmId::Sha1),
        Err(HmacError::UnsupportedAlgorithm(HashAlgorithmId::Sha1))
    ));

    // Fourth call succeeds
    assert!(mock.instantiate(HashAlgorithmId::Sha1).is_ok());
}

#[test]
fn test_mock_hash_provider_call_count() {
    let mock = MockHashProvider::new(MockHashProviderBehaviour::None);
    assert_eq!(mock.call_count(), 0);

    mock.instantiate(HashAlgorithmId::Sha512)
        .expect("Failed to instantiate(..)");
    assert_eq!(mock.call_count(), 1);

    mock.instantiate(HashAlgorithmId::Sha512)
        .expect("Failed to instantiate(..)");
    assert_eq!(mock.call_count(), 2);

    mock.reset_count();
    assert_eq!(mock.call_count(), 0);
}

#[test]
fn test_mock_hash_provider_change_behaviour() {
    let mut mock = MockHashProvider::new(MockHashProviderBehaviour::None);
    assert!(mock.instantiate(HashAlgorithmId::Sha384).is_ok());

    mock.change_behaviour(MockHashProviderBehaviour::Unsupported(HashAlgorithmId::Sha384));
    assert!(mock.instantiate(HashAlgorithmId::Sha384).is_err());

    mock.change_behaviour(MockHashProviderBehaviour::None);
    assert!(mock.instantiate(HashAlgorithmId::Sha384).is_ok());
}

// =============================================================================
// HmacContext over a failing provider
// =============================================================================

#[test]
fn test_set_key_unsupported_algorithm() {
    let mut ctx = HmacContext::with_provider(MockHashProvider::new(
        MockHashProviderBehaviour::Unsupported(HashAlgorithmId::Blake2b256),
    ));

    assert_eq!(
        ctx.set_key(HashAlgorithmId::Blake2b256, b"key"),
        Err(HmacError::UnsupportedAlgorithm(HashAlgorithmId::Blake2b256))
    );
    assert_eq!(ctx.state(), HmacState::Empty);
    assert_eq!(ctx.update(b"data"), Err(HmacError::NotKeyed));

    // Still usable with another algorithm
    ctx.set_key(HashAlgorithmId::Sha256, b"key")
        .expect("Failed to set_key(..)");
    assert_eq!(ctx.state(), HmacState::Ready);
}

#[test]
fn test_set_key_failure_discards_previous_key() {
    let mock = Arc::new(MockHashProvider::new(
        MockHashProviderBehaviour::FailAtNthInstantiate(2),
    ));
    let mut ctx = HmacContext::with_provider(Arc::clone(&mock));

    ctx.set_key(HashAlgorithmId::Sha256, b"first key")
        .expect("Failed to set_key(..)");
    ctx.update(b"partial").expect("Failed to update(..)");

    let result = ctx.set_key(HashAlgorithmId::Sha256, b"second key");

    assert_eq!(
        result,
        Err(HmacError::UnsupportedAlgorithm(HashAlgorithmId::Sha256))
    );
    assert_eq!(mock.call_count(), 2);
    assert_eq!(ctx.state(), HmacState::Empty);
    assert_eq!(ctx.algorithm(), None);
    assert!(ctx.pads_for_test().is_none());
}

#[test]
fn test_set_key_rejects_substituted_backend() {
    let mut ctx = HmacContext::with_provider(MockHashProvider::new(
        MockHashProviderBehaviour::Substitute(HashAlgorithmId::Sha1),
    ));

    assert_eq!(
        ctx.set_key(HashAlgorithmId::Sha256, b"key"),
        Err(HmacError::UnsupportedAlgorithm(HashAlgorithmId::Sha256))
    );
    assert_eq!(ctx.state(), HmacState::Empty);

    // Substitution to the requested algorithm is indistinguishable from none
    ctx.set_key(HashAlgorithmId::Sha1, b"key")
        .expect("Failed to set_key(..)");
    ctx.update(b"message").expect("Failed to update(..)");
    assert_eq!(
        ctx.finalize().expect("Failed to finalize()"),
        hmac(HashAlgorithmId::Sha1, b"key", b"message").expect("Failed to hmac(..)")
    );
}

#[test]
fn test_provider_instantiates_once_per_key() {
    let mock = Arc::new(MockHashProvider::new(MockHashProviderBehaviour::None));
    let mut ctx = HmacContext::with_provider(Arc::clone(&mock));

    ctx.set_key(HashAlgorithmId::Sha224, b"key")
        .expect("Failed to set_key(..)");
    for _ in 0..4 {
        ctx.update(b"message").expect("Failed to update(..)");
        ctx.finalize().expect("Failed to finalize()");
        ctx.reset().expect("Failed to reset()");
    }

    assert_eq!(mock.call_count(), 1);
}
