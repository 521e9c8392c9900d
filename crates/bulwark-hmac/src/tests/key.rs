// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use bulwark_util::is_slice_zeroized;

use crate::hash::{HashProvider, RustCryptoProvider};
use crate::key::{IPAD, KeyPads, OPAD, normalize_key};
use crate::registry::{HashAlgorithmId, MAX_BLOCK_SIZE};

fn digest_of(id: HashAlgorithmId, data: &[u8]) -> Vec<u8> {
    let mut hash = RustCryptoProvider
        .instantiate(id)
        .expect("Failed to instantiate(..)");
    let mut out = vec![0u8; id.digest_size()];
    hash.update(data);
    hash.finalize_into_reset(&mut out);
    out
}

#[test]
fn test_empty_key_yields_constant_pads() {
    let mut hash = RustCryptoProvider
        .instantiate(HashAlgorithmId::Sha256)
        .expect("Failed to instantiate(..)");

    let pads = KeyPads::derive(&mut *hash, &[]);

    assert_eq!(pads.block_size(), 64);
    assert!(pads.inner().iter().all(|&b| b == IPAD));
    assert!(pads.outer().iter().all(|&b| b == OPAD));
}

#[test]
fn test_short_key_is_zero_padded() {
    let mut hash = RustCryptoProvider
        .instantiate(HashAlgorithmId::Sha384)
        .expect("Failed to instantiate(..)");
    let key = [0x01u8, 0x02, 0x03];

    let key_block = normalize_key(&mut *hash, &key);

    assert_eq!(&key_block[..3], &key);
    assert!(is_slice_zeroized(&key_block[3..]));

    let pads = KeyPads::derive(&mut *hash, &key);
    assert_eq!(pads.inner().len(), 128);
    assert_eq!(pads.inner()[0], 0x01 ^ IPAD);
    assert_eq!(pads.outer()[2], 0x03 ^ OPAD);
    assert_eq!(pads.inner()[3], IPAD);
    assert_eq!(pads.outer()[127], OPAD);
}

#[test]
fn test_block_sized_key_is_not_hashed() {
    let mut hash = RustCryptoProvider
        .instantiate(HashAlgorithmId::Sha1)
        .expect("Failed to instantiate(..)");
    let key = [0x42u8; 64];

    let key_block = normalize_key(&mut *hash, &key);

    assert_eq!(&key_block[..64], &key[..]);
    assert!(is_slice_zeroized(&key_block[64..]));
}

#[test]
fn test_long_key_is_hashed_then_padded() {
    for id in HashAlgorithmId::ALL {
        let Ok(mut hash) = RustCryptoProvider.instantiate(id) else {
            continue;
        };
        let key = vec![0xa5u8; id.block_size() + 1];

        let key_block = normalize_key(&mut *hash, &key);
        let expected = digest_of(id, &key);

        assert_eq!(&key_block[..id.digest_size()], expected.as_slice(), "{}", id);
        assert!(is_slice_zeroized(&key_block[id.digest_size()..]), "{}", id);
    }
}

#[test]
fn test_normalize_leaves_hash_reset() {
    let mut hash = RustCryptoProvider
        .instantiate(HashAlgorithmId::Sha256)
        .expect("Failed to instantiate(..)");

    let _ = normalize_key(&mut *hash, &[0x11u8; 100]);

    let mut out = [0u8; 32];
    hash.update(b"abc");
    hash.finalize_into_reset(&mut out);
    assert_eq!(out.to_vec(), digest_of(HashAlgorithmId::Sha256, b"abc"));
}

#[test]
fn test_pads_differ_by_constant_mask() {
    let mut hash = RustCryptoProvider
        .instantiate(HashAlgorithmId::Sha512)
        .expect("Failed to instantiate(..)");

    let pads = KeyPads::derive(&mut *hash, b"some key material");

    for (i, o) in pads.inner().iter().zip(pads.outer()) {
        assert_eq!(i ^ o, IPAD ^ OPAD);
    }
}

#[test]
fn test_wipe_clears_both_pads() {
    let mut hash = RustCryptoProvider
        .instantiate(HashAlgorithmId::Sha256)
        .expect("Failed to instantiate(..)");

    let mut pads = KeyPads::derive(&mut *hash, b"key");
    assert!(!pads.is_zeroized());

    pads.wipe();
    assert!(pads.is_zeroized());
    assert_eq!(pads.inner().len(), 64);
    assert!(MAX_BLOCK_SIZE >= pads.block_size());
}
