// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Multi-algorithm HMAC engine with secure memory handling
//!
//! Implementation per RFC 2104 (HMAC), verified against RFC 2202 and
//! RFC 4231 test vectors. The underlying hash primitives come from the
//! RustCrypto crates and are selected at key-set time through
//! [`HashProvider`]. Key-derived pads and intermediate digests are wiped on
//! rekey and on drop.
//!
//! References:
//! - RFC 2104: HMAC: Keyed-Hashing for Message Authentication
//!   <https://datatracker.ietf.org/doc/html/rfc2104>
//! - RFC 4231: Identifiers and Test Vectors for HMAC-SHA-224, HMAC-SHA-256,
//!   HMAC-SHA-384, and HMAC-SHA-512
//!   <https://datatracker.ietf.org/doc/html/rfc4231>
//!
//! ## Example
//!
//! ```rust
//! use bulwark_hmac::{HashAlgorithmId, HmacContext};
//!
//! let mut ctx = HmacContext::new();
//! ctx.set_key(HashAlgorithmId::Sha256, &[0x0b; 20]).expect("Failed to set_key(..)");
//! ctx.update(b"Hi ").expect("Failed to update(..)");
//! ctx.update(b"There").expect("Failed to update(..)");
//!
//! let tag = ctx.finalize().expect("Failed to finalize()");
//! assert_eq!(tag.len(), 32);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod context;
mod error;
mod hash;
mod key;
mod registry;
mod support;
mod tag;

pub use context::{HmacContext, HmacState, hmac};
pub use error::HmacError;
pub use hash::{HashAlgorithm, HashProvider, RustCryptoProvider};
pub use key::{IPAD, KeyPads, OPAD, normalize_key};
pub use registry::{HashAlgorithmId, MAX_BLOCK_SIZE, MAX_DIGEST_SIZE};
pub use tag::Tag;

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
