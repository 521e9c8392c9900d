// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HKDF over any bulwark-hmac algorithm with secure memory handling
//!
//! Implementation per RFC 5869 (HKDF) on top of the multi-algorithm HMAC
//! engine. PRK, chaining blocks and OKM are zeroized.
//!
//! References:
//! - RFC 5869: HMAC-based Extract-and-Expand Key Derivation Function (HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc5869>
//!
//! ## Example
//!
//! ```rust
//! use bulwark_hkdf::{HashAlgorithmId, hkdf};
//!
//! let okm = hkdf(HashAlgorithmId::Sha256, b"ikm", b"salt", b"context", 42)
//!     .expect("Failed to hkdf(..)");
//! assert_eq!(okm.len(), 42);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod hkdf;
mod material;

pub use bulwark_hmac::HashAlgorithmId;
pub use error::HkdfError;
pub use hkdf::{Hkdf, expand, expand_into, extract, hkdf, max_output_len};
pub use material::{Okm, Prk};
