// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test doubles for exercising provider failures.

mod mock_hash_provider;

pub use mock_hash_provider::{MockHashProvider, MockHashProviderBehaviour};
