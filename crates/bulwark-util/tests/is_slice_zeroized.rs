// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod is_slice_zeroized_tests {
    use bulwark_util::is_slice_zeroized;

    #[test]
    fn test_is_slice_zeroized_empty() {
        let slice: &[u8] = &[];
        assert!(is_slice_zeroized(slice));
    }

    #[test]
    fn test_is_slice_zeroized_all_zeros() {
        assert!(is_slice_zeroized(&[0u8; 128]));
    }

    #[test]
    fn test_is_slice_zeroized_single_nonzero_byte() {
        assert!(!is_slice_zeroized(&[0u8, 0, 1, 0, 0]));
    }

    #[test]
    fn test_is_slice_zeroized_last_byte_nonzero() {
        let mut data = [0u8; 64];
        data[63] = 0x5c;
        assert!(!is_slice_zeroized(&data));
    }
}
