// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/clavecore

//! Shift ciphers ("Clave +1" / "Clave -1") over the 27-letter alphabet.
//!
//! Each letter moves one position along the Spanish alphabet ordering, with
//! Ñ participating at index 14 (N→Ñ→O under +1) and exact wraparound at the
//! ends (Z→A for +1, A→Z for -1). Decrypt is the shift with the opposite
//! offset. Non-letters pass through and case is preserved per character.

use crate::alphabet::{index_of, letter_at, preserve_case};

/// Shift every Spanish letter by `offset` positions, wrapping modulo 27.
pub fn shift(input: &str, offset: i64) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match index_of(c) {
            Some(idx) => {
                let shifted = letter_at(idx as i64 + offset);
                out.push(preserve_case(c, shifted));
            }
            None => out.push(c),
        }
    }
    out
}
