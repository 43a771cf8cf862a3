// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/clavecore

//! The 27-letter Spanish alphabet and the character utilities shared by
//! every cipher.
//!
//! All index arithmetic in the shift ciphers is defined over this ordering,
//! with Ñ at position 14 and modulo-27 wraparound (negative indices wrap to
//! the tail). Every function here is total: any input character has a
//! defined output.

/// The ordered Spanish alphabet: A–N, Ñ, O–Z (27 letters, uppercase).
pub const SPANISH_ALPHABET: [char; 27] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M',
    'N', 'Ñ', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Number of letters in [`SPANISH_ALPHABET`].
pub const ALPHABET_LEN: usize = SPANISH_ALPHABET.len();

/// Uppercase a single character (Ñ-aware).
///
/// `char::to_uppercase` can expand to multiple characters for some scripts;
/// for the characters this engine handles the first one is always the whole
/// mapping, so any surplus is ignored.
pub fn to_upper(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}

/// Lowercase a single character (Ñ-aware).
pub fn to_lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// True iff the uppercase form of `c` is one of the 27 Spanish letters.
pub fn is_letter(c: char) -> bool {
    let upper = to_upper(c);
    upper == 'Ñ' || upper.is_ascii_uppercase()
}

/// Position (0–26) of `c` in the Spanish alphabet, or `None` for non-letters.
///
/// Case-insensitive: `index_of('ñ')` and `index_of('Ñ')` are both 14.
pub fn index_of(c: char) -> Option<usize> {
    let upper = to_upper(c);
    SPANISH_ALPHABET.iter().position(|&letter| letter == upper)
}

/// Letter at position `index mod 27`, wrapping negative indices to the tail.
///
/// Defined for every `i64`: `letter_at(-1)` is `'Z'`, `letter_at(27)` is `'A'`.
pub fn letter_at(index: i64) -> char {
    let len = ALPHABET_LEN as i64;
    let wrapped = ((index % len) + len) % len;
    SPANISH_ALPHABET[wrapped as usize]
}

/// Carry the case of `original` over to `replacement`.
///
/// A lowercase original yields a lowercase replacement; anything else
/// (uppercase, digits, punctuation) yields the uppercase replacement.
pub fn preserve_case(original: char, replacement: char) -> char {
    if original.is_lowercase() {
        to_lower(replacement)
    } else {
        to_upper(replacement)
    }
}
