// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/clavecore

//! Old telephone keypad cipher ("Celular").
//!
//! Each letter becomes its button digit plus the press count on a 3×4
//! keypad (2=ABC … 7=PQRS, 9=WXYZ): a single press is just the digit, more
//! presses are written `<digit>^<count>`. Space is the literal digit `0`
//! and tokens are joined with `-`. No two letters share a code, so the
//! token stream is uniquely decodable. Unknown characters ride along as
//! literal tokens. Ñ is not on the keypad and falls into that path.

use crate::alphabet::to_upper;

/// Token that encodes the space character.
const SPACE_CODE: &str = "0";

/// Token separator on the wire.
const SEPARATOR: char = '-';

/// Button-and-press-count code per letter, A–Z.
const LETTER_TO_CODE: [(char, &str); 26] = [
    ('A', "2"),   ('B', "2^2"), ('C', "2^3"),
    ('D', "3"),   ('E', "3^2"), ('F', "3^3"),
    ('G', "4"),   ('H', "4^2"), ('I', "4^3"),
    ('J', "5"),   ('K', "5^2"), ('L', "5^3"),
    ('M', "6"),   ('N', "6^2"), ('O', "6^3"),
    ('P', "7"),   ('Q', "7^2"), ('R', "7^3"), ('S', "7^4"),
    ('T', "8"),   ('U', "8^2"), ('V', "8^3"),
    ('W', "9"),   ('X', "9^2"), ('Y', "9^3"), ('Z', "9^4"),
];

fn code_for(c: char) -> Option<&'static str> {
    LETTER_TO_CODE
        .iter()
        .find(|&&(letter, _)| letter == c)
        .map(|&(_, code)| code)
}

fn letter_for(code: &str) -> Option<char> {
    LETTER_TO_CODE
        .iter()
        .find(|&&(_, c)| c == code)
        .map(|&(letter, _)| letter)
}

/// Encode text as `-`-separated keypad codes.
pub fn encode(input: &str) -> String {
    let mut out = String::new();
    let mut first = true;

    for c in input.chars() {
        if !first {
            out.push(SEPARATOR);
        }
        if c == ' ' {
            out.push_str(SPACE_CODE);
        } else {
            match code_for(to_upper(c)) {
                Some(code) => out.push_str(code),
                // unknown characters become literal tokens
                None => out.push(c),
            }
        }
        first = false;
    }

    out
}

/// Decode `-`-separated keypad codes back to text.
///
/// Each token is trimmed; `"0"` becomes a space, a known code its uppercase
/// letter, and anything else is copied back as-is.
pub fn decode(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    for token in input.split(SEPARATOR) {
        let trimmed = token.trim();
        if trimmed == SPACE_CODE {
            out.push(' ');
        } else {
            match letter_for(trimmed) {
                Some(letter) => out.push(letter),
                None => out.push_str(trimmed),
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_unique() {
        for (i, &(_, a)) in LETTER_TO_CODE.iter().enumerate() {
            for &(_, b) in &LETTER_TO_CODE[i + 1..] {
                assert_ne!(a, b, "duplicate code {a}");
            }
        }
    }

    #[test]
    fn encode_hola() {
        // H=4^2, O=6^3, L=5^3, A=2
        assert_eq!(encode("HOLA"), "4^2-6^3-5^3-2");
    }

    #[test]
    fn encode_space_is_zero() {
        // H=4^2, I=4^3, space=0, A=2
        assert_eq!(encode("HI A"), "4^2-4^3-0-2");
    }

    #[test]
    fn encode_unknown_character_literal() {
        assert_eq!(encode("A!B"), "2-!-2^2");
        // Ñ is not on the keypad
        assert_eq!(encode("Ñ"), "Ñ");
    }

    #[test]
    fn decode_hola() {
        assert_eq!(decode("4^2-6^3-5^3-2"), "HOLA");
    }

    #[test]
    fn decode_tolerates_whitespace_around_tokens() {
        assert_eq!(decode("4^2 - 6^3"), "HO");
    }

    #[test]
    fn decode_unknown_token_copied() {
        assert_eq!(decode("2-xyz-2^2"), "AxyzB");
    }

    #[test]
    fn round_trip_with_spaces() {
        let original = "HOLA MUNDO";
        assert_eq!(decode(&encode(original)), original);
    }

    #[test]
    fn empty_input() {
        assert_eq!(encode(""), "");
        assert_eq!(decode(""), "");
    }
}
