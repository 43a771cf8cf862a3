// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/clavecore

//! International Morse code.
//!
//! A–Z and 0–9 map to dot/dash patterns. Tokens within a word are separated
//! by a single space; words are separated by the exact three-character
//! sequence `" / "`. Unrecognized input characters are emitted literally on
//! encode, and unrecognized tokens are copied back verbatim on decode, so
//! malformed input degrades per token instead of failing the whole text.

use crate::alphabet::to_upper;

/// Separator between words on the wire.
pub const WORD_SEPARATOR: &str = " / ";

/// Standard international Morse patterns for A–Z and 0–9.
/// All patterns are distinct strings, so the reverse lookup is collision-free.
const MORSE_TABLE: [(char, &str); 36] = [
    ('A', ".-"),    ('B', "-..."),  ('C', "-.-."),
    ('D', "-.."),   ('E', "."),     ('F', "..-."),
    ('G', "--."),   ('H', "...."),  ('I', ".."),
    ('J', ".---"),  ('K', "-.-"),   ('L', ".-.."),
    ('M', "--"),    ('N', "-."),    ('O', "---"),
    ('P', ".--."),  ('Q', "--.-"),  ('R', ".-."),
    ('S', "..."),   ('T', "-"),     ('U', "..-"),
    ('V', "...-"),  ('W', ".--"),   ('X', "-..-"),
    ('Y', "-.--"),  ('Z', "--.."),
    ('0', "-----"), ('1', ".----"), ('2', "..---"),
    ('3', "...--"), ('4', "....-"), ('5', "....."),
    ('6', "-...."), ('7', "--..."), ('8', "---.."),
    ('9', "----."),
];

fn pattern_for(c: char) -> Option<&'static str> {
    MORSE_TABLE
        .iter()
        .find(|&&(ch, _)| ch == c)
        .map(|&(_, pattern)| pattern)
}

fn char_for(token: &str) -> Option<char> {
    MORSE_TABLE
        .iter()
        .find(|&&(_, pattern)| pattern == token)
        .map(|&(ch, _)| ch)
}

/// Encode text as Morse tokens.
///
/// A space emits the word separator and resets the token separator state, so
/// the first token of each word carries no leading space.
pub fn encode(input: &str) -> String {
    let mut out = String::new();
    let mut first = true;

    for c in input.chars() {
        if c == ' ' {
            out.push_str(WORD_SEPARATOR);
            first = true;
            continue;
        }

        if !first {
            out.push(' ');
        }
        match pattern_for(to_upper(c)) {
            Some(pattern) => out.push_str(pattern),
            // unrecognized: copy the character as its own token
            None => out.push(c),
        }
        first = false;
    }

    out
}

/// Decode Morse tokens back to text.
///
/// Words are recovered by splitting on `" / "`, tokens by splitting each
/// word on single spaces (empty tokens dropped). Unknown tokens are copied
/// back verbatim.
pub fn decode(input: &str) -> String {
    let mut out = String::new();

    for (w, word) in input.split(WORD_SEPARATOR).enumerate() {
        if w > 0 {
            out.push(' ');
        }
        for token in word.split(' ').filter(|t| !t.is_empty()) {
            match char_for(token) {
                Some(c) => out.push(c),
                None => out.push_str(token),
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns_are_unique() {
        for (i, &(_, a)) in MORSE_TABLE.iter().enumerate() {
            for &(_, b) in &MORSE_TABLE[i + 1..] {
                assert_ne!(a, b, "duplicate pattern {a}");
            }
        }
    }

    #[test]
    fn encode_sos() {
        assert_eq!(encode("SOS"), "... --- ...");
    }

    #[test]
    fn encode_separates_words_with_slash() {
        // H=...., I=.. / M=--, O=---, M=--
        assert_eq!(encode("HI MOM"), ".... .. / -- --- --");
    }

    #[test]
    fn encode_lowercase() {
        assert_eq!(encode("sos"), "... --- ...");
    }

    #[test]
    fn encode_digits() {
        assert_eq!(encode("73"), "--... ...--");
    }

    #[test]
    fn encode_unknown_kept_as_token() {
        assert_eq!(encode("A!B"), ".- ! -...");
    }

    #[test]
    fn decode_sos() {
        assert_eq!(decode("... --- ..."), "SOS");
    }

    #[test]
    fn decode_unknown_token_copied() {
        assert_eq!(decode(".- ...---... -..."), "A...---...B");
    }

    #[test]
    fn round_trip_words() {
        let original = "HELLO WORLD";
        assert_eq!(decode(&encode(original)), original);
    }

    #[test]
    fn round_trip_consecutive_spaces() {
        let original = "A  B";
        assert_eq!(decode(&encode(original)), original);
    }

    #[test]
    fn empty_input() {
        assert_eq!(encode(""), "");
        assert_eq!(decode(""), "");
    }
}
