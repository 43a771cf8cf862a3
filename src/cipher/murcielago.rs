// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/clavecore

//! Murciélago cipher: M=0, U=1, R=2, C=3, I=4, E=5, L=6, A=7, G=8, O=9.
//!
//! Encrypt turns the letters of MURCIELAGO into digits; decrypt turns digits
//! back into (uppercase) letters. Unlike the swap ciphers this is not an
//! involution — the two directions use mutually inverse tables. Everything
//! outside the ten letters / ten digits is copied unchanged.

use crate::alphabet::to_upper;

/// The key word, one letter per decimal digit.
const LETTER_TO_DIGIT: [(char, char); 10] = [
    ('M', '0'), ('U', '1'), ('R', '2'), ('C', '3'), ('I', '4'),
    ('E', '5'), ('L', '6'), ('A', '7'), ('G', '8'), ('O', '9'),
];

fn digit_for(letter: char) -> Option<char> {
    LETTER_TO_DIGIT
        .iter()
        .find(|&&(l, _)| l == letter)
        .map(|&(_, d)| d)
}

fn letter_for(digit: char) -> Option<char> {
    LETTER_TO_DIGIT
        .iter()
        .find(|&&(_, d)| d == digit)
        .map(|&(l, _)| l)
}

/// Replace MURCIELAGO letters (either case) with their digits.
pub fn encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match digit_for(to_upper(c)) {
            Some(digit) => out.push(digit),
            None => out.push(c),
        }
    }
    out
}

/// Replace digits with their MURCIELAGO letters, always uppercase.
pub fn decode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match letter_for(c) {
            Some(letter) => out.push(letter),
            None => out.push(c),
        }
    }
    out
}
