// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/clavecore

//! Pairwise letter-swap ciphers.
//!
//! Each scheme owns a small involutive swap table: every entry `(A, B)` has
//! its mirror `(B, A)`, so applying the table twice returns the original
//! text and encrypt and decrypt are the same operation. Letters outside the
//! table (including E in Baden-Powell and Agujerito), digits, punctuation
//! and spaces pass through verbatim, and the case of every character is
//! preserved independently.

use crate::alphabet::{preserve_case, to_upper};

/// Cenit-Polar: C↔P, E↔O, N↔L, I↔A, T↔R.
pub const CENIT_POLAR: [(char, char); 10] = [
    ('C', 'P'), ('P', 'C'),
    ('E', 'O'), ('O', 'E'),
    ('N', 'L'), ('L', 'N'),
    ('I', 'A'), ('A', 'I'),
    ('T', 'R'), ('R', 'T'),
];

/// Baden-Powell: B↔P, A↔O, D↔W, N↔L. The E stays as it is.
pub const BADEN_POWEL: [(char, char); 8] = [
    ('B', 'P'), ('P', 'B'),
    ('A', 'O'), ('O', 'A'),
    ('D', 'W'), ('W', 'D'),
    ('N', 'L'), ('L', 'N'),
];

/// Parelinofo: P↔U, A↔F, R↔O, E↔N, L↔I.
pub const PARELINOFO: [(char, char); 10] = [
    ('P', 'U'), ('U', 'P'),
    ('A', 'F'), ('F', 'A'),
    ('R', 'O'), ('O', 'R'),
    ('E', 'N'), ('N', 'E'),
    ('L', 'I'), ('I', 'L'),
];

/// Dametupico: D↔O, A↔C, M↔I, E↔P, T↔U.
pub const DAMETUPICO: [(char, char); 10] = [
    ('D', 'O'), ('O', 'D'),
    ('A', 'C'), ('C', 'A'),
    ('M', 'I'), ('I', 'M'),
    ('E', 'P'), ('P', 'E'),
    ('T', 'U'), ('U', 'T'),
];

/// Agujerito: A↔O, G↔T, U↔I, J↔R. The E stays as it is.
pub const AGUJERITO: [(char, char); 8] = [
    ('A', 'O'), ('O', 'A'),
    ('G', 'T'), ('T', 'G'),
    ('U', 'I'), ('I', 'U'),
    ('J', 'R'), ('R', 'J'),
];

/// Apply a character substitution map, keeping the case of each original
/// character. Map keys are uppercase; characters without an entry are copied
/// unchanged, so output length always equals input length.
pub fn apply_char_map(input: &str, map: &[(char, char)]) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        let upper = to_upper(c);
        match map.iter().find(|&&(from, _)| from == upper) {
            Some(&(_, to)) => out.push(preserve_case(c, to)),
            None => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_MAPS: [(&str, &[(char, char)]); 5] = [
        ("cenit-polar", &CENIT_POLAR),
        ("baden-powel", &BADEN_POWEL),
        ("parelinofo", &PARELINOFO),
        ("dametupico", &DAMETUPICO),
        ("agujerito", &AGUJERITO),
    ];

    #[test]
    fn every_map_is_an_involution() {
        for (name, map) in ALL_MAPS {
            for &(from, to) in map {
                let back = map.iter().find(|&&(f, _)| f == to);
                assert_eq!(back, Some(&(to, from)), "{name}: {from}→{to} has no mirror");
            }
        }
    }

    #[test]
    fn no_duplicate_keys() {
        for (name, map) in ALL_MAPS {
            for (i, &(from, _)) in map.iter().enumerate() {
                for &(other, _) in &map[i + 1..] {
                    assert_ne!(from, other, "{name}: duplicate key {from}");
                }
            }
        }
    }

    #[test]
    fn cenit_polar_swaps_its_own_name() {
        assert_eq!(apply_char_map("cenit", &CENIT_POLAR), "polar");
        assert_eq!(apply_char_map("polar", &CENIT_POLAR), "cenit");
    }

    #[test]
    fn baden_powel_keeps_e() {
        assert_eq!(apply_char_map("baden", &BADEN_POWEL), "powel");
        assert_eq!(apply_char_map("E", &BADEN_POWEL), "E");
    }

    #[test]
    fn agujerito_keeps_e() {
        // a→o, g→t, u→i, j→r, e→e, r→j, i→u, t→g
        assert_eq!(apply_char_map("agujerit", &AGUJERITO), "otirejug");
    }

    #[test]
    fn dametupico_known_vector() {
        // D→O, A→C, M→I, E→P, P→E
        assert_eq!(apply_char_map("damep", &DAMETUPICO), "ocipe");
    }

    #[test]
    fn parelinofo_known_vector() {
        // P→U, A→F, R→O, E→N, N→E, T unmapped
        assert_eq!(apply_char_map("parent", &PARELINOFO), "ufonet");
    }

    #[test]
    fn case_preserved_per_character() {
        assert_eq!(apply_char_map("Cenit", &CENIT_POLAR), "Polar");
        assert_eq!(apply_char_map("cEnIt", &CENIT_POLAR), "pOlAr");
    }

    #[test]
    fn unmapped_characters_pass_through() {
        assert_eq!(apply_char_map("h2!ceni", &CENIT_POLAR), "h2!pola");
        assert_eq!(apply_char_map("bcd123!@#", &AGUJERITO), "bcd123!@#");
    }

    #[test]
    fn empty_input() {
        assert_eq!(apply_char_map("", &CENIT_POLAR), "");
    }
}
