// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/clavecore

//! The transform dispatcher: one entry point over all cipher schemes.
//!
//! [`process`] routes a [`CipherKind`] and an [`OperationMode`] to the right
//! algorithm with a closed match: the scheme set is fixed at compile time,
//! so there is no runtime registry and no "unknown id" path. Algorithms are
//! pure functions over static tables: no shared mutable state, no I/O, safe
//! to call from any number of threads.
//!
//! `process` never panics and never returns a typed error. The only fallible
//! decode path (the symbolic family's mandatory header tag) is rendered here
//! as the fixed `Error: ...` string the presentation layer expects; callers
//! can classify results with [`is_error_output`].

use crate::catalog::{CipherKind, OperationMode};
use crate::cipher::error::CipherError;
use crate::cipher::{keypad, morse, murcielago, numeric, shift, swap, symbolic};

/// Prefix carried by every rendered error string.
pub const ERROR_PREFIX: &str = "Error: ";

/// Apply `kind` in direction `op` to `input`.
///
/// Always returns a string: either the transformed text or a human-readable
/// `Error: ...` message. Every call re-executes the transform; nothing is
/// cached.
pub fn process(kind: CipherKind, op: OperationMode, input: &str) -> String {
    use OperationMode::{Decrypt, Encrypt};

    match kind {
        CipherKind::Morse => match op {
            Encrypt => morse::encode(input),
            Decrypt => morse::decode(input),
        },
        CipherKind::Numeric => match op {
            Encrypt => numeric::encode(input),
            Decrypt => numeric::decode(input),
        },
        CipherKind::Cellphone => match op {
            Encrypt => keypad::encode(input),
            Decrypt => keypad::decode(input),
        },
        // the swap ciphers are involutions: encrypt and decrypt coincide
        CipherKind::CenitPolar => swap::apply_char_map(input, &swap::CENIT_POLAR),
        CipherKind::BadenPowel => swap::apply_char_map(input, &swap::BADEN_POWEL),
        CipherKind::Parelinofo => swap::apply_char_map(input, &swap::PARELINOFO),
        CipherKind::Dametupico => swap::apply_char_map(input, &swap::DAMETUPICO),
        CipherKind::Agujerito => swap::apply_char_map(input, &swap::AGUJERITO),
        CipherKind::Murcielago => match op {
            Encrypt => murcielago::encode(input),
            Decrypt => murcielago::decode(input),
        },
        CipherKind::ShiftPlusOne => match op {
            Encrypt => shift::shift(input, 1),
            Decrypt => shift::shift(input, -1),
        },
        CipherKind::ShiftMinusOne => match op {
            Encrypt => shift::shift(input, -1),
            Decrypt => shift::shift(input, 1),
        },
        CipherKind::Gato => symbolic_process(&symbolic::GATO, op, input),
        CipherKind::Semaforo => symbolic_process(&symbolic::SEMAFORO, op, input),
        CipherKind::Electrica => symbolic_process(&symbolic::ELECTRICA, op, input),
    }
}

fn symbolic_process(scheme: &symbolic::SymbolicScheme, op: OperationMode, input: &str) -> String {
    match op {
        OperationMode::Encrypt => symbolic::encode(scheme, input),
        OperationMode::Decrypt => render(symbolic::decode(scheme, input)),
    }
}

/// Render a decode outcome at the string boundary.
fn render(result: Result<String, CipherError>) -> String {
    match result {
        Ok(text) => text,
        Err(err) => format!("{ERROR_PREFIX}{err}"),
    }
}

/// True if `output` is one of the engine's rendered error strings rather
/// than transformed text.
pub fn is_error_output(output: &str) -> bool {
    output.starts_with(ERROR_PREFIX)
}

/// Which characters `kind` transforms, as shown in the scheme detail view.
pub fn supported_characters(kind: CipherKind) -> &'static str {
    match kind {
        CipherKind::Morse => "A-Z, 0-9, espacio (palabras separadas por /)",
        CipherKind::Numeric => "A-Z, Ñ → 00-26 (resto se mantiene igual)",
        CipherKind::Cellphone => "A-Z (teclado T9), espacio=0, separador: -",
        CipherKind::CenitPolar => "C,E,N,I,T ↔ P,O,L,A,R (resto se mantiene igual)",
        CipherKind::BadenPowel => "B↔P, A↔O, D↔W, E=E, N↔L (resto se mantiene igual)",
        CipherKind::Murcielago => "M,U,R,C,I,E,L,A,G,O ↔ 0-9 (resto se mantiene igual)",
        CipherKind::ShiftPlusOne => "A-Z + Ñ (cada letra → la siguiente, Z→A)",
        CipherKind::ShiftMinusOne => "A-Z + Ñ (cada letra → la anterior, A→Z)",
        CipherKind::Parelinofo => "P↔U, A↔F, R↔O, E↔N, L↔I (resto se mantiene igual)",
        CipherKind::Dametupico => "D↔O, A↔C, M↔I, E↔P, T↔U (resto se mantiene igual)",
        CipherKind::Agujerito => "A↔O, G↔T, U↔I, J↔R, E=E (resto se mantiene igual)",
        CipherKind::Gato => "A-Z, Ñ (solo letras del alfabeto español)",
        CipherKind::Semaforo => "A-Z (solo letras del alfabeto inglés, sin Ñ)",
        CipherKind::Electrica => "A-Z (solo letras del alfabeto inglés, sin Ñ). Soporta espacios.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_reaches_every_algorithm() {
        assert_eq!(process(CipherKind::Morse, OperationMode::Encrypt, "SOS"), "... --- ...");
        assert_eq!(process(CipherKind::Numeric, OperationMode::Encrypt, "ABC"), "000102");
        assert_eq!(
            process(CipherKind::Cellphone, OperationMode::Encrypt, "HOLA"),
            "4^2-6^3-5^3-2"
        );
        assert_eq!(process(CipherKind::CenitPolar, OperationMode::Encrypt, "cenit"), "polar");
        assert_eq!(process(CipherKind::ShiftPlusOne, OperationMode::Encrypt, "Z"), "A");
        assert_eq!(process(CipherKind::Gato, OperationMode::Encrypt, "a"), "GATO:a");
    }

    #[test]
    fn swap_ciphers_ignore_direction() {
        let input = "Cenit y Polar";
        assert_eq!(
            process(CipherKind::CenitPolar, OperationMode::Encrypt, input),
            process(CipherKind::CenitPolar, OperationMode::Decrypt, input),
        );
    }

    #[test]
    fn shift_directions_mirror_each_other() {
        assert_eq!(process(CipherKind::ShiftPlusOne, OperationMode::Decrypt, "B"), "A");
        assert_eq!(process(CipherKind::ShiftMinusOne, OperationMode::Encrypt, "B"), "A");
    }

    #[test]
    fn symbolic_decode_error_is_rendered() {
        let out = process(CipherKind::Gato, OperationMode::Decrypt, "no-tag-here");
        assert_eq!(out, "Error: formato inválido. Se espera GATO:a,b,c,...");
        assert!(is_error_output(&out));
    }

    #[test]
    fn transformed_text_is_not_error_output() {
        let out = process(CipherKind::Morse, OperationMode::Encrypt, "SOS");
        assert!(!is_error_output(&out));
    }

    #[test]
    fn supported_characters_nonempty_for_all() {
        for kind in CipherKind::ALL {
            assert!(!supported_characters(kind).is_empty());
        }
    }
}
