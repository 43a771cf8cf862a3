// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/clavecore

//! Symbolic ciphers: Gato (pigpen), Semáforo and Eléctrica.
//!
//! These do not produce human-readable text. Encrypt emits an intermediate
//! wire format — a header tag followed by a comma-joined list of lowercase
//! letter keys — that the presentation layer resolves to images:
//!
//! ```text
//! GATO:h,o,l,a
//! SEMAFORO:s, ,o,s
//! ELECTRICA:s,o,s,space,s,o,s
//! ```
//!
//! Characters outside a scheme's letter set are silently dropped on encode
//! (this family is lossy, unlike the pass-through ciphers). Decode requires
//! the exact tag (case-insensitive) and rejects the whole input with
//! [`CipherError::InvalidFormat`] when it is missing; individual unknown
//! keys decode to `?` instead of failing.

use crate::alphabet::{is_letter, to_lower, to_upper};
use crate::cipher::error::CipherError;

/// Reserved key for Ñ in schemes that carry the full Spanish alphabet.
const ENIE_KEY: &str = "enie";

/// Placeholder emitted for keys that resolve to nothing.
const UNKNOWN_KEY_PLACEHOLDER: char = '?';

/// Static description of one symbolic scheme's wire format.
pub struct SymbolicScheme {
    /// Header tag, written as `TAG:` before the key list.
    pub tag: &'static str,
    /// Whether Ñ belongs to the letter set (via the `enie` key).
    pub includes_enie: bool,
    /// Key emitted for the space character. A blank key means the space is
    /// carried as an empty token between commas.
    pub space_key: &'static str,
}

/// Gato (pigpen): full 27-letter Spanish alphabet, Ñ as `enie`.
pub const GATO: SymbolicScheme = SymbolicScheme {
    tag: "GATO",
    includes_enie: true,
    space_key: " ",
};

/// Semáforo flag alphabet: A–Z only, no Ñ.
pub const SEMAFORO: SymbolicScheme = SymbolicScheme {
    tag: "SEMAFORO",
    includes_enie: false,
    space_key: " ",
};

/// Eléctrica line alphabet: A–Z only, space spelled out as `space`.
pub const ELECTRICA: SymbolicScheme = SymbolicScheme {
    tag: "ELECTRICA",
    includes_enie: false,
    space_key: "space",
};

fn is_supported_letter(scheme: &SymbolicScheme, c: char) -> bool {
    if scheme.includes_enie {
        is_letter(c)
    } else {
        c.is_ascii_alphabetic()
    }
}

/// Encode text as the scheme's tagged key list.
///
/// Unsupported characters are dropped. If nothing survives, the result is
/// the empty string rather than a bare tag.
pub fn encode(scheme: &SymbolicScheme, input: &str) -> String {
    let mut keys: Vec<String> = Vec::new();

    for c in input.chars() {
        if c == ' ' {
            keys.push(scheme.space_key.to_string());
            continue;
        }
        if !is_supported_letter(scheme, c) {
            continue;
        }
        let upper = to_upper(c);
        if upper == 'Ñ' {
            keys.push(ENIE_KEY.to_string());
        } else {
            keys.push(to_lower(c).to_string());
        }
    }

    if keys.is_empty() {
        return String::new();
    }

    format!("{}:{}", scheme.tag, keys.join(","))
}

/// Decode the scheme's tagged key list back to plain text.
///
/// The header tag is matched case-insensitively and is mandatory; without
/// it the whole decode fails. A blank payload yields the empty string.
/// Unknown keys become `?`.
pub fn decode(scheme: &SymbolicScheme, input: &str) -> Result<String, CipherError> {
    if input.is_empty() {
        return Ok(String::new());
    }

    let prefix_len = scheme.tag.len() + 1;
    let tagged = match input.get(..prefix_len) {
        Some(head) => {
            head.ends_with(':') && head[..scheme.tag.len()].eq_ignore_ascii_case(scheme.tag)
        }
        None => false,
    };
    if !tagged {
        return Err(CipherError::InvalidFormat { expected_tag: scheme.tag });
    }

    let payload = &input[prefix_len..];
    if payload.trim().is_empty() {
        return Ok(String::new());
    }

    let mut out = String::new();
    for key in payload.split(',') {
        let trimmed = key.trim();

        // an empty token is always a space; Eléctrica also spells it out
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(scheme.space_key.trim()) {
            out.push(' ');
            continue;
        }

        if scheme.includes_enie && trimmed.eq_ignore_ascii_case(ENIE_KEY) {
            out.push('Ñ');
            continue;
        }

        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if is_supported_letter(scheme, c) => out.push(to_upper(c)),
            _ => out.push(UNKNOWN_KEY_PLACEHOLDER),
        }
    }

    Ok(out)
}
