// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/clavecore

//! Error type for cipher decoding.
//!
//! Only the symbolic schemes can fail: their wire format carries a mandatory
//! header tag, and a missing or mismatched tag rejects the whole decode.
//! Every other scheme tolerates malformed input per token (pass-through or
//! `?` placeholder) and never errors.
//!
//! The engine boundary renders these errors as the fixed Spanish strings the
//! presentation layer expects; internally they stay typed.

use core::fmt;

/// Errors that can occur while decoding a cipher wire format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// The input does not start with the mandatory header tag of a symbolic
    /// scheme. Carries the expected tag (e.g. `"GATO"`).
    InvalidFormat {
        /// Header tag the decoder expected to find.
        expected_tag: &'static str,
    },
}

impl fmt::Display for CipherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat { expected_tag } => {
                write!(f, "formato inválido. Se espera {expected_tag}:a,b,c,...")
            }
        }
    }
}

impl std::error::Error for CipherError {}
