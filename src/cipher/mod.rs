// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/clavecore

//! The cipher transform algorithms.
//!
//! Three families share the same two-operation contract:
//!
//! - **Pairwise substitutions** ([`swap`], [`murcielago`]): fixed involutive
//!   letter-swap tables, plus the letter↔digit Murciélago key.
//! - **Positional shifts** ([`shift`]): ±1 along the 27-letter Spanish
//!   alphabet with exact modulo-27 wraparound.
//! - **Structured re-encodings** ([`morse`], [`numeric`], [`keypad`],
//!   [`symbolic`]): text becomes a different token stream with its own wire
//!   format and a tokenizing decoder.
//!
//! All tables are compile-time constants; every function here is a pure
//! function of its input string.

pub mod error;
pub mod keypad;
pub mod morse;
pub mod murcielago;
pub mod numeric;
pub mod shift;
pub mod swap;
pub mod symbolic;

pub use error::CipherError;
