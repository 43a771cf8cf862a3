// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/clavecore

//! # clave-core
//!
//! Scout cipher transform engine: a fixed catalog of classic substitution
//! and encoding schemes ("claves scout") over the 27-letter Spanish
//! alphabet, each with a symmetric encrypt/decrypt contract.
//!
//! The engine is pure: every algorithm is a stateless function over
//! compile-time tables, so any number of callers may use it concurrently.
//! The presentation layer (UI, camera/OCR capture) lives outside this crate
//! and only ever sees strings: it reads the [`catalog`], calls [`process`],
//! and renders whatever comes back.
//!
//! # Quick start
//!
//! ```
//! use clave_core::{process, CipherKind, OperationMode};
//!
//! let wire = process(CipherKind::Morse, OperationMode::Encrypt, "SOS");
//! assert_eq!(wire, "... --- ...");
//!
//! let text = process(CipherKind::Morse, OperationMode::Decrypt, &wire);
//! assert_eq!(text, "SOS");
//! ```
//!
//! Decode failures (only the tagged symbolic formats can fail) come back as
//! `Error: ...` strings rather than panics or typed errors:
//!
//! ```
//! use clave_core::{is_error_output, process, CipherKind, OperationMode};
//!
//! let out = process(CipherKind::Gato, OperationMode::Decrypt, "not a key list");
//! assert!(is_error_output(&out));
//! ```

pub mod alphabet;
pub mod catalog;
pub mod cipher;
pub mod engine;

pub use catalog::{catalog, CipherDefinition, CipherKind, OperationMode};
pub use cipher::error::CipherError;
pub use engine::{is_error_output, process, supported_characters, ERROR_PREFIX};
