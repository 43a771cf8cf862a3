// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/clavecore

//! The cipher catalog: kinds, operations and presentation metadata.
//!
//! [`CipherKind`] is the closed set of supported schemes; adding one means
//! adding a variant here, its dispatch arm in [`crate::engine`] and its
//! catalog entry below. [`catalog`] returns the read-only definitions the
//! presentation layer renders as a selection list; the order is stable and
//! the accent colors cycle blue → green → amber.

use serde::{Deserialize, Serialize};

/// Identifier of one cipher scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CipherKind {
    Morse,
    Numeric,
    Cellphone,
    CenitPolar,
    BadenPowel,
    Murcielago,
    ShiftPlusOne,
    ShiftMinusOne,
    Parelinofo,
    Dametupico,
    Agujerito,
    Gato,
    Semaforo,
    Electrica,
}

impl CipherKind {
    /// Every kind, in catalog order.
    pub const ALL: [CipherKind; 14] = [
        CipherKind::Morse,
        CipherKind::Numeric,
        CipherKind::Cellphone,
        CipherKind::CenitPolar,
        CipherKind::BadenPowel,
        CipherKind::Murcielago,
        CipherKind::ShiftPlusOne,
        CipherKind::ShiftMinusOne,
        CipherKind::Parelinofo,
        CipherKind::Dametupico,
        CipherKind::Agujerito,
        CipherKind::Gato,
        CipherKind::Semaforo,
        CipherKind::Electrica,
    ];

    /// Human display name, as shown in the scheme detail view.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Morse => "Morse",
            Self::Numeric => "Numérica",
            Self::Cellphone => "Celular (Teléfono)",
            Self::CenitPolar => "Cenit-Polar",
            Self::BadenPowel => "Baden-Powell",
            Self::Murcielago => "Murciélago",
            Self::ShiftPlusOne => "Clave +1",
            Self::ShiftMinusOne => "Clave -1",
            Self::Parelinofo => "Parelinofo",
            Self::Dametupico => "Dametupico",
            Self::Agujerito => "Agujerito",
            Self::Gato => "Gato (Pigpen)",
            Self::Semaforo => "Semáforo",
            Self::Electrica => "Eléctrica",
        }
    }
}

/// Direction of a [`crate::engine::process`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationMode {
    Encrypt,
    Decrypt,
}

/// Read-only metadata for one catalog entry, consumed by the presentation
/// layer to populate the selection list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CipherDefinition {
    /// Display name.
    pub name: &'static str,
    /// One-line description of what the scheme does.
    pub description: &'static str,
    /// Which scheme this entry selects.
    pub kind: CipherKind,
    /// Two-character icon code for the list tile.
    pub icon: &'static str,
    /// Accent color for the list tile, `#rrggbb`.
    pub accent_color_hex: &'static str,
    /// Whether the scheme can currently be selected.
    pub is_available: bool,
}

/// Accent colors assigned to catalog entries by cycling in order.
const ACCENT_CYCLE: [&str; 3] = ["#34657f", "#4a7a4e", "#d4943c"];

fn description(kind: CipherKind) -> &'static str {
    match kind {
        CipherKind::Morse => "Código Morse internacional: puntos y rayas.",
        CipherKind::Numeric => "A=00, B=01, C=02 ... Ñ=14 ... Z=26.",
        CipherKind::Cellphone => "Teclado T9: A=2, B=2^2, C=2^3, espacio=0.",
        CipherKind::CenitPolar => "Intercambio: C↔P, E↔O, N↔L, I↔A, T↔R.",
        CipherKind::BadenPowel => "Intercambio: B↔P, A↔O, D↔W, E=E, N↔L.",
        CipherKind::Murcielago => "MURCIELAGO = 0123456789.",
        CipherKind::ShiftPlusOne => "Cada letra → la siguiente (con Ñ, Z→A).",
        CipherKind::ShiftMinusOne => "Cada letra → la anterior (con Ñ, A→Z).",
        CipherKind::Parelinofo => "Intercambio: P↔U, A↔F, R↔O, E↔N, L↔I.",
        CipherKind::Dametupico => "Intercambio: D↔O, A↔C, M↔I, E↔P, T↔U.",
        CipherKind::Agujerito => "Intercambio: A↔O, G↔T, U↔I, J↔R, E=E.",
        CipherKind::Gato => "Cada letra → símbolo gráfico (cuadrículas y aspas).",
        CipherKind::Semaforo => "Cada letra → posición de banderas de semáforo.",
        CipherKind::Electrica => "Cada letra → símbolo de líneas eléctricas.",
    }
}

fn icon(kind: CipherKind) -> &'static str {
    match kind {
        CipherKind::Morse => "MO",
        CipherKind::Numeric => "01",
        CipherKind::Cellphone => "T9",
        CipherKind::CenitPolar => "CP",
        CipherKind::BadenPowel => "BP",
        CipherKind::Murcielago => "MU",
        CipherKind::ShiftPlusOne => "+1",
        CipherKind::ShiftMinusOne => "-1",
        CipherKind::Parelinofo => "PA",
        CipherKind::Dametupico => "DA",
        CipherKind::Agujerito => "AG",
        CipherKind::Gato => "GA",
        CipherKind::Semaforo => "SE",
        CipherKind::Electrica => "EL",
    }
}

/// Build the ordered catalog, one definition per [`CipherKind`].
pub fn catalog() -> Vec<CipherDefinition> {
    CipherKind::ALL
        .iter()
        .enumerate()
        .map(|(i, &kind)| CipherDefinition {
            name: kind.display_name(),
            description: description(kind),
            kind,
            icon: icon(kind),
            accent_color_hex: ACCENT_CYCLE[i % ACCENT_CYCLE.len()],
            is_available: true,
        })
        .collect()
}
