//! Parsed HP-GL/2 Types
//!
//! Plain data produced by the scanner. No grammar logic lives here.

use serde::Serialize;

/// An (X, Y) coordinate pair in plotter units
pub type Pair = (i64, i64);

/// The command families the grammar distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CommandKind {
    PenUp,
    PenDown,
    PolylineEncoded,
    SymbolMode,
    Label,
    DefineLabelTerminator,
    /// Any other two-letter mnemonic, recognised only to be skipped
    Other,
}

impl CommandKind {
    /// Canonical upper-case mnemonic, `None` for the catch-all
    pub fn mnemonic(self) -> Option<&'static str> {
        match self {
            CommandKind::PenUp => Some("PU"),
            CommandKind::PenDown => Some("PD"),
            CommandKind::PolylineEncoded => Some("PE"),
            CommandKind::SymbolMode => Some("SM"),
            CommandKind::Label => Some("LB"),
            CommandKind::DefineLabelTerminator => Some("DT"),
            CommandKind::Other => None,
        }
    }

    /// Pen kind for the two commands that produce output
    pub fn pen(self) -> Option<PenKind> {
        match self {
            CommandKind::PenUp => Some(PenKind::PenUp),
            CommandKind::PenDown => Some(PenKind::PenDown),
            _ => None,
        }
    }
}

/// Pen state requested by an emitted event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PenKind {
    #[serde(rename = "PU")]
    PenUp,
    #[serde(rename = "PD")]
    PenDown,
}

/// One Pen Up or Pen Down command with its complete coordinate pairs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PenEvent {
    pub kind: PenKind,
    pub pairs: Vec<Pair>,
}

impl PenEvent {
    pub fn new(kind: PenKind, pairs: Vec<Pair>) -> Self {
        Self { kind, pairs }
    }
}
