//! HP-GL/2 Parser
//!
//! Scans a plotter command stream for Pen Up and Pen Down commands,
//! skipping every other command without interpreting it.
//!
//! The grammar is split the same way it is layered:
//! - `lexer`: numbers, separators, terminators and mnemonics
//! - `params`: coordinate pair lists
//! - `command`: one grammar per command family
//! - `scanner`: the driver that threads label-terminator state

pub mod ast;
pub mod command;
pub mod lexer;
pub mod params;
pub mod scanner;

pub use ast::{CommandKind, Pair, PenEvent, PenKind};
pub use command::{CommandGrammar, CommandMatch, CommandSet, DEFAULT_LABEL_TERMINATOR};
pub use params::ParamList;
pub use scanner::{parse_hpgl, scan_commands, Commands, PenEvents};
