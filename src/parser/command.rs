//! HP-GL/2 Command Grammars
//!
//! One grammar per command family, tried in a fixed order at a single
//! offset. The first alternative that matches wins; there is no search
//! for a "better" match. Only Pen Up and Pen Down are interpreted, the
//! rest are matched just precisely enough to find where they end.

use crate::parser::ast::CommandKind;
use crate::parser::lexer;
use crate::parser::params::{self, ParamList};

/// Label terminator in effect when a scan starts (ASCII ETX)
pub const DEFAULT_LABEL_TERMINATOR: char = '\u{3}';

/// Mnemonics with their own grammar; the catch-all never matches these
const RESERVED: [&str; 6] = ["PU", "PD", "PE", "SM", "LB", "DT"];

/// A successful match of one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandMatch<'a> {
    pub kind: CommandKind,
    /// Mnemonic as written
    pub mnemonic: &'a str,
    /// Byte offset of the mnemonic
    pub start: usize,
    /// Byte offset just past the command
    pub end: usize,
    /// Coordinate list (Pen Up / Pen Down only)
    pub params: ParamList<'a>,
    /// Whether the command was closed by `;`
    pub terminated: bool,
    /// New label terminator captured by Define-Label-Terminator
    pub label_terminator: Option<char>,
    /// Define-Label-Terminator mode digit, matched but otherwise unused
    pub mode: Option<char>,
    /// Label text, encoded polyline data, or the symbol character
    pub payload: Option<&'a str>,
}

impl<'a> CommandMatch<'a> {
    fn new(kind: CommandKind, input: &'a str, start: usize, end: usize) -> Self {
        Self {
            kind,
            mnemonic: &input[start..start + 2],
            start,
            end,
            params: ParamList::Empty,
            terminated: false,
            label_terminator: None,
            mode: None,
            payload: None,
        }
    }

    /// Accept an optional `;` after `self.end`
    fn with_optional_terminator(mut self, input: &str) -> Self {
        if let Some(end) = lexer::command_terminator(input, self.end) {
            self.end = end;
            self.terminated = true;
        }
        self
    }

    /// The matched text, mnemonic through terminator
    pub fn text(&self, input: &'a str) -> &'a str {
        &input[self.start..self.end]
    }
}

/// One alternative of the command grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGrammar {
    PenUp,
    PenDown,
    PolylineEncoded,
    SymbolMode,
    /// Label text runs until this character
    Label { terminator: char },
    DefineLabelTerminator,
    Other,
}

impl CommandGrammar {
    pub fn kind(self) -> CommandKind {
        match self {
            CommandGrammar::PenUp => CommandKind::PenUp,
            CommandGrammar::PenDown => CommandKind::PenDown,
            CommandGrammar::PolylineEncoded => CommandKind::PolylineEncoded,
            CommandGrammar::SymbolMode => CommandKind::SymbolMode,
            CommandGrammar::Label { .. } => CommandKind::Label,
            CommandGrammar::DefineLabelTerminator => CommandKind::DefineLabelTerminator,
            CommandGrammar::Other => CommandKind::Other,
        }
    }

    /// Match this alternative with its mnemonic exactly at `pos`
    pub fn match_at<'a>(self, input: &'a str, pos: usize) -> Option<CommandMatch<'a>> {
        match self {
            CommandGrammar::PenUp | CommandGrammar::PenDown => self.pen(input, pos),
            CommandGrammar::PolylineEncoded => polyline_encoded(input, pos),
            CommandGrammar::SymbolMode => symbol_mode(input, pos),
            CommandGrammar::Label { terminator } => label(input, pos, terminator),
            CommandGrammar::DefineLabelTerminator => define_label_terminator(input, pos),
            CommandGrammar::Other => other(input, pos),
        }
    }

    fn pen<'a>(self, input: &'a str, pos: usize) -> Option<CommandMatch<'a>> {
        let mnemonic = self.kind().mnemonic()?;
        let after = lexer::keyword(input, pos, mnemonic)?;
        let (params, end) = params::parameter_pair_list(input, after)?;
        let mut matched = CommandMatch::new(self.kind(), input, pos, end);
        matched.params = params;
        Some(matched.with_optional_terminator(input))
    }
}

/// `PE` data is free-form up to a mandatory `;`
fn polyline_encoded(input: &str, pos: usize) -> Option<CommandMatch<'_>> {
    let after = lexer::keyword(input, pos, "PE")?;
    let length = input[after..].find(char::from(lexer::TERMINATOR))?;
    let end = after + length + 1;
    let mut matched = CommandMatch::new(CommandKind::PolylineEncoded, input, pos, end);
    matched.payload = Some(&input[after..after + length]);
    matched.terminated = true;
    Some(matched)
}

/// Characters accepted as the Symbol-Mode symbol
pub fn is_symbol_char(c: char) -> bool {
    c.is_ascii_graphic() && c != ';'
}

/// `SM c [;]` or `SM ;`
///
/// Whatever follows the mnemonic is taken as the symbol even when it
/// could start the next mnemonic; "SM PU" sets the symbol to 'P'.
fn symbol_mode(input: &str, pos: usize) -> Option<CommandMatch<'_>> {
    let after = lexer::keyword(input, pos, "SM")?;
    let at = lexer::skip_whitespace(input, after);
    match lexer::peek(input, at) {
        Some(c) if is_symbol_char(c) => {
            let end = at + c.len_utf8();
            let mut matched = CommandMatch::new(CommandKind::SymbolMode, input, pos, end);
            matched.payload = Some(&input[at..end]);
            Some(matched.with_optional_terminator(input))
        }
        _ => {
            let end = lexer::command_terminator(input, after)?;
            let mut matched = CommandMatch::new(CommandKind::SymbolMode, input, pos, end);
            matched.terminated = true;
            Some(matched)
        }
    }
}

/// `LB text t [;]` where `t` is the current label terminator
///
/// Label text is taken verbatim, whitespace included.
fn label(input: &str, pos: usize, terminator: char) -> Option<CommandMatch<'_>> {
    let after = lexer::keyword(input, pos, "LB")?;
    let length = input[after..].find(terminator)?;
    let end = after + length + terminator.len_utf8();
    let mut matched = CommandMatch::new(CommandKind::Label, input, pos, end);
    matched.payload = Some(&input[after..after + length]);
    Some(matched.with_optional_terminator(input))
}

/// Characters a label terminator may be set to
pub fn is_label_terminator_char(c: char) -> bool {
    !matches!(c, '\0' | '\n' | '\u{1b}' | ';')
}

/// `DT t [[sep] mode] [;]` or the bare `DT;`
///
/// `t` is the character immediately after the mnemonic, so "DT ;"
/// makes a space the terminator.
fn define_label_terminator(input: &str, pos: usize) -> Option<CommandMatch<'_>> {
    let after = lexer::keyword(input, pos, "DT")?;
    match lexer::peek(input, after) {
        Some(c) if is_label_terminator_char(c) => {
            let mut matched = CommandMatch::new(
                CommandKind::DefineLabelTerminator,
                input,
                pos,
                after + c.len_utf8(),
            );
            matched.label_terminator = Some(c);
            if let Some((mode, end)) = label_mode(input, matched.end) {
                matched.mode = Some(mode);
                matched.end = end;
            }
            Some(matched.with_optional_terminator(input))
        }
        _ => {
            let end = lexer::command_terminator(input, after)?;
            let mut matched =
                CommandMatch::new(CommandKind::DefineLabelTerminator, input, pos, end);
            matched.terminated = true;
            Some(matched)
        }
    }
}

/// `[sep] 0|1`, consuming nothing unless the digit is present
fn label_mode(input: &str, pos: usize) -> Option<(char, usize)> {
    let mut at = lexer::skip_whitespace(input, pos);
    if let Some(sep) = lexer::separator(input, at) {
        at = lexer::skip_whitespace(input, sep.end);
    }
    match lexer::peek(input, at)? {
        mode @ ('0' | '1') => Some((mode, at + 1)),
        _ => None,
    }
}

/// Any other mnemonic followed by numbers and separators
fn other(input: &str, pos: usize) -> Option<CommandMatch<'_>> {
    let mnemonic = lexer::mnemonic(input, pos)?;
    if RESERVED.iter().any(|reserved| reserved.eq_ignore_ascii_case(mnemonic)) {
        return None;
    }

    let mut end = pos + 2;
    loop {
        let at = lexer::skip_whitespace(input, end);
        match lexer::separator(input, at).or_else(|| lexer::numeric_parameter(input, at)) {
            Some(token) => end = token.end,
            None => break,
        }
    }
    Some(CommandMatch::new(CommandKind::Other, input, pos, end).with_optional_terminator(input))
}

/// The full command grammar for one scan step
///
/// Built from the label terminator in effect, so a Define-Label-Terminator
/// command changes the grammar of every later step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSet {
    label_terminator: char,
}

impl Default for CommandSet {
    fn default() -> Self {
        Self::new(DEFAULT_LABEL_TERMINATOR)
    }
}

impl CommandSet {
    pub fn new(label_terminator: char) -> Self {
        Self { label_terminator }
    }

    pub fn label_terminator(&self) -> char {
        self.label_terminator
    }

    /// Alternatives in priority order
    pub fn alternatives(&self) -> [CommandGrammar; 7] {
        [
            CommandGrammar::PenUp,
            CommandGrammar::PenDown,
            CommandGrammar::PolylineEncoded,
            CommandGrammar::SymbolMode,
            CommandGrammar::Label {
                terminator: self.label_terminator,
            },
            CommandGrammar::DefineLabelTerminator,
            CommandGrammar::Other,
        ]
    }

    /// First alternative whose mnemonic matches exactly at `pos`
    pub fn match_at<'a>(&self, input: &'a str, pos: usize) -> Option<CommandMatch<'a>> {
        self.alternatives()
            .into_iter()
            .find_map(|grammar| grammar.match_at(input, pos))
    }

    /// The grammar for the step after `matched`
    pub fn after(self, matched: &CommandMatch<'_>) -> Self {
        matched.label_terminator.map_or(self, Self::new)
    }
}
