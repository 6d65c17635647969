//! Scanning Driver
//!
//! Walks a document one command at a time. Each step matches the command
//! grammar exactly at the cursor, advances past it and derives the grammar
//! for the next step from what was matched. Output is pulled lazily, and a
//! failure is delivered as the last item of the stream.

use std::iter::FusedIterator;

use crate::error::ParseError;
use crate::parser::ast::PenEvent;
use crate::parser::command::{CommandMatch, CommandSet};
use crate::parser::lexer;

/// Where the last matched command started and whether it ended in `;`
#[derive(Debug, Clone, Copy)]
struct LastCommand {
    start: usize,
    terminated: bool,
}

/// Every command in a document, in order
///
/// Yields `Err` at most once, after which it is exhausted.
#[derive(Debug, Clone)]
pub struct Commands<'a> {
    input: &'a str,
    cursor: usize,
    grammar: CommandSet,
    last: Option<LastCommand>,
    finished: bool,
}

impl<'a> Commands<'a> {
    fn new(document: &'a str) -> Self {
        Self {
            input: document.trim_end_matches(|c: char| c.is_ascii_whitespace()),
            cursor: 0,
            grammar: CommandSet::default(),
            last: None,
            finished: false,
        }
    }

    /// The document as scanned, trailing whitespace removed
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Label terminator the next command will be matched with
    pub fn label_terminator(&self) -> char {
        self.grammar.label_terminator()
    }

    /// Match the next command, which must start at the cursor
    fn step(&self) -> Result<CommandMatch<'a>, ParseError> {
        let at = lexer::skip_whitespace(self.input, self.cursor);
        if let Some(matched) = self.grammar.match_at(self.input, at) {
            return Ok(matched);
        }

        // Look further ahead only to classify the failure
        let found = self.input[at..]
            .char_indices()
            .skip(1)
            .find_map(|(offset, _)| self.grammar.match_at(self.input, at + offset));

        Err(match found {
            Some(matched) => ParseError::misaligned(self.input, self.cursor, matched.start),
            None => ParseError::unparsable(self.input, self.cursor),
        })
    }

    /// Check the end-of-document rules once the cursor reaches the end
    fn finish(&self) -> Result<(), ParseError> {
        match self.last {
            None => Err(ParseError::EmptyDocument),
            Some(last) if !last.terminated => {
                Err(ParseError::missing_terminator(self.input, last.start))
            }
            Some(_) => Ok(()),
        }
    }
}

impl<'a> Iterator for Commands<'a> {
    type Item = Result<CommandMatch<'a>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        if self.cursor >= self.input.len() {
            self.finished = true;
            return self.finish().err().map(Err);
        }

        match self.step() {
            Ok(matched) => {
                log::debug!(
                    "{:?} at {}: {:?}",
                    matched.kind,
                    matched.start,
                    matched.text(self.input)
                );

                let grammar = self.grammar.after(&matched);
                if grammar != self.grammar {
                    log::trace!(
                        "label terminator {:?} -> {:?}",
                        self.grammar.label_terminator(),
                        grammar.label_terminator()
                    );
                }

                self.grammar = grammar;
                self.cursor = matched.end;
                self.last = Some(LastCommand {
                    start: matched.start,
                    terminated: matched.terminated,
                });
                Some(Ok(matched))
            }
            Err(err) => {
                log::debug!("scan stopped: {err}");
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

impl FusedIterator for Commands<'_> {}

/// Pen Up and Pen Down events of a document, in order
#[derive(Debug, Clone)]
pub struct PenEvents<'a> {
    commands: Commands<'a>,
}

impl Iterator for PenEvents<'_> {
    type Item = Result<PenEvent, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.commands.next()? {
                Ok(matched) => {
                    if let Some(kind) = matched.kind.pen() {
                        return Some(Ok(PenEvent::new(kind, matched.params.pairs())));
                    }
                }
                Err(err) => return Some(Err(err)),
            }
        }
    }
}

impl FusedIterator for PenEvents<'_> {}

/// Scan every command of a document
pub fn scan_commands(document: &str) -> Commands<'_> {
    Commands::new(document)
}

/// Scan a document for its Pen Up and Pen Down commands
///
/// Events are produced as the iterator is advanced. Events yielded before
/// an error remain valid; the error is the final item.
pub fn parse_hpgl(document: &str) -> PenEvents<'_> {
    PenEvents {
        commands: Commands::new(document),
    }
}
