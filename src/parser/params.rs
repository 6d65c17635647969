//! Coordinate Parameter Lists
//!
//! Grammar for the parameter list of Pen Up / Pen Down and the step that
//! turns a matched list into (X, Y) pairs.
//!
//! A list is empty, a single unpaired value, or one or more pairs with an
//! optional trailing unpaired value. The plotter ignores a final X without
//! its Y, so that trailing value is captured but never paired.

use crate::parser::ast::Pair;
use crate::parser::lexer::{self, Token};

/// A matched parameter list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamList<'a> {
    /// No parameters at all
    Empty,
    /// A lone value with no partner
    Unpaired(Token<'a>),
    /// Complete pairs, with the separators between them, plus a dropped
    /// trailing value (and its leading separator) if one was present
    Paired {
        group: Vec<Token<'a>>,
        dropped: Vec<Token<'a>>,
    },
}

impl<'a> ParamList<'a> {
    /// Coordinate pairs in encounter order
    ///
    /// Only the integer part of each literal is kept.
    pub fn pairs(&self) -> Vec<Pair> {
        match self {
            ParamList::Empty | ParamList::Unpaired(_) => Vec::new(),
            ParamList::Paired { group, .. } => {
                let values: Vec<i64> = group
                    .iter()
                    .filter(|token| token.is_number())
                    .map(|token| integer_value(token.text))
                    .collect();
                values
                    .chunks_exact(2)
                    .map(|pair| (pair[0], pair[1]))
                    .collect()
            }
        }
    }

    /// All captured tokens, separators included
    pub fn tokens(&self) -> Vec<Token<'a>> {
        match self {
            ParamList::Empty => Vec::new(),
            ParamList::Unpaired(token) => vec![*token],
            ParamList::Paired { group, dropped } => {
                group.iter().chain(dropped.iter()).copied().collect()
            }
        }
    }
}

/// Integer part of an unsigned decimal literal, saturating on overflow
fn integer_value(text: &str) -> i64 {
    text.bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
        })
}

fn number_at(input: &str, pos: usize) -> Option<Token<'_>> {
    lexer::numeric_parameter(input, lexer::skip_whitespace(input, pos))
}

/// Push an optional separator, returning the offset after it
fn optional_separator<'a>(input: &'a str, pos: usize, tokens: &mut Vec<Token<'a>>) -> usize {
    match lexer::separator(input, lexer::skip_whitespace(input, pos)) {
        Some(token) => {
            tokens.push(token);
            token.end
        }
        None => pos,
    }
}

/// `number [separator] number`
pub fn first_pair(input: &str, pos: usize) -> Option<(Vec<Token<'_>>, usize)> {
    let mut tokens = Vec::with_capacity(3);
    let x = number_at(input, pos)?;
    tokens.push(x);
    let end = optional_separator(input, x.end, &mut tokens);
    let y = number_at(input, end)?;
    tokens.push(y);
    Some((tokens, y.end))
}

/// `[separator] number [separator] number`
pub fn next_pair(input: &str, pos: usize) -> Option<(Vec<Token<'_>>, usize)> {
    let mut tokens = Vec::with_capacity(4);
    let end = optional_separator(input, pos, &mut tokens);
    let x = number_at(input, end)?;
    tokens.push(x);
    let end = optional_separator(input, x.end, &mut tokens);
    let y = number_at(input, end)?;
    tokens.push(y);
    Some((tokens, y.end))
}

/// `[separator] number`
pub fn unpaired_next(input: &str, pos: usize) -> Option<(Vec<Token<'_>>, usize)> {
    let mut tokens = Vec::with_capacity(2);
    let end = optional_separator(input, pos, &mut tokens);
    let value = number_at(input, end)?;
    tokens.push(value);
    Some((tokens, value.end))
}

/// Match a whole parameter list starting at `pos`
///
/// Fails if the list is followed by a separator that leads nowhere,
/// e.g. "12, , 13" or ", 12".
pub fn parameter_pair_list(input: &str, pos: usize) -> Option<(ParamList<'_>, usize)> {
    let (list, end) = if let Some((mut group, mut end)) = first_pair(input, pos) {
        while let Some((more, next)) = next_pair(input, end) {
            group.extend(more);
            end = next;
        }
        let dropped = match unpaired_next(input, end) {
            Some((tokens, next)) => {
                end = next;
                tokens
            }
            None => Vec::new(),
        };
        (ParamList::Paired { group, dropped }, end)
    } else if let Some(token) = number_at(input, pos) {
        (ParamList::Unpaired(token), token.end)
    } else {
        (ParamList::Empty, pos)
    };

    if lexer::separator(input, lexer::skip_whitespace(input, end)).is_some() {
        return None;
    }
    Some((list, end))
}
