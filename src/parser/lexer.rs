//! HP-GL/2 Primitive Tokens
//!
//! Position-based matchers for the smallest pieces of the grammar.
//! Every matcher takes the whole document and a byte offset and either
//! returns where the match ends or `None`, never consuming on failure.
//!
//! Digits, separators and `;` are ASCII, so they are tested on raw bytes;
//! UTF-8 continuation bytes can never match them.

/// Token types captured inside parameter lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Unsigned decimal literal like "12" or "12.5"
    Number,
    /// One of `,`, `+`, `-`
    Separator,
}

/// A captured literal, borrowed from the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub start: usize, // byte offset
    pub end: usize,   // byte offset (exclusive)
}

impl Token<'_> {
    pub fn is_number(&self) -> bool {
        self.kind == TokenKind::Number
    }
}

/// The command terminator
pub const TERMINATOR: u8 = b';';

/// Character at `pos`, if any
pub fn peek(input: &str, pos: usize) -> Option<char> {
    input.get(pos..)?.chars().next()
}

fn byte_at(input: &str, pos: usize) -> Option<u8> {
    input.as_bytes().get(pos).copied()
}

/// Skip a run of whitespace, returning the offset of the next non-blank
pub fn skip_whitespace(input: &str, pos: usize) -> usize {
    let bytes = input.as_bytes();
    let mut end = pos;
    while end < bytes.len() && bytes[end].is_ascii_whitespace() {
        end += 1;
    }
    end
}

/// One or more ASCII digits
pub fn digit_run(input: &str, pos: usize) -> Option<usize> {
    let bytes = input.as_bytes();
    let mut end = pos;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    (end > pos).then_some(end)
}

/// `digits ['.' digits]`, matched greedily without backtracking
///
/// "12.5.7" yields "12.5"; "12." yields "12"; ".1" fails.
pub fn numeric_parameter(input: &str, pos: usize) -> Option<Token<'_>> {
    let mut end = digit_run(input, pos)?;
    if byte_at(input, end) == Some(b'.') {
        if let Some(fraction_end) = digit_run(input, end + 1) {
            end = fraction_end;
        }
    }
    Some(Token {
        kind: TokenKind::Number,
        text: &input[pos..end],
        start: pos,
        end,
    })
}

pub fn is_separator(byte: u8) -> bool {
    matches!(byte, b',' | b'+' | b'-')
}

/// A single explicit separator at `pos`
///
/// Whitespace also separates parameters, but it is skipped between
/// tokens rather than captured.
pub fn separator(input: &str, pos: usize) -> Option<Token<'_>> {
    let byte = byte_at(input, pos)?;
    is_separator(byte).then(|| Token {
        kind: TokenKind::Separator,
        text: &input[pos..pos + 1],
        start: pos,
        end: pos + 1,
    })
}

/// Optional whitespace followed by `;`, returning the offset after it
pub fn command_terminator(input: &str, pos: usize) -> Option<usize> {
    let at = skip_whitespace(input, pos);
    (byte_at(input, at) == Some(TERMINATOR)).then_some(at + 1)
}

/// Two ASCII letters of the same case
pub fn mnemonic(input: &str, pos: usize) -> Option<&str> {
    let first = byte_at(input, pos)?;
    let second = byte_at(input, pos + 1)?;
    let same_case = (first.is_ascii_uppercase() && second.is_ascii_uppercase())
        || (first.is_ascii_lowercase() && second.is_ascii_lowercase());
    same_case.then(|| &input[pos..pos + 2])
}

/// Match a fixed mnemonic in either all-upper or all-lower case
pub fn keyword(input: &str, pos: usize, upper: &str) -> Option<usize> {
    // `mnemonic` already rejects mixed case
    mnemonic(input, pos)
        .filter(|found| found.eq_ignore_ascii_case(upper))
        .map(|_| pos + 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(input: &str) -> Option<&str> {
        numeric_parameter(input, 0).map(|t| t.text)
    }

    #[test]
    fn test_numeric_parameter() {
        assert_eq!(number("12"), Some("12"));
        assert_eq!(number("12.5"), Some("12.5"));
        // Not valid HP-GL/2, but the first match wins
        assert_eq!(number("12.5.7"), Some("12.5"));
        assert_eq!(number("12."), Some("12"));
        assert_eq!(number(".1"), None);
        assert_eq!(number("-1"), None);
    }

    #[test]
    fn test_numeric_parameter_offsets() {
        let token = numeric_parameter("PU 105,3", 3).unwrap();
        assert_eq!(token.kind, TokenKind::Number);
        assert_eq!((token.start, token.end), (3, 6));
    }

    #[test]
    fn test_separator() {
        for sep in [",", "+", "-"] {
            let token = separator(sep, 0).unwrap();
            assert_eq!(token.kind, TokenKind::Separator);
            assert_eq!(token.text, sep);
        }
        assert!(separator(" ", 0).is_none());
        assert!(separator(";", 0).is_none());
    }

    #[test]
    fn test_command_terminator() {
        assert_eq!(command_terminator(";", 0), Some(1));
        assert_eq!(command_terminator("  \n;PU", 0), Some(4));
        assert_eq!(command_terminator("PU;", 0), None);
        assert_eq!(command_terminator("", 0), None);
    }

    #[test]
    fn test_mnemonic_case() {
        assert_eq!(mnemonic("PU", 0), Some("PU"));
        assert_eq!(mnemonic("pu", 0), Some("pu"));
        assert_eq!(mnemonic("Pu", 0), None);
        assert_eq!(mnemonic("P1", 0), None);
        assert_eq!(mnemonic("P", 0), None);
    }

    #[test]
    fn test_keyword() {
        assert_eq!(keyword("PU10", 0, "PU"), Some(2));
        assert_eq!(keyword("pu10", 0, "PU"), Some(2));
        assert_eq!(keyword("PD10", 0, "PU"), None);
        assert_eq!(keyword("pU10", 0, "PU"), None);
    }

    #[test]
    fn test_skip_whitespace() {
        assert_eq!(skip_whitespace(" \t\r\nPU", 0), 4);
        assert_eq!(skip_whitespace("PU", 0), 0);
        assert_eq!(skip_whitespace("", 0), 0);
    }

    #[test]
    fn test_peek_multibyte() {
        assert_eq!(peek("LBé", 2), Some('é'));
        assert_eq!(peek("LB", 2), None);
    }
}
