//! Parse Errors
//!
//! The four ways a scan can fail. All of them end the scan.

use thiserror::Error;

/// Longest excerpt of the offending text carried by an error.
const EXCERPT_LEN: usize = 16;

/// A classified, fatal failure of an HP-GL/2 scan
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No command grammar matches anywhere from `position` onward
    #[error("Failed to parse from this part of the document (offset {position}: {excerpt:?})")]
    UnparsableAt { position: usize, excerpt: String },

    /// A command matched, but only after skipping text at `position`
    #[error(
        "Parsing did not begin at the expected place in the document \
         (expected offset {position}, found a command at {matched_at}: {excerpt:?})"
    )]
    MisalignedMatch {
        position: usize,
        matched_at: usize,
        excerpt: String,
    },

    /// The trimmed document held no commands at all
    #[error("Empty file")]
    EmptyDocument,

    /// The last command was not closed with `;`
    #[error("File did not end with a semicolon (last command at offset {position}: {excerpt:?})")]
    MissingFinalTerminator { position: usize, excerpt: String },
}

impl ParseError {
    pub(crate) fn unparsable(document: &str, position: usize) -> Self {
        Self::UnparsableAt {
            position,
            excerpt: excerpt(document, position),
        }
    }

    pub(crate) fn misaligned(document: &str, position: usize, matched_at: usize) -> Self {
        Self::MisalignedMatch {
            position,
            matched_at,
            excerpt: excerpt(document, position),
        }
    }

    pub(crate) fn missing_terminator(document: &str, position: usize) -> Self {
        Self::MissingFinalTerminator {
            position,
            excerpt: excerpt(document, position),
        }
    }

    /// Byte offset the error refers to, if it has one
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::UnparsableAt { position, .. }
            | Self::MisalignedMatch { position, .. }
            | Self::MissingFinalTerminator { position, .. } => Some(*position),
            Self::EmptyDocument => None,
        }
    }
}

fn excerpt(document: &str, position: usize) -> String {
    document
        .get(position..)
        .unwrap_or_default()
        .chars()
        .take(EXCERPT_LEN)
        .collect()
}
