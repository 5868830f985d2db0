//! Error enum
use std::fmt;

use crate::corpus::{FieldTag, StatsMismatch};

/// Structural violations of a corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedCorpus {
    /// The total number of lines is not a multiple of the block size.
    LineCount {
        block_size: usize,
        actual: usize,
        expected: usize,
    },
    /// A required field is empty once its tag is stripped and the value trimmed.
    EmptyField {
        block: usize,
        tag: FieldTag,
        line: String,
    },
}

impl fmt::Display for MalformedCorpus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LineCount {
                block_size,
                actual,
                expected,
            } => write!(
                f,
                "expected a multiple of {} lines (next valid count is {}), got {}",
                block_size, expected, actual
            ),
            Self::EmptyField { block, tag, line } => {
                write!(f, "block {}: empty {} in line {:?}", block, tag, line)
            }
        }
    }
}

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    Csv(csv::Error),
    MalformedCorpus(MalformedCorpus),
    MissingField {
        block: usize,
        tag: FieldTag,
    },
    FieldParse {
        block: usize,
        line: String,
        reason: String,
    },
    Config(String),
    Validation(StatsMismatch),
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Serde(e) => write!(f, "serialization error: {}", e),
            Error::Csv(e) => write!(f, "csv error: {}", e),
            Error::MalformedCorpus(e) => write!(f, "malformed corpus: {}", e),
            Error::MissingField { block, tag } => {
                write!(f, "block {}: missing required field {}", block, tag)
            }
            Error::FieldParse {
                block,
                line,
                reason,
            } => write!(f, "block {}: could not parse {:?}: {}", block, line, reason),
            Error::Config(msg) => write!(f, "invalid configuration: {}", msg),
            Error::Validation(mismatch) => write!(f, "{}", mismatch),
            Error::Custom(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Serde(e) => Some(e),
            Error::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MalformedCorpus> for Error {
    fn from(v: MalformedCorpus) -> Self {
        Self::MalformedCorpus(v)
    }
}

impl From<StatsMismatch> for Error {
    fn from(v: StatsMismatch) -> Self {
        Self::Validation(v)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}
