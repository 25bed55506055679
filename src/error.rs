//! Parse failures.
//!
//! Every failure is terminal: parsers never return a partial tree or pose list. Positions
//! are byte offsets into the text that was handed to the parser, resolved to line/column.

use crate::ast::{Position, SourceLocation};
use chumsky::error::{Simple, SimpleReason};
use std::fmt;
use std::hash::Hash;

#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The input at `position` does not match the expected literal or token class.
    Mismatch {
        position: Position,
        expected: Vec<String>,
        found: String,
    },
    /// Input ran out while something was still expected.
    UnexpectedEnd {
        position: Position,
        expected: Vec<String>,
    },
    /// A declared count is not satisfied by the items that follow it.
    ArityMismatch {
        position: Position,
        what: &'static str,
        declared: usize,
        found: usize,
    },
    /// A `CHANNELS` entry that is not one of the six channel literals.
    UnknownChannel { position: Position, name: String },
    /// Well-formed text that is still not acceptable (numeric overflow, owner file rule).
    Invalid { position: Position, message: String },
    /// The hierarchy tokenizer could not match the input.
    Lex { position: Position },
}

impl ParseError {
    pub fn position(&self) -> Position {
        match self {
            ParseError::Mismatch { position, .. }
            | ParseError::UnexpectedEnd { position, .. }
            | ParseError::ArityMismatch { position, .. }
            | ParseError::UnknownChannel { position, .. }
            | ParseError::Invalid { position, .. }
            | ParseError::Lex { position } => *position,
        }
    }

    /// Convert a chumsky error whose spans are byte ranges into `source`.
    pub(crate) fn from_simple<I>(error: Simple<I>, source: &SourceLocation) -> Self
    where
        I: fmt::Display + Hash + Eq,
    {
        let position = source.byte_to_position(error.span().start);

        if let SimpleReason::Custom(message) = error.reason() {
            return ParseError::Invalid {
                position,
                message: message.clone(),
            };
        }

        let mut expected: Vec<String> = match error.label() {
            Some(label) => vec![label.to_string()],
            None => error
                .expected()
                .map(|item| match item {
                    Some(token) => format!("'{}'", token),
                    None => "end of input".to_string(),
                })
                .collect(),
        };
        expected.sort();
        expected.dedup();

        match error.found() {
            Some(found) => ParseError::Mismatch {
                position,
                expected,
                found: format!("'{}'", found),
            },
            None => ParseError::UnexpectedEnd { position, expected },
        }
    }

    /// Pick the first of chumsky's reported errors; chumsky always reports at least one.
    pub(crate) fn from_simple_errors<I>(errors: Vec<Simple<I>>, source: &SourceLocation) -> Self
    where
        I: fmt::Display + Hash + Eq,
    {
        match errors.into_iter().next() {
            Some(error) => Self::from_simple(error, source),
            None => ParseError::Invalid {
                position: source.byte_to_position(0),
                message: "parser failed without reporting an error".to_string(),
            },
        }
    }
}

fn expected_list(expected: &[String]) -> String {
    match expected {
        [] => "something else".to_string(),
        [single] => single.clone(),
        many => format!("one of {}", many.join(", ")),
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Mismatch {
                position,
                expected,
                found,
            } => write!(
                f,
                "{}: expected {}, found {}",
                position,
                expected_list(expected),
                found
            ),
            ParseError::UnexpectedEnd { position, expected } => write!(
                f,
                "{}: unexpected end of input, expected {}",
                position,
                expected_list(expected)
            ),
            ParseError::ArityMismatch {
                position,
                what,
                declared,
                found,
            } => write!(
                f,
                "{}: declared {} {} but found {}",
                position, declared, what, found
            ),
            ParseError::UnknownChannel { position, name } => {
                write!(f, "{}: unknown channel type '{}'", position, name)
            }
            ParseError::Invalid { position, message } => write!(f, "{}: {}", position, message),
            ParseError::Lex { position } => write!(f, "{}: unrecognized input", position),
        }
    }
}

impl std::error::Error for ParseError {}
