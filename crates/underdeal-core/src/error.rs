//! Error types for deck arrangement and simulation.
//!
//! Every error here is a deterministic input-correctness failure: the
//! operation aborts with no partial result, nothing is retried or
//! silently corrected, and the caller must supply corrected input.

use std::error::Error;
use std::fmt;

/// Reasons a token is not a valid card label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LabelError {
    /// The token is empty.
    Empty,
    /// The token contains whitespace.
    Whitespace {
        /// The offending token.
        token: String,
    },
}

impl fmt::Display for LabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "label must not be empty"),
            Self::Whitespace { token } => {
                write!(f, "label {token:?} must not contain whitespace")
            }
        }
    }
}

impl Error for LabelError {}

/// Reasons a raw action sequence is not a valid pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatternError {
    /// The sequence has no actions.
    Empty,
    /// The sequence contains unrecognized action codes.
    InvalidActions {
        /// Distinct offending codes, in first-seen order.
        codes: Vec<u8>,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "pattern must not be empty"),
            Self::InvalidActions { codes } => {
                let listed: Vec<String> = codes.iter().map(u8::to_string).collect();
                write!(f, "pattern contains invalid action(s): {}", listed.join(", "))
            }
        }
    }
}

impl Error for PatternError {}

/// Errors from deck arrangement.
///
/// The variants cover the validation funnel in its canonical order:
/// a decodable, non-empty pattern; a non-empty desired order of valid
/// labels; and a reveal count that matches the desired-order length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrangeError {
    /// The desired order has no labels.
    EmptyDesiredOrder,
    /// A desired-order entry is not a valid label.
    InvalidLabel {
        /// Position of the offending entry within the desired order.
        index: usize,
        /// Why the token was rejected.
        reason: LabelError,
    },
    /// The raw pattern failed to decode.
    Pattern(PatternError),
    /// The pattern's reveal count does not match the desired-order length.
    RevealCountMismatch {
        /// Reveals required: the length of the desired order.
        expected: usize,
        /// Reveal actions actually present in the pattern.
        actual: usize,
    },
}

impl fmt::Display for ArrangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDesiredOrder => write!(f, "desired order must not be empty"),
            Self::InvalidLabel { index, reason } => {
                write!(f, "desired order entry {index} is not a valid label: {reason}")
            }
            Self::Pattern(e) => write!(f, "{e}"),
            Self::RevealCountMismatch { expected, actual } => {
                write!(
                    f,
                    "pattern must contain exactly {expected} reveal actions, got {actual}"
                )
            }
        }
    }
}

impl Error for ArrangeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidLabel { reason, .. } => Some(reason),
            Self::Pattern(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PatternError> for ArrangeError {
    fn from(e: PatternError) -> Self {
        Self::Pattern(e)
    }
}

/// Errors from forward simulation.
///
/// The simulator accepts a deck and pattern from any source, not only
/// the arranger, so it defends against inputs the arranger's validation
/// would have rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimulateError {
    /// An action code outside the vocabulary reached the replay loop.
    ///
    /// Unreachable for patterns decoded through
    /// [`Pattern`](crate::Pattern), but raw sequences arrive unchecked.
    UnknownAction {
        /// 1-based step at which the code was encountered.
        step: usize,
        /// The unrecognized code.
        code: u8,
    },
    /// The pattern asked to reveal a card the deck no longer has.
    DeckExhausted {
        /// 1-based step at which the deck ran out.
        step: usize,
    },
}

impl fmt::Display for SimulateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownAction { step, code } => {
                write!(f, "unknown action code {code} at step {step}")
            }
            Self::DeckExhausted { step } => {
                write!(f, "deck exhausted at step {step}")
            }
        }
    }
}

impl Error for SimulateError {}
