//! Automaton error types.

use crate::core::StateId;
use thiserror::Error;

/// Errors from misusing an automaton.
///
/// All of them are local usage errors: a failed operation leaves the
/// automaton exactly as it was.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AutomatonError {
    /// A name-addressed operation resolved to no state
    #[error("no state named '{name}' in this automaton")]
    NullReference { name: String },

    /// An operation would corrupt the null state
    #[error("null state violation: {reason}")]
    NullStateViolation { reason: String },

    /// A state handle is not a current member of the registry
    #[error("state {state} is not a member of this automaton")]
    InvalidState { state: StateId },

    /// A symbol is outside the alphabet
    #[error("symbol '{symbol}' is not in the alphabet")]
    InvalidSymbol { symbol: char },

    /// Execution was attempted before an initial state was set
    #[error("automaton is not ready: no initial state set")]
    NotReady,
}

impl AutomatonError {
    pub(crate) fn null_state(reason: impl Into<String>) -> Self {
        AutomatonError::NullStateViolation {
            reason: reason.into(),
        }
    }

    /// Returns a stable code identifying the error kind.
    pub fn error_code(&self) -> &'static str {
        match self {
            AutomatonError::NullReference { .. } => "NULL_REFERENCE",
            AutomatonError::NullStateViolation { .. } => "NULL_STATE_VIOLATION",
            AutomatonError::InvalidState { .. } => "INVALID_STATE",
            AutomatonError::InvalidSymbol { .. } => "INVALID_SYMBOL",
            AutomatonError::NotReady => "NOT_READY",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let err = AutomatonError::InvalidSymbol { symbol: 'x' };
        assert_eq!(err.to_string(), "symbol 'x' is not in the alphabet");

        let err = AutomatonError::InvalidState { state: StateId::new(1, 4) };
        assert_eq!(err.to_string(), "state #4 is not a member of this automaton");

        let err = AutomatonError::NullReference {
            name: "S9".to_string(),
        };
        assert_eq!(err.to_string(), "no state named 'S9' in this automaton");
    }

    #[test]
    fn error_codes_are_distinct() {
        let errors = [
            AutomatonError::NullReference {
                name: String::new(),
            },
            AutomatonError::null_state("x"),
            AutomatonError::InvalidState {
                state: StateId::NULL,
            },
            AutomatonError::InvalidSymbol { symbol: 'a' },
            AutomatonError::NotReady,
        ];

        let mut codes: Vec<_> = errors.iter().map(|e| e.error_code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }
}
