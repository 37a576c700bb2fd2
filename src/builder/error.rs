//! Build errors for the automaton builder.

use crate::automaton::AutomatonError;
use thiserror::Error;

/// Errors that can occur when building an automaton.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Alphabet not specified. Call .alphabet(symbols) before .build()")]
    MissingAlphabet,

    #[error("No states defined. Add at least one state")]
    NoStates,

    #[error(transparent)]
    Automaton(#[from] AutomatonError),
}
