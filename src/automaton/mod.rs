//! The automaton engine.
//!
//! # Key Concepts
//!
//! - **Registry**: states are registered by name; re-using a name retires
//!   the previous state
//! - **Null state**: the dead state every unset transition leads to
//! - **Run**: an all-or-nothing fold of the input over the transition table

mod error;
mod machine;

pub use error::AutomatonError;
pub use machine::Automaton;
