//! Builder API for declarative automaton construction.
//!
//! Lets a machine be declared as an alphabet, a list of states and a list of
//! named transitions, then validated and wired in one `build()` call.

pub mod error;
pub mod machine;

pub use error::BuildError;
pub use machine::{AutomatonBuilder, TransitionSpec};
