//! Core automaton value types.
//!
//! This module contains the leaf types the engine is built from:
//! - `State` records and their `StateId` handles
//! - The sorted `Alphabet` of input symbols
//! - `RunTrace` records of a run's path

mod alphabet;
mod state;
mod trace;

pub use alphabet::Alphabet;
pub use state::{State, StateId};
pub use trace::{RunTrace, Step};
