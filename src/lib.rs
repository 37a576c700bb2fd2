//! Finite Automaton: a deterministic finite automaton engine
//!
//! An automaton is built from a fixed alphabet, a registry of named states
//! carrying typed outputs, and a transition table. Running it folds an input
//! string over the table and yields the state it halts in; the halting
//! state's `result` is the machine's output.
//!
//! # Core Concepts
//!
//! - **State**: a named node with a finality flag and an output value
//! - **Null state**: the dead state every unset transition leads to, which
//!   loops to itself on every symbol and can never be rewired
//! - **Automaton**: the engine owning the alphabet, the states and the table
//! - **Builder**: declarative construction of a whole machine at once
//!
//! # Example
//!
//! ```rust
//! use finite_automaton::{Automaton, StateId};
//!
//! let mut machine: Automaton<&str> = Automaton::new("123".chars());
//! let p = machine.new_final_state("P", "accepted").unwrap();
//! machine.set_transition(p, '1', p).unwrap();
//! machine.set_init_state(p).unwrap();
//!
//! assert_eq!(machine.run("111").unwrap(), p);
//! assert_eq!(machine.run_result("111").unwrap(), Some(&"accepted"));
//! assert_eq!(machine.run("2").unwrap(), StateId::NULL);
//! assert_eq!(machine.run_result("2").unwrap(), None);
//! ```

pub mod automaton;
pub mod builder;
pub mod core;
pub mod modulo;

// Re-export commonly used types
pub use automaton::{Automaton, AutomatonError};
pub use builder::{AutomatonBuilder, BuildError, TransitionSpec};
pub use core::{Alphabet, RunTrace, State, StateId, Step};
