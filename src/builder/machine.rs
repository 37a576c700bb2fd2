//! Builder for constructing automata.

use crate::automaton::Automaton;
use crate::builder::error::BuildError;
use crate::core::{Alphabet, State};

/// A transition declared by state names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionSpec {
    pub from: String,
    pub symbol: char,
    pub to: String,
}

impl TransitionSpec {
    pub fn new(from: impl Into<String>, symbol: char, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            symbol,
            to: to.into(),
        }
    }
}

/// Builder for constructing automata with a fluent API.
///
/// States are incorporated in declaration order, so a later state replaces
/// an earlier one of the same name. Without an explicit
/// [`initial`](AutomatonBuilder::initial) state, the first declared state is
/// the initial one.
///
/// # Example
///
/// ```rust
/// use finite_automaton::{AutomatonBuilder, State};
///
/// let machine = AutomatonBuilder::new()
///     .alphabet("123".chars())
///     .state(State::final_state("P", 10))
///     .transition("P", '1', "P")
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.run_result("111").unwrap(), Some(&10));
/// assert_eq!(machine.run_result("2").unwrap(), None);
/// ```
pub struct AutomatonBuilder<V> {
    alphabet: Option<Alphabet>,
    states: Vec<State<V>>,
    transitions: Vec<TransitionSpec>,
    initial: Option<String>,
}

impl<V> AutomatonBuilder<V> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            alphabet: None,
            states: Vec::new(),
            transitions: Vec::new(),
            initial: None,
        }
    }

    /// Set the alphabet (required).
    pub fn alphabet<I>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        self.alphabet = Some(Alphabet::new(symbols));
        self
    }

    /// Add a state.
    pub fn state(mut self, state: State<V>) -> Self {
        self.states.push(state);
        self
    }

    /// Add multiple states at once.
    pub fn states(mut self, states: impl IntoIterator<Item = State<V>>) -> Self {
        self.states.extend(states);
        self
    }

    /// Add a transition between two named states.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        symbol: char,
        to: impl Into<String>,
    ) -> Self {
        self.transitions.push(TransitionSpec::new(from, symbol, to));
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: impl IntoIterator<Item = TransitionSpec>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Name the initial state (optional).
    pub fn initial(mut self, name: impl Into<String>) -> Self {
        self.initial = Some(name.into());
        self
    }

    /// Build the automaton.
    /// Returns an error if required fields are missing or any declaration
    /// is rejected by the automaton.
    pub fn build(self) -> Result<Automaton<V>, BuildError> {
        let alphabet = self.alphabet.ok_or(BuildError::MissingAlphabet)?;
        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        // Resolved by name so that a later redeclaration of the first
        // state becomes the initial one instead of its retired handle.
        let initial = self.initial.or_else(|| {
            self.states
                .first()
                .and_then(|state| state.name())
                .map(str::to_owned)
        });

        let mut machine = Automaton::with_alphabet(alphabet);

        for state in self.states {
            machine.incorporate(state)?;
        }

        for TransitionSpec { from, symbol, to } in &self.transitions {
            machine.set_transition_by_name(from, *symbol, to)?;
        }

        let initial = initial.ok_or(BuildError::NoStates)?;
        machine.set_init_state_by_name(&initial)?;

        Ok(machine)
    }
}

impl<V> Default for AutomatonBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}
