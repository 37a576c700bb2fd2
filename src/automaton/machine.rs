//! Deterministic finite automaton engine.

use crate::automaton::error::AutomatonError;
use crate::core::{Alphabet, RunTrace, State, StateId, Step};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

type Row = HashMap<char, StateId>;

/// Stamp source for automata; 0 is reserved for the shared null handle.
static NEXT_OWNER: AtomicU64 = AtomicU64::new(1);

/// A deterministic finite automaton with outputs of type `V`.
///
/// The automaton owns its states in an append-only arena and hands out
/// [`StateId`] handles stamped with the automaton's identity, so a handle
/// from another automaton is never mistaken for a member. States are
/// registered by name; incorporating a state under a name already in use
/// retires the previous holder, dropping its outgoing transitions and its
/// data. Transitions pointing *into* a retired state are left in place and
/// only fail once the run tries to leave that state.
///
/// A clone keeps the stamp, so handles stay valid across `clone()`.
///
/// Every automaton owns a null state ([`StateId::NULL`]). Unset transitions
/// lead to it and it loops to itself on every symbol, so the transition
/// function is total over registered states and alphabet symbols.
///
/// # Example
///
/// ```rust
/// use finite_automaton::Automaton;
///
/// // Remainder of a binary number divided by 3.
/// let mut machine: Automaton<u32> = Automaton::new(['0', '1']);
/// let states: Vec<_> = (0..3)
///     .map(|i| machine.new_final_state(format!("S{i}"), i).unwrap())
///     .collect();
/// for m in 0..3 {
///     for d in 0..2 {
///         let symbol = char::from_digit(d as u32, 2).unwrap();
///         machine.set_transition(states[m], symbol, states[(m * 2 + d) % 3]).unwrap();
///     }
/// }
/// machine.set_init_state(states[0]).unwrap();
///
/// assert_eq!(machine.run_result("1101").unwrap(), Some(&1));
/// ```
#[derive(Clone, Debug)]
pub struct Automaton<V> {
    alphabet: Alphabet,
    owner: u64,
    arena: Vec<Option<State<V>>>,
    registry: HashMap<String, StateId>,
    table: HashMap<StateId, Row>,
    init: Option<StateId>,
}

impl<V> Automaton<V> {
    /// Create an automaton over the given symbols.
    ///
    /// The symbols are sorted and deduplicated. The automaton starts with
    /// only its null state and no initial state.
    pub fn new<I>(alphabet: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        Self::with_alphabet(Alphabet::new(alphabet))
    }

    /// Create an automaton over an already built alphabet.
    pub fn with_alphabet(alphabet: Alphabet) -> Self {
        let owner = NEXT_OWNER.fetch_add(1, Ordering::Relaxed);
        tracing::debug!("creating automaton {} over alphabet {}", owner, alphabet);
        Self {
            alphabet,
            owner,
            arena: vec![Some(State::unnamed())],
            registry: HashMap::new(),
            table: HashMap::new(),
            init: None,
        }
    }

    /// The canonical sorted alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Whether `symbol` belongs to the alphabet.
    pub fn is_in_alphabet(&self, symbol: char) -> bool {
        self.alphabet.contains(symbol)
    }

    /// Whether every character of `input` belongs to the alphabet.
    pub fn is_string_of_alphabet(&self, input: &str) -> bool {
        self.alphabet.accepts(input)
    }

    /// Handle of this automaton's null state.
    pub fn null_state(&self) -> StateId {
        StateId::NULL
    }

    /// The designated initial state, if any.
    pub fn init_state(&self) -> Option<StateId> {
        self.init
    }

    /// Whether an initial state has been designated. Once true, stays true.
    pub fn is_ready(&self) -> bool {
        self.init.is_some()
    }

    /// Whether `state` is a current registry member.
    ///
    /// Handles retired by a same-name incorporation are not members, nor
    /// are handles issued by another automaton.
    pub fn contains_state(&self, state: StateId) -> bool {
        state.is_null() || self.table.contains_key(&state)
    }

    /// Look up the current state registered under `name`.
    pub fn state_by_name(&self, name: &str) -> Option<StateId> {
        self.registry.get(name).copied()
    }

    /// All current members, null state first, then in incorporation order.
    pub fn all_states(&self) -> Vec<StateId> {
        let mut states: Vec<StateId> = self.table.keys().copied().collect();
        states.push(StateId::NULL);
        states.sort_unstable();
        states
    }

    /// Number of current members, the null state included.
    pub fn state_count(&self) -> usize {
        self.table.len() + 1
    }

    /// Read a member's data.
    ///
    /// Returns `None` for retired handles, whose data is released on
    /// replacement, and for handles of other automata.
    pub fn state(&self, state: StateId) -> Option<&State<V>> {
        if !self.owns(state) {
            return None;
        }
        self.arena.get(state.index()).and_then(Option::as_ref)
    }

    /// Mutable access to a member's finality and value.
    ///
    /// The null state's payload is fixed: it is never final and has no value.
    pub fn state_mut(&mut self, state: StateId) -> Result<&mut State<V>, AutomatonError> {
        if state.is_null() {
            return Err(AutomatonError::null_state("the null state cannot be modified"));
        }
        self.check_member(state)?;
        self.arena
            .get_mut(state.index())
            .and_then(Option::as_mut)
            .ok_or(AutomatonError::InvalidState { state })
    }

    /// Take ownership of `state` and register it under its name.
    ///
    /// A state already registered under the same name is retired: its
    /// outgoing transitions and data are discarded and its handle stops
    /// being a member. Unnamed states are refused, the missing name being
    /// reserved for the null state.
    pub fn incorporate(&mut self, state: State<V>) -> Result<StateId, AutomatonError> {
        let name = state
            .name()
            .ok_or_else(|| AutomatonError::null_state("cannot incorporate a state without a name"))?
            .to_string();

        let id = StateId::new(self.owner, self.arena.len());
        self.arena.push(Some(state));

        if let Some(retired) = self.registry.insert(name.clone(), id) {
            self.table.remove(&retired);
            if let Some(slot) = self.arena.get_mut(retired.index()) {
                slot.take();
            }
            tracing::debug!("state '{}' replaced: {} retired by {}", name, retired, id);
        } else {
            tracing::debug!("state '{}' incorporated as {}", name, id);
        }
        self.table.insert(id, Row::new());

        Ok(id)
    }

    /// Create and incorporate a non-final state without a value.
    pub fn new_state(&mut self, name: impl Into<String>) -> Result<StateId, AutomatonError> {
        self.incorporate(State::new(name))
    }

    /// Create and incorporate a non-final state carrying `value`.
    pub fn new_valued_state(
        &mut self,
        name: impl Into<String>,
        value: V,
    ) -> Result<StateId, AutomatonError> {
        self.incorporate(State::with_value(name, value))
    }

    /// Create and incorporate a final state carrying `value`.
    pub fn new_final_state(
        &mut self,
        name: impl Into<String>,
        value: V,
    ) -> Result<StateId, AutomatonError> {
        self.incorporate(State::final_state(name, value))
    }

    /// Map `(from, symbol)` to `to`, replacing any previous mapping.
    ///
    /// Transitions out of the null state cannot be set; transitions into it
    /// are allowed and equivalent to the unset default.
    pub fn set_transition(
        &mut self,
        from: StateId,
        symbol: char,
        to: StateId,
    ) -> Result<(), AutomatonError> {
        self.check_member(from)?;
        self.check_symbol(symbol)?;
        self.check_member(to)?;
        if from.is_null() {
            return Err(AutomatonError::null_state(
                "transitions out of the null state are fixed",
            ));
        }

        let row = self
            .table
            .get_mut(&from)
            .ok_or(AutomatonError::InvalidState { state: from })?;
        row.insert(symbol, to);
        tracing::debug!("transition {} --{}--> {}", from, symbol, to);
        Ok(())
    }

    /// [`set_transition`](Self::set_transition) addressed by state names.
    pub fn set_transition_by_name(
        &mut self,
        from: &str,
        symbol: char,
        to: &str,
    ) -> Result<(), AutomatonError> {
        let from = self.resolve(from)?;
        let to = self.resolve(to)?;
        self.set_transition(from, symbol, to)
    }

    /// Designate the initial state. The null state is a valid choice.
    pub fn set_init_state(&mut self, state: StateId) -> Result<(), AutomatonError> {
        self.check_member(state)?;
        self.init = Some(state);
        tracing::debug!("initial state set to {}", state);
        Ok(())
    }

    /// [`set_init_state`](Self::set_init_state) addressed by name.
    pub fn set_init_state_by_name(&mut self, name: &str) -> Result<(), AutomatonError> {
        let state = self.resolve(name)?;
        self.set_init_state(state)
    }

    /// The successor of `state` on `symbol`.
    ///
    /// Unset transitions, and every transition of the null state, lead to
    /// the null state.
    pub fn transition(&self, state: StateId, symbol: char) -> Result<StateId, AutomatonError> {
        self.check_member(state)?;
        self.check_symbol(symbol)?;
        self.lookup(state, symbol)
    }

    /// Consume `input` from the initial state and return the state reached.
    ///
    /// The whole input is validated before the first step, so a foreign
    /// symbol anywhere fails the run without consuming anything. The empty
    /// input yields the initial state itself.
    pub fn run(&self, input: &str) -> Result<StateId, AutomatonError> {
        let mut current = self.prepare(input)?;
        for symbol in input.chars() {
            if current.is_null() {
                break;
            }
            let next = self.lookup(current, symbol)?;
            tracing::trace!("{} --{}--> {}", current, symbol, next);
            current = next;
        }
        Ok(current)
    }

    /// Run `input` and return the terminal state's result.
    pub fn run_result(&self, input: &str) -> Result<Option<&V>, AutomatonError> {
        let terminal = self.run(input)?;
        Ok(self.state(terminal).and_then(State::result))
    }

    /// Like [`run`](Self::run), but records every step taken.
    pub fn trace(&self, input: &str) -> Result<RunTrace, AutomatonError> {
        let initial = self.prepare(input)?;
        let mut trace = RunTrace::new(initial);
        let mut current = initial;

        for (consumed, symbol) in input.chars().enumerate() {
            if current.is_null() {
                trace.skip(input.chars().count() - consumed);
                break;
            }
            let next = self.lookup(current, symbol)?;
            trace.record(Step {
                from: current,
                symbol,
                to: next,
            });
            current = next;
        }
        Ok(trace)
    }

    fn prepare(&self, input: &str) -> Result<StateId, AutomatonError> {
        let init = self.init.ok_or(AutomatonError::NotReady)?;
        if let Some((position, symbol)) = self.alphabet.first_foreign(input) {
            tracing::debug!("rejecting input: '{}' at position {}", symbol, position);
            return Err(AutomatonError::InvalidSymbol { symbol });
        }
        Ok(init)
    }

    /// Table lookup for an already validated symbol.
    fn lookup(&self, state: StateId, symbol: char) -> Result<StateId, AutomatonError> {
        if state.is_null() {
            return Ok(StateId::NULL);
        }
        let row = self
            .table
            .get(&state)
            .ok_or(AutomatonError::InvalidState { state })?;
        Ok(row.get(&symbol).copied().unwrap_or(StateId::NULL))
    }

    /// Null handle, or one stamped by this automaton.
    fn owns(&self, state: StateId) -> bool {
        state.is_null() || state.owner() == self.owner
    }

    fn resolve(&self, name: &str) -> Result<StateId, AutomatonError> {
        self.state_by_name(name)
            .ok_or_else(|| AutomatonError::NullReference {
                name: name.to_string(),
            })
    }

    fn check_member(&self, state: StateId) -> Result<(), AutomatonError> {
        if self.contains_state(state) {
            Ok(())
        } else {
            Err(AutomatonError::InvalidState { state })
        }
    }

    fn check_symbol(&self, symbol: char) -> Result<(), AutomatonError> {
        if self.alphabet.contains(symbol) {
            Ok(())
        } else {
            Err(AutomatonError::InvalidSymbol { symbol })
        }
    }
}
