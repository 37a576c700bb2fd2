//! Automaton states.
//!
//! A state is a plain record: an immutable name, a finality flag and a
//! payload of the caller's output type. It performs no validation of its
//! own; name legality is checked when an automaton incorporates it.

use std::fmt;

/// Handle to a state incorporated into an [`Automaton`](crate::Automaton).
///
/// A handle pairs the stamp of the automaton that issued it with an index
/// into that automaton's state arena. Every incorporation allocates a fresh
/// index, so two handles are equal only when they refer to the very same
/// incorporated state of the same automaton, never merely to states that
/// share a name, a value or a position.
///
/// The null state is the one exception: [`StateId::NULL`] designates the
/// null state of every automaton.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct StateId {
    owner: u64,
    index: usize,
}

impl StateId {
    /// Handle of the null state, which every automaton owns at index 0.
    pub const NULL: StateId = StateId { owner: 0, index: 0 };

    pub(crate) fn new(owner: u64, index: usize) -> Self {
        Self { owner, index }
    }

    /// Check whether this handle designates the null state.
    pub fn is_null(self) -> bool {
        self == Self::NULL
    }

    /// Position of the state in its automaton's arena.
    pub fn index(self) -> usize {
        self.index
    }

    /// Stamp of the automaton that issued this handle, 0 for the null state.
    pub fn owner(self) -> u64 {
        self.owner
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// A node of the automaton.
///
/// `V` is the output type. The value can be set whether or not the state is
/// final; only [`result`](State::result) interprets finality.
///
/// Equality compares name, finality and value. An automaton decides
/// membership by [`StateId`], never by comparing states.
///
/// # Example
///
/// ```rust
/// use finite_automaton::State;
///
/// let mut state = State::with_value("S1", 7);
/// assert_eq!(state.value(), Some(&7));
/// assert_eq!(state.result(), None);
///
/// state.set_result(9);
/// assert!(state.is_final());
/// assert_eq!(state.result(), Some(&9));
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct State<V> {
    name: Option<String>,
    finality: bool,
    value: Option<V>,
}

impl<V> State<V> {
    /// Create a non-final state without a value.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            finality: false,
            value: None,
        }
    }

    /// Create a non-final state carrying `value`.
    pub fn with_value(name: impl Into<String>, value: V) -> Self {
        Self {
            name: Some(name.into()),
            finality: false,
            value: Some(value),
        }
    }

    /// Create a state with every field given explicitly.
    pub fn from_parts(name: impl Into<String>, finality: bool, value: Option<V>) -> Self {
        Self {
            name: Some(name.into()),
            finality,
            value,
        }
    }

    /// Create a final state carrying `value`.
    pub fn final_state(name: impl Into<String>, value: V) -> Self {
        Self::from_parts(name, true, Some(value))
    }

    /// Create a state with no name.
    ///
    /// The missing name is reserved for an automaton's own null state, so
    /// such a state can be built and inspected but never incorporated.
    pub fn unnamed() -> Self {
        Self {
            name: None,
            finality: false,
            value: None,
        }
    }

    /// The state's name, `None` only for the null state (or an unnamed state).
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether a run halting here produces the state's value.
    pub fn is_final(&self) -> bool {
        self.finality
    }

    /// The payload, whether or not the state is final.
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// The output of a machine halting here: the value if final, else `None`.
    pub fn result(&self) -> Option<&V> {
        if self.finality {
            self.value.as_ref()
        } else {
            None
        }
    }

    /// Mark the state final or not, leaving the value untouched.
    pub fn set_finality(&mut self, finality: bool) {
        self.finality = finality;
    }

    /// Replace the value, leaving finality untouched. Returns the old value.
    pub fn set_value(&mut self, value: Option<V>) -> Option<V> {
        std::mem::replace(&mut self.value, value)
    }

    /// Set the value and make the state final in one step.
    pub fn set_result(&mut self, result: V) {
        self.finality = true;
        self.value = Some(result);
    }
}

impl<V> fmt::Display for State<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => f.write_str(name),
            None => f.write_str("<null>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_valueless_and_not_final() {
        let state: State<i32> = State::new("S0");
        assert_eq!(state.name(), Some("S0"));
        assert!(!state.is_final());
        assert_eq!(state.value(), None);
        assert_eq!(state.result(), None);
    }

    #[test]
    fn valued_state_hides_result_until_final() {
        let mut state = State::with_value("S1", 2);
        assert_eq!(state.value(), Some(&2));
        assert_eq!(state.result(), None);

        state.set_finality(true);
        assert_eq!(state.result(), Some(&2));
    }

    #[test]
    fn final_state_exposes_result() {
        let state = State::final_state("S2", 3);
        assert!(state.is_final());
        assert_eq!(state.value(), Some(&3));
        assert_eq!(state.result(), Some(&3));
    }

    #[test]
    fn final_valueless_state_has_no_result() {
        let state: State<i32> = State::from_parts("S3", true, None);
        assert!(state.is_final());
        assert_eq!(state.result(), None);
    }

    #[test]
    fn set_value_keeps_finality() {
        let mut state = State::final_state("S0", 1);
        let old = state.set_value(Some(5));
        assert_eq!(old, Some(1));
        assert!(state.is_final());
        assert_eq!(state.result(), Some(&5));

        state.set_value(None);
        assert!(state.is_final());
        assert_eq!(state.result(), None);
    }

    #[test]
    fn set_result_forces_finality() {
        let mut state = State::new("S0");
        state.set_result(4);
        assert!(state.is_final());
        assert_eq!(state.value(), Some(&4));
        assert_eq!(state.result(), Some(&4));
    }

    #[test]
    fn clearing_finality_hides_result() {
        let mut state = State::final_state("S0", 1);
        state.set_finality(false);
        assert_eq!(state.value(), Some(&1));
        assert_eq!(state.result(), None);
    }

    #[test]
    fn unnamed_state_has_no_name() {
        let state: State<()> = State::unnamed();
        assert_eq!(state.name(), None);
        assert_eq!(state.to_string(), "<null>");
    }

    #[test]
    fn null_handle_is_index_zero() {
        assert!(StateId::NULL.is_null());
        assert_eq!(StateId::NULL.index(), 0);
        assert!(!StateId::new(1, 3).is_null());
        assert_eq!(StateId::new(1, 3).to_string(), "#3");
        assert_eq!(StateId::new(1, 3).owner(), 1);
        assert_ne!(StateId::new(1, 3), StateId::new(2, 3));
    }
}
