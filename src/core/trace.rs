//! Run traces.
//!
//! Records the path an automaton takes while consuming an input, step by
//! step, without interpreting it.

use super::state::StateId;

/// Record of a single consumed symbol.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Step {
    /// The state the symbol was consumed from
    pub from: StateId,
    /// The consumed symbol
    pub symbol: char,
    /// The state reached
    pub to: StateId,
}

/// Ordered steps of one run.
///
/// A trace starts at the initial state. When the run reaches the null state
/// it stops recording, since the null state cannot be left; the remaining
/// input is counted in [`skipped`](RunTrace::skipped).
///
/// # Example
///
/// ```rust
/// use finite_automaton::{Automaton, StateId};
///
/// let mut machine: Automaton<u8> = Automaton::new("ab".chars());
/// let a = machine.new_final_state("A", 1).unwrap();
/// machine.set_transition(a, 'a', a).unwrap();
/// machine.set_init_state(a).unwrap();
///
/// let trace = machine.trace("aab").unwrap();
/// assert_eq!(trace.path(), vec![a, a, a, StateId::NULL]);
/// assert_eq!(trace.terminal(), StateId::NULL);
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RunTrace {
    initial: StateId,
    steps: Vec<Step>,
    skipped: usize,
}

impl RunTrace {
    pub(crate) fn new(initial: StateId) -> Self {
        Self {
            initial,
            steps: Vec::new(),
            skipped: 0,
        }
    }

    pub(crate) fn record(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub(crate) fn skip(&mut self, count: usize) {
        self.skipped += count;
    }

    /// The state the run started from.
    pub fn initial(&self) -> StateId {
        self.initial
    }

    /// The state the run halted in.
    pub fn terminal(&self) -> StateId {
        self.steps.last().map_or(self.initial, |step| step.to)
    }

    /// Recorded steps in input order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of trailing symbols consumed without a lookup because the run
    /// was already stuck in the null state.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// States visited in order: the initial state, then the target of each
    /// step.
    pub fn path(&self) -> Vec<StateId> {
        let mut path = Vec::with_capacity(self.steps.len() + 1);
        path.push(self.initial);
        path.extend(self.steps.iter().map(|step| step.to));
        path
    }
}
