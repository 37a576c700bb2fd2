//! Property-based tests for the automaton engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated machines and inputs.

use finite_automaton::modulo::{remainder_machine, to_radix};
use finite_automaton::{Automaton, AutomatonError, StateId};
use proptest::prelude::*;

const ALPHABET: [char; 3] = ['a', 'b', 'c'];

prop_compose! {
    fn arbitrary_symbol()(index in 0..ALPHABET.len()) -> char {
        ALPHABET[index]
    }
}

prop_compose! {
    fn arbitrary_input()(symbols in prop::collection::vec(arbitrary_symbol(), 0..20)) -> String {
        symbols.into_iter().collect()
    }
}

prop_compose! {
    /// Wiring of a random machine: (from, symbol, to) over `state_count`
    /// states, where index `state_count` stands for the null state.
    fn arbitrary_wiring(state_count: usize)(
        wiring in prop::collection::vec(
            (0..state_count, arbitrary_symbol(), 0..=state_count),
            0..30,
        )
    ) -> Vec<(usize, char, usize)> {
        wiring
    }
}

fn build(state_count: usize, wiring: &[(usize, char, usize)]) -> (Automaton<usize>, Vec<StateId>) {
    let mut machine = Automaton::new(ALPHABET);
    let states: Vec<StateId> = (0..state_count)
        .map(|i| machine.new_final_state(format!("S{i}"), i).unwrap())
        .collect();

    let resolve = |i: usize| states.get(i).copied().unwrap_or(StateId::NULL);
    for &(from, symbol, to) in wiring {
        machine.set_transition(resolve(from), symbol, resolve(to)).unwrap();
    }
    machine.set_init_state(states[0]).unwrap();
    (machine, states)
}

proptest! {
    #[test]
    fn transition_is_total(wiring in arbitrary_wiring(4)) {
        let (machine, _) = build(4, &wiring);
        for state in machine.all_states() {
            for symbol in ALPHABET {
                let next = machine.transition(state, symbol);
                prop_assert!(next.is_ok());
                prop_assert!(machine.contains_state(next.unwrap()));
            }
        }
    }

    #[test]
    fn null_state_cannot_be_rewired(
        wiring in arbitrary_wiring(3),
        symbol in arbitrary_symbol(),
        target in 0..=3usize,
    ) {
        let (mut machine, states) = build(3, &wiring);
        let target = states.get(target).copied().unwrap_or(StateId::NULL);

        let result = machine.set_transition(StateId::NULL, symbol, target);
        prop_assert!(
            matches!(result, Err(AutomatonError::NullStateViolation { .. })),
            "unexpected result: {:?}",
            result
        );
        prop_assert_eq!(machine.transition(StateId::NULL, symbol), Ok(StateId::NULL));
    }

    #[test]
    fn last_write_wins(
        wiring in arbitrary_wiring(3),
        from in 0..3usize,
        symbol in arbitrary_symbol(),
        to in 0..3usize,
    ) {
        let (mut machine, states) = build(3, &wiring);
        machine.set_transition(states[from], symbol, states[to]).unwrap();
        prop_assert_eq!(machine.transition(states[from], symbol), Ok(states[to]));
    }

    #[test]
    fn replacement_invalidates_previous_handle(
        wiring in arbitrary_wiring(3),
        replaced in 0..3usize,
        symbol in arbitrary_symbol(),
    ) {
        let (mut machine, states) = build(3, &wiring);
        let name = format!("S{replaced}");
        let fresh = machine.new_state(name.as_str()).unwrap();

        prop_assert_eq!(machine.state_by_name(&name), Some(fresh));
        prop_assert_eq!(
            machine.transition(states[replaced], symbol),
            Err(AutomatonError::InvalidState { state: states[replaced] })
        );
        prop_assert_eq!(machine.transition(fresh, symbol), Ok(StateId::NULL));
    }

    #[test]
    fn empty_input_returns_initial_state(wiring in arbitrary_wiring(4)) {
        let (machine, states) = build(4, &wiring);
        prop_assert_eq!(machine.run(""), Ok(states[0]));
    }

    #[test]
    fn run_agrees_with_stepwise_transitions(
        wiring in arbitrary_wiring(4),
        input in arbitrary_input(),
    ) {
        let (machine, states) = build(4, &wiring);
        let mut expected = states[0];
        for symbol in input.chars() {
            expected = machine.transition(expected, symbol).unwrap();
        }
        prop_assert_eq!(machine.run(&input), Ok(expected));
        prop_assert_eq!(machine.trace(&input).unwrap().terminal(), expected);
    }

    #[test]
    fn foreign_symbol_fails_regardless_of_position(
        wiring in arbitrary_wiring(3),
        prefix in arbitrary_input(),
        suffix in arbitrary_input(),
    ) {
        let (machine, _) = build(3, &wiring);
        let input = format!("{prefix}z{suffix}");
        prop_assert_eq!(
            machine.run(&input),
            Err(AutomatonError::InvalidSymbol { symbol: 'z' })
        );
        prop_assert!(machine.trace(&input).is_err());
    }

    #[test]
    fn readiness_gates_run(input in arbitrary_input()) {
        let mut machine: Automaton<usize> = Automaton::new(ALPHABET);
        let a = machine.new_state("A").unwrap();
        prop_assert_eq!(machine.run(&input), Err(AutomatonError::NotReady));

        machine.set_init_state(a).unwrap();
        prop_assert!(machine.is_ready());
        prop_assert!(machine.run(&input).is_ok());

        machine.new_state("B").unwrap();
        machine.set_transition(a, 'a', a).unwrap();
        prop_assert!(machine.is_ready());
    }

    #[test]
    fn remainder_machine_computes_remainders(
        base in 2u32..=36,
        modulo in 2usize..60,
        n in 0u64..1_000_000,
    ) {
        let machine = remainder_machine(base, modulo).unwrap();
        let input = to_radix(n, base).unwrap();
        let expected = (n % modulo as u64) as usize;
        prop_assert_eq!(machine.run_result(&input), Ok(Some(&expected)));
    }

    #[test]
    fn remainder_machine_refuses_bad_parameters(
        base in prop_oneof![0u32..2, 37u32..1000],
        modulo in 0usize..100,
    ) {
        prop_assert!(remainder_machine(base, modulo).is_none());
        prop_assert!(remainder_machine(10, modulo % 2).is_none());
    }
}
