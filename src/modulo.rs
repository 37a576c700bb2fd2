//! Remainder machines.
//!
//! Builds the automaton that reads a number written in some base, one digit
//! at a time, and halts in the state holding the number's remainder modulo
//! a fixed divisor. Appending digit `d` to a number with remainder `m`
//! yields remainder `(m * base + d) mod modulo`, which is all the
//! transition table needs to encode.

use crate::automaton::{Automaton, AutomatonError};

/// Digits in order of value, lowercase beyond 9.
pub static DIGITS: [char; 36] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i',
    'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = 36;
pub const MIN_MODULO: usize = 2;

/// The digits of `base`, or `None` when the base is out of range.
pub fn digits(base: u32) -> Option<&'static [char]> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        DIGITS.get(..base as usize)
    } else {
        None
    }
}

/// Render `n` in `base` with the same digits the remainder machine reads.
///
/// Returns `None` when the base is out of range.
pub fn to_radix(mut n: u64, base: u32) -> Option<String> {
    let digits = digits(base)?;
    let base = u64::from(base);
    let mut rendered = Vec::new();
    loop {
        rendered.push(digits[(n % base) as usize]);
        n /= base;
        if n == 0 {
            break;
        }
    }
    Some(rendered.iter().rev().collect())
}

/// Build the machine computing remainders modulo `modulo` of numbers
/// written in `base`.
///
/// State `S{i}` is final with value `i`; `S0` is initial. Returns `None`
/// when `base` is outside `2..=36` or `modulo` is below 2, never a partially
/// wired machine.
///
/// # Example
///
/// ```rust
/// use finite_automaton::modulo::remainder_machine;
///
/// let machine = remainder_machine(2, 3).unwrap();
/// assert_eq!(machine.run_result("1101").unwrap(), Some(&1));
///
/// assert!(remainder_machine(1, 3).is_none());
/// assert!(remainder_machine(10, 1).is_none());
/// ```
pub fn remainder_machine(base: u32, modulo: usize) -> Option<Automaton<usize>> {
    let Some(digits) = digits(base) else {
        tracing::warn!("refusing remainder machine: base {} outside 2..=36", base);
        return None;
    };
    if modulo < MIN_MODULO {
        tracing::warn!("refusing remainder machine: modulo {} below 2", modulo);
        return None;
    }

    match wire(digits, modulo) {
        Ok(machine) => Some(machine),
        Err(e) => {
            tracing::warn!(
                "refusing remainder machine for base {} modulo {}: {}",
                base,
                modulo,
                e
            );
            None
        }
    }
}

fn wire(digits: &[char], modulo: usize) -> Result<Automaton<usize>, AutomatonError> {
    let base = digits.len();
    let mut machine = Automaton::new(digits.iter().copied());

    let states = (0..modulo)
        .map(|i| machine.new_final_state(format!("S{i}"), i))
        .collect::<Result<Vec<_>, _>>()?;

    for (m, &from) in states.iter().enumerate() {
        for (d, &digit) in digits.iter().enumerate() {
            machine.set_transition(from, digit, states[(m * base + d) % modulo])?;
        }
    }
    machine.set_init_state(states[0])?;

    tracing::debug!(
        "built remainder machine: base {} modulo {} ({} states)",
        base,
        modulo,
        machine.state_count()
    );
    Ok(machine)
}
