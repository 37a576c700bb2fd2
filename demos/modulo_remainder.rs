//! Remainder Machine
//!
//! Builds the automaton computing `n mod MODULO` for numbers written in
//! base BASE, then checks it against plain arithmetic for every number up
//! to an upper bound.
//!
//! Run with: cargo run --example modulo_remainder -- --base 2 --modulo 3

use clap::Parser;
use finite_automaton::modulo::{remainder_machine, to_radix};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Check a remainder automaton against arithmetic
#[derive(Parser, Debug)]
#[command(name = "modulo_remainder")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Base the numbers are written in (2..=36)
    #[arg(short, long, env = "FSM_BASE", default_value_t = 2)]
    base: u32,

    /// Divisor whose remainder the machine computes (at least 2)
    #[arg(short, long, env = "FSM_MODULO", default_value_t = 3)]
    modulo: usize,

    /// Largest number to check
    #[arg(short, long, env = "FSM_UPPER_BOUND", default_value_t = 50)]
    upper_bound: u64,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    println!("=== Remainder Machine: base {} modulo {} ===\n", cli.base, cli.modulo);

    let Some(machine) = remainder_machine(cli.base, cli.modulo) else {
        eprintln!("Cannot build a machine for base {} and modulo {}", cli.base, cli.modulo);
        return ExitCode::FAILURE;
    };
    println!("Alphabet: {}", machine.alphabet());
    println!("States: {}", machine.state_count());
    println!("Checking every number from 0 to {}...", cli.upper_bound);

    let mut failures = 0usize;
    for n in 0..=cli.upper_bound {
        let Some(input) = to_radix(n, cli.base) else {
            return ExitCode::FAILURE;
        };
        let expected = (n % cli.modulo as u64) as usize;

        match machine.run_result(&input) {
            Ok(Some(&value)) if value == expected => {}
            Ok(Some(value)) => {
                println!("  - {n} (\"{input}\") produced {value}, expected {expected}");
                failures += 1;
            }
            Ok(None) => {
                println!("  - {n} (\"{input}\") produced nothing");
                failures += 1;
            }
            Err(e) => {
                tracing::error!("run failed on \"{}\": {}", input, e);
                failures += 1;
            }
        }
    }

    println!("\nFailed in {failures} cases.");
    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
