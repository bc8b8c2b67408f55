//! Satisfiability and consequence checks over a few classic formulas.
//!
//! Run with: `cargo run --example logic`

use powerset_rs::formula::Formula;
use powerset_rs::sat::{countermodels, equivalent, is_valid, logical_consequence, model_count, satisfiable};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let a = Formula::atom("A");
    let b = Formula::atom("B");
    let c = Formula::atom("C");

    let formulas = [
        Formula::and(a.clone(), b.clone()),
        Formula::and(a.clone(), Formula::not(a.clone())),
        Formula::or(a.clone(), Formula::not(a.clone())),
        Formula::iff(a.clone(), Formula::or(b.clone(), c.clone())),
    ];

    for f in &formulas {
        println!("f = {}", f);
        match satisfiable(f) {
            Some(model) => println!("  satisfiable, e.g. {}", model),
            None => println!("  unsatisfiable"),
        }
        println!("  valid: {}", is_valid(f));
        println!("  models: {}", model_count(f));
    }

    let premises = Formula::and(Formula::implies(a.clone(), b.clone()), Formula::implies(b.clone(), c.clone()));
    let goal = Formula::implies(a.clone(), c.clone());
    println!("{} |= {}: {}", premises, goal, logical_consequence(&premises, &goal));

    let weak = Formula::or(a.clone(), b.clone());
    println!("{} |= {}: {}", weak, a, logical_consequence(&weak, &a));
    for v in countermodels(&weak, &a) {
        println!("  countermodel: {}", v);
    }

    let lhs = Formula::not(Formula::or(a.clone(), b.clone()));
    let rhs = Formula::and(Formula::not(a), Formula::not(b));
    println!("{} == {}: {}", lhs, rhs, equivalent(&lhs, &rhs));

    Ok(())
}
