//! Solving Linear Systems Step by Step
//!
//! This example runs the three kinds of system through echelon: one with a
//! unique solution, one with none, and one with infinitely many. Each trace is
//! printed in the mode given on the command line.
//!
//! Run with:
//! ```sh
//! cargo run --example solve_systems -- plain
//! RUST_LOG=echelon=debug cargo run --example solve_systems -- latex
//! ```

use echelon::prelude::*;
use echelon::present::{PresentMode, PresentOptions, render};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const SYSTEMS: &[(&str, &str)] = &[
    ("Has solution", "5,-3,2,1\n-1,3,0,-1\n3,2,2,0\n2,0,3,8"),
    ("Has solution, needs a swap", "2,1,-3,-5\n1,0.5,2,4.5\n7,-2,3,37"),
    ("No solution", "2,-3,-1,3\n0,4,-3,-1\n-3,1,2,-1\n1,-4,-5,-1"),
    ("Infinite solutions", "1,1,-1,1\n3,-1,5,3\n7,2,3,7"),
];

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let mode: PresentMode = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => PresentMode::Plain,
    };
    let options = PresentOptions::new(mode);

    for (title, input) in SYSTEMS {
        // -----------------------------------------------------------------------
        // Parse, solve, render
        // -----------------------------------------------------------------------
        let matrix = parse_system(input)?;
        let solution = solve(matrix);

        println!("=== {title} ({}) ===\n", solution.classification);
        println!("{}\n", render(&solution, &options));
    }

    Ok(())
}
