use anyhow::Result;
use clap::{Parser, Subcommand};
use lptrace::{solve, Constraint, Objective, Problem};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "2D linear program solver with a step-traced simplex output")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve a problem given as contract JSON and emit the solution as JSON
    Solve {
        /// Input problem file; stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
        /// Output file; stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Solve a built-in sample problem and print the solution
    Demo,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve { input, out } => run_solve(input, out),
        Action::Demo => run_demo(),
    }
}

fn run_solve(input: Option<PathBuf>, out: Option<PathBuf>) -> Result<()> {
    let problem = match &input {
        Some(path) => io::read_problem(path)?,
        None => io::parse_problem(&std::io::read_to_string(std::io::stdin())?)?,
    };
    tracing::info!(
        constraints = problem.constraints.len(),
        has_objective = problem.objective.is_some(),
        "solve"
    );
    let solution = solve(&problem)?;
    match &out {
        Some(path) => io::write_solution(path, &solution)?,
        None => println!("{}", io::render_solution(&solution)?),
    }
    Ok(())
}

fn run_demo() -> Result<()> {
    let problem = demo_problem();
    let solution = solve(&problem)?;
    println!("{}", io::render_solution(&solution)?);
    Ok(())
}

/// The classic classroom instance: maximize x + y over a bounded polygon in
/// the first quadrant.
fn demo_problem() -> Problem {
    Problem {
        constraints: vec![
            Constraint::new(1.0, 1.0, 5.0),
            Constraint::new(-1.0, 2.0, 5.0),
            Constraint::new(-1.0, 0.0, 0.0),
            Constraint::new(0.0, -1.0, 0.0),
        ],
        objective: Some(Objective {
            a: 1.0,
            b: 1.0,
            maximize: true,
        }),
    }
}
