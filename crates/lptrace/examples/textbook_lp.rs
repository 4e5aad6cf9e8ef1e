//! Trace the simplex steps of a small classroom instance.
//!
//! Usage:
//!   cargo run -p lptrace --example textbook_lp
//!
//! Maximizes x + y over { x+y<=5, -x+2y<=5, x>=0, y>=0 } and prints every
//! recorded tableau snapshot with its basis and basic solution.

use lptrace::prelude::*;

fn main() {
    let constraints = vec![
        Constraint::new(1.0, 1.0, 5.0),
        Constraint::new(-1.0, 2.0, 5.0),
        Constraint::new(-1.0, 0.0, 0.0),
        Constraint::new(0.0, -1.0, 0.0),
    ];
    let objective = Objective {
        a: 1.0,
        b: 1.0,
        maximize: true,
    };

    let trace = solve_simplex(&constraints, &objective, LpCfg::default());
    for (k, step) in trace.steps.iter().enumerate() {
        println!("step {k}: basis {:?}", step.basis);
        for row in step.tableau.row_iter() {
            let cells: Vec<String> = row.iter().map(|v| format!("{v:7.3}")).collect();
            println!("  [{}]", cells.join(" "));
        }
        println!(
            "  solution: ({:.3}, {:.3})",
            step.solution.x, step.solution.y
        );
    }
    println!("status: {:?}", trace.status);
    println!(
        "objective at final solution: {:.3}",
        objective.eval(trace.final_solution())
    );
}
