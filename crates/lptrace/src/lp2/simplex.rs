//! Slack-variable tableau simplex with a full per-pivot trace.
//!
//! The tableau is `(m+1) × (n+m+1)` for `m` constraints and `n = 2` decision
//! variables: columns `0..n` are decision variables, `n..n+m` the slacks (one
//! per constraint, identity-initialized), and the last column the RHS. Row `m`
//! is the objective row, negated when maximizing so a uniform improve-while-
//! negative rule applies.
//!
//! Every snapshot owns its tableau and basis; later pivots never touch a
//! recorded step. The trace accumulator is built inside the solver and
//! returned by value.
//!
//! The initial slack basis is feasible only when every RHS is nonnegative.
//! Negative RHS inputs run through the same pivot rules but start from an
//! infeasible basis; there is no Big-M or two-phase recovery.

use nalgebra::{DMatrix, Vector2};
use serde::{Deserialize, Serialize};

use super::types::{Constraint, LpCfg, Objective};

/// Number of decision variables. The whole engine is fixed to the plane.
pub const N_VARS: usize = 2;

/// Terminal solver outcomes. `Cycling` means the pivot cap was exceeded,
/// which indicates degenerate tie-breaking rather than a genuinely
/// unbounded objective; the two must not be conflated downstream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimplexStatus {
    Optimal,
    Unbounded,
    Cycling,
}

/// One recorded snapshot: tableau, basis, and the implied basic solution.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub tableau: DMatrix<f64>,
    pub basis: Vec<usize>,
    pub solution: Vector2<f64>,
}

/// Ordered pivot trace. `steps[0]` is the slack basis before any pivot, and
/// one more step follows every pivot, so the trace is never empty.
#[derive(Clone, Debug)]
pub struct SimplexTrace {
    pub steps: Vec<Step>,
    pub status: SimplexStatus,
}

impl SimplexTrace {
    /// Basic solution of the last recorded step.
    #[inline]
    pub fn final_solution(&self) -> Vector2<f64> {
        self.steps
            .last()
            .map(|s| s.solution)
            .unwrap_or_else(Vector2::zeros)
    }
}

/// Run the primal simplex on `constraints` against `objective`, recording a
/// snapshot before the first pivot and after every subsequent one.
pub fn solve_simplex(
    constraints: &[Constraint],
    objective: &Objective,
    cfg: LpCfg,
) -> SimplexTrace {
    let m = constraints.len();
    let cols = N_VARS + m + 1;
    let mut tableau = DMatrix::zeros(m + 1, cols);
    for (i, con) in constraints.iter().enumerate() {
        tableau[(i, 0)] = con.a;
        tableau[(i, 1)] = con.b;
        tableau[(i, N_VARS + i)] = 1.0;
        tableau[(i, cols - 1)] = con.c;
    }
    let sign = if objective.maximize { -1.0 } else { 1.0 };
    tableau[(m, 0)] = sign * objective.a;
    tableau[(m, 1)] = sign * objective.b;

    let mut basis: Vec<usize> = (0..m).map(|i| N_VARS + i).collect();
    let max_pivots = cfg.iter_factor * m.max(1);
    let mut steps = Vec::with_capacity(max_pivots + 1);
    steps.push(snapshot(&tableau, &basis));

    let mut pivots = 0usize;
    let status = loop {
        let enter = match entering_column(&tableau, objective.maximize, cfg.eps_zero) {
            Some(j) => j,
            None => break SimplexStatus::Optimal,
        };
        let leave = match leaving_row(&tableau, enter, cfg.eps_zero) {
            Some(i) => i,
            None => break SimplexStatus::Unbounded,
        };
        if pivots >= max_pivots {
            break SimplexStatus::Cycling;
        }
        pivot(&mut tableau, leave, enter);
        basis[leave] = enter;
        steps.push(snapshot(&tableau, &basis));
        pivots += 1;
    };

    SimplexTrace { steps, status }
}

/// Most improving objective-row entry strictly beyond the zero tolerance:
/// most negative when maximizing, most positive when minimizing. Ties resolve
/// to the lowest column index. `None` means no column can still improve.
fn entering_column(tableau: &DMatrix<f64>, maximize: bool, eps: f64) -> Option<usize> {
    let obj_row = tableau.nrows() - 1;
    let mut best: Option<(usize, f64)> = None;
    for j in 0..tableau.ncols() - 1 {
        let v = tableau[(obj_row, j)];
        let improves = if maximize { v < -eps } else { v > eps };
        if !improves {
            continue;
        }
        let better = match best {
            Some((_, bv)) => {
                if maximize {
                    v < bv
                } else {
                    v > bv
                }
            }
            None => true,
        };
        if better {
            best = Some((j, v));
        }
    }
    best.map(|(j, _)| j)
}

/// Ratio test: among rows whose entering-column entry exceeds `eps`, the row
/// minimizing `rhs / entry`; ties resolve to the lowest row index. `None`
/// means the entering column is unbounded.
fn leaving_row(tableau: &DMatrix<f64>, enter: usize, eps: f64) -> Option<usize> {
    let rhs = tableau.ncols() - 1;
    let mut best: Option<(usize, f64)> = None;
    for i in 0..tableau.nrows() - 1 {
        let entry = tableau[(i, enter)];
        if entry <= eps {
            continue;
        }
        let ratio = tableau[(i, rhs)] / entry;
        let better = match best {
            Some((_, br)) => ratio < br,
            None => true,
        };
        if better {
            best = Some((i, ratio));
        }
    }
    best.map(|(i, _)| i)
}

/// Gauss-Jordan pivot at `(leave, enter)`: normalize the leaving row to 1 at
/// the pivot position, then zero the entering column everywhere else,
/// objective row included.
fn pivot(tableau: &mut DMatrix<f64>, leave: usize, enter: usize) {
    let cols = tableau.ncols();
    let pivot_val = tableau[(leave, enter)];
    for j in 0..cols {
        tableau[(leave, j)] /= pivot_val;
    }
    for i in 0..tableau.nrows() {
        if i == leave {
            continue;
        }
        let factor = tableau[(i, enter)];
        if factor == 0.0 {
            continue;
        }
        for j in 0..cols {
            tableau[(i, j)] -= factor * tableau[(leave, j)];
        }
    }
}

/// Basic solution implied by the current basis: a decision variable takes its
/// row's RHS when basic, and zero otherwise.
fn basic_solution(tableau: &DMatrix<f64>, basis: &[usize]) -> Vector2<f64> {
    let rhs = tableau.ncols() - 1;
    let mut sol = Vector2::zeros();
    for (i, &var) in basis.iter().enumerate() {
        if var == 0 {
            sol.x = tableau[(i, rhs)];
        }
        if var == 1 {
            sol.y = tableau[(i, rhs)];
        }
    }
    sol
}

fn snapshot(tableau: &DMatrix<f64>, basis: &[usize]) -> Step {
    Step {
        tableau: tableau.clone(),
        basis: basis.to_vec(),
        solution: basic_solution(tableau, basis),
    }
}
