//! Two-variable linear programs: feasible-region geometry and traced simplex.
//!
//! Purpose
//! - Enumerate feasible-region vertices by pairwise boundary intersection and
//!   order them into a simple polygon for rendering.
//! - Solve the program with a slack-variable tableau simplex that snapshots
//!   every pivot, so the whole optimization path can be shown.
//!
//! Why this split
//! - The geometry branch and the optimization branch are independent: an
//!   empty feasible polygon does not block a simplex status report, and a
//!   missing objective skips the solver entirely.
//! - Both branches share one tolerance config (`LpCfg`) so zero tests agree
//!   across intersection, feasibility, and pivot selection.
//!
//! Code cross-refs: `types::{Constraint, Objective, LpCfg}`,
//! `vertices::{feasible_vertices, sort_counterclockwise}`,
//! `simplex::{solve_simplex, SimplexTrace}`, `engine::{solve, Solution}`.

mod engine;
pub mod rand;
mod simplex;
mod types;
mod vertices;

pub use engine::{solve, solve_with, EngineError, Point, Problem, Solution, StepReport};
pub use simplex::{solve_simplex, SimplexStatus, SimplexTrace, Step, N_VARS};
pub use types::{Constraint, LpCfg, Objective};
pub use vertices::{feasible_vertices, sort_counterclockwise};
