//! Engine boundary: validated input, branch orchestration, output contract.
//!
//! `solve` runs the geometry branch (vertex enumeration + polygon ordering)
//! unconditionally and the optimization branch only when an objective is
//! present, then packages both into `Solution`. Non-finite input is the only
//! condition that aborts a call; every LP outcome is a status value so the
//! rendering side can react to it.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::simplex::{solve_simplex, SimplexStatus, Step};
use super::types::{Constraint, LpCfg, Objective};
use super::vertices::{feasible_vertices, sort_counterclockwise};

/// Boundary rejections. No partial output is produced on error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("constraint {index} has a non-finite coefficient")]
    NonFiniteConstraint { index: usize },
    #[error("objective has a non-finite coefficient")]
    NonFiniteObjective,
}

/// Input contract: ordered constraints and an optional objective. Constraint
/// order matters for slack-variable indexing in the trace.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub constraints: Vec<Constraint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objective: Option<Objective>,
}

/// A vertex or basic solution in the output contract.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl From<Vector2<f64>> for Point {
    fn from(v: Vector2<f64>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// One simplex snapshot in the output contract: tableau rows, basis column
/// indices, and the basic solution.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepReport {
    pub tableau: Vec<Vec<f64>>,
    pub basis: Vec<usize>,
    pub solution: Point,
}

impl From<&Step> for StepReport {
    fn from(step: &Step) -> Self {
        let tableau = step
            .tableau
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect();
        Self {
            tableau,
            basis: step.basis.clone(),
            solution: step.solution.into(),
        }
    }
}

/// Output contract. Optimization fields are present iff an objective was
/// supplied; `optimal_value` additionally requires an `Optimal` status.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub vertices: Vec<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<StepReport>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<SimplexStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimal_value: Option<f64>,
}

/// Run both branches with default tolerances.
pub fn solve(problem: &Problem) -> Result<Solution, EngineError> {
    solve_with(problem, LpCfg::default())
}

/// Run the geometry branch, then the optimization branch when an objective
/// is present, and package both into the output contract.
pub fn solve_with(problem: &Problem, cfg: LpCfg) -> Result<Solution, EngineError> {
    validate(problem)?;

    let verts = sort_counterclockwise(feasible_vertices(&problem.constraints, cfg));
    let mut solution = Solution {
        vertices: verts.into_iter().map(Point::from).collect(),
        steps: None,
        status: None,
        optimal_value: None,
    };

    if let Some(objective) = &problem.objective {
        let trace = solve_simplex(&problem.constraints, objective, cfg);
        if trace.status == SimplexStatus::Optimal {
            solution.optimal_value = Some(objective.eval(trace.final_solution()));
        }
        solution.steps = Some(trace.steps.iter().map(StepReport::from).collect());
        solution.status = Some(trace.status);
    }
    Ok(solution)
}

fn validate(problem: &Problem) -> Result<(), EngineError> {
    for (index, con) in problem.constraints.iter().enumerate() {
        if !con.is_finite() {
            return Err(EngineError::NonFiniteConstraint { index });
        }
    }
    if let Some(objective) = &problem.objective {
        if !objective.is_finite() {
            return Err(EngineError::NonFiniteObjective);
        }
    }
    Ok(())
}
