//! Basic LP types and tolerances.
//!
//! - `LpCfg`: centralizes epsilons for zero tests, vertex dedup, and the pivot cap.
//! - `Constraint`: closed half-plane `a·x + b·y <= c` with helper predicates.
//! - `Objective`: linear functional `a·x + b·y` with optimization direction.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Engine configuration (tolerances and pivot cap).
#[derive(Clone, Copy, Debug)]
pub struct LpCfg {
    /// Zero-comparison tolerance used throughout: parallel-pair determinants,
    /// feasibility slack, and entering/leaving pivot selection.
    pub eps_zero: f64,
    /// Euclidean distance under which two candidate vertices coalesce.
    pub eps_vertex: f64,
    /// The pivot loop caps at `iter_factor * max(m, 1)`; exceeding the cap
    /// reports `Cycling` instead of spinning on degenerate ties.
    pub iter_factor: usize,
}

impl Default for LpCfg {
    fn default() -> Self {
        Self {
            eps_zero: 1e-9,
            eps_vertex: 1e-6,
            iter_factor: 10,
        }
    }
}

/// Closed half-plane `a·x + b·y <= c`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Constraint {
    #[inline]
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Left-hand side `a·x + b·y` at `p`.
    #[inline]
    pub fn eval(&self, p: Vector2<f64>) -> f64 {
        self.a * p.x + self.b * p.y
    }

    /// Membership with slack: `a·x + b·y <= c + eps`, so boundary points
    /// survive floating round-off.
    #[inline]
    pub fn satisfies_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        self.eval(p) <= self.c + eps
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite()
    }
}

/// Linear objective `a·x + b·y`, maximized or minimized.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Objective {
    pub a: f64,
    pub b: f64,
    pub maximize: bool,
}

impl Objective {
    #[inline]
    pub fn eval(&self, p: Vector2<f64>) -> f64 {
        self.a * p.x + self.b * p.y
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite()
    }
}
