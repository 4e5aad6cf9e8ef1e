//! Step-traced linear programming in the plane.
//!
//! The engine takes half-plane constraints `a·x + b·y <= c` and an optional
//! linear objective, enumerates the vertices of the feasible region, orders
//! them into a drawable boundary, and runs a tableau simplex that records
//! every intermediate tableau, basis, and basic solution. The full trace is
//! the product: callers render it step by step rather than consuming only
//! the final optimum.
//!
//! All computation is synchronous and deterministic; the only inputs are the
//! constraint list and objective, and the only failure mode that aborts a
//! call is non-finite input. Unbounded and degenerate outcomes are status
//! values, not errors.

pub mod lp2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use lp2::{
    solve, solve_with, Constraint, EngineError, LpCfg, Objective, Point, Problem, SimplexStatus,
    Solution,
};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::lp2::rand::{draw_instance, InstanceCfg, ReplayToken};
    pub use crate::lp2::{
        feasible_vertices, solve, solve_simplex, solve_with, sort_counterclockwise, Constraint,
        EngineError, LpCfg, Objective, Point, Problem, SimplexStatus, SimplexTrace, Solution, Step,
        StepReport,
    };
    pub use nalgebra::Vector2 as Vec2;
}
