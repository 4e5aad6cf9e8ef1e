//! Feasible-region vertices via pairwise boundary intersection.
//!
//! Every unordered pair of constraint boundaries is solved as a 2×2 system by
//! Cramer's rule; candidates that satisfy all constraints (with slack) are
//! kept and near-coincident points coalesce. O(m³) over the constraint count,
//! which is fine at the tens-of-constraints scale this engine targets.
//!
//! Known limitation: an unbounded region only contributes its pairwise line
//! intersections; boundary rays have no finite representative here. Callers
//! must not assume the returned polygon encloses the region.

use nalgebra::Vector2;

use super::types::{Constraint, LpCfg};

/// Intersection of two boundary lines `a·x + b·y = c`, `None` when the
/// determinant is within `eps` of zero (parallel or identical lines).
fn line_intersection(ci: &Constraint, cj: &Constraint, eps: f64) -> Option<Vector2<f64>> {
    let det = ci.a * cj.b - cj.a * ci.b;
    if det.abs() < eps {
        return None;
    }
    let x = (cj.b * ci.c - ci.b * cj.c) / det;
    let y = (ci.a * cj.c - cj.a * ci.c) / det;
    Some(Vector2::new(x, y))
}

/// Candidate vertices of the feasible region: all pairwise boundary
/// intersections satisfying every constraint within `cfg.eps_zero`,
/// deduplicated within `cfg.eps_vertex` (earliest generated survives).
pub fn feasible_vertices(constraints: &[Constraint], cfg: LpCfg) -> Vec<Vector2<f64>> {
    let m = constraints.len();
    let mut pts: Vec<Vector2<f64>> = Vec::new();
    for i in 0..m {
        for j in (i + 1)..m {
            if let Some(p) = line_intersection(&constraints[i], &constraints[j], cfg.eps_zero) {
                pts.push(p);
            }
        }
    }
    pts.retain(|p| constraints.iter().all(|c| c.satisfies_eps(*p, cfg.eps_zero)));
    let mut kept: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for p in pts {
        if !kept.iter().any(|q| (p - *q).norm() < cfg.eps_vertex) {
            kept.push(p);
        }
    }
    kept
}

/// Order vertices counterclockwise around their centroid.
///
/// The intersection of half-planes is convex, so the angular sweep around an
/// interior point yields a simple, non-self-intersecting boundary traversal.
/// Empty input stays empty.
pub fn sort_counterclockwise(mut pts: Vec<Vector2<f64>>) -> Vec<Vector2<f64>> {
    if pts.is_empty() {
        return pts;
    }
    let n = pts.len() as f64;
    let centroid = pts.iter().fold(Vector2::zeros(), |acc, p| acc + p) / n;
    pts.sort_by(|p, q| {
        let ap = (p.y - centroid.y).atan2(p.x - centroid.x);
        let aq = (q.y - centroid.y).atan2(q.x - centroid.x);
        ap.partial_cmp(&aq).unwrap_or(std::cmp::Ordering::Equal)
    });
    pts
}
