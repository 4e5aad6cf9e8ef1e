//! Random LP instances (replay tokens) for property tests and benches.
//!
//! Model
//! - Half-plane normals are unit vectors at uniform random angles; offsets
//!   stay positive, so the origin is strictly feasible and every RHS is
//!   nonnegative (the slack basis starts feasible).
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{Constraint, Objective};

/// Instance sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct InstanceCfg {
    /// Number of sampled half-planes (axis constraints come on top).
    pub constraint_count: usize,
    /// Offset range for sampled half-planes; the minimum stays positive.
    pub offset_min: f64,
    pub offset_max: f64,
    /// Append `-x <= 0` and `-y <= 0`.
    pub with_axes: bool,
}

impl Default for InstanceCfg {
    fn default() -> Self {
        Self {
            constraint_count: 8,
            offset_min: 0.5,
            offset_max: 5.0,
            with_axes: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random instance: sampled half-planes plus an objective.
pub fn draw_instance(cfg: InstanceCfg, tok: ReplayToken) -> (Vec<Constraint>, Objective) {
    let mut rng = tok.to_std_rng();
    let lo = cfg.offset_min.max(1e-9);
    let hi = cfg.offset_max.max(lo + 1e-9);
    let mut constraints = Vec::with_capacity(cfg.constraint_count + 2);
    for _ in 0..cfg.constraint_count {
        let theta: f64 = rng.gen::<f64>() * std::f64::consts::TAU;
        let c = rng.gen_range(lo..hi);
        constraints.push(Constraint::new(theta.cos(), theta.sin(), c));
    }
    if cfg.with_axes {
        constraints.push(Constraint::new(-1.0, 0.0, 0.0));
        constraints.push(Constraint::new(0.0, -1.0, 0.0));
    }
    let phi: f64 = rng.gen::<f64>() * std::f64::consts::TAU;
    let objective = Objective {
        a: phi.cos(),
        b: phi.sin(),
        maximize: rng.gen::<bool>(),
    };
    (constraints, objective)
}
