//! Arrival and inter-cycle wait sampling.
//!
//! Every random draw an actor makes comes from its own generator, derived
//! from the master seed and the actor id. Two runs with the same seed
//! therefore sample identical delays and waits, with no shared generator
//! between tasks.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use std::time::Duration;

/// Derive the generator for one actor from the master seed.
pub fn actor_rng(seed: u64, actor_id: usize) -> SmallRng {
    // Fixed odd multiplier keeps distinct ids on distinct streams.
    SmallRng::seed_from_u64(seed ^ (actor_id as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// Sample a startup delay from `Normal(mean, std_dev)`, clamped to
/// `[0, ceiling]`.
pub fn arrival_delay<R: Rng>(rng: &mut R, mean: f64, std_dev: f64, ceiling: Duration) -> Duration {
    // rand_distr 0.4 accepts a negative sigma, so the guard lives here:
    // degenerate parameters degrade to the mean before clamping.
    let secs = match Normal::new(mean, std_dev) {
        Ok(dist) if std_dev.is_finite() && std_dev >= 0.0 => dist.sample(rng),
        _ => mean,
    };
    if !secs.is_finite() {
        return Duration::ZERO;
    }
    Duration::from_secs_f64(secs.clamp(0.0, ceiling.as_secs_f64()))
}

/// Sample a think-time wait uniformly from `[lo, hi]` seconds.
pub fn cycle_wait<R: Rng>(rng: &mut R, range: (f64, f64)) -> Duration {
    let (lo, hi) = range;
    if hi <= lo {
        return Duration::from_secs_f64(lo.max(0.0));
    }
    Duration::from_secs_f64(rng.gen_range(lo..=hi).max(0.0))
}
