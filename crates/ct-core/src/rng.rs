//! The single random stream of a run.
//!
//! Every draw (initial placement, velocities, outcome rolls, detection,
//! transmission) comes from one `SmallRng` seeded with `SimConfig::seed`.
//! Agents are visited in id order on one thread, so a seed fully determines
//! a run and `restart` replays it.

use rand::distributions::uniform::{SampleRange, SampleUniform};
use rand::distributions::{Distribution, Standard};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        Standard: Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T: SampleUniform, R: SampleRange<T>>(&mut self, range: R) -> T {
        self.0.gen_range(range)
    }

    /// Bernoulli draw; `p` outside [0, 1] is clamped instead of panicking.
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Heading in radians, uniform over a full turn.
    #[inline]
    pub fn angle(&mut self) -> f64 {
        self.0.gen_range(0.0..std::f64::consts::TAU)
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.0);
    }

    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.0)
    }
}
