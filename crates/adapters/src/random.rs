use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use showcase_application::RandomSource;

#[derive(Debug)]
pub struct RngSource<R> {
    rng: R,
}

impl RngSource<ThreadRng> {
    pub fn thread() -> Self {
        Self { rng: rand::rng() }
    }
}

impl RngSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_index(&mut self, upper: usize) -> usize {
        if upper <= 1 {
            return 0;
        }
        self.rng.random_range(0..upper)
    }
}
