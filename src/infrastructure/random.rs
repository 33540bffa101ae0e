use crate::application::ports::random::RandomSource;
use rand::Rng;

#[derive(Default, Clone)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn between(&self, low: u64, high: u64) -> u64 {
        rand::thread_rng().gen_range(low..=high)
    }
}
