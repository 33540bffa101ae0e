// tests/support/mocks/random.rs
use std::sync::atomic::{AtomicUsize, Ordering};

use slugger::application::ports::random::RandomSource;

/// 常に同じ値を返す乱数源（範囲内にクランプ）
#[derive(Clone, Debug)]
pub struct FixedRandom(pub u64);

impl RandomSource for FixedRandom {
    fn between(&self, low: u64, high: u64) -> u64 {
        self.0.clamp(low, high)
    }
}

/// 与えられた値を順番に返す乱数源
#[derive(Debug)]
pub struct SequenceRandom {
    values: Vec<u64>,
    next: AtomicUsize,
}

impl SequenceRandom {
    pub fn new(values: Vec<u64>) -> Self {
        Self {
            values,
            next: AtomicUsize::new(0),
        }
    }
}

impl RandomSource for SequenceRandom {
    fn between(&self, low: u64, high: u64) -> u64 {
        let idx = self.next.fetch_add(1, Ordering::SeqCst);
        self.values[idx % self.values.len()].clamp(low, high)
    }
}
