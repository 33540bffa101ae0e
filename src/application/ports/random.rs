// src/application/ports/random.rs
pub trait RandomSource: Send + Sync {
    /// Uniform draw from `low..=high`.
    #[must_use]
    fn between(&self, low: u64, high: u64) -> u64;
}
