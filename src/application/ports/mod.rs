// src/application/ports/mod.rs
pub mod random;
pub mod util;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type RandomSourcePort = dyn random::RandomSource;
pub type SlugGeneratorPort = dyn util::SlugGenerator;
