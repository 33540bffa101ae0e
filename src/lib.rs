//! Slug generation: turns titles and other human text into URL-safe,
//! collision-free identifiers.
//!
//! ```
//! use std::collections::HashSet;
//! use slugger::{SlugGenerator, Slugger};
//!
//! let slugger = Slugger::default();
//! let taken: HashSet<String> = ["my-test".to_string()].into_iter().collect();
//! assert_eq!(slugger.generate(&"My Test".into(), &taken), "my-test-1");
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::ports::random::RandomSource;
pub use application::ports::util::{SlugExclusion, SlugGenerator};
pub use config::{ConfigError, SlugConfig};
pub use domain::errors::{DomainError, DomainResult};
pub use domain::slug::{Slug, SlugFields, SlugRepository, UniqueSlugService};
pub use infrastructure::random::ThreadRandom;
pub use infrastructure::transliteration::Transliterator;
pub use infrastructure::util::Slugger;
