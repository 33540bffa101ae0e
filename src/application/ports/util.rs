// src/application/ports/util.rs
use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;

use crate::domain::slug::SlugFields;

pub trait SlugGenerator: Send + Sync {
    /// Normalize the fields into a base slug, before any deduplication.
    #[must_use]
    fn slugify(&self, fields: &SlugFields) -> String;

    /// The `attempt`-th disambiguated form of `base`.
    #[must_use]
    fn suffixed(&self, base: &str, attempt: u64) -> String;

    /// Base slug, suffixed with the first free counter if it is taken.
    #[must_use]
    fn generate(&self, fields: &SlugFields, exclude: &dyn SlugExclusion) -> String {
        let base = self.slugify(fields);
        let mut candidate = base.clone();
        let mut attempt = 1u64;

        while exclude.is_taken(&candidate) {
            candidate = self.suffixed(&base, attempt);
            attempt += 1;
        }

        if attempt > 1 {
            tracing::debug!(base = %base, slug = %candidate, "slug collided, suffix appended");
        }
        candidate
    }
}

/// Slugs already in use. Membership is exact string equality.
pub trait SlugExclusion {
    #[must_use]
    fn is_taken(&self, candidate: &str) -> bool;
}

impl<S: BuildHasher> SlugExclusion for HashSet<String, S> {
    fn is_taken(&self, candidate: &str) -> bool {
        self.contains(candidate)
    }
}

impl<S: BuildHasher> SlugExclusion for HashSet<&str, S> {
    fn is_taken(&self, candidate: &str) -> bool {
        self.contains(candidate)
    }
}

impl SlugExclusion for BTreeSet<String> {
    fn is_taken(&self, candidate: &str) -> bool {
        self.contains(candidate)
    }
}

impl SlugExclusion for Vec<String> {
    fn is_taken(&self, candidate: &str) -> bool {
        self.iter().any(|s| s == candidate)
    }
}

impl SlugExclusion for Vec<&str> {
    fn is_taken(&self, candidate: &str) -> bool {
        self.iter().any(|s| *s == candidate)
    }
}
