// src/domain/slug/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::repository::SlugRepository;
use crate::domain::slug::value_objects::{Slug, SlugFields};

const DEFAULT_MAX_ATTEMPTS: u64 = 10_000;

/// Domain service responsible for producing slugs that are unique in a repository.
pub struct UniqueSlugService {
    repo: Arc<dyn SlugRepository>,
    generator: Arc<dyn SlugGenerator>,
    max_attempts: u64,
}

impl UniqueSlugService {
    #[must_use]
    pub const fn new(repo: Arc<dyn SlugRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self {
            repo,
            generator,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Cap on suffixed candidates probed before giving up.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u64) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// `current` is the slug the record already owns, if any; it is never
    /// reported as a collision with itself.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Conflict`] once `max_attempts` suffixes are all
    /// taken, [`DomainError::Validation`] if the generator produces an invalid
    /// slug, and any repository error unchanged.
    pub async fn generate_unique_slug(
        &self,
        fields: &SlugFields,
        current: Option<&Slug>,
    ) -> DomainResult<Slug> {
        let base = self.generator.slugify(fields);
        let mut candidate = Slug::new(base.clone())?;
        let mut attempt = 0u64;

        loop {
            if current == Some(&candidate) || !self.repo.slug_exists(&candidate).await? {
                return Ok(candidate);
            }
            if attempt == self.max_attempts {
                tracing::warn!(
                    base = %base,
                    attempts = self.max_attempts,
                    "gave up looking for a free slug"
                );
                return Err(DomainError::Conflict(format!(
                    "no free slug for '{base}' after {attempt} suffixes"
                )));
            }
            attempt += 1;
            candidate = Slug::new(self.generator.suffixed(&base, attempt))?;
        }
    }
}
