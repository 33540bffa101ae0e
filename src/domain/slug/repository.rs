use crate::domain::errors::DomainResult;
use crate::domain::slug::value_objects::Slug;
use async_trait::async_trait;

/// Persistence side of slug uniqueness, usually backed by the table that
/// stores the slugged records.
#[async_trait]
pub trait SlugRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns [`DomainError::Persistence`](crate::domain::errors::DomainError::Persistence)
    /// when the backing store cannot be queried.
    async fn slug_exists(&self, slug: &Slug) -> DomainResult<bool>;
}
