// tests/support/mocks/repos.rs
use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use slugger::domain::errors::{DomainError, DomainResult};
use slugger::domain::slug::{Slug, SlugRepository};

/* -------------------------------- InMemorySlugRepo -------------------------------- */

/// 軽量なインメモリスラッグリポジトリ
/// 問い合わせ回数を記録する
#[derive(Debug, Default)]
pub struct InMemorySlugRepo {
    taken: Mutex<HashSet<String>>,
    lookups: AtomicUsize,
}

impl InMemorySlugRepo {
    pub fn with_taken<I, S>(slugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            taken: Mutex::new(slugs.into_iter().map(Into::into).collect()),
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn insert(&self, slug: &Slug) {
        self.taken.lock().unwrap().insert(slug.as_str().to_string());
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SlugRepository for InMemorySlugRepo {
    async fn slug_exists(&self, slug: &Slug) -> DomainResult<bool> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.taken.lock().unwrap().contains(slug.as_str()))
    }
}

/* -------------------------------- FailingSlugRepo -------------------------------- */

/// 常に永続化エラーを返すリポジトリ
pub struct FailingSlugRepo;

#[async_trait]
impl SlugRepository for FailingSlugRepo {
    async fn slug_exists(&self, _slug: &Slug) -> DomainResult<bool> {
        Err(DomainError::Persistence("connection refused".into()))
    }
}
