// tests/support/mocks/repos.rs
use articles_core::domain::article::{
    Article, ArticleId, ArticlePage, ArticleRepository, TagName,
};
use articles_core::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Every call fails as if the database were down.
#[derive(Default)]
pub struct FailingRepo;

fn offline() -> DomainError {
    DomainError::persistence("database unavailable")
}

#[async_trait]
impl ArticleRepository for FailingRepo {
    async fn get_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        Err(offline())
    }

    async fn get_all(&self, _page_number: u32, _page_size: u32) -> DomainResult<ArticlePage> {
        Err(offline())
    }

    async fn get_by_tag(&self, _tag: &TagName) -> DomainResult<Vec<Article>> {
        Err(offline())
    }

    async fn add(&self, _article: Article) -> DomainResult<Article> {
        Err(offline())
    }

    async fn update(&self, _article: &mut Article) -> DomainResult<()> {
        Err(offline())
    }

    async fn delete(&self, _id: ArticleId) -> DomainResult<()> {
        Err(offline())
    }
}

/// Delays reads by `delay` before delegating. `finished` flips only if a
/// delayed read runs to completion.
pub struct SlowRepo {
    inner: Arc<dyn ArticleRepository>,
    delay: Duration,
    finished: Arc<AtomicBool>,
}

impl SlowRepo {
    pub fn new(inner: Arc<dyn ArticleRepository>, delay: Duration) -> Self {
        Self {
            inner,
            delay,
            finished: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn finished(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.finished)
    }

    async fn pause(&self) {
        tokio::time::sleep(self.delay).await;
        self.finished.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl ArticleRepository for SlowRepo {
    async fn get_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        self.pause().await;
        self.inner.get_by_id(id).await
    }

    async fn get_all(&self, page_number: u32, page_size: u32) -> DomainResult<ArticlePage> {
        self.pause().await;
        self.inner.get_all(page_number, page_size).await
    }

    async fn get_by_tag(&self, tag: &TagName) -> DomainResult<Vec<Article>> {
        self.pause().await;
        self.inner.get_by_tag(tag).await
    }

    async fn add(&self, article: Article) -> DomainResult<Article> {
        self.inner.add(article).await
    }

    async fn update(&self, article: &mut Article) -> DomainResult<()> {
        self.inner.update(article).await
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.inner.delete(id).await
    }
}
