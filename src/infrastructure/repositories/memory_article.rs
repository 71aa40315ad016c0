// src/infrastructure/repositories/memory_article.rs
use crate::domain::article::{Article, ArticleId, ArticlePage, ArticleRepository, TagName};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::events::AggregateRoot;
use crate::domain::identity::Entity;
use crate::infrastructure::events::EventDispatcher;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Process-local store used for development and tests.
///
/// Articles are kept in insertion order, which doubles as the paging order.
/// Stored copies never carry pending events.
#[derive(Default)]
pub struct InMemoryArticleRepository {
    articles: RwLock<Vec<Article>>,
    dispatcher: EventDispatcher,
}

impl InMemoryArticleRepository {
    pub fn new(dispatcher: EventDispatcher) -> Self {
        Self {
            articles: RwLock::new(Vec::new()),
            dispatcher,
        }
    }
}

fn page_bounds(page_number: u32, page_size: u32, len: usize) -> (usize, usize) {
    let size = usize::try_from(page_size).unwrap_or(usize::MAX);
    let skip = usize::try_from(page_number.saturating_sub(1))
        .unwrap_or(usize::MAX)
        .saturating_mul(size);
    let start = skip.min(len);
    (start, start.saturating_add(size).min(len))
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn get_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let articles = self.articles.read().await;
        Ok(articles.iter().find(|article| article.id() == id).cloned())
    }

    async fn get_all(&self, page_number: u32, page_size: u32) -> DomainResult<ArticlePage> {
        let articles = self.articles.read().await;
        let (start, end) = page_bounds(page_number, page_size, articles.len());

        Ok(ArticlePage {
            items: articles[start..end].to_vec(),
            total_count: articles.len() as u64,
        })
    }

    async fn get_by_tag(&self, tag: &TagName) -> DomainResult<Vec<Article>> {
        let articles = self.articles.read().await;
        Ok(articles
            .iter()
            .filter(|article| article.has_tag(tag))
            .cloned()
            .collect())
    }

    async fn add(&self, mut article: Article) -> DomainResult<Article> {
        let events = article.drain_events();
        {
            let mut articles = self.articles.write().await;
            if articles.iter().any(|stored| stored.id() == article.id()) {
                return Err(DomainError::conflict(format!(
                    "article {} already exists",
                    article.id()
                )));
            }
            articles.push(article.clone());
        }

        self.dispatcher.dispatch(events).await;
        Ok(article)
    }

    async fn update(&self, article: &mut Article) -> DomainResult<()> {
        {
            let mut articles = self.articles.write().await;
            let slot = articles
                .iter_mut()
                .find(|stored| stored.id() == article.id())
                .ok_or_else(|| DomainError::not_found(format!("article {} not found", article.id())))?;

            let mut stored = article.clone();
            stored.drain_events();
            *slot = stored;
        }

        self.dispatcher.dispatch(article.drain_events()).await;
        Ok(())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.articles.write().await.retain(|article| article.id() != id);
        Ok(())
    }
}
