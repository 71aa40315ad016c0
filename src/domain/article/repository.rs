use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::TagName;
use crate::domain::errors::DomainResult;
use crate::domain::identity::ArticleId;
use async_trait::async_trait;

/// One page of articles plus the size of the whole matching set.
#[derive(Debug, Clone)]
pub struct ArticlePage {
    pub items: Vec<Article>,
    pub total_count: u64,
}

/// Persistence boundary for the article aggregate.
///
/// Implementations store an article together with its authors and tags as one
/// unit. After a successful `add` or `update` they drain the aggregate's
/// pending events and hand them to the configured event sink.
///
/// Futures returned here may be dropped at any await point; that is how a
/// caller cancels or times out a storage call.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn get_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;

    /// Skips `(page_number - 1) * page_size` articles in natural order and
    /// takes `page_size`. `page_number` and `page_size` start at 1.
    async fn get_all(&self, page_number: u32, page_size: u32) -> DomainResult<ArticlePage>;

    async fn get_by_tag(&self, tag: &TagName) -> DomainResult<Vec<Article>>;

    async fn add(&self, article: Article) -> DomainResult<Article>;

    async fn update(&self, article: &mut Article) -> DomainResult<()>;

    /// Removes the article with its authors and tags. Absent ids are a no-op.
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}
