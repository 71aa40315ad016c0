// src/application/commands/articles/service.rs
use std::sync::Arc;

use uuid::Uuid;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        article::{Article, ArticleId, ArticleRepository},
        identity::EntityKind,
    },
};

/// Write-side handlers for the article aggregate.
///
/// Every mutating handler follows the same path: validate the request, load
/// the aggregate, run one domain operation, persist. Domain and not-found
/// errors propagate untouched.
pub struct ArticleCommandService {
    pub(super) repo: Arc<dyn ArticleRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(repo: Arc<dyn ArticleRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub(super) async fn load(&self, id: Uuid) -> ApplicationResult<Article> {
        let id = ArticleId::from_uuid(id);
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(EntityKind::Article, id))
    }
}
