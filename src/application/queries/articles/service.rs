use std::sync::Arc;

use crate::domain::article::ArticleRepository;

/// Read-side handlers. They never mutate the aggregates they load.
pub struct ArticleQueryService {
    pub(super) repo: Arc<dyn ArticleRepository>,
}

impl ArticleQueryService {
    pub fn new(repo: Arc<dyn ArticleRepository>) -> Self {
        Self { repo }
    }
}
