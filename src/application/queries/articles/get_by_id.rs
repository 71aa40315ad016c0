use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDetailsDto,
        error::{ApplicationResult, ValidationErrors},
        validation::{Validate, messages, require_id},
    },
    domain::article::ArticleId,
};
use uuid::Uuid;

#[derive(Debug, Clone, Copy)]
pub struct GetArticleQuery {
    pub id: Uuid,
}

impl Validate for GetArticleQuery {
    fn collect_errors(&self, errors: &mut ValidationErrors) {
        require_id(errors, "id", self.id, messages::ARTICLE_ID_REQUIRED);
    }
}

impl ArticleQueryService {
    /// `Ok(None)` when the article does not exist.
    pub async fn get_article(
        &self,
        query: GetArticleQuery,
    ) -> ApplicationResult<Option<ArticleDetailsDto>> {
        query.validate()?;
        let article = self.repo.get_by_id(ArticleId::from_uuid(query.id)).await?;
        Ok(article.map(ArticleDetailsDto::from))
    }
}
