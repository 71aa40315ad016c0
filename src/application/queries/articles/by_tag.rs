use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleListItemDto,
        error::{ApplicationResult, ValidationErrors},
        validation::{Validate, messages, require_text},
    },
    domain::article::TagName,
};

#[derive(Debug, Clone)]
pub struct GetArticlesByTagQuery {
    pub tag_name: String,
}

impl Validate for GetArticlesByTagQuery {
    fn collect_errors(&self, errors: &mut ValidationErrors) {
        require_text(errors, "tag_name", &self.tag_name, messages::TAG_NAME_REQUIRED);
    }
}

impl ArticleQueryService {
    /// Matches on the normalized tag, so `"News"` finds articles tagged `news`.
    pub async fn get_articles_by_tag(
        &self,
        query: GetArticlesByTagQuery,
    ) -> ApplicationResult<Vec<ArticleListItemDto>> {
        query.validate()?;
        let tag = TagName::new(&query.tag_name)?;
        let articles = self.repo.get_by_tag(&tag).await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }
}
