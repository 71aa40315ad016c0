// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::{
        error::{ApplicationResult, ValidationErrors},
        validation::{Validate, messages, require_id},
    },
    domain::identity::Entity,
};
use uuid::Uuid;

#[derive(Debug, Clone, Copy)]
pub struct DeleteArticleCommand {
    pub id: Uuid,
}

impl Validate for DeleteArticleCommand {
    fn collect_errors(&self, errors: &mut ValidationErrors) {
        require_id(errors, "id", self.id, messages::ARTICLE_ID_REQUIRED);
    }
}

impl ArticleCommandService {
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        command.validate()?;
        let article = self.load(command.id).await?;

        self.repo.delete(article.id()).await?;
        tracing::info!(article_id = %article.id(), "article deleted");
        Ok(())
    }
}
