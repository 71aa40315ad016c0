// src/application/commands/articles/publish.rs
use super::ArticleCommandService;
use crate::application::{
    error::{ApplicationResult, ValidationErrors},
    validation::{Validate, messages, require_id},
};
use uuid::Uuid;

#[derive(Debug, Clone, Copy)]
pub struct PublishArticleCommand {
    pub id: Uuid,
}

#[derive(Debug, Clone, Copy)]
pub struct UnpublishArticleCommand {
    pub id: Uuid,
}

impl Validate for PublishArticleCommand {
    fn collect_errors(&self, errors: &mut ValidationErrors) {
        require_id(errors, "id", self.id, messages::ARTICLE_ID_REQUIRED);
    }
}

impl Validate for UnpublishArticleCommand {
    fn collect_errors(&self, errors: &mut ValidationErrors) {
        require_id(errors, "id", self.id, messages::ARTICLE_ID_REQUIRED);
    }
}

impl ArticleCommandService {
    pub async fn publish_article(&self, command: PublishArticleCommand) -> ApplicationResult<()> {
        command.validate()?;
        let mut article = self.load(command.id).await?;

        article.publish(self.clock.now())?;

        self.repo.update(&mut article).await?;
        tracing::info!(article_id = %command.id, "article published");
        Ok(())
    }

    pub async fn unpublish_article(
        &self,
        command: UnpublishArticleCommand,
    ) -> ApplicationResult<()> {
        command.validate()?;
        let mut article = self.load(command.id).await?;

        article.unpublish()?;

        self.repo.update(&mut article).await?;
        tracing::info!(article_id = %command.id, "article unpublished");
        Ok(())
    }
}
