// src/application/commands/articles/tags.rs
use super::ArticleCommandService;
use crate::{
    application::{
        error::{ApplicationResult, ValidationErrors},
        validation::{Validate, messages, require_id, require_text},
    },
    domain::article::TagName,
};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct AddTagToArticleCommand {
    pub article_id: Uuid,
    pub tag_name: String,
}

#[derive(Debug, Clone)]
pub struct RemoveTagFromArticleCommand {
    pub article_id: Uuid,
    pub tag_name: String,
}

fn collect_tag_errors(errors: &mut ValidationErrors, article_id: Uuid, tag_name: &str) {
    require_id(errors, "article_id", article_id, messages::ARTICLE_ID_REQUIRED);
    require_text(errors, "tag_name", tag_name, messages::TAG_NAME_REQUIRED);
}

impl Validate for AddTagToArticleCommand {
    fn collect_errors(&self, errors: &mut ValidationErrors) {
        collect_tag_errors(errors, self.article_id, &self.tag_name);
    }
}

impl Validate for RemoveTagFromArticleCommand {
    fn collect_errors(&self, errors: &mut ValidationErrors) {
        collect_tag_errors(errors, self.article_id, &self.tag_name);
    }
}

impl ArticleCommandService {
    pub async fn add_tag_to_article(&self, command: AddTagToArticleCommand) -> ApplicationResult<()> {
        command.validate()?;
        let tag = TagName::new(&command.tag_name)?;
        let mut article = self.load(command.article_id).await?;

        article.add_tag(tag)?;

        self.repo.update(&mut article).await?;
        tracing::debug!(article_id = %command.article_id, tag = %command.tag_name, "tag added");
        Ok(())
    }

    pub async fn remove_tag_from_article(
        &self,
        command: RemoveTagFromArticleCommand,
    ) -> ApplicationResult<()> {
        command.validate()?;
        let tag = TagName::new(&command.tag_name)?;
        let mut article = self.load(command.article_id).await?;

        article.remove_tag(&tag)?;

        self.repo.update(&mut article).await?;
        tracing::debug!(article_id = %command.article_id, tag = %tag, "tag removed");
        Ok(())
    }
}
