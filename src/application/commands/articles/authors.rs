use super::ArticleCommandService;
use crate::{
    application::{
        error::{ApplicationResult, ValidationErrors},
        validation::{Validate, messages, require_id},
    },
    domain::article::AuthorId,
};
use uuid::Uuid;

#[derive(Debug, Clone, Copy)]
pub struct AddAuthorToArticleCommand {
    pub article_id: Uuid,
    pub author_id: Uuid,
}

#[derive(Debug, Clone, Copy)]
pub struct RemoveAuthorFromArticleCommand {
    pub article_id: Uuid,
    pub author_id: Uuid,
}

fn collect_author_errors(errors: &mut ValidationErrors, article_id: Uuid, author_id: Uuid) {
    require_id(errors, "article_id", article_id, messages::ARTICLE_ID_REQUIRED);
    require_id(errors, "author_id", author_id, messages::AUTHOR_ID_REQUIRED);
}

impl Validate for AddAuthorToArticleCommand {
    fn collect_errors(&self, errors: &mut ValidationErrors) {
        collect_author_errors(errors, self.article_id, self.author_id);
    }
}

impl Validate for RemoveAuthorFromArticleCommand {
    fn collect_errors(&self, errors: &mut ValidationErrors) {
        collect_author_errors(errors, self.article_id, self.author_id);
    }
}

impl ArticleCommandService {
    pub async fn add_author_to_article(
        &self,
        command: AddAuthorToArticleCommand,
    ) -> ApplicationResult<()> {
        command.validate()?;
        let mut article = self.load(command.article_id).await?;

        article.add_author(AuthorId::from_uuid(command.author_id))?;

        self.repo.update(&mut article).await?;
        Ok(())
    }

    pub async fn remove_author_from_article(
        &self,
        command: RemoveAuthorFromArticleCommand,
    ) -> ApplicationResult<()> {
        command.validate()?;
        let mut article = self.load(command.article_id).await?;

        article.remove_author(AuthorId::from_uuid(command.author_id))?;

        self.repo.update(&mut article).await?;
        Ok(())
    }
}
