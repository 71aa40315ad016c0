use super::ArticleCommandService;
use crate::application::{
    error::{ApplicationResult, ValidationErrors},
    validation::{Validate, check_title, messages, require_id, require_text},
};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct UpdateArticleCommand {
    pub id: Uuid,
    pub title: String,
    pub content: String,
}

impl Validate for UpdateArticleCommand {
    fn collect_errors(&self, errors: &mut ValidationErrors) {
        require_id(errors, "id", self.id, messages::ARTICLE_ID_REQUIRED);
        check_title(errors, &self.title);
        require_text(errors, "content", &self.content, messages::CONTENT_REQUIRED);
    }
}

impl ArticleCommandService {
    pub async fn update_article(&self, command: UpdateArticleCommand) -> ApplicationResult<()> {
        command.validate()?;
        let UpdateArticleCommand { id, title, content } = command;

        let mut article = self.load(id).await?;
        let now = self.clock.now();
        article.update_title(title, now)?;
        article.update_content(content, now)?;

        self.repo.update(&mut article).await?;
        tracing::debug!(article_id = %id, "article updated");
        Ok(())
    }
}
