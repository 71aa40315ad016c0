// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::CreateArticleResponse,
        error::{ApplicationResult, ValidationErrors},
        validation::{Validate, check_title, messages, require_id, require_text},
    },
    domain::{
        article::{Article, ArticleId, AuthorId},
        identity::Entity,
    },
};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
    pub author_id: Uuid,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

impl Validate for CreateArticleCommand {
    fn collect_errors(&self, errors: &mut ValidationErrors) {
        check_title(errors, &self.title);
        require_text(errors, "content", &self.content, messages::CONTENT_REQUIRED);
        require_id(errors, "author_id", self.author_id, messages::AUTHOR_ID_REQUIRED);
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    content: Option<String>,
    author_id: Option<Uuid>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn author_id(mut self, author_id: Uuid) -> Self {
        self.author_id = Some(author_id);
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            content: self.content.ok_or("content is required")?,
            author_id: self.author_id.ok_or("author_id is required")?,
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<CreateArticleResponse> {
        command.validate()?;

        let article = Article::create(
            ArticleId::new_unique(),
            command.title,
            command.content,
            AuthorId::from_uuid(command.author_id),
            self.clock.now(),
        )?;

        let saved = self.repo.add(article).await?;
        tracing::info!(article_id = %saved.id(), "article created");
        Ok(CreateArticleResponse::from(&saved))
    }
}
