// tests/support/builders.rs
use articles_core::application::commands::articles::CreateArticleCommand;
use articles_core::domain::article::{Article, ArticleId, AuthorId, TagName};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::mocks::fixed_now;

/// Valid create command with a fresh author.
pub fn create_command(title: &str) -> CreateArticleCommand {
    CreateArticleCommand::builder()
        .title(title)
        .content("Body text")
        .author_id(Uuid::new_v4())
        .build()
        .unwrap()
}

/// Builds aggregates directly, bypassing the handlers.
pub struct ArticleBuilder {
    id: ArticleId,
    title: String,
    content: String,
    authors: Vec<AuthorId>,
    tags: Vec<String>,
    created_at: DateTime<Utc>,
    published_at: Option<DateTime<Utc>>,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: ArticleId::new_unique(),
            title: "Test Article".into(),
            content: "Test body".into(),
            authors: vec![AuthorId::new_unique()],
            tags: Vec::new(),
            created_at: fixed_now(),
            published_at: None,
        }
    }

    pub fn id(mut self, id: ArticleId) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn author(mut self, author: AuthorId) -> Self {
        self.authors.push(author);
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self
    }

    pub fn published_at(mut self, at: DateTime<Utc>) -> Self {
        self.published_at = Some(at);
        self
    }

    pub fn build(self) -> Article {
        let mut authors = self.authors.into_iter();
        let first = authors.next().unwrap();
        let mut article =
            Article::create(self.id, self.title, self.content, first, self.created_at).unwrap();
        for author in authors {
            article.add_author(author).unwrap();
        }
        for tag in self.tags {
            article.add_tag(TagName::new(tag).unwrap()).unwrap();
        }
        if let Some(at) = self.published_at {
            article.publish(at).unwrap();
        }
        article
    }
}

impl Default for ArticleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
