use crate::domain::article::{Article, TagName};
use crate::domain::identity::{Entity, Identifier};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateArticleResponse {
    pub id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Article> for CreateArticleResponse {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id().as_uuid(),
            title: article.title().as_str().to_owned(),
            created_at: article.created_at(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDetailsDto {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    /// `"Draft"` or `"Published"`.
    pub status: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    pub tags: Vec<String>,
    pub author_ids: Vec<Uuid>,
}

impl From<Article> for ArticleDetailsDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id().as_uuid(),
            title: article.title().as_str().to_owned(),
            content: article.content().as_str().to_owned(),
            status: article.status().to_string(),
            created_at: article.created_at(),
            updated_at: article.updated_at(),
            published_at: article.published_at(),
            tags: tag_strings(&article),
            author_ids: article.author_ids().map(|id| id.as_uuid()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleListItemDto {
    pub id: Uuid,
    pub title: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    pub tags: Vec<String>,
}

impl From<Article> for ArticleListItemDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id().as_uuid(),
            title: article.title().as_str().to_owned(),
            status: article.status().to_string(),
            created_at: article.created_at(),
            published_at: article.published_at(),
            tags: tag_strings(&article),
        }
    }
}

fn tag_strings(article: &Article) -> Vec<String> {
    article
        .tag_names()
        .map(TagName::as_str)
        .map(str::to_owned)
        .collect()
}
