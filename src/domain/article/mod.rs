pub mod entity;
pub mod events;
pub mod repository;
pub mod value_objects;

pub use entity::{
    Article, ArticleAuthor, ArticleAuthorRecord, ArticleRecord, ArticleTag, ArticleTagRecord,
};
pub use events::ArticleEvent;
pub use repository::{ArticlePage, ArticleRepository};
pub use value_objects::{ArticleContent, ArticleTitle, PublicationStatus, TITLE_MAX_CHARS, TagName};

pub use crate::domain::identity::{ArticleAuthorId, ArticleId, ArticleTagId, AuthorId};
