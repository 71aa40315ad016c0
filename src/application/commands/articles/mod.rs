// src/application/commands/articles/mod.rs
mod authors;
mod create;
mod delete;
mod publish;
mod service;
mod tags;
mod update;

pub use authors::{AddAuthorToArticleCommand, RemoveAuthorFromArticleCommand};
pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use delete::DeleteArticleCommand;
pub use publish::{PublishArticleCommand, UnpublishArticleCommand};
pub use service::ArticleCommandService;
pub use tags::{AddTagToArticleCommand, RemoveTagFromArticleCommand};
pub use update::UpdateArticleCommand;
