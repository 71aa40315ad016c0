mod by_tag;
mod get_by_id;
mod list;
mod service;

pub use by_tag::GetArticlesByTagQuery;
pub use get_by_id::GetArticleQuery;
pub use list::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, GetArticlesListQuery};
pub use service::ArticleQueryService;
