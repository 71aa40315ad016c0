pub mod articles;
pub mod pagination;

pub use articles::{ArticleDetailsDto, ArticleListItemDto, CreateArticleResponse};
pub use pagination::PaginatedList;
