// src/presentation/http/openapi.rs
use crate::application::dto::{ArticleListItemDto, PaginatedList};
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleListResponse {
    pub items: Vec<ArticleListItemDto>,
    pub page_number: u32,
    pub page_size: u32,
    pub total_count: u64,
    pub total_pages: u64,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

impl From<PaginatedList<ArticleListItemDto>> for ArticleListResponse {
    fn from(page: PaginatedList<ArticleListItemDto>) -> Self {
        Self {
            items: page.items,
            page_number: page.page_number,
            page_size: page.page_size,
            total_count: page.total_count,
            total_pages: page.total_pages,
            has_previous_page: page.has_previous_page,
            has_next_page: page.has_next_page,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::articles::publish_article,
        crate::presentation::http::controllers::articles::unpublish_article,
        crate::presentation::http::controllers::articles::add_tag,
        crate::presentation::http::controllers::articles::remove_tag,
        crate::presentation::http::controllers::articles::add_author,
        crate::presentation::http::controllers::articles::remove_author,
        crate::presentation::http::controllers::articles::list_articles_by_tag,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            ArticleListResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::articles::ArticleListParams,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::presentation::http::controllers::articles::UpdateArticleRequest,
            crate::presentation::http::controllers::articles::AddTagRequest,
            crate::presentation::http::controllers::articles::AddAuthorRequest,
            crate::application::dto::CreateArticleResponse,
            crate::application::dto::ArticleDetailsDto,
            crate::application::dto::ArticleListItemDto
        )
    ),
    tags(
        (name = "Articles", description = "Article lifecycle, tag and author endpoints"),
        (name = "Tags", description = "Tag lookups"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Articles API",
        description = "Multi-author articles with tags and a draft/published lifecycle",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

/// Swagger UI at `/docs`, Redoc at `/redoc`, the raw document at `/openapi.json`.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}
