// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        AddAuthorToArticleCommand, AddTagToArticleCommand, CreateArticleCommand,
        DeleteArticleCommand, PublishArticleCommand, RemoveAuthorFromArticleCommand,
        RemoveTagFromArticleCommand, UnpublishArticleCommand, UpdateArticleCommand,
    },
    dto::{ArticleDetailsDto, ArticleListItemDto, CreateArticleResponse},
    error::ApplicationError,
    queries::articles::{
        DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, GetArticleQuery, GetArticlesByTagQuery,
        GetArticlesListQuery,
    },
};
use crate::domain::identity::EntityKind;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::ArticleListResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

const fn default_page_number() -> u32 {
    DEFAULT_PAGE_NUMBER
}

const fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    #[serde(default = "default_page_number")]
    pub page_number: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub title: String,
    pub content: String,
    pub author_id: Uuid,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    pub id: Uuid,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddTagRequest {
    pub article_id: Uuid,
    pub tag_name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddAuthorRequest {
    pub author_id: Uuid,
}

fn ensure_same_id(path_id: Uuid, body_id: Uuid) -> HttpResult<()> {
    if path_id == body_id {
        Ok(())
    } else {
        Err(HttpError::bad_request(format!(
            "article id in body ({body_id}) does not match the path ({path_id})"
        )))
    }
}

#[utoipa::path(
    get,
    path = "/api/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "One page of articles in creation order.", body = ArticleListResponse),
        (status = 400, description = "Invalid paging parameters.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<ArticleListResponse>> {
    let query = GetArticlesListQuery {
        page_number: params.page_number,
        page_size: params.page_size,
    };

    state
        .services
        .article_queries
        .get_articles_list(query)
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/articles/{id}",
    params(("id" = Uuid, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Article details.", body = ArticleDetailsDto),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<ArticleDetailsDto>> {
    state
        .services
        .article_queries
        .get_article(GetArticleQuery { id })
        .await
        .into_http()?
        .map(Json)
        .ok_or_else(|| HttpError::from_error(ApplicationError::not_found(EntityKind::Article, id)))
}

#[utoipa::path(
    post,
    path = "/api/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created as a draft.", body = CreateArticleResponse),
        (status = 400, description = "Invalid request.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<impl IntoResponse> {
    let command = CreateArticleCommand {
        title: payload.title,
        content: payload.content,
        author_id: payload.author_id,
    };

    let created = state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()?;

    let location = format!("/api/articles/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

#[utoipa::path(
    put,
    path = "/api/articles/{id}",
    params(("id" = Uuid, Path, description = "Article identifier")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 204, description = "Article updated."),
        (status = 400, description = "Invalid request or mismatched id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<StatusCode> {
    ensure_same_id(id, payload.id)?;
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        content: payload.content,
    };

    state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/articles/{id}",
    params(("id" = Uuid, Path, description = "Article identifier")),
    responses(
        (status = 204, description = "Article deleted."),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<Uuid>,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/articles/{id}/publish",
    params(("id" = Uuid, Path, description = "Article identifier")),
    responses(
        (status = 204, description = "Article published."),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Article is already published.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn publish_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<Uuid>,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .publish_article(PublishArticleCommand { id })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/articles/{id}/unpublish",
    params(("id" = Uuid, Path, description = "Article identifier")),
    responses(
        (status = 204, description = "Article moved back to draft."),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Article is not published.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn unpublish_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<Uuid>,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .unpublish_article(UnpublishArticleCommand { id })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/articles/{id}/tags",
    params(("id" = Uuid, Path, description = "Article identifier")),
    request_body = AddTagRequest,
    responses(
        (status = 204, description = "Tag attached."),
        (status = 400, description = "Invalid tag or mismatched id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Tag already attached.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn add_tag(
    Extension(state): Extension<HttpState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AddTagRequest>,
) -> HttpResult<StatusCode> {
    ensure_same_id(id, payload.article_id)?;
    let command = AddTagToArticleCommand {
        article_id: id,
        tag_name: payload.tag_name,
    };

    state
        .services
        .article_commands
        .add_tag_to_article(command)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/articles/{id}/tags/{tag_name}",
    params(
        ("id" = Uuid, Path, description = "Article identifier"),
        ("tag_name" = String, Path, description = "Tag to detach")
    ),
    responses(
        (status = 204, description = "Tag detached."),
        (status = 404, description = "Article or tag not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn remove_tag(
    Extension(state): Extension<HttpState>,
    Path((id, tag_name)): Path<(Uuid, String)>,
) -> HttpResult<StatusCode> {
    let command = RemoveTagFromArticleCommand {
        article_id: id,
        tag_name,
    };

    state
        .services
        .article_commands
        .remove_tag_from_article(command)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/articles/{id}/authors",
    params(("id" = Uuid, Path, description = "Article identifier")),
    request_body = AddAuthorRequest,
    responses(
        (status = 204, description = "Author attached."),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Author already attached.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn add_author(
    Extension(state): Extension<HttpState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AddAuthorRequest>,
) -> HttpResult<StatusCode> {
    let command = AddAuthorToArticleCommand {
        article_id: id,
        author_id: payload.author_id,
    };

    state
        .services
        .article_commands
        .add_author_to_article(command)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/articles/{id}/authors/{author_id}",
    params(
        ("id" = Uuid, Path, description = "Article identifier"),
        ("author_id" = Uuid, Path, description = "Author to detach")
    ),
    responses(
        (status = 204, description = "Author detached."),
        (status = 404, description = "Article or author not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "The last author cannot be removed.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn remove_author(
    Extension(state): Extension<HttpState>,
    Path((id, author_id)): Path<(Uuid, Uuid)>,
) -> HttpResult<StatusCode> {
    let command = RemoveAuthorFromArticleCommand {
        article_id: id,
        author_id,
    };

    state
        .services
        .article_commands
        .remove_author_from_article(command)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/tags/{tag_name}/articles",
    params(("tag_name" = String, Path, description = "Tag to match, case-insensitive")),
    responses(
        (status = 200, description = "Articles carrying the tag.", body = [ArticleListItemDto]),
        (status = 400, description = "Blank tag.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Tags"
)]
pub async fn list_articles_by_tag(
    Extension(state): Extension<HttpState>,
    Path(tag_name): Path<String>,
) -> HttpResult<Json<Vec<ArticleListItemDto>>> {
    state
        .services
        .article_queries
        .get_articles_by_tag(GetArticlesByTagQuery { tag_name })
        .await
        .into_http()
        .map(Json)
}
