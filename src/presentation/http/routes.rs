// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::articles,
    middleware::timeout::request_timeout,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    body::Body,
    http::{HeaderValue, Method, Request},
    middleware::{self, Next},
    routing::{delete, get, post},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600))
}

pub fn build_router(state: HttpState) -> Router {
    let cors = cors_layer(&state.allowed_origins);
    let limit = state.request_timeout;

    let api = Router::new()
        .route(
            "/api/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route(
            "/api/articles/{id}",
            get(articles::get_article)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
        .route("/api/articles/{id}/publish", post(articles::publish_article))
        .route(
            "/api/articles/{id}/unpublish",
            post(articles::unpublish_article),
        )
        .route("/api/articles/{id}/tags", post(articles::add_tag))
        .route(
            "/api/articles/{id}/tags/{tag_name}",
            delete(articles::remove_tag),
        )
        .route("/api/articles/{id}/authors", post(articles::add_author))
        .route(
            "/api/articles/{id}/authors/{author_id}",
            delete(articles::remove_author),
        )
        .route(
            "/api/tags/{tag_name}/articles",
            get(articles::list_articles_by_tag),
        )
        .layer(middleware::from_fn(move |req: Request<Body>, next: Next| {
            request_timeout(req, next, limit)
        }));

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "Healthy".into(),
    })
}
