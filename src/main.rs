use anyhow::Result;
use articles_core::application::{ports::time::Clock, services::ApplicationServices};
use articles_core::config::{AppConfig, StorageBackend};
use articles_core::domain::article::ArticleRepository;
use articles_core::infrastructure::{
    database,
    events::EventDispatcher,
    repositories::{InMemoryArticleRepository, PostgresArticleRepository},
    time::SystemClock,
};
use articles_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let article_repo = build_repository(&config).await?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(article_repo, clock));

    let state = HttpState {
        services: Arc::clone(&services),
        request_timeout: config.request_timeout(),
        allowed_origins: config.allowed_origins().to_vec(),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(storage = %config.storage_backend(), "listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn build_repository(config: &AppConfig) -> Result<Arc<dyn ArticleRepository>> {
    let dispatcher = EventDispatcher::default();

    match config.storage_backend() {
        StorageBackend::Memory => {
            tracing::warn!("using in-memory storage; data is lost on restart");
            Ok(Arc::new(InMemoryArticleRepository::new(dispatcher)))
        }
        StorageBackend::Postgres => {
            let pool = database::connect_with_retry(
                config.database_url(),
                config.db_connect_max_attempts(),
                config.db_connect_retry_delay(),
            )
            .await?;
            database::run_migrations(&pool).await?;
            Ok(Arc::new(PostgresArticleRepository::new(pool, dispatcher)))
        }
    }
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
