use std::sync::Arc;

use axum::{
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

mod config;
mod db;
mod error;
mod handlers;
mod models;
mod store;
mod templates;

use config::Config;
use store::{MemoryMoodStore, MoodStore, PgMoodStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MoodStore>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moodjournal_api=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    let config = Arc::new(Config::from_env()?);

    let store: Arc<dyn MoodStore> = match &config.database_url {
        Some(url) => {
            let db = db::create_pool(url, config.db_max_connections).await?;
            sqlx::migrate!("./migrations").run(&db).await?;
            tracing::info!("Database migrations applied");
            Arc::new(PgMoodStore::new(db))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, entries are kept in memory only");
            Arc::new(MemoryMoodStore::new())
        }
    };

    let cors = CorsLayer::new()
        .allow_origin(config.frontend_url.parse::<axum::http::HeaderValue>()?)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ]);

    let state = AppState {
        store,
        config: config.clone(),
    };

    let app = router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = config.listen_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz))
        .route("/main/", get(handlers::main_page::show_main))
        .route(
            "/create-mood-entry",
            get(handlers::main_page::create_mood_entry_form)
                .post(handlers::main_page::create_mood_entry),
        )
        .route("/json/", get(handlers::entries::list_entries))
        .route("/json/:id", get(handlers::entries::get_entry))
        .fallback(handlers::entries::not_found)
        .with_state(state)
}
