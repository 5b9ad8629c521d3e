//! Axum-based gateway for the portfolio site. Config-driven via CoreConfig.
//!
//! Serves the static page from `portfolio-frontend/` and answers "Ask About Me" questions
//! from the built-in knowledge base.

mod handlers;

use axum::{
    extract::State,
    http::Method,
    routing::{get, post},
    Json, Router,
};
use portfolio_core::{AnswerResolver, CoreConfig, KnowledgeBase, Profile};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Pre-flight check: config loads, knowledge base is sound, frontend present, port available.
fn run_verify() -> Result<(), String> {
    print!("Loading config... ");
    let config = CoreConfig::load().map_err(|e| format!("Config load failed: {}", e))?;
    println!("OK ({})", config.app_name);

    print!("Checking knowledge base... ");
    let status = KnowledgeBase::builtin().verify();
    if !status.complete {
        return Err(format!(
            "knowledge base has {} issue(s): {}",
            status.issues.len(),
            status.issues.join("; ")
        ));
    }
    println!(
        "OK ({} topics, {} keywords)",
        status.topic_count, status.keyword_count
    );

    if config.frontend_enabled {
        let index = frontend_root_dir().join("index.html");
        print!("Checking frontend... ");
        if !index.exists() {
            return Err(format!("frontend enabled but {} is missing", index.display()));
        }
        println!("OK");
    }

    let addr = config
        .socket_addr()
        .map_err(|e| format!("bind_address '{}' invalid: {}", config.bind_address, e))?;
    print!("Checking {}... ", addr);
    match std::net::TcpListener::bind(addr) {
        Ok(listener) => {
            drop(listener);
            println!("OK (available)");
        }
        Err(e) => {
            return Err(format!("{} BLOCKED: {}", addr, e));
        }
    }

    println!("\nAll checks passed. Ready to start gateway.");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Load .env file if present (before any env::var calls)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("[portfolio-gateway] .env not loaded: {} (using system environment)", e);
    }

    if std::env::args().any(|a| a == "--verify") {
        match run_verify() {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("PRE-FLIGHT FAILED: {}", e);
                std::process::exit(1);
            }
        }
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Arc::new(CoreConfig::load()?);
    let knowledge = KnowledgeBase::builtin();
    let status = knowledge.verify();
    if !status.complete {
        tracing::warn!("Knowledge base issues: {}", status.issues.join("; "));
    }
    tracing::info!(
        "Knowledge base loaded: {} topics, {} keywords",
        status.topic_count,
        status.keyword_count
    );

    let state = AppState::new(Arc::clone(&config), AnswerResolver::new(knowledge));
    let app = build_app(state);

    let addr = config.socket_addr()?;
    tracing::info!("{} listening on http://{}", config.app_name, addr);
    if config.frontend_enabled {
        tracing::info!("Serving page from {}", frontend_root_dir().display());
    }
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn frontend_root_dir() -> PathBuf {
    // Prefer a working-directory relative path (run from workspace root).
    // Fall back to workspace-root-relative path from add-ons/portfolio-gateway.
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let from_cwd = cwd.join("portfolio-frontend");
    if from_cwd.exists() {
        return from_cwd;
    }

    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("portfolio-frontend")
}

fn build_app(state: AppState) -> Router {
    let frontend_enabled = state.config.frontend_enabled;

    // CORS: allow Backend/API (8001-8099) and Frontend/UI (3001-3099) port ranges.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(|origin: &axum::http::HeaderValue, _| {
            let s = origin.to_str().unwrap_or("");
            let port = s
                .rsplit(':')
                .next()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(0);
            (3001..=3099).contains(&port) || (8001..=8099).contains(&port)
        }))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any);

    let mut app = Router::new()
        .route("/v1/status", get(status))
        .route("/api/v1/health", get(health))
        .route("/api/v1/ask", post(handlers::ask))
        .route("/api/v1/topics", get(topics))
        .route("/api/v1/profile", get(profile))
        .with_state(state);

    if frontend_enabled {
        let frontend_dir = frontend_root_dir();
        let index_file = frontend_dir.join("index.html");
        let assets_dir = frontend_dir.join("assets");

        // Map `/` -> `portfolio-frontend/index.html`
        app = app.route_service("/", ServeFile::new(index_file));

        if assets_dir.exists() {
            app = app.nest_service("/assets", ServeDir::new(assets_dir));
        }

        // Map `/ui/*` -> `portfolio-frontend/*` (app.js and anything else next to the page)
        app = app.nest_service("/ui", ServeDir::new(frontend_dir));
    }

    app.layer(cors)
}

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: Arc<CoreConfig>,
    pub(crate) resolver: AnswerResolver,
    pub(crate) profile: Arc<Profile>,
}

impl AppState {
    pub(crate) fn new(config: Arc<CoreConfig>, resolver: AnswerResolver) -> Self {
        let profile = Arc::new(Profile::for_owner(&config.owner));
        Self {
            config,
            resolver,
            profile,
        }
    }
}

/// GET /api/v1/health – liveness check for the page and scripts.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// GET /v1/status – app identity from config.
async fn status(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "app_name": state.config.app_name,
        "owner": state.config.owner,
        "port": state.config.port,
        "frontend_enabled": state.config.frontend_enabled,
        "topic_count": state.resolver.knowledge().len(),
    }))
}

/// GET /api/v1/topics – topic names in match-priority order.
async fn topics(State(state): State<AppState>) -> Json<serde_json::Value> {
    let topics: Vec<serde_json::Value> = state
        .resolver
        .knowledge()
        .topics()
        .iter()
        .enumerate()
        .map(|(i, t)| {
            serde_json::json!({
                "priority": i + 1,
                "name": t.name,
                "keyword_count": t.keywords.len(),
            })
        })
        .collect();
    Json(serde_json::json!({ "topics": topics }))
}

/// GET /api/v1/profile – page content rendered by the frontend.
async fn profile(State(state): State<AppState>) -> Json<Profile> {
    Json(Profile::clone(&state.profile))
}
