use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use school_autocomplete::presentation::{ColorScheme, LayoutVariant, Palette, Viewport};
use school_autocomplete::{
    loader, Autocomplete, AutocompleteConfig, AutocompleteError, LoadState, School, Suggestions,
};

#[derive(Clone)]
struct AppState {
    engine: Arc<Autocomplete>,
}

#[derive(Debug, Deserialize)]
struct SuggestParams {
    #[serde(default)]
    q: String,
    limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct SelectRequest {
    query: String,
    #[serde(default)]
    highlighted: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct LayoutParams {
    width: u32,
    #[serde(default)]
    scheme: Option<String>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct StatusResponse {
    #[serde(flatten)]
    state: LoadState,
    source: Option<String>,
    loaded_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
struct LayoutResponse {
    variant: LayoutVariant,
    scheme: ColorScheme,
    palette: Palette,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "school_autocomplete_server=debug,school_autocomplete=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AutocompleteConfig::from_env();
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8090);

    tracing::info!("Starting school autocomplete server");
    tracing::info!("Dataset: {}", config.dataset_url);
    tracing::info!("Port: {}", port);

    let source = loader::source_for(&config.dataset_url, config.request_timeout_secs)?;
    let engine = Arc::new(Autocomplete::new(config));

    // Queries are served (empty) while the dataset loads
    let loading = Arc::clone(&engine);
    tokio::spawn(async move {
        if let Err(e) = loading.load(source.as_ref()).await {
            tracing::error!("Dataset unavailable: {}", e);
        }
    });

    let state = AppState { engine };

    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/v1/status", get(status_handler))
        .route("/v1/suggest", get(suggest_handler))
        .route("/v1/select", post(select_handler))
        .route("/v1/layout", get(layout_handler))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: school_autocomplete::VERSION.to_string(),
    })
}

async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    let catalog = state.engine.catalog();
    Json(StatusResponse {
        state: state.engine.state(),
        source: catalog.map(|c| c.source.clone()),
        loaded_at: catalog.map(|c| c.loaded_at),
    })
}

fn ensure_not_failed(engine: &Autocomplete) -> Result<(), AppError> {
    match engine.state() {
        LoadState::Failed { message } => Err(AppError::Unavailable(message)),
        _ => Ok(()),
    }
}

async fn suggest_handler(
    State(state): State<AppState>,
    Query(params): Query<SuggestParams>,
) -> Result<Json<Suggestions>, AppError> {
    ensure_not_failed(&state.engine)?;

    let mut suggestions = state.engine.suggest(&params.q);
    let limit = params
        .limit
        .unwrap_or(state.engine.config().display_limit)
        .min(state.engine.config().max_results);
    suggestions.matches.truncate(limit);

    Ok(Json(suggestions))
}

async fn select_handler(
    State(state): State<AppState>,
    Json(req): Json<SelectRequest>,
) -> Result<Json<School>, AppError> {
    ensure_not_failed(&state.engine)?;
    state.engine.require_catalog()?;

    let school = state
        .engine
        .commit(&req.query, req.highlighted)
        .ok_or_else(|| AppError::NoMatch(req.query.clone()))?;

    tracing::info!("{:?} -> {}", req.query, school.display_name());

    Ok(Json(school))
}

async fn layout_handler(Query(params): Query<LayoutParams>) -> Result<Json<LayoutResponse>, AppError> {
    let scheme = match params.scheme.as_deref() {
        Some(raw) => raw.parse::<ColorScheme>().map_err(AppError::BadRequest)?,
        None => ColorScheme::default(),
    };

    Ok(Json(LayoutResponse {
        variant: Viewport::new(params.width).variant(),
        scheme,
        palette: scheme.palette(),
    }))
}

// Error handling
enum AppError {
    Engine(AutocompleteError),
    Unavailable(String),
    NoMatch(String),
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Unavailable(message) => (
                StatusCode::SERVICE_UNAVAILABLE,
                format!("Dataset unavailable: {}", message),
            ),
            AppError::NoMatch(query) => {
                (StatusCode::NOT_FOUND, format!("No matches for: {}", query))
            }
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            AppError::Engine(AutocompleteError::NotLoaded) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Dataset still loading".to_string(),
            ),
            AppError::Engine(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        tracing::error!("Error: {} - {}", status, message);

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<AutocompleteError> for AppError {
    fn from(err: AutocompleteError) -> Self {
        AppError::Engine(err)
    }
}
