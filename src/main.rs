//! Cyber risk assessment API server.

use std::error::Error;
use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cyber_risk_assessment::adapters::http::{assessment_router, AssessmentAppState};
use cyber_risk_assessment::adapters::storage::{FileResponseStore, InMemoryResponseStore};
use cyber_risk_assessment::config::{AppConfig, ServerConfig, StorageBackend};
use cyber_risk_assessment::domain::catalog::Catalog;
use cyber_risk_assessment::ports::ResponseStore;

type BoxError = Box<dyn Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let catalog = Arc::new(load_catalog(&config).await?);
    let store = build_store(&config)?;
    let state = AssessmentAppState::new(catalog.clone(), store);

    let app = assessment_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.server));

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        %addr,
        environment = ?config.server.environment,
        questions = catalog.len(),
        "Cyber risk assessment API listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn load_catalog(config: &AppConfig) -> Result<Catalog, BoxError> {
    match &config.assessment.catalog_path {
        Some(path) => {
            let yaml = tokio::fs::read_to_string(path).await?;
            let catalog = Catalog::from_yaml_str(&yaml)?;
            info!(path = %path.display(), questions = catalog.len(), "Loaded catalog override");
            Ok(catalog)
        }
        None => Ok(Catalog::standard().clone()),
    }
}

fn build_store(config: &AppConfig) -> Result<Arc<dyn ResponseStore>, BoxError> {
    let store: Arc<dyn ResponseStore> = match config.storage.backend()? {
        StorageBackend::Memory => {
            if config.is_production() {
                warn!("In-memory response store loses assessments on restart");
            }
            Arc::new(InMemoryResponseStore::new())
        }
        StorageBackend::File => {
            info!(data_dir = %config.storage.data_dir.display(), "Using file response store");
            Arc::new(FileResponseStore::new(&config.storage.data_dir))
        }
    };
    Ok(store)
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .allowed_origins()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
}
