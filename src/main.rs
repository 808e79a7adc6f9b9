//! Salomão backend server entry point.
//!
//! Loads configuration from the environment, connects to PostgreSQL,
//! wires the use case handlers to their adapters and serves the REST
//! API over axum.

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use axum::{middleware, Router};
use secrecy::Secret;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use salomao::adapters::ai::{OpenAIConfig, OpenAIGenerator};
use salomao::adapters::auth::JwtTokenValidator;
use salomao::adapters::http::middleware::{auth_middleware, AuthState};
use salomao::adapters::http::{
    chat_routes, dashboard_routes, lead_routes, monitor_routes, system_routes, ChatHandlers,
    DashboardHandlers, LeadHandlers, MonitorState, SystemHandlers,
};
use salomao::adapters::postgres::{
    PostgresChatSessionRepository, PostgresLeadRepository, PostgresSystemRepository,
};
use salomao::application::handlers::chat::{
    GetChatSessionHandler, ProcessMessageHandler, StartChatHandler,
};
use salomao::application::handlers::dashboard::GetDashboardMetricsHandler;
use salomao::application::handlers::lead::ListLeadsHandler;
use salomao::application::handlers::system::{ListSystemsHandler, PublishSystemHandler};
use salomao::config::AppConfig;
use salomao::ports::{
    ArtifactGenerator, ChatSessionRepository, LeadRepository, SystemRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    config.validate()?;
    info!(
        environment = config.server.environment.as_str(),
        "Starting Salomão backend"
    );

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .max_lifetime(config.database.max_lifetime())
        .connect(&config.database.url)
        .await?;
    info!("Connected to PostgreSQL");

    // Persistence adapters
    let sessions: Arc<dyn ChatSessionRepository> =
        Arc::new(PostgresChatSessionRepository::new(pool.clone()));
    let systems: Arc<dyn SystemRepository> = Arc::new(PostgresSystemRepository::new(pool.clone()));
    let leads: Arc<dyn LeadRepository> = Arc::new(PostgresLeadRepository::new(pool));

    // Generation adapter
    let api_key = config.ai.openai_api_key.clone().unwrap_or_default();
    let openai_config = OpenAIConfig::new(api_key)
        .with_model(config.ai.model.clone())
        .with_base_url(config.ai.base_url.clone())
        .with_timeout(config.ai.timeout())
        .with_max_retries(config.ai.max_retries);
    let generator: Arc<dyn ArtifactGenerator> = Arc::new(OpenAIGenerator::new(openai_config));

    // Auth adapter
    let validator: AuthState = Arc::new(JwtTokenValidator::new(Secret::new(
        config.auth.jwt_secret.clone(),
    )));

    // Use case handlers
    let start_handler = Arc::new(StartChatHandler::new(sessions.clone()));
    let process_handler = Arc::new(ProcessMessageHandler::new(
        sessions.clone(),
        generator.clone(),
    ));
    let get_handler = Arc::new(GetChatSessionHandler::new(sessions.clone()));
    let publish_handler = Arc::new(PublishSystemHandler::new(
        sessions,
        systems.clone(),
        generator,
    ));
    let list_systems_handler = Arc::new(ListSystemsHandler::new(systems.clone()));
    let list_leads_handler = Arc::new(ListLeadsHandler::new(leads.clone()));
    let metrics_handler = Arc::new(GetDashboardMetricsHandler::new(systems, leads));

    let chat_handlers = ChatHandlers::new(start_handler, process_handler, get_handler);
    let system_handlers = SystemHandlers::new(publish_handler, list_systems_handler);
    let lead_handlers = LeadHandlers::new(list_leads_handler);
    let dashboard_handlers = DashboardHandlers::new(metrics_handler);
    let monitor_state = MonitorState {
        environment: config.server.environment.as_str().to_string(),
    };

    let cors = {
        let origins: Vec<HeaderValue> = config
            .server
            .cors_origins_list()
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        if origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        }
    };

    let app = Router::new()
        .nest("/api/chat", chat_routes(chat_handlers))
        .nest("/api/systems", system_routes(system_handlers))
        .nest("/api/leads", lead_routes(lead_handlers))
        .nest("/api/dashboard", dashboard_routes(dashboard_handlers))
        .nest("/api/monitor", monitor_routes(monitor_state))
        .layer(middleware::from_fn_with_state(validator, auth_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors);

    let addr = config.server.socket_addr();
    info!("Salomão listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
