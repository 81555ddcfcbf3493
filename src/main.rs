//! Civiscore server binary.
//!
//! Loads configuration, connects to PostgreSQL, wires the repositories
//! into the HTTP layer, and serves the API.

use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderValue, Method};
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use civiscore::adapters::http::{
    api_router, AppStates, LeaderAppState, NotificationAppState, PollAppState, RatingAppState,
    SettingsAppState, SupportAppState, UserAppState,
};
use civiscore::adapters::postgres::{
    PostgresCommentRepository, PostgresLeaderRepository, PostgresNotificationRepository,
    PostgresPollRepository, PostgresRatingRepository, PostgresSettingsRepository,
    PostgresSupportRepository, PostgresUserRepository,
};
use civiscore::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .init();

    tracing::info!(
        environment = ?config.server.environment,
        addr = %config.server.socket_addr(),
        "starting civiscore"
    );

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .max_lifetime(config.database.max_lifetime())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        tracing::info!("running migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    let users = Arc::new(PostgresUserRepository::new(pool.clone()));
    let leaders = Arc::new(PostgresLeaderRepository::new(pool.clone()));
    let ratings = Arc::new(PostgresRatingRepository::new(pool.clone()));
    let comments = Arc::new(PostgresCommentRepository::new(pool.clone()));
    let polls = Arc::new(PostgresPollRepository::new(pool.clone()));
    let notifications = Arc::new(PostgresNotificationRepository::new(pool.clone()));
    let settings = Arc::new(PostgresSettingsRepository::new(pool.clone()));
    let tickets = Arc::new(PostgresSupportRepository::new(pool));

    let states = AppStates {
        users: UserAppState {
            users: users.clone(),
        },
        leaders: LeaderAppState {
            leaders: leaders.clone(),
            notifications: notifications.clone(),
        },
        ratings: RatingAppState {
            ratings,
            comments,
            leaders,
        },
        polls: PollAppState {
            polls,
            users,
            notifications: notifications.clone(),
        },
        notifications: NotificationAppState {
            notifications: notifications.clone(),
        },
        settings: SettingsAppState { settings },
        support: SupportAppState {
            tickets,
            notifications,
        },
    };

    let cors = cors_layer(&config);
    let app = api_router(states)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let listener = tokio::net::TcpListener::bind(config.server.socket_addr()).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Builds the CORS layer: explicit origins when configured, otherwise
/// permissive outside production.
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins = config.server.cors_origins_list();
    if origins.is_empty() {
        if config.is_production() {
            CorsLayer::new()
        } else {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(parsed))
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers(Any)
    }
}
