use diesel::r2d2::{ConnectionManager, Pool};
use diesel::PgConnection;
use dotenvy::dotenv;
use http::HeaderValue;
use std::{env, net::SocketAddr, sync::Arc};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};
use url::Url;
use villagestay::app::create_router;
use villagestay::logging::setup_logging;
use villagestay::models::AppState;

#[tokio::main]
async fn main() -> Result<(), eyre::Error> {
    setup_logging();

    info!("Starting VillageStay application");

    dotenv().ok();
    let db_url = env::var("DATABASE_URL").map_err(|_| eyre::eyre!("DATABASE_URL must be set"))?;

    let jwt_secret = env::var("JWT_SECRET").map_err(|_| eyre::eyre!("JWT_SECRET must be set"))?;
    if jwt_secret.len() < 32 {
        return Err(eyre::eyre!("JWT_SECRET must be at least 32 characters long"));
    }

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());

    let cors_origins = env::var("CORS_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:5173".to_string())
        .split(',')
        .map(|s| s.trim().to_string())
        .collect::<Vec<String>>();

    info!("cors origins: {:?}", cors_origins);

    let manager = ConnectionManager::<PgConnection>::new(db_url);
    let pool = Pool::builder().max_size(10).build(manager).map_err(|e| {
        error!("Failed to create database pool: {}", e);
        eyre::eyre!("Failed to create database pool: {}", e)
    })?;

    let state = Arc::new(AppState {
        db: pool,
        jwt_secret,
    });

    let mut origins = Vec::new();
    for origin in &cors_origins {
        if Url::parse(origin).is_err() {
            warn!("Skipping invalid CORS origin: {}", origin);
            continue;
        }
        match origin.parse::<HeaderValue>() {
            Ok(value) => origins.push(value),
            Err(e) => warn!("Skipping unparsable CORS origin {}: {}", origin, e),
        }
    }

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any);

    let app = create_router(state).layer(cors);

    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .map_err(|e| eyre::eyre!("Invalid HOST/PORT: {}", e))?;

    let listener = TcpListener::bind(addr).await.map_err(|e| {
        error!("Failed to bind {}: {}", addr, e);
        eyre::eyre!("Failed to bind {}: {}", addr, e)
    })?;

    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
