use route_server::config::ServerConfig;
use route_server::estimate::RouteEstimator;
use route_server::journeys::bhubaneswar_landmarks;
use route_server::ratelimit::RateLimiter;
use route_server::web::{AppState, create_router};
use std::net::SocketAddr;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "route_server=info,tower_http=info";

#[tokio::main]
async fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::from_env().unwrap_or_else(|e| {
        error!("Invalid configuration: {e}");
        std::process::exit(1);
    });

    let landmarks = bhubaneswar_landmarks();
    info!(
        landmarks = landmarks.len(),
        roads = landmarks.road_count(),
        "Loaded landmark graph"
    );

    let state = AppState::new(
        RouteEstimator::new(config.estimator.clone()),
        landmarks,
        RateLimiter::new(&config.rate_limit),
    );
    let app = create_router(state);

    let addr = config.bind_addr;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| {
            error!("Failed to bind {addr}: {e}");
            std::process::exit(1);
        });

    info!("Route estimator listening on http://{addr}");
    info!(
        max_requests = config.rate_limit.max_requests,
        window_secs = config.rate_limit.window_secs,
        trust_forwarded_for = config.rate_limit.trust_forwarded_for,
        "API rate limit"
    );
    info!("  GET  /health                      - Health check");
    info!("  POST /api/routes/calculate        - Estimate a route");
    info!("  POST /api/routes/pricing          - Price every mode");
    info!("  POST /api/routes/recommendations  - Rank modes");
    info!("  GET  /api/journeys/landmarks      - List landmarks");
    info!("  GET  /api/journeys/special        - Landmark to landmark path");

    let service = app.into_make_service_with_connect_info::<SocketAddr>();
    if let Err(e) = axum::serve(listener, service).await {
        error!("Server error: {e}");
        std::process::exit(1);
    }
}
