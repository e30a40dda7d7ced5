//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::de::DeserializeOwned;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::domain::DomainError;
use crate::journeys::{Algorithm, JourneyError, shortest_path};

use super::dto::*;
use super::middleware::rate_limit;
use super::state::AppState;

/// Create the application router.
///
/// Everything under `/api` is rate limited per client.
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/api/routes/calculate", post(calculate_route))
        .route("/api/routes/pricing", post(all_mode_pricing))
        .route("/api/routes/recommendations", post(recommend_modes))
        .route("/api/journeys/landmarks", get(list_landmarks))
        .route("/api/journeys/special", get(special_journey))
        .route_layer(axum::middleware::from_fn_with_state(state.limiter.clone(), rate_limit));

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Parse a JSON body, turning any failure into a 400.
fn parse_json<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        debug!(body = %String::from_utf8_lossy(body), "rejected request body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })
}

/// Estimate one route for one mode.
async fn calculate_route(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<RouteResponse>, AppError> {
    let req: CalculateRouteRequest = parse_json(&body)?;
    let request = req.into_route_request()?;

    let result = state.estimator.compute_route(&request);
    info!(
        route_id = %result.route_id,
        mode = %result.mode,
        distance_km = result.distance_km,
        "route estimated"
    );

    Ok(Json(RouteResponse::from_result(&result)))
}

/// Price every mode between two points.
async fn all_mode_pricing(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PricingResponse>, AppError> {
    let req: PointsRequest = parse_json(&body)?;
    let (from, to, time_of_day) = req.parse()?;

    let table = state
        .estimator
        .compute_all_mode_pricing(&from, &to, time_of_day);

    Ok(Json(PricingResponse::from_table(&table)))
}

/// Rank every mode between two points.
async fn recommend_modes(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let req: PointsRequest = parse_json(&body)?;
    let (from, to, time_of_day) = req.parse()?;

    let recs = state.estimator.recommendations(&from, &to, time_of_day);

    Ok(Json(RecommendationsResponse::from_recommendations(&recs)))
}

/// List the landmarks available for special journeys.
async fn list_landmarks(State(state): State<AppState>) -> Json<LandmarksResponse> {
    let landmarks = state
        .landmarks
        .landmarks()
        .into_iter()
        .map(LandmarkResult::from_landmark)
        .collect();

    Json(LandmarksResponse { landmarks })
}

/// Find the shortest road path between two landmarks.
async fn special_journey(
    State(state): State<AppState>,
    query: Result<Query<SpecialJourneyQuery>, QueryRejection>,
) -> Result<Json<SpecialJourneyResponse>, AppError> {
    let Query(query) = query?;
    let algorithm = query
        .algorithm
        .as_deref()
        .map(Algorithm::parse)
        .transpose()?
        .unwrap_or_default();

    let path = shortest_path(&state.landmarks, &query.from, &query.to, algorithm)?;
    debug!(
        from = %query.from,
        to = %query.to,
        %algorithm,
        nodes_explored = path.nodes_explored,
        "special journey found"
    );

    Ok(Json(SpecialJourneyResponse::from_path(&path)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<JourneyError> for AppError {
    fn from(e: JourneyError) -> Self {
        match e {
            JourneyError::UnknownAlgorithm(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            JourneyError::UnknownLandmark(_) | JourneyError::NoPath { .. } => {
                AppError::NotFound {
                    message: e.to_string(),
                }
            }
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(e: QueryRejection) -> Self {
        AppError::BadRequest {
            message: e.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::RouteEstimator;
    use crate::journeys::bhubaneswar_landmarks;
    use crate::ratelimit::{RateLimitConfig, RateLimiter};

    fn state() -> AppState {
        AppState::new(
            RouteEstimator::default(),
            bhubaneswar_landmarks(),
            RateLimiter::new(&RateLimitConfig::default()),
        )
    }

    fn body(json: &str) -> Bytes {
        Bytes::from(json.to_string())
    }

    fn special(
        from: &str,
        to: &str,
        algorithm: Option<&str>,
    ) -> Result<Query<SpecialJourneyQuery>, QueryRejection> {
        Ok(Query(SpecialJourneyQuery {
            from: from.to_string(),
            to: to.to_string(),
            algorithm: algorithm.map(str::to_string),
        }))
    }

    #[tokio::test]
    async fn calculate_auto_route() {
        let Json(route) = calculate_route(
            State(state()),
            body(
                r#"{
                    "fromCoords": [20.2961, 85.8245],
                    "toCoords": [20.2372, 85.8280],
                    "transportMode": "auto",
                    "timeOfDay": "normal",
                    "from": "Jaydev Vihar",
                    "to": "Lingaraj Temple"
                }"#,
            ),
        )
        .await
        .unwrap();

        assert_eq!(route.transport_mode, "auto");
        assert_eq!(route.route_preference, "fastest");
        assert_eq!(route.time_of_day, "normal");
        assert_eq!(route.distance.km, 6.56);
        assert_eq!(route.distance.display, "6.6 km");
        assert_eq!(route.cost.estimated, 104);
        assert_eq!(route.duration.travel, 16);
        assert_eq!(route.steps.first().unwrap(), "Start from Jaydev Vihar");
        assert_eq!(route.steps.last().unwrap(), "Arrive at Lingaraj Temple");
        assert_eq!(route.recommendations.len(), 3);
        assert!(uuid::Uuid::parse_str(&route.route_id).is_ok());
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request() {
        let err = calculate_route(State(state()), body("{ nope"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));

        let err = calculate_route(State(state()), body(""))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn missing_mode_is_bad_request() {
        let err = calculate_route(
            State(state()),
            body(r#"{ "fromCoords": [20.0, 85.0], "toCoords": [20.1, 85.1] }"#),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn unknown_mode_is_bad_request() {
        let err = calculate_route(
            State(state()),
            body(
                r#"{ "fromCoords": [20.0, 85.0], "toCoords": [20.1, 85.1], "transportMode": "rocket" }"#,
            ),
        )
        .await
        .unwrap_err();

        match err {
            AppError::BadRequest { message } => {
                assert_eq!(message, "unknown transport mode: rocket")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn out_of_range_coordinate_is_bad_request() {
        let err = calculate_route(
            State(state()),
            body(
                r#"{ "fromCoords": [91.0, 85.0], "toCoords": [20.1, 85.1], "transportMode": "car" }"#,
            ),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn pricing_covers_all_modes() {
        let Json(pricing) = all_mode_pricing(
            State(state()),
            body(
                r#"{ "fromCoords": [20.2961, 85.8245], "toCoords": [20.2372, 85.8280], "timeOfDay": "peak" }"#,
            ),
        )
        .await
        .unwrap();

        assert_eq!(pricing.time_of_day, "peak");
        assert_eq!(pricing.modes.len(), 6);
        assert_eq!(pricing.modes["walking"].cost.display, "Free");
        assert_eq!(pricing.modes["cycling"].cost.estimated, 0);
        let car = pricing.modes["car"].cost.estimated;
        assert!(car > pricing.modes["auto"].cost.estimated);
        assert_eq!(pricing.modes["auto"].label, "Auto-rickshaw");
    }

    #[tokio::test]
    async fn recommendations_ranked() {
        let Json(recs) = recommend_modes(
            State(state()),
            body(r#"{ "fromCoords": [20.2961, 85.8245], "toCoords": [20.2372, 85.8280] }"#),
        )
        .await
        .unwrap();

        assert_eq!(recs.ranking.len(), 6);
        assert_eq!(recs.top.len(), 3);
        assert!(
            recs.ranking
                .windows(2)
                .all(|pair| pair[0].score >= pair[1].score)
        );
        assert_eq!(recs.top[0].mode, recs.ranking[0].mode);
    }

    #[tokio::test]
    async fn landmarks_listed() {
        let Json(resp) = list_landmarks(State(state())).await;
        assert_eq!(resp.landmarks.len(), 11);
        assert!(resp.landmarks.iter().any(|l| l.id == "dhauli"));
    }

    #[tokio::test]
    async fn special_journey_found() {
        let Json(resp) = special_journey(
            State(state()),
            special("saheed_nagar", "airport", Some("astar")),
        )
        .await
        .unwrap();

        assert_eq!(resp.algorithm, "astar");
        assert_eq!(resp.path.first().unwrap().id, "saheed_nagar");
        assert_eq!(resp.path.last().unwrap().id, "airport");
        assert!(resp.nodes_explored > 0);
    }

    #[tokio::test]
    async fn special_journey_errors() {
        let err = special_journey(State(state()), special("nowhere", "airport", None))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));

        let err = special_journey(State(state()), special("kiit", "dhauli", None))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));

        let err = special_journey(State(state()), special("kiit", "airport", Some("bfs")))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn special_journey_missing_destination_is_bad_request() {
        let uri: axum::http::Uri = "/api/journeys/special?from=kiit".parse().unwrap();
        let query = Query::<SpecialJourneyQuery>::try_from_uri(&uri);
        assert!(query.is_err());

        let err = special_journey(State(state()), query).await.unwrap_err();
        match err {
            AppError::BadRequest { message } => assert!(message.contains("missing field `to`")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn error_status_codes() {
        let bad = AppError::BadRequest {
            message: "x".to_string(),
        };
        assert_eq!(bad.into_response().status(), StatusCode::BAD_REQUEST);

        let missing = AppError::from(JourneyError::UnknownLandmark("x".to_string()));
        assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);
    }
}
