use axum::{
    extract::Request,
    http::{header, Method},
    middleware,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

use crate::{handlers, middleware as mw, openapi::ApiDoc};

pub fn build_router(state: Arc<crate::AppState>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(state.config.cors_allowed_origin.clone())
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true);

    // One span per request; the request_id field is filled in by middleware
    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request| {
        tracing::info_span!(
            "http_request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = tracing::field::Empty,
        )
    });

    // Shift routes
    let shift_routes = Router::new()
        .route("/validate", post(handlers::shifts_handler::validate_shift))
        .route("/candidates", post(handlers::shifts_handler::match_candidates));

    // Calendar routes
    let calendar_routes = Router::new().route("/events", post(handlers::calendar_handler::get_calendar_events));

    // Swap routes
    let swap_routes = Router::new()
        .route("/", post(handlers::swaps_handler::submit_swap_request))
        .route("/resolve", post(handlers::swaps_handler::resolve_swap_request))
        .route("/pending", post(handlers::swaps_handler::get_pending_swaps))
        .route("/summary", post(handlers::swaps_handler::get_swap_summary));

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics_handler))
        .nest("/api/shifts", shift_routes)
        .nest("/api/calendar", calendar_routes)
        .nest("/api/swaps", swap_routes)
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .route("/swagger-ui", get(swagger_ui))
        .layer(middleware::from_fn(mw::request_id_middleware))
        .layer(middleware::from_fn(mw::metrics_middleware))
        .layer(trace)
        .layer(cors)
        .with_state(state)
}

async fn swagger_ui() -> Html<&'static str> {
    Html(r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Shift Scheduler API Documentation</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-standalone-preset.js"></script>
    <script>
        window.onload = () => {
            window.ui = SwaggerUIBundle({
                url: '/api-docs/openapi.json',
                dom_id: '#swagger-ui',
                presets: [
                    SwaggerUIBundle.presets.apis,
                    SwaggerUIStandalonePreset
                ],
                layout: "StandaloneLayout"
            });
        };
    </script>
</body>
</html>
    "#)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{handlers::metrics::detached_metrics_state, AppConfig, AppState};
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_app() -> Router {
        let state = Arc::new(AppState {
            config: AppConfig::from_values("127.0.0.1:0", "http://localhost:3000").unwrap(),
            metrics: Arc::new(detached_metrics_state()),
        });
        build_router(state)
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    fn ambulance_submission() -> Value {
        json!({
            "shiftType": "open",
            "shiftDate": "2024-03-14",
            "startTime": "22:00",
            "endTime": "06:00",
            "workLocation": "Station 12",
            "hasVehicleRequirements": true,
            "vehicleTypes": ["ambulance"],
            "roleRequirements": [{ "role": "Paramedic", "quantity": 2 }]
        })
    }

    fn swap_submission() -> Value {
        json!({
            "employeeId": "e2",
            "employeeName": "Dana Ortiz",
            "currentShiftId": "00000000-0000-0000-0000-00000000000b",
            "currentShiftDate": "2024-06-10",
            "currentShiftTime": "08:00 - 16:00",
            "proposedDate": "2024-06-12",
            "proposedStartTime": "08:00",
            "proposedEndTime": "16:00",
            "reason": "Training day"
        })
    }

    #[tokio::test]
    async fn health_reports_ok_with_request_id() {
        let response = test_app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(mw::REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn validate_then_match_then_project() {
        let (status, shift) = post_json(test_app(), "/api/shifts/validate", ambulance_submission()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(shift["status"], "draft");
        assert!(shift["id"].is_string());

        let roster = json!([
            { "id": "e1", "name": "Sam", "vehicleTypes": ["van"] },
            { "id": "e2", "name": "Dana", "vehicleTypes": ["ambulance"] }
        ]);
        let (status, candidates) = post_json(
            test_app(),
            "/api/shifts/candidates",
            json!({ "shift": shift.clone(), "roster": roster }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(candidates.as_array().unwrap().len(), 1);
        assert_eq!(candidates[0]["id"], "e2");

        let (status, events) = post_json(test_app(), "/api/calendar/events", json!({ "shifts": [shift] })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(events[0]["start"], "2024-03-14T22:00:00");
        assert_eq!(events[0]["end"], "2024-03-15T06:00:00");
        assert_eq!(events[0]["colorTag"], "blue");
    }

    #[tokio::test]
    async fn invalid_submission_lists_field_errors() {
        let mut raw = ambulance_submission();
        raw["vehicleTypes"] = json!([]);
        raw["workLocation"] = json!("");

        let (status, body) = post_json(test_app(), "/api/shifts/validate", raw).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let fields: Vec<&str> = body["fields"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, vec!["workLocation", "vehicleTypes"]);
    }

    #[tokio::test]
    async fn inverted_calendar_window_is_a_bad_request() {
        let (status, _) = post_json(
            test_app(),
            "/api/calendar/events",
            json!({ "shifts": [], "from": "2024-03-10", "to": "2024-03-01" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn malformed_body_reports_a_json_error() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/swaps/summary")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["error"].is_string());

        let (status, body) = post_json(test_app(), "/api/swaps", json!({ "employeeId": 7 })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn swap_lifecycle_over_http() {
        let (status, pending) = post_json(test_app(), "/api/swaps", swap_submission()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(pending["status"], "pending");

        let (status, short) = post_json(
            test_app(),
            "/api/swaps/resolve",
            json!({
                "request": pending.clone(),
                "decision": { "outcome": "rejected", "reviewerId": "sup-1", "reviewerName": "Morgan", "rejectionReason": "No cover" }
            }),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(short["fields"][0]["field"], "rejectionReason");

        let (status, approved) = post_json(
            test_app(),
            "/api/swaps/resolve",
            json!({
                "request": pending.clone(),
                "decision": { "outcome": "approved", "reviewerId": "sup-1", "reviewerName": "Morgan" }
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(approved["status"], "approved");
        assert_eq!(approved["reviewerId"], "sup-1");
        assert!(approved["reviewedDate"].is_string());

        let (status, _) = post_json(
            test_app(),
            "/api/swaps/resolve",
            json!({
                "request": approved.clone(),
                "decision": { "outcome": "approved", "reviewerId": "sup-2", "reviewerName": "Alex" }
            }),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, summary) = post_json(test_app(), "/api/swaps/summary", json!([pending.clone(), approved])).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(summary, json!({ "total": 2, "pending": 1, "approved": 1, "rejected": 0 }));

        let (status, queue) = post_json(test_app(), "/api/swaps/pending", json!([pending.clone()])).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(queue[0]["id"], pending["id"]);
    }

    #[tokio::test]
    async fn openapi_document_is_served() {
        let response = test_app()
            .oneshot(Request::builder().uri("/api-docs/openapi.json").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
