use axum::Json;
use chrono::Utc;
use metrics::counter;
use uuid::Uuid;

use crate::{
    extractors::AppJson,
    models::{ResolveSwapInput, SubmitSwapInput, SwapRequest, SwapSummary},
    scheduling::swap,
    AppResult,
};

/// POST /api/swaps - Submit a swap request
#[utoipa::path(
    post,
    path = "/api/swaps",
    request_body = SubmitSwapInput,
    responses(
        (status = 200, description = "Pending swap request", body = SwapRequest),
        (status = 422, description = "Field-level validation errors")
    ),
    tag = "swaps"
)]
pub async fn submit_swap_request(AppJson(input): AppJson<SubmitSwapInput>) -> AppResult<Json<SwapRequest>> {
    let request = swap::submit(Uuid::new_v4(), &input, Utc::now())?;

    tracing::info!(
        swap_id = %request.id,
        employee_id = %request.employee_id,
        current_shift_id = %request.current_shift_id,
        "Swap request submitted"
    );

    Ok(Json(request))
}

/// POST /api/swaps/resolve - Approve or reject a pending swap request
#[utoipa::path(
    post,
    path = "/api/swaps/resolve",
    request_body = ResolveSwapInput,
    responses(
        (status = 200, description = "Resolved swap request", body = SwapRequest),
        (status = 409, description = "Request is already resolved"),
        (status = 422, description = "Missing reviewer or rejection reason too short")
    ),
    tag = "swaps"
)]
pub async fn resolve_swap_request(AppJson(input): AppJson<ResolveSwapInput>) -> AppResult<Json<SwapRequest>> {
    let resolved = swap::resolve(&input.request, &input.decision, Utc::now()).map_err(|e| {
        tracing::warn!(swap_id = %input.request.id, error = %e, "Swap resolution refused");
        e
    })?;

    let outcome = resolved.status().to_string();
    counter!("swap_resolutions_total", "outcome" => outcome.clone()).increment(1);
    tracing::info!(
        swap_id = %resolved.id,
        reviewer_id = %input.decision.reviewer_id,
        outcome = %outcome,
        "Swap request resolved"
    );

    Ok(Json(resolved))
}

/// POST /api/swaps/pending - Approval queue, oldest first
#[utoipa::path(
    post,
    path = "/api/swaps/pending",
    request_body = Vec<SwapRequest>,
    responses(
        (status = 200, description = "Pending requests sorted by submission date", body = Vec<SwapRequest>)
    ),
    tag = "swaps"
)]
pub async fn get_pending_swaps(AppJson(requests): AppJson<Vec<SwapRequest>>) -> AppResult<Json<Vec<SwapRequest>>> {
    Ok(Json(swap::pending_queue(&requests)))
}

/// POST /api/swaps/summary - Counts by status for the approvals dashboard
#[utoipa::path(
    post,
    path = "/api/swaps/summary",
    request_body = Vec<SwapRequest>,
    responses(
        (status = 200, description = "Swap request counts", body = SwapSummary)
    ),
    tag = "swaps"
)]
pub async fn get_swap_summary(AppJson(requests): AppJson<Vec<SwapRequest>>) -> AppResult<Json<SwapSummary>> {
    Ok(Json(swap::summarize(&requests)))
}
