use axum::Json;
use metrics::counter;
use uuid::Uuid;

use crate::{
    extractors::AppJson,
    models::{Employee, MatchCandidatesInput, Shift, ShiftSubmission},
    scheduling,
    AppResult,
};

/// POST /api/shifts/validate - Validate a shift form submission
#[utoipa::path(
    post,
    path = "/api/shifts/validate",
    request_body = ShiftSubmission,
    responses(
        (status = 200, description = "Submission is valid; returns the draft shift with a new id", body = Shift),
        (status = 422, description = "Field-level validation errors")
    ),
    tag = "shifts"
)]
pub async fn validate_shift(AppJson(submission): AppJson<ShiftSubmission>) -> AppResult<Json<Shift>> {
    let shift_id = Uuid::new_v4();

    let shift = scheduling::validate_shift(shift_id, &submission.0).map_err(|errors| {
        counter!("shift_validations_total", "outcome" => "rejected").increment(1);
        tracing::debug!(error_count = errors.len(), "Shift submission rejected");
        errors
    })?;

    counter!("shift_validations_total", "outcome" => "accepted").increment(1);
    tracing::info!(
        shift_id = %shift.id,
        shift_type = %shift.shift_type(),
        shift_date = %shift.shift_date,
        duration_minutes = shift.duration_minutes(),
        overnight = shift.is_overnight(),
        "Shift submission validated"
    );

    Ok(Json(shift))
}

/// POST /api/shifts/candidates - Employees able to work a shift
#[utoipa::path(
    post,
    path = "/api/shifts/candidates",
    request_body = MatchCandidatesInput,
    responses(
        (status = 200, description = "Roster filtered by shared vehicle capability, in roster order", body = Vec<Employee>)
    ),
    tag = "shifts"
)]
pub async fn match_candidates(AppJson(input): AppJson<MatchCandidatesInput>) -> AppResult<Json<Vec<Employee>>> {
    let candidates = scheduling::matching_employees(&input.shift, &input.roster);

    tracing::debug!(
        shift_id = %input.shift.id,
        roster_size = input.roster.len(),
        candidates = candidates.len(),
        "Matched shift candidates"
    );

    Ok(Json(candidates))
}
