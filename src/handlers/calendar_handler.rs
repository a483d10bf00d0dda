use axum::Json;

use crate::{
    extractors::AppJson,
    models::{CalendarEvent, ProjectCalendarInput},
    scheduling,
    AppError, AppResult,
};

/// POST /api/calendar/events - Project shifts onto the calendar
#[utoipa::path(
    post,
    path = "/api/calendar/events",
    request_body = ProjectCalendarInput,
    responses(
        (status = 200, description = "Calendar events, optionally limited to the from/to window", body = Vec<CalendarEvent>),
        (status = 400, description = "Window starts after it ends")
    ),
    tag = "calendar"
)]
pub async fn get_calendar_events(
    AppJson(input): AppJson<ProjectCalendarInput>,
) -> AppResult<Json<Vec<CalendarEvent>>> {
    if let (Some(from), Some(to)) = (input.from, input.to) {
        if from > to {
            return Err(AppError::BadRequest(format!(
                "Window start {} is after window end {}",
                from, to
            )));
        }
    }

    let events = scheduling::events_in_window(scheduling::project(&input.shifts), input.from, input.to);

    tracing::debug!(
        shifts = input.shifts.len(),
        events = events.len(),
        from = ?input.from,
        to = ?input.to,
        "Projected shifts onto calendar"
    );

    Ok(Json(events))
}
