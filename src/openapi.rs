use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shift Scheduler API",
        version = "0.1.0",
        description = "Stateless scheduling rules for medical-transport shifts: validation, candidate matching, swap review and calendar projection"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server"),
    ),
    paths(
        // Health
        crate::handlers::health::health_check,

        // Shifts
        crate::handlers::shifts_handler::validate_shift,
        crate::handlers::shifts_handler::match_candidates,

        // Calendar
        crate::handlers::calendar_handler::get_calendar_events,

        // Swaps
        crate::handlers::swaps_handler::submit_swap_request,
        crate::handlers::swaps_handler::resolve_swap_request,
        crate::handlers::swaps_handler::get_pending_swaps,
        crate::handlers::swaps_handler::get_swap_summary,
    ),
    components(
        schemas(
            // Core models
            crate::models::Shift,
            crate::models::ShiftDetails,
            crate::models::ShiftStatus,
            crate::models::ShiftType,
            crate::models::VehicleType,
            crate::models::RoleRequirement,
            crate::models::Employee,
            crate::models::CalendarEvent,
            crate::models::ColorTag,
            crate::models::SwapRequest,
            crate::models::SwapState,
            crate::models::SwapStatus,
            crate::models::SwapSummary,
            crate::scheduling::FieldError,

            // Input models
            crate::models::ShiftSubmission,
            crate::models::MatchCandidatesInput,
            crate::models::ProjectCalendarInput,
            crate::models::SubmitSwapInput,
            crate::models::SwapDecision,
            crate::models::SwapOutcome,
            crate::models::ResolveSwapInput,
        )
    ),
    tags(
        (name = "health", description = "Health check"),
        (name = "shifts", description = "Shift validation and candidate matching"),
        (name = "calendar", description = "Calendar projection"),
        (name = "swaps", description = "Shift swap review workflow"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/health",
            "/api/shifts/validate",
            "/api/shifts/candidates",
            "/api/calendar/events",
            "/api/swaps",
            "/api/swaps/resolve",
            "/api/swaps/pending",
            "/api/swaps/summary",
        ] {
            assert!(paths.contains(&expected), "missing {}", expected);
        }
    }
}
