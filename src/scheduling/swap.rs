use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use super::errors::{SchedulingError, ValidationErrors};
use crate::models::{hh_mm, SubmitSwapInput, SwapDecision, SwapOutcome, SwapRequest, SwapState, SwapSummary};

/// Shortest rejection reason a reviewer may give
pub const MIN_REJECTION_REASON_LEN: usize = 10;

/// Create a pending swap request from an employee's submission.
pub fn submit(
    id: Uuid,
    input: &SubmitSwapInput,
    submitted_at: DateTime<Utc>,
) -> Result<SwapRequest, SchedulingError> {
    let mut errors = ValidationErrors::new();

    if input.employee_id.trim().is_empty() {
        errors.push("employeeId", "Employee is required");
    }
    if input.reason.trim().is_empty() {
        errors.push("reason", "Please give a reason for the swap");
    }

    let proposed_date = NaiveDate::parse_from_str(input.proposed_date.trim(), "%Y-%m-%d").ok();
    if proposed_date.is_none() {
        errors.push("proposedDate", "Proposed date must be a valid date (YYYY-MM-DD)");
    }
    let proposed_start_time = hh_mm::parse(&input.proposed_start_time);
    if proposed_start_time.is_none() {
        errors.push("proposedStartTime", "Proposed start time must be a valid time (HH:MM)");
    }
    let proposed_end_time = hh_mm::parse(&input.proposed_end_time);
    if proposed_end_time.is_none() {
        errors.push("proposedEndTime", "Proposed end time must be a valid time (HH:MM)");
    }

    let (Some(proposed_date), Some(proposed_start_time), Some(proposed_end_time)) =
        (proposed_date, proposed_start_time, proposed_end_time)
    else {
        return Err(errors.into());
    };
    if !errors.is_empty() {
        return Err(errors.into());
    }

    Ok(SwapRequest {
        id,
        employee_id: input.employee_id.trim().to_string(),
        employee_name: input.employee_name.trim().to_string(),
        current_shift_id: input.current_shift_id,
        current_shift_date: input.current_shift_date,
        current_shift_time: input.current_shift_time.clone(),
        proposed_date,
        proposed_start_time,
        proposed_end_time,
        reason: input.reason.trim().to_string(),
        submitted_date: submitted_at,
        state: SwapState::Pending,
    })
}

/// Approve or reject a pending request. Resolved requests are terminal.
///
/// The referenced shift's roster is left alone; applying an approved swap is
/// the dispatcher's job.
pub fn resolve(
    request: &SwapRequest,
    decision: &SwapDecision,
    reviewed_at: DateTime<Utc>,
) -> Result<SwapRequest, SchedulingError> {
    if !request.is_pending() {
        return Err(SchedulingError::InvalidTransition {
            id: request.id,
            status: request.status(),
        });
    }

    let mut errors = ValidationErrors::new();
    let reviewer_id = decision.reviewer_id.trim();
    let reviewer_name = decision.reviewer_name.trim();
    if reviewer_id.is_empty() {
        errors.push("reviewerId", "Reviewer is required");
    }
    if reviewer_name.is_empty() {
        errors.push("reviewerName", "Reviewer name is required");
    }

    let rejection_reason = decision
        .rejection_reason
        .as_deref()
        .map(str::trim)
        .unwrap_or_default();
    if decision.outcome == SwapOutcome::Rejected && rejection_reason.chars().count() < MIN_REJECTION_REASON_LEN {
        errors.push(
            "rejectionReason",
            format!("Rejection reason must be at least {} characters", MIN_REJECTION_REASON_LEN),
        );
    }

    if !errors.is_empty() {
        return Err(errors.into());
    }

    let state = match decision.outcome {
        SwapOutcome::Approved => SwapState::Approved {
            reviewed_date: reviewed_at,
            reviewer_id: reviewer_id.to_string(),
            reviewer_name: reviewer_name.to_string(),
        },
        SwapOutcome::Rejected => SwapState::Rejected {
            reviewed_date: reviewed_at,
            reviewer_id: reviewer_id.to_string(),
            reviewer_name: reviewer_name.to_string(),
            rejection_reason: rejection_reason.to_string(),
        },
    };

    Ok(SwapRequest {
        state,
        ..request.clone()
    })
}

/// Pending requests awaiting review, oldest submission first.
pub fn pending_queue(requests: &[SwapRequest]) -> Vec<SwapRequest> {
    let mut pending: Vec<SwapRequest> = requests.iter().filter(|r| r.is_pending()).cloned().collect();
    pending.sort_by_key(|r| r.submitted_date);
    pending
}

pub fn summarize(requests: &[SwapRequest]) -> SwapSummary {
    requests.iter().fold(SwapSummary::default(), |mut summary, request| {
        summary.total += 1;
        match request.state {
            SwapState::Pending => summary.pending += 1,
            SwapState::Approved { .. } => summary.approved += 1,
            SwapState::Rejected { .. } => summary.rejected += 1,
        }
        summary
    })
}
