use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::SwapRequest;

/// Input for an employee asking to trade their shift for another window
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitSwapInput {
    pub employee_id: String,
    pub employee_name: String,
    pub current_shift_id: Uuid,
    pub current_shift_date: NaiveDate,
    pub current_shift_time: String,
    /// `YYYY-MM-DD`
    pub proposed_date: String,
    /// `HH:MM`
    pub proposed_start_time: String,
    /// `HH:MM`
    pub proposed_end_time: String,
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SwapOutcome {
    Approved,
    Rejected,
}

/// Reviewer decision on a pending swap request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SwapDecision {
    pub outcome: SwapOutcome,
    pub reviewer_id: String,
    pub reviewer_name: String,
    #[serde(default)]
    pub rejection_reason: Option<String>,
}

/// Input for resolving a swap request; the service keeps no copy of the request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResolveSwapInput {
    pub request: SwapRequest,
    pub decision: SwapDecision,
}
