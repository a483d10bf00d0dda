use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;

use super::hh_mm;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SwapStatus {
    Pending,
    Approved,
    Rejected,
}

impl fmt::Display for SwapStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwapStatus::Pending => write!(f, "pending"),
            SwapStatus::Approved => write!(f, "approved"),
            SwapStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// Review state of a swap request. Reviewer fields exist only once resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SwapState {
    Pending,
    Approved {
        #[serde(rename = "reviewedDate")]
        reviewed_date: DateTime<Utc>,
        #[serde(rename = "reviewerId")]
        reviewer_id: String,
        #[serde(rename = "reviewerName")]
        reviewer_name: String,
    },
    Rejected {
        #[serde(rename = "reviewedDate")]
        reviewed_date: DateTime<Utc>,
        #[serde(rename = "reviewerId")]
        reviewer_id: String,
        #[serde(rename = "reviewerName")]
        reviewer_name: String,
        #[serde(rename = "rejectionReason")]
        rejection_reason: String,
    },
}

impl SwapState {
    pub fn status(&self) -> SwapStatus {
        match self {
            SwapState::Pending => SwapStatus::Pending,
            SwapState::Approved { .. } => SwapStatus::Approved,
            SwapState::Rejected { .. } => SwapStatus::Rejected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SwapRequest {
    pub id: Uuid,
    pub employee_id: String,
    pub employee_name: String,
    pub current_shift_id: Uuid,
    pub current_shift_date: NaiveDate,
    /// Display string of the current shift's hours, e.g. `08:00 - 16:00`
    pub current_shift_time: String,
    pub proposed_date: NaiveDate,
    #[serde(with = "hh_mm")]
    #[schema(value_type = String, example = "22:00")]
    pub proposed_start_time: NaiveTime,
    #[serde(with = "hh_mm")]
    #[schema(value_type = String, example = "06:00")]
    pub proposed_end_time: NaiveTime,
    pub reason: String,
    pub submitted_date: DateTime<Utc>,
    #[serde(flatten)]
    pub state: SwapState,
}

impl SwapRequest {
    pub fn status(&self) -> SwapStatus {
        self.state.status()
    }

    pub fn is_pending(&self) -> bool {
        self.status() == SwapStatus::Pending
    }
}

/// Counts of swap requests by status, for the approvals dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SwapSummary {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}
