use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Employee, Shift};

/// Raw shift form submission. Kept untyped so every field error can be reported at once.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct ShiftSubmission(pub serde_json::Value);

/// Input for filtering a roster down to the employees able to work a shift
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MatchCandidatesInput {
    pub shift: Shift,
    pub roster: Vec<Employee>,
}

/// Input for projecting shifts onto the calendar, optionally limited to a date window
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProjectCalendarInput {
    pub shifts: Vec<Shift>,
    #[serde(default)]
    pub from: Option<NaiveDate>,
    #[serde(default)]
    pub to: Option<NaiveDate>,
}
