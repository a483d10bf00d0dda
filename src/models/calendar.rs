use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Blue,
    Green,
}

/// Timeline entry projected from a shift. Recomputed on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: u64,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub title: String,
    pub color_tag: ColorTag,
    pub description: String,
    pub owner_ref: String,
}
